/// Pre-defined scenarios with known answers.
use pipenet::{PipeRecord, Problem};

use crate::generate;

/// A category of scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Baseline,
    TieBreak,
    Discount,
    Search,
    Disconnected,
    Stress,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Baseline,
            Category::TieBreak,
            Category::Discount,
            Category::Search,
            Category::Disconnected,
            Category::Stress,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Baseline => "baseline",
            Category::TieBreak => "tie-break",
            Category::Discount => "discount",
            Category::Search => "search",
            Category::Disconnected => "disconnected",
            Category::Stress => "stress",
        }
    }

    pub fn from_name(name: &str) -> Option<Category> {
        Category::all().iter().find(|c| c.name() == name).copied()
    }
}

/// A scenario that builds a problem and states its expected answer.
pub struct Scenario {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub expected: usize,
    build_fn: Box<dyn Fn() -> Problem + Send + Sync>,
}

impl Scenario {
    pub fn build(&self) -> Problem {
        (self.build_fn)()
    }
}

fn fixed(
    name: &str,
    description: &str,
    category: Category,
    nodes: usize,
    discount: i64,
    pipes: &[(usize, usize, i64)],
    expected: usize,
) -> Scenario {
    let pipes: Vec<PipeRecord> = pipes.iter().copied().map(PipeRecord::from).collect();
    Scenario {
        name: name.to_string(),
        description: description.to_string(),
        category,
        expected,
        build_fn: Box::new(move || Problem::new(nodes, discount, pipes.clone())),
    }
}

fn generated(
    name: &str,
    description: &str,
    expected: usize,
    build: impl Fn() -> Problem + Send + Sync + 'static,
) -> Scenario {
    Scenario {
        name: name.to_string(),
        description: description.to_string(),
        category: Category::Stress,
        expected,
        build_fn: Box::new(build),
    }
}

/// Every built-in scenario.
pub fn all_scenarios() -> Vec<Scenario> {
    use Category::*;

    vec![
        // Baseline
        fixed(
            "single-pipe",
            "two facilities joined by one existing pipe",
            Baseline,
            2,
            5,
            &[(1, 2, 10)],
            0,
        ),
        fixed(
            "active-path-triangle",
            "existing path is cheaper than the new shortcut",
            Baseline,
            3,
            0,
            &[(1, 2, 1), (2, 3, 2), (1, 3, 3)],
            0,
        ),
        fixed(
            "equal-active-pair",
            "two existing pipes of equal cost",
            Baseline,
            3,
            100,
            &[(1, 2, 5), (2, 3, 5)],
            0,
        ),
        fixed(
            "lone-facility",
            "a single facility needs no pipes",
            Baseline,
            1,
            0,
            &[],
            0,
        ),
        fixed(
            "required-new-pipe",
            "facility 3 is reachable only through new pipes",
            Baseline,
            3,
            2,
            &[(1, 2, 1), (1, 2, 4), (2, 3, 8), (1, 3, 9)],
            1,
        ),
        // Tie-break
        fixed(
            "active-wins-weight-tie",
            "equal-cost pipes everywhere; existing ones are taken first",
            TieBreak,
            3,
            0,
            &[(1, 2, 3), (2, 3, 3), (1, 3, 3)],
            0,
        ),
        fixed(
            "first-maximum-is-active",
            "tied maximum edges; the earlier, existing one gets the discount",
            TieBreak,
            4,
            0,
            &[(1, 2, 5), (2, 3, 1), (2, 3, 2), (3, 4, 5)],
            1,
        ),
        // Discount
        fixed(
            "discount-swallows-max",
            "full discount makes the existing detour as cheap as the new pipe",
            Discount,
            3,
            100,
            &[(1, 2, 1), (1, 3, 12), (2, 3, 10)],
            0,
        ),
        fixed(
            "discount-one-short",
            "discount falls one unit short of equalising the detour",
            Discount,
            3,
            11,
            &[(1, 2, 1), (1, 3, 12), (2, 3, 10)],
            1,
        ),
        fixed(
            "discount-exact",
            "discount equal to the detour's weight equalises the costs",
            Discount,
            3,
            12,
            &[(1, 2, 1), (1, 3, 12), (2, 3, 10)],
            0,
        ),
        // Search
        fixed(
            "search-no-discount",
            "without a discount the existing detour stays more expensive",
            Search,
            3,
            0,
            &[(1, 2, 1), (1, 3, 12), (2, 3, 10)],
            1,
        ),
        fixed(
            "search-skips-new-alternatives",
            "the first alternative is also new; the second is existing",
            Search,
            3,
            10,
            &[(1, 2, 1), (1, 3, 5), (2, 3, 4), (1, 3, 4)],
            0,
        ),
        fixed(
            "search-hits-bridge",
            "removing the new pipe disconnects facility 3",
            Search,
            3,
            0,
            &[(1, 2, 1), (1, 2, 7), (2, 3, 5)],
            1,
        ),
        // Disconnected
        fixed(
            "two-islands",
            "two groups of facilities with no pipe between them",
            Disconnected,
            4,
            0,
            &[(1, 2, 1), (3, 4, 2), (3, 4, 1)],
            0,
        ),
        fixed(
            "island-with-new-pipe",
            "a separate island joined internally by a new pipe",
            Disconnected,
            5,
            0,
            &[(1, 2, 1), (2, 3, 1), (1, 3, 1), (1, 2, 2), (4, 5, 3)],
            1,
        ),
        // Stress
        generated(
            "backbone-200",
            "random existing tree over 200 facilities with 400 new pipes",
            0,
            || generate::active_backbone(200, 400, 7),
        ),
        generated(
            "backbone-2000",
            "random existing tree over 2000 facilities with 6000 new pipes",
            0,
            || generate::active_backbone(2000, 6000, 13),
        ),
        generated(
            "detached-facility-200",
            "last facility reachable only via 8 heavy new pipes",
            1,
            || generate::detached_facility(200, 400, 8, 11),
        ),
        generated(
            "detached-facility-1000",
            "last facility reachable only via 40 heavy new pipes",
            1,
            || generate::detached_facility(1000, 2000, 40, 17),
        ),
    ]
}

/// Scenarios belonging to one category.
pub fn scenarios_for_category(category: Category) -> Vec<Scenario> {
    all_scenarios()
        .into_iter()
        .filter(|s| s.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let scenarios = all_scenarios();
        let names: HashSet<&str> = scenarios.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names.len(), scenarios.len());
    }

    #[test]
    fn every_category_has_scenarios() {
        for &cat in Category::all() {
            assert!(
                !scenarios_for_category(cat).is_empty(),
                "no scenarios for {}",
                cat.name()
            );
        }
    }

    #[test]
    fn category_names_round_trip() {
        for &cat in Category::all() {
            assert_eq!(Category::from_name(cat.name()), Some(cat));
        }
        assert_eq!(Category::from_name("nope"), None);
    }

    #[test]
    fn fixed_scenarios_build_valid_networks() {
        for s in all_scenarios() {
            assert!(s.build().network().is_ok(), "{} is invalid", s.name);
        }
    }
}
