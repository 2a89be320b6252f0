/// Report generation: terminal, JSON output for case results.
use crate::metrics::CaseResult;

/// Summary of a single case run.
#[derive(Debug, serde::Serialize)]
pub struct CaseReport {
    pub name: String,
    pub category: String,
    pub passed: bool,
    pub expected: usize,
    pub actual: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub spanning: bool,
    pub search_iterations: usize,
    pub solve_time_us: u64,
}

/// Full report across all cases.
#[derive(Debug, serde::Serialize)]
pub struct FullReport {
    pub cases: Vec<CaseReport>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl FullReport {
    pub fn from_cases(cases: Vec<CaseReport>) -> Self {
        let total = cases.len();
        let passed = cases.iter().filter(|c| c.passed).count();
        let failed = total - passed;
        Self {
            cases,
            total,
            passed,
            failed,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Print a terminal table summarizing results.
pub fn print_terminal(report: &FullReport) {
    println!(
        "{:<35} {:<13} {:>8} {:>8} {:>6} {:>10} {:>6}",
        "Case", "Category", "Expected", "Actual", "Iters", "Time(us)", "Status"
    );
    println!("{}", "-".repeat(92));

    for c in &report.cases {
        let status = if c.passed { "PASS" } else { "FAIL" };
        let actual = match (&c.actual, &c.error) {
            (Some(a), _) => a.to_string(),
            (None, Some(_)) => "error".to_string(),
            (None, None) => "-".to_string(),
        };
        println!(
            "{:<35} {:<13} {:>8} {:>8} {:>6} {:>10} {:>6}",
            truncate(&c.name, 35),
            truncate(&c.category, 13),
            c.expected,
            actual,
            c.search_iterations,
            c.solve_time_us,
            status,
        );
        if let Some(err) = &c.error {
            println!("    {err}");
        }
    }

    println!("{}", "-".repeat(92));
    println!(
        "Total: {} | Passed: {} | Failed: {}",
        report.total, report.passed, report.failed
    );
}

/// Render report as JSON.
pub fn to_json(report: &FullReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}

/// Build a CaseReport from a case name, result, and expected answer.
pub fn case_report(name: &str, category: &str, result: &CaseResult, expected: usize) -> CaseReport {
    CaseReport {
        name: name.to_string(),
        category: category.to_string(),
        passed: result.answer == Some(expected),
        expected,
        actual: result.answer,
        error: result.error.clone(),
        spanning: result.spanning,
        search_iterations: result.search_iterations,
        solve_time_us: result.solve_time_us,
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 1).collect();
        format!("{head}…")
    }
}
