use serde::{Deserialize, Serialize};

use crate::network::{PipeRecord, Problem};

/// A named collection of problems with expected answers, as stored in TOML:
///
/// ```toml
/// [[case]]
/// name = "triangle"
/// nodes = 3
/// discount = 0
/// pipes = [[1, 2, 1], [2, 3, 2], [1, 3, 3]]
/// expected = 0
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Suite {
    #[serde(rename = "case", default)]
    pub cases: Vec<SuiteCase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteCase {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub nodes: usize,
    #[serde(default)]
    pub discount: i64,
    pub pipes: Vec<PipeRecord>,
    pub expected: usize,
}

impl SuiteCase {
    pub fn problem(&self) -> Problem {
        Problem::new(self.nodes, self.discount, self.pipes.clone())
    }
}

impl Suite {
    /// Parse a TOML suite.
    pub fn from_toml_str(toml_str: &str) -> Result<Suite, SuiteError> {
        toml::from_str(toml_str).map_err(|e| SuiteError::Config(e.to_string()))
    }

    /// Render the suite back to TOML.
    pub fn to_toml_string(&self) -> Result<String, SuiteError> {
        toml::to_string(self).map_err(|e| SuiteError::Config(e.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SuiteError {
    #[error("suite config error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solve::solve;

    const SUITE: &str = r#"
[[case]]
name = "single"
nodes = 2
discount = 5
pipes = [[1, 2, 10]]
expected = 0

[[case]]
name = "triangle"
description = "inactive shortcut loses to active path"
nodes = 3
pipes = [[1, 2, 1], [2, 3, 2], [1, 3, 3]]
expected = 0
"#;

    #[test]
    fn parses_cases() {
        let suite = Suite::from_toml_str(SUITE).unwrap();
        assert_eq!(suite.cases.len(), 2);
        assert_eq!(suite.cases[1].discount, 0);
        assert_eq!(suite.cases[1].pipes[2], PipeRecord::new(1, 3, 3));
        for case in &suite.cases {
            let net = case.problem().network().unwrap();
            assert_eq!(solve(&net).answer, case.expected, "case {}", case.name);
        }
    }

    #[test]
    fn malformed_suite_is_config_error() {
        let err = Suite::from_toml_str("[[case]]\nname = 3\n").unwrap_err();
        assert!(matches!(err, SuiteError::Config(_)));
    }

    #[test]
    fn round_trips_through_toml() {
        let suite = Suite::from_toml_str(SUITE).unwrap();
        let text = suite.to_toml_string().unwrap();
        let again = Suite::from_toml_str(&text).unwrap();
        assert_eq!(again.cases.len(), 2);
        assert_eq!(again.cases[0].pipes, suite.cases[0].pipes);
    }
}
