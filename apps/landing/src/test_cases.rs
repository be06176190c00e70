use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestCaseError {
    #[error("Invalid test case data: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct TestCase {
    #[serde(default)]
    pub name: Option<String>,
    pub input: String,
    pub expected: String,
    pub actual: String,
}

impl TestCase {
    pub fn is_success(&self) -> bool {
        self.expected == self.actual
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct TestSuite {
    pub title: String,
    #[serde(default)]
    pub cases: Vec<TestCase>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestSummary {
    pub passed: usize,
    pub failed: usize,
}

impl TestSummary {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

impl TestSuite {
    pub fn parse(raw: &str) -> Result<Vec<TestSuite>, TestCaseError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn summary(&self) -> TestSummary {
        let passed = self.cases.iter().filter(|case| case.is_success()).count();
        TestSummary {
            passed,
            failed: self.cases.len() - passed,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{TestCaseError, TestSuite};
    use crate::constants::TEST_CASES;

    #[test]
    fn test_parse_suites() {
        let raw = r#"[
            {
                "title": "Numbers",
                "cases": [
                    { "input": "1", "expected": "⠼⠁", "actual": "⠼⠁" },
                    { "name": "decimal", "input": "0.5", "expected": "⠼⠚⠲⠑", "actual": "⠼⠚⠑" }
                ]
            },
            { "title": "Empty" }
        ]"#;

        let suites = TestSuite::parse(raw).unwrap();
        assert_eq!(suites.len(), 2);
        assert!(suites[0].cases[0].is_success());
        assert!(!suites[0].cases[1].is_success());
        assert_eq!(suites[0].cases[1].name.as_deref(), Some("decimal"));

        let summary = suites[0].summary();
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total(), 2);

        assert_eq!(suites[1].summary().total(), 0);
    }

    #[test]
    fn test_parse_invalid() {
        let res = TestSuite::parse(r#"[{ "cases": [] }]"#);
        assert!(matches!(res, Err(TestCaseError::Parse(_))));
    }

    #[test]
    fn test_bundled_cases() {
        let suites = TestSuite::parse(TEST_CASES).unwrap();
        assert!(!suites.is_empty());
        assert!(suites.iter().all(|suite| !suite.cases.is_empty()));
    }
}
