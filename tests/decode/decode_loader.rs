#![allow(clippy::expect_used)]

/// Fixture loader for decoder cases
///
/// Each case gives a raw query string, the structure it must decode to
/// (strings and nested objects), and optionally the exact re-encoded form.
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A decoder test case
    DecodeTest {
        input: String,
        expected: Value,
        #[serde(default)]
        encoded: Option<String>,
    },
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct DecodeTestResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<DecodeFailure>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct DecodeFailure {
    pub test_num: usize,
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl DecodeTestResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

pub fn load_cases() -> Vec<TestCase> {
    serde_json::from_str(include_str!("decode_cases.json"))
        .expect("decode_cases.json should be valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cases() {
        let cases = load_cases();
        let runnable = cases
            .iter()
            .filter(|case| matches!(case, TestCase::DecodeTest { .. }))
            .count();
        assert!(runnable >= 20);
    }
}
