#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

use super::decode_loader::{DecodeFailure, DecodeTestResult, TestCase, load_cases};
/// Decoder fixture runner
///
/// Compares decoded parameters with the expected JSON structure. Object key
/// order is not compared here; ordering is covered by the unit tests.
use queryset::{QueryParams, QueryValue};
use serde_json::{Map, Value};

fn to_json(value: &QueryValue) -> Value {
    match value {
        QueryValue::String(s) => Value::String(s.clone()),
        QueryValue::Map(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.to_string(), to_json(v)))
                .collect::<Map<String, Value>>(),
        ),
    }
}

fn params_to_json(params: &QueryParams) -> Value {
    Value::Object(
        params
            .iter()
            .map(|(k, v)| (k.to_string(), to_json(v)))
            .collect(),
    )
}

pub fn run_decode_tests(tests: Vec<TestCase>) -> DecodeTestResult {
    let mut result = DecodeTestResult::default();
    let mut test_num = 0;

    for test in tests {
        let TestCase::DecodeTest {
            input,
            expected,
            encoded,
        } = test
        else {
            continue;
        };
        test_num += 1;

        let params = QueryParams::parse_query_string(&input);
        let actual = params_to_json(&params);
        if actual != expected {
            result.failed += 1;
            result.failures.push(DecodeFailure {
                test_num,
                input,
                field: "decoded".to_string(),
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
            continue;
        }

        if let Some(encoded) = encoded {
            let actual = params.to_string();
            if actual != encoded {
                result.failed += 1;
                result.failures.push(DecodeFailure {
                    test_num,
                    input,
                    field: "encoded".to_string(),
                    expected: encoded,
                    actual,
                });
                continue;
            }
        }

        result.passed += 1;
    }

    result
}

#[test]
fn test_decode_fixtures() {
    let result = run_decode_tests(load_cases());
    assert!(
        result.failures.is_empty(),
        "{}\n{:#?}",
        result.summary(),
        result.failures
    );
}
