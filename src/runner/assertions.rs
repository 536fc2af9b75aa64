//! Test-mode expectations on a response.
//!
//! A use case declares the status code it expects and an expected-response
//! pattern. Only the text between the first `{` and the first `}` of the
//! pattern is used; it must appear in the body, ignoring case.

use std::fmt;

/// A test-mode expectation that did not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionMismatch {
    Status { expected: u16, actual: u16 },
    Content { expected: String, body: String },
}

impl fmt::Display for AssertionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssertionMismatch::Status { expected, actual } => write!(
                f,
                "status mismatch: expected status {}, got {}",
                expected, actual
            ),
            AssertionMismatch::Content { expected, body } => write!(
                f,
                "response mismatch: expected '{}' is not contained in the output \n{}",
                expected, body
            ),
        }
    }
}

impl std::error::Error for AssertionMismatch {}

/// Text between the first `{` and the first `}` of `pattern`.
///
/// Empty when either brace is missing or the first `}` comes before the
/// first `{`. An empty expectation matches any body.
pub fn expected_substring(pattern: &str) -> &str {
    match (pattern.find('{'), pattern.find('}')) {
        (Some(start), Some(end)) if start < end => &pattern[start + 1..end],
        _ => "",
    }
}

/// Checks the status code first, then the body content.
pub fn check_response(
    want_status: u16,
    want_response: &str,
    status: u16,
    body: &str,
) -> Result<(), AssertionMismatch> {
    if want_status != status {
        return Err(AssertionMismatch::Status {
            expected: want_status,
            actual: status,
        });
    }

    let expected = expected_substring(want_response);
    if !body.to_lowercase().contains(&expected.to_lowercase()) {
        return Err(AssertionMismatch::Content {
            expected: expected.to_string(),
            body: body.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_substring() {
        assert_eq!(expected_substring("status is {ok} now"), "ok");
        assert_eq!(expected_substring("{\"result\":\"ok\"}"), "\"result\":\"ok\"");
        assert_eq!(expected_substring("{}"), "");
        assert_eq!(expected_substring("no braces"), "");
        assert_eq!(expected_substring("only {open"), "");
        assert_eq!(expected_substring("} reversed {"), "");
        assert_eq!(expected_substring("{a} and {b}"), "a");
    }

    #[test]
    fn test_check_response_passes() {
        assert!(check_response(200, "status is {ok} now", 200, r#"{"result":"OK"}"#).is_ok());
        assert!(check_response(204, "", 204, "").is_ok());
    }

    #[test]
    fn test_check_response_status_mismatch() {
        assert_eq!(
            check_response(201, "{ok}", 200, "ok"),
            Err(AssertionMismatch::Status {
                expected: 201,
                actual: 200
            })
        );
    }

    #[test]
    fn test_check_response_status_checked_before_content() {
        assert!(matches!(
            check_response(200, "{missing}", 500, "boom"),
            Err(AssertionMismatch::Status { .. })
        ));
    }

    #[test]
    fn test_check_response_content_mismatch() {
        let err = check_response(200, "{created}", 200, r#"{"result":"ok"}"#).unwrap_err();
        assert_eq!(
            err,
            AssertionMismatch::Content {
                expected: "created".to_string(),
                body: r#"{"result":"ok"}"#.to_string()
            }
        );
        assert!(err
            .to_string()
            .starts_with("response mismatch: expected 'created' is not contained in the output"));
    }
}
