// src/record.rs
use serde_json::Value;

use crate::error::LineIssue;

/// One validated log entry. Only the fields aggregation needs are kept;
/// `timestamp` is accepted in the input but ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub endpoint: String,
    pub status_code: i64,
}

impl LogRecord {
    /// Parse one raw line into a validated record.
    pub fn parse_line(raw: &str) -> Result<Self, LineIssue> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| LineIssue::InvalidJson(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Validate a parsed JSON value against the expected record shape.
    /// Fails closed: unexpected types are rejected, never coerced (a string
    /// or float `status_code` is an error, not a candidate for conversion).
    pub fn from_value(value: &Value) -> Result<Self, LineIssue> {
        let obj = value.as_object().ok_or(LineIssue::NotAnObject)?;

        let endpoint = match obj.get("endpoint") {
            None => return Err(LineIssue::MissingField("endpoint")),
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                return Err(LineIssue::WrongFieldType {
                    field: "endpoint",
                    expected: "string",
                })
            }
        };

        let status_code = match obj.get("status_code") {
            None => return Err(LineIssue::MissingField("status_code")),
            // as_i64 is None for floats, strings, bools and out-of-range numbers
            Some(v) => v.as_i64().ok_or(LineIssue::WrongFieldType {
                field: "status_code",
                expected: "integer",
            })?,
        };

        Ok(LogRecord {
            endpoint,
            status_code,
        })
    }

    /// Status codes 400 and up count as errors.
    pub fn is_error(&self) -> bool {
        self.status_code >= 400
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_record_parses() {
        let record = LogRecord::parse_line(
            r#"{"timestamp": "2024-01-01T00:00:00Z", "endpoint": "/api/users", "status_code": 200}"#,
        )
        .unwrap();
        assert_eq!(record.endpoint, "/api/users");
        assert_eq!(record.status_code, 200);
        assert!(!record.is_error());
    }

    #[test]
    fn missing_timestamp_is_accepted() {
        let record = LogRecord::parse_line(r#"{"endpoint": "/a", "status_code": 500}"#).unwrap();
        assert!(record.is_error());
    }

    #[test]
    fn invalid_json_rejected() {
        let err = LogRecord::parse_line("not json").unwrap_err();
        assert!(matches!(err, LineIssue::InvalidJson(_)));
    }

    #[test]
    fn non_object_rejected() {
        let err = LogRecord::parse_line(r#"[1, 2, 3]"#).unwrap_err();
        assert!(matches!(err, LineIssue::NotAnObject));
    }

    #[test]
    fn missing_fields_rejected() {
        let err = LogRecord::parse_line(r#"{"status_code": 400}"#).unwrap_err();
        assert!(matches!(err, LineIssue::MissingField("endpoint")));

        let err = LogRecord::parse_line(r#"{"endpoint": "/a"}"#).unwrap_err();
        assert!(matches!(err, LineIssue::MissingField("status_code")));
    }

    #[test]
    fn wrong_types_rejected_not_coerced() {
        let err = LogRecord::parse_line(r#"{"endpoint": 42, "status_code": 200}"#).unwrap_err();
        assert!(matches!(
            err,
            LineIssue::WrongFieldType {
                field: "endpoint",
                ..
            }
        ));

        // String and float status codes fail closed
        let err =
            LogRecord::parse_line(r#"{"endpoint": "/a", "status_code": "500"}"#).unwrap_err();
        assert!(matches!(
            err,
            LineIssue::WrongFieldType {
                field: "status_code",
                ..
            }
        ));

        let err = LogRecord::parse_line(r#"{"endpoint": "/a", "status_code": 500.5}"#).unwrap_err();
        assert!(matches!(
            err,
            LineIssue::WrongFieldType {
                field: "status_code",
                ..
            }
        ));
    }

    #[test]
    fn status_399_is_not_error_400_is() {
        let ok = LogRecord {
            endpoint: "/a".into(),
            status_code: 399,
        };
        let err = LogRecord {
            endpoint: "/a".into(),
            status_code: 400,
        };
        assert!(!ok.is_error());
        assert!(err.is_error());
    }
}
