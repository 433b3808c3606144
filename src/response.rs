use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Error, Result};

/// A decoded successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<R> {
    /// The body was a JSON object.
    Single(R),
    /// The body was a JSON array; one record per element.
    List(Vec<R>),
    /// 204 No Content.
    NoContent,
}

impl<R> ApiResponse<R> {
    /// Unwrap a single record, failing on a list or an empty response.
    pub fn into_single(self) -> Result<R> {
        match self {
            Self::Single(record) => Ok(record),
            _ => Err(Error::UnexpectedResponse {
                expected: "a JSON object",
            }),
        }
    }

    /// Unwrap a list of records, failing on a single object or an empty response.
    pub fn into_list(self) -> Result<Vec<R>> {
        match self {
            Self::List(records) => Ok(records),
            _ => Err(Error::UnexpectedResponse {
                expected: "a JSON array",
            }),
        }
    }
}

/// Classify a response by status code and decode its body.
///
/// 200, 201 and 202 decode the body; 204 yields [`ApiResponse::NoContent`] whatever the body;
/// every other status is returned as the matching [`Error`] with the body as message.
pub fn parse_response<R: DeserializeOwned>(status: u16, body: &str) -> Result<ApiResponse<R>> {
    match status {
        200..=202 => {}
        204 => return Ok(ApiResponse::NoContent),
        status => return Err(Error::from_status(status, body)),
    }

    match serde_json::from_str(body)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(Error::from))
            .collect::<Result<Vec<R>>>()
            .map(ApiResponse::List),
        value @ Value::Object(_) => Ok(ApiResponse::Single(serde_json::from_value(value)?)),
        _ => Err(Error::UnexpectedResponse {
            expected: "a JSON object or array",
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map, Value};

    use super::{parse_response, ApiResponse};
    use crate::Error;

    type Record = Map<String, Value>;

    const BODY: &str = r#"{"message": "mock"}"#;

    #[test]
    fn error_statuses_ignore_body() {
        for body in [BODY, "", "not json"] {
            assert!(matches!(
                parse_response::<Record>(400, body),
                Err(Error::BadRequest(_))
            ));
            assert!(matches!(
                parse_response::<Record>(401, body),
                Err(Error::Unauthorized(_))
            ));
            assert!(matches!(
                parse_response::<Record>(403, body),
                Err(Error::Forbidden(_))
            ));
            assert!(matches!(
                parse_response::<Record>(404, body),
                Err(Error::NotFound(_))
            ));
            assert!(matches!(
                parse_response::<Record>(429, body),
                Err(Error::TooManyRequests(_))
            ));
            assert!(matches!(
                parse_response::<Record>(503, body),
                Err(Error::ServiceUnavailable(_))
            ));
            assert!(matches!(
                parse_response::<Record>(500, body),
                Err(Error::Api { status: 500, .. })
            ));
        }
    }

    #[test]
    fn other_non_success_statuses_are_generic() {
        for status in [203, 206, 301, 304, 405, 422, 502] {
            assert!(matches!(
                parse_response::<Record>(status, BODY),
                Err(Error::Api { status: s, .. }) if s == status
            ));
        }
    }

    #[test]
    fn no_content_ignores_body() {
        assert_eq!(
            parse_response::<Record>(204, BODY).unwrap(),
            ApiResponse::NoContent
        );
        assert_eq!(
            parse_response::<Record>(204, "").unwrap(),
            ApiResponse::NoContent
        );
    }

    #[test]
    fn success_statuses_decode_object() {
        let expected = json!({"message": "mock"});
        for status in [200, 201, 202] {
            let record = parse_response::<Record>(status, BODY)
                .unwrap()
                .into_single()
                .unwrap();
            assert_eq!(Value::Object(record), expected);
        }
    }

    #[test]
    fn array_decodes_one_record_per_element() {
        let body = json!([
            {"id": 1, "name": "first"},
            {"id": 2, "name": "second", "nested": {"a": [1, 2]}},
            {"id": 3},
        ]);
        let records = parse_response::<Record>(200, &body.to_string())
            .unwrap()
            .into_list()
            .unwrap();
        assert_eq!(records.len(), 3);
        for (record, source) in records.into_iter().zip(body.as_array().unwrap()) {
            assert_eq!(&Value::Object(record), source);
        }
    }

    #[test]
    fn typed_records_keep_explicit_nulls() {
        let body = json!([
            {
                "id": 854613530,
                "is_paused": false,
                "description": "Original",
                "weight": null,
                "variation_id": 854613530,
                "section_id": null,
                "js_component": "",
                "experiment_id": 854484703,
                "project_id": 859720118
            },
            {"id": 1, "weight": 5000, "section_id": 7, "installation_verified": null},
        ]);
        let records = parse_response::<crate::Variation>(200, &body.to_string())
            .unwrap()
            .into_list()
            .unwrap();
        assert_eq!(records[0].weight, Some(None));
        assert_eq!(records[1].weight, Some(Some(5000)));
        for (record, source) in records.iter().zip(body.as_array().unwrap()) {
            assert_eq!(&serde_json::to_value(record).unwrap(), source);
        }
    }

    #[test]
    fn empty_array_is_empty_list() {
        let records = parse_response::<Record>(200, "[]")
            .unwrap()
            .into_list()
            .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn scalar_body_is_rejected() {
        assert!(matches!(
            parse_response::<Record>(200, "42"),
            Err(Error::UnexpectedResponse { .. })
        ));
    }

    #[test]
    fn invalid_json_is_reported() {
        assert!(matches!(
            parse_response::<Record>(200, "{"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn shape_mismatch() {
        let single: ApiResponse<Record> = ApiResponse::Single(Record::new());
        assert!(matches!(
            single.into_list(),
            Err(Error::UnexpectedResponse { .. })
        ));
        let none: ApiResponse<Record> = ApiResponse::NoContent;
        assert!(matches!(
            none.into_single(),
            Err(Error::UnexpectedResponse { .. })
        ));
    }
}
