//! Search result disambiguation
//!
//! AWX list endpoints answer a filtered query with a paginated envelope
//! (`{"count": N, "results": [...]}`). Lookups by name or another unique
//! attribute need exactly one entity out of it.

use crate::error::{Error, Result};
use crate::types::{ApiMap, ApiValue};

/// Unwrap a search envelope to its single entity.
///
/// A response without a `count` key is already a single entity and is
/// returned unchanged.
pub fn extract_single(mut response: ApiMap) -> Result<ApiMap> {
    let Some(count) = response.get("count") else {
        return Ok(response);
    };
    let count = parse_count(count)?;

    match count {
        1 => {}
        0 => {
            return Err(Error::not_found(
                "received 0 entries, expected 1 for the data source",
            ))
        }
        n if n > 1 => return Err(Error::Ambiguous { count: n }),
        n => {
            return Err(Error::malformed(format!(
                "negative count {n} in search result"
            )))
        }
    }

    match response.remove("results") {
        Some(ApiValue::List(results)) => match results.into_iter().next() {
            Some(ApiValue::Map(entity)) => Ok(entity),
            Some(other) => Err(Error::malformed(format!(
                "received {} instead of a map as the search result entry",
                other.type_name()
            ))),
            None => Err(Error::malformed("count is 1 but results is empty")),
        },
        Some(other) => Err(Error::malformed(format!(
            "received {} instead of a list for results",
            other.type_name()
        ))),
        None => Err(Error::malformed("received no results for search result")),
    }
}

/// Read the `count` value from any of the encodings it arrives in
fn parse_count(value: &ApiValue) -> Result<i64> {
    match value {
        ApiValue::String(s) => s.trim().parse::<i64>().map_err(|_| count_error(s)),
        ApiValue::Number(n) => n.as_i64().ok_or_else(|| count_error(n)),
        ApiValue::Int(i) => Ok(*i),
        other => Err(Error::malformed(format!(
            "unexpected {} for count in search result",
            other.type_name()
        ))),
    }
}

fn count_error(raw: impl std::fmt::Display) -> Error {
    Error::malformed(format!(
        "failed to convert count number in search result: {raw}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn map(value: serde_json::Value) -> ApiMap {
        ApiValue::from(value).into_map().unwrap()
    }

    #[test]
    fn test_single_entity_passthrough() {
        let response = map(json!({"id": 3, "name": "demo"}));
        let out = extract_single(response.clone()).unwrap();
        assert_eq!(out, response);
    }

    #[test]
    fn test_unwrap_single_result() {
        let response = map(json!({"count": 1, "results": [{"id": 7}]}));
        assert_eq!(extract_single(response).unwrap(), map(json!({"id": 7})));
    }

    #[test_case(ApiValue::from("1") ; "string")]
    #[test_case(ApiValue::from(json!(1)) ; "number token")]
    #[test_case(ApiValue::Int(1) ; "native int")]
    fn test_count_encodings(count: ApiValue) {
        let mut response = map(json!({"results": [{"id": 7}]}));
        response.insert("count".to_string(), count);
        assert_eq!(extract_single(response).unwrap(), map(json!({"id": 7})));
    }

    #[test]
    fn test_no_entries() {
        let err = extract_single(map(json!({"count": 0, "results": []}))).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_more_than_one_entry() {
        let response = map(json!({"count": 2, "results": [{"id": 1}, {"id": 2}]}));
        let err = extract_single(response).unwrap_err();
        assert!(matches!(err, Error::Ambiguous { count: 2 }));
        assert!(err.to_string().contains("refine your query"));
    }

    #[test]
    fn test_results_not_a_list() {
        let err = extract_single(map(json!({"count": 1, "results": {"id": 1}}))).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));

        let err = extract_single(map(json!({"count": 1}))).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
    }

    #[test]
    fn test_count_one_with_empty_results() {
        let err = extract_single(map(json!({"count": 1, "results": []}))).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
    }

    #[test]
    fn test_unparsable_count() {
        let err = extract_single(map(json!({"count": "many", "results": []}))).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
    }
}
