//! Query-parameter encoding for parameter structs.
//!
//! Field names and omission come from the structs' serde metadata: the
//! serialized name is the parameter name and `skip_serializing_if =
//! "Option::is_none"` drops absent parameters.

use crate::errors::{KeycloakError, KeycloakResult};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Encodes a parameter struct into a query mapping.
///
/// Numbers are written in decimal, booleans as `true`/`false`, strings
/// verbatim. Explicit `null` fields are skipped. Non-struct values and
/// non-scalar fields are rejected with an encode error.
pub fn get_query_params<T: Serialize + ?Sized>(params: &T) -> KeycloakResult<HashMap<String, String>> {
    let value = serde_json::to_value(params).map_err(|e| {
        KeycloakError::encode(format!("failed to encode query parameters: {}", e)).with_cause(e)
    })?;

    let fields = match value {
        Value::Object(fields) => fields,
        Value::Null => return Ok(HashMap::new()),
        other => {
            return Err(KeycloakError::encode(format!(
                "query parameters must be a struct, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut query = HashMap::with_capacity(fields.len());
    for (name, field) in fields {
        let text = match field {
            Value::Null => continue,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s,
            other => {
                return Err(KeycloakError::encode(format!(
                    "unsupported kind {} for query parameter {}",
                    json_kind(&other),
                    name
                )))
            }
        };
        query.insert(name, text);
    }
    Ok(query)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parameter structs that can be sent as a query string.
pub trait QueryParams: Serialize {
    /// Encodes `self` with [`get_query_params`].
    fn to_query_params(&self) -> KeycloakResult<HashMap<String, String>> {
        get_query_params(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::KeycloakErrorKind;
    use crate::utils::{bool_p, int_p, string_p};

    #[derive(Serialize, Default)]
    struct TestParams {
        #[serde(rename = "int_field", skip_serializing_if = "Option::is_none")]
        int_field: Option<i64>,
        #[serde(rename = "string_field", skip_serializing_if = "Option::is_none")]
        string_field: Option<String>,
        #[serde(rename = "bool_field", skip_serializing_if = "Option::is_none")]
        bool_field: Option<bool>,
    }

    fn expected(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_get_query_params_empty() {
        let params = get_query_params(&TestParams::default()).unwrap();
        assert!(params.is_empty(), "params must be empty, got {:?}", params);
    }

    #[test]
    fn test_get_query_params_all_set() {
        let params = get_query_params(&TestParams {
            int_field: int_p(1),
            string_field: string_p("fake"),
            bool_field: bool_p(true),
        })
        .unwrap();

        assert_eq!(
            params,
            expected(&[("int_field", "1"), ("string_field", "fake"), ("bool_field", "true")])
        );
    }

    #[test]
    fn test_get_query_params_false_is_kept() {
        let params = get_query_params(&TestParams {
            string_field: string_p("fake"),
            bool_field: bool_p(false),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(params, expected(&[("string_field", "fake"), ("bool_field", "false")]));
    }

    #[test]
    fn test_get_query_params_rejects_non_struct() {
        let err = get_query_params(&"plain").unwrap_err();
        assert_eq!(err.kind(), KeycloakErrorKind::Encode);
    }

    #[test]
    fn test_get_query_params_rejects_nested_values() {
        #[derive(Serialize)]
        struct Nested {
            list: Vec<String>,
        }

        let err = get_query_params(&Nested {
            list: vec!["a".into()],
        })
        .unwrap_err();
        assert_eq!(err.kind(), KeycloakErrorKind::Encode);
        assert!(err.message().contains("list"));
    }
}
