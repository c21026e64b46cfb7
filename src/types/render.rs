//! Deterministic text rendering of representations for logs and debugging.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

/// Renders a value as tab-indented JSON with keys sorted at every level.
///
/// Absent optional fields are left out by the types' serde attributes, so
/// an empty representation renders as `{}`. Output is for humans only and
/// never sent over the wire.
pub fn pretty_string<T: Serialize + ?Sized>(value: &T) -> String {
    let value = match serde_json::to_value(value) {
        Ok(v) => canonicalize(v),
        Err(e) => return e.to_string(),
    };

    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"\t"));
    if let Err(e) = value.serialize(&mut serializer) {
        return e.to_string();
    }
    String::from_utf8(out).unwrap_or_else(|e| e.to_string())
}

// Rebuilds objects in ascending key order, whatever map backend serde_json uses.
fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, canonicalize(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Implements `Display` through [`pretty_string`] for the listed types.
macro_rules! impl_pretty_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&$crate::types::render::pretty_string(self))
                }
            }
        )*
    };
}

pub(crate) use impl_pretty_display;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[derive(Serialize, Default)]
    struct Inner {
        #[serde(skip_serializing_if = "Option::is_none")]
        zeta: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        alpha: Option<String>,
    }

    #[derive(Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    struct Outer {
        #[serde(skip_serializing_if = "Option::is_none")]
        items: Option<Vec<Inner>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        config: Option<HashMap<String, String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        display_name: Option<String>,
    }

    #[test]
    fn test_empty_struct() {
        assert_eq!(pretty_string(&Outer::default()), "{}");
    }

    #[test]
    fn test_sorted_and_tab_indented() {
        let config: HashMap<String, String> = [("ping", "pong"), ("bar", "foo")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let outer = Outer {
            items: Some(vec![
                Inner {
                    zeta: Some(true),
                    alpha: Some("a".into()),
                },
                Inner::default(),
            ]),
            config: Some(config),
            display_name: Some("name".into()),
        };

        let expected = "{\n\t\"config\": {\n\t\t\"bar\": \"foo\",\n\t\t\"ping\": \"pong\"\n\t},\n\t\"displayName\": \"name\",\n\t\"items\": [\n\t\t{\n\t\t\t\"alpha\": \"a\",\n\t\t\t\"zeta\": true\n\t\t},\n\t\t{}\n\t]\n}";
        assert_eq!(pretty_string(&outer), expected);
    }

    #[test]
    fn test_idempotent() {
        let build = || Outer {
            display_name: Some("x".into()),
            ..Default::default()
        };
        assert_eq!(pretty_string(&build()), pretty_string(&build()));
    }
}
