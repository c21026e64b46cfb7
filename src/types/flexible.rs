//! JSON field types that tolerate the loose typing of some server responses.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// A list of strings that is sent either as a single string or as an array.
///
/// A single element serializes back to a bare string, anything else to an
/// array (`[]` when empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StringOrArray(pub Vec<String>);

impl StringOrArray {
    /// Creates a list from any iterator of strings.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(items.into_iter().map(Into::into).collect())
    }

    /// Unwraps the inner vector.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for StringOrArray {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for StringOrArray {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<String>> for StringOrArray {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

impl From<&str> for StringOrArray {
    fn from(item: &str) -> Self {
        Self(vec![item.to_string()])
    }
}

impl Serialize for StringOrArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.as_slice() {
            [single] => serializer.serialize_str(single),
            items => items.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for StringOrArray {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        if let serde_json::Value::String(single) = value {
            return Ok(Self(vec![single]));
        }
        Vec::<String>::deserialize(value)
            .map(Self)
            .map_err(D::Error::custom)
    }
}

/// A string field that accepts any JSON value.
///
/// JSON strings are unquoted; numbers, booleans, objects and arrays keep
/// their raw JSON text. Serialization always produces a JSON string, so an
/// object read from the server is written back as a string holding its text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnforcedString(pub String);

impl EnforcedString {
    /// Borrows the text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for EnforcedString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for EnforcedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EnforcedString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EnforcedString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Serialize for EnforcedString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EnforcedString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        let text = raw.get();
        match serde_json::from_str::<String>(text) {
            Ok(unquoted) => Ok(Self(unquoted)),
            Err(_) => Ok(Self(text.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_string_or_array_unmarshal() {
        let single: StringOrArray = serde_json::from_str("\"123\"").unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0], "123");

        let many: StringOrArray = serde_json::from_str("[\"1\",\"2\",\"3\"]").unwrap();
        assert_eq!(many.len(), 3);
        assert_eq!(many.0, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_string_or_array_marshal() {
        let single = StringOrArray::new(["123"]);
        assert_eq!(serde_json::to_string(&single).unwrap(), "\"123\"");

        let many = StringOrArray::new(["1", "2", "3"]);
        assert_eq!(serde_json::to_string(&many).unwrap(), "[\"1\",\"2\",\"3\"]");

        let empty = StringOrArray::default();
        assert_eq!(serde_json::to_string(&empty).unwrap(), "[]");
    }

    #[test]
    fn test_string_or_array_single_element_array_collapses() {
        let decoded: StringOrArray = serde_json::from_str("[\"only\"]").unwrap();
        assert_eq!(serde_json::to_string(&decoded).unwrap(), "\"only\"");
    }

    #[test_case("42"; "number")]
    #[test_case("{\"a\": \"b\"}"; "object")]
    #[test_case("[1, 2]"; "array of numbers")]
    #[test_case("null"; "null")]
    fn test_string_or_array_rejects(input: &str) {
        assert!(serde_json::from_str::<StringOrArray>(input).is_err());
    }

    #[test_case(r#""string value""#, "string value"; "plain string")]
    #[test_case(r#""\"quoted string value\"""#, r#""quoted string value""#; "quoted string")]
    #[test_case("true", "true"; "bool")]
    #[test_case("42", "42"; "number")]
    #[test_case(r#"{"foo": "bar"}"#, r#"{"foo": "bar"}"#; "object")]
    #[test_case(r#"["foo"]"#, r#"["foo"]"#; "array")]
    fn test_enforced_string_unmarshal(input: &str, expected: &str) {
        let value: EnforcedString = serde_json::from_str(input).unwrap();
        assert_eq!(value.as_str(), expected);
    }

    #[test]
    fn test_enforced_string_marshal() {
        let value = EnforcedString::from("foo");
        assert_eq!(serde_json::to_string(&value).unwrap(), r#""foo""#);
    }

    #[test]
    fn test_enforced_string_object_is_written_back_as_string() {
        let value: EnforcedString = serde_json::from_str(r#"{"foo": "bar"}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#""{\"foo\": \"bar\"}""#
        );
    }

    #[test]
    fn test_enforced_string_inside_struct() {
        #[derive(Deserialize)]
        struct Config {
            value: EnforcedString,
        }

        let config: Config = serde_json::from_str(r#"{"value": 10}"#).unwrap();
        assert_eq!(config.value.as_str(), "10");
    }
}
