//! A dynamically-typed JSON value tree.
//!
//! Providers attach loosely-specified payloads to errors and results. The
//! [`Element`] tree decodes any of them permissively: primitives are probed
//! in a fixed order (string, int, uint, double, bool, null) so integers are
//! never lossily read as doubles, and input that fits no case becomes
//! [`Element::Null`] instead of failing, keeping malformed payloads
//! inspectable.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, SeqAccess};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A JSON value of unknown shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Element {
    /// An object's members, keyed by name.
    Object(BTreeMap<String, Element>),
    /// An array's elements.
    Array(Vec<Element>),
    /// A string.
    String(String),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer too large for [`Element::Int`].
    Uint(u64),
    /// A floating-point number.
    Double(f64),
    /// A boolean.
    Bool(bool),
    /// Null, or anything that fit no other case.
    #[default]
    Null,
}

impl Element {
    /// Member of an object by key.
    pub fn get(&self, key: &str) -> Option<&Element> {
        match self {
            Element::Object(members) => members.get(key),
            _ => None,
        }
    }

    /// Element of an array by index.
    pub fn at(&self, index: usize) -> Option<&Element> {
        match self {
            Element::Array(elements) => elements.get(index),
            _ => None,
        }
    }

    /// The string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Element::String(s) => Some(s),
            _ => None,
        }
    }

    /// The integer value, if it fits an `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Element::Int(v) => Some(*v),
            Element::Uint(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// The integer value, if non-negative.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Element::Uint(v) => Some(*v),
            Element::Int(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// The numeric value widened to a double.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Element::Double(v) => Some(*v),
            Element::Int(v) => Some(*v as f64),
            Element::Uint(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// The boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Element::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Whether this is the null element.
    pub fn is_null(&self) -> bool {
        matches!(self, Element::Null)
    }

    /// Bridge into the dynamically-typed `serde_json` value.
    pub fn into_value(self) -> serde_json::Value {
        use serde_json::Value;
        match self {
            Element::Object(members) => Value::Object(
                members
                    .into_iter()
                    .map(|(key, value)| (key, value.into_value()))
                    .collect(),
            ),
            Element::Array(elements) => {
                Value::Array(elements.into_iter().map(Element::into_value).collect())
            }
            Element::String(s) => Value::String(s),
            Element::Int(v) => Value::from(v),
            Element::Uint(v) => Value::from(v),
            // non-finite doubles have no JSON form; fall back to null
            Element::Double(v) => serde_json::Number::from_f64(v).map_or(Value::Null, Value::Number),
            Element::Bool(v) => Value::Bool(v),
            Element::Null => Value::Null,
        }
    }
}

impl From<&serde_json::Value> for Element {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Element::Null,
            Value::Bool(v) => Element::Bool(*v),
            Value::Number(number) => {
                // int is probed before uint before double
                if let Some(v) = number.as_i64() {
                    Element::Int(v)
                } else if let Some(v) = number.as_u64() {
                    Element::Uint(v)
                } else if let Some(v) = number.as_f64() {
                    Element::Double(v)
                } else {
                    // unrepresentable number: the deliberate null fallback
                    Element::Null
                }
            }
            Value::String(s) => Element::String(s.clone()),
            Value::Array(elements) => Element::Array(elements.iter().map(Element::from).collect()),
            Value::Object(members) => Element::Object(
                members
                    .iter()
                    .map(|(key, value)| (key.clone(), Element::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Element> for serde_json::Value {
    fn from(element: Element) -> Self {
        element.into_value()
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Element::Object(members) => serializer.collect_map(members),
            Element::Array(elements) => serializer.collect_seq(elements),
            Element::String(s) => serializer.serialize_str(s),
            Element::Int(v) => serializer.serialize_i64(*v),
            Element::Uint(v) => serializer.serialize_u64(*v),
            Element::Double(v) => serializer.serialize_f64(*v),
            Element::Bool(v) => serializer.serialize_bool(*v),
            Element::Null => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ElementVisitor;

        impl<'de> de::Visitor<'de> for ElementVisitor {
            type Value = Element;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("any JSON value")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Element, E> {
                Ok(Element::String(v.to_owned()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Element, E> {
                Ok(Element::String(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Element, E> {
                Ok(Element::Int(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Element, E> {
                // int is probed before uint
                Ok(match i64::try_from(v) {
                    Ok(v) => Element::Int(v),
                    Err(_) => Element::Uint(v),
                })
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Element, E> {
                Ok(Element::Double(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Element, E> {
                Ok(Element::Bool(v))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Element, E> {
                Ok(Element::Null)
            }

            fn visit_none<E: de::Error>(self) -> Result<Element, E> {
                Ok(Element::Null)
            }

            fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Element, D::Error> {
                Element::deserialize(deserializer)
            }

            // not a JSON shape; taken by the permissive fallback
            fn visit_bytes<E: de::Error>(self, _: &[u8]) -> Result<Element, E> {
                Ok(Element::Null)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Element, A::Error> {
                let mut members = BTreeMap::new();
                while let Some((key, value)) = access.next_entry::<String, Element>()? {
                    members.insert(key, value);
                }
                Ok(Element::Object(members))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Element, A::Error> {
                let mut elements = Vec::new();
                while let Some(element) = access.next_element::<Element>()? {
                    elements.push(element);
                }
                Ok(Element::Array(elements))
            }
        }

        deserializer.deserialize_any(ElementVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_priority() {
        // positive integers land on Int, not Uint or Double
        assert_eq!(serde_json::from_str::<Element>("5").unwrap(), Element::Int(5));
        assert_eq!(serde_json::from_str::<Element>("-5").unwrap(), Element::Int(-5));
        // only values past i64::MAX become Uint
        assert_eq!(
            serde_json::from_str::<Element>("18446744073709551615").unwrap(),
            Element::Uint(u64::MAX)
        );
        assert_eq!(serde_json::from_str::<Element>("1.5").unwrap(), Element::Double(1.5));
        assert_eq!(serde_json::from_str::<Element>("true").unwrap(), Element::Bool(true));
        assert_eq!(serde_json::from_str::<Element>("null").unwrap(), Element::Null);
    }

    #[test]
    fn permissive_fallback_never_fails() {
        // a shape that fits no primitive and is neither object nor array
        // decodes to Null instead of erroring
        let deserializer =
            de::value::BytesDeserializer::<de::value::Error>::new(&[0xff, 0x00, 0xff]);
        assert_eq!(Element::deserialize(deserializer).unwrap(), Element::Null);
    }

    #[test]
    fn nested_error_payloads_stay_inspectable() {
        let json = r#"{
            "code": -32000,
            "message": "execution reverted",
            "data": {
                "originalError": {
                    "code": 3,
                    "data": "0x08c379a0",
                    "nested": { "why": ["deep", 2, null] }
                }
            }
        }"#;
        let element: Element = serde_json::from_str(json).unwrap();
        assert_eq!(element.get("code").and_then(Element::as_i64), Some(-32000));
        let original = element.get("data").and_then(|d| d.get("originalError")).unwrap();
        assert_eq!(original.get("code").and_then(Element::as_i64), Some(3));
        assert_eq!(original.get("data").and_then(Element::as_str), Some("0x08c379a0"));
        let why = original.get("nested").and_then(|n| n.get("why")).unwrap();
        assert_eq!(why.at(0).and_then(Element::as_str), Some("deep"));
        assert_eq!(why.at(1).and_then(Element::as_u64), Some(2));
        assert!(why.at(2).unwrap().is_null());

        // reversible: re-encoding yields the same document
        let round: Element =
            serde_json::from_str(&serde_json::to_string(&element).unwrap()).unwrap();
        assert_eq!(round, element);
    }

    #[test]
    fn value_bridge_round_trip() {
        let value: serde_json::Value = serde_json::from_str(
            r#"{"a":[1,-2,3.5,"x",true,null],"b":{"c":18446744073709551615}}"#,
        )
        .unwrap();
        let element = Element::from(&value);
        assert_eq!(
            element.get("b").and_then(|b| b.get("c")).and_then(Element::as_u64),
            Some(u64::MAX)
        );
        assert_eq!(element.clone().into_value(), value);

        // non-finite doubles cannot cross the bridge; they become null
        assert_eq!(
            Element::Double(f64::NAN).into_value(),
            serde_json::Value::Null
        );
    }
}
