use serde_json::{Map, Value};

/// The shape a JSON-LD property takes on a particular node.
///
/// schema.org lets publishers write most properties as a bare value, a list
/// or a nested object. Normalization matches on this instead of probing the
/// raw `Value` ad hoc. `null` counts as missing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    Missing,
    Scalar(&'a Value),
    List(&'a [Value]),
    Object(&'a Map<String, Value>),
}

impl<'a> Field<'a> {
    pub fn of(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => Field::Missing,
            Some(Value::Array(items)) => Field::List(items),
            Some(Value::Object(map)) => Field::Object(map),
            Some(scalar) => Field::Scalar(scalar),
        }
    }

    pub fn get(node: &'a Map<String, Value>, key: &str) -> Self {
        Self::of(node.get(key))
    }

    /// The string payload of a string scalar.
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            Field::Scalar(Value::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Whether `@type` names `wanted`, either as the whole string or as a member
/// of a list of types.
pub fn has_type(node: &Map<String, Value>, wanted: &str, case_insensitive: bool) -> bool {
    let matches = |candidate: &Value| match candidate.as_str() {
        Some(kind) if case_insensitive => kind.eq_ignore_ascii_case(wanted),
        Some(kind) => kind == wanted,
        None => false,
    };

    match Field::get(node, "@type") {
        Field::Scalar(kind) => matches(kind),
        Field::List(kinds) => kinds.iter().any(matches),
        Field::Missing | Field::Object(_) => false,
    }
}
