//! `Structural` for `serde_json::Value`.
//!
//! Each JSON kind is its own runtime type, so `1` vs `"1"` is a type
//! difference. Objects expose one field per key; arrays are iterable.

use serde_json::Value;

use crate::model::scalar::Scalar;
use crate::model::structural::{Composite, Field, Shape, Structural, TypeKey};

const JSON_NULL: &str = "json::null";
const JSON_BOOL: &str = "json::bool";
const JSON_NUMBER: &str = "json::number";
const JSON_STRING: &str = "json::string";
const JSON_ARRAY: &str = "json::array";
const JSON_OBJECT: &str = "json::object";

impl Structural for Value {
    fn type_key(&self) -> TypeKey {
        let name = match self {
            Value::Null => JSON_NULL,
            Value::Bool(_) => JSON_BOOL,
            Value::Number(_) => JSON_NUMBER,
            Value::String(_) => JSON_STRING,
            Value::Array(_) => JSON_ARRAY,
            Value::Object(_) => JSON_OBJECT,
        };
        TypeKey::variant::<Value>(name)
    }

    fn shape(&self) -> Shape<'_> {
        match self {
            Value::Null => Shape::Absent,
            Value::Bool(b) => Shape::Scalar(Scalar::Bool(*b)),
            Value::Number(n) => Shape::Scalar(number_scalar(n)),
            Value::String(s) => Shape::Scalar(Scalar::Text(s)),
            Value::Array(items) => Shape::Composite(
                Composite::new().with_elements(items.iter().map(|item| item as &dyn Structural)),
            ),
            Value::Object(map) => Shape::Composite(
                Composite::new()
                    .with_fields(map.iter().map(|(key, value)| Field::new(key.as_str(), value))),
            ),
        }
    }

    /// Scalars render like in value differences (strings unquoted); arrays and
    /// objects render as compact JSON.
    fn describe(&self) -> String {
        match self.shape() {
            Shape::Scalar(scalar) => scalar.to_string(),
            _ => self.to_string(),
        }
    }
}

fn number_scalar(n: &serde_json::Number) -> Scalar<'static> {
    if let Some(i) = n.as_i64() {
        Scalar::Int(i128::from(i))
    } else if let Some(u) = n.as_u64() {
        Scalar::UInt(u128::from(u))
    } else {
        Scalar::F64(n.as_f64().unwrap_or(f64::NAN))
    }
}
