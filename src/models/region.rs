//! The candidate `region` field.
//!
//! The backend sends it as `null`, a bare string, or an object whose name
//! key varies between serializers. It is decoded once, here, into
//! [`RegionField`].

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Object keys checked for a display name, in precedence order.
pub const REGION_NAME_KEYS: [&str; 4] = ["nombre", "nombre_region", "name", "region"];

/// Shown when no usable region information exists.
pub const REGION_PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RegionField {
    #[default]
    Absent,
    Text(String),
    Named {
        id: Option<i64>,
        name: String,
    },
    /// A bare number, taken as the region id.
    Numeric(i64),
    /// Anything else; `id` is kept when the object carries a usable one.
    Other {
        id: Option<i64>,
    },
}

impl RegionField {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => RegionField::Absent,
            Value::String(text) => RegionField::Text(text.clone()),
            Value::Number(number) => match number.as_i64() {
                Some(id) => RegionField::Numeric(id),
                None => RegionField::Other { id: None },
            },
            Value::Object(map) => {
                let id = map.get("id").and_then(id_from_value);
                let name = REGION_NAME_KEYS
                    .iter()
                    .find_map(|key| map.get(*key).and_then(Value::as_str));

                match name {
                    Some(name) => RegionField::Named {
                        id,
                        name: name.to_string(),
                    },
                    None => RegionField::Other { id },
                }
            }
            _ => RegionField::Other { id: None },
        }
    }

    /// Display text; never fails.
    pub fn display(&self) -> String {
        match self {
            RegionField::Absent | RegionField::Numeric(_) => REGION_PLACEHOLDER.to_string(),
            RegionField::Text(text) => text.clone(),
            RegionField::Named { name, .. } => name.clone(),
            RegionField::Other { id: Some(id) } => format!("Región #{}", id),
            RegionField::Other { id: None } => REGION_PLACEHOLDER.to_string(),
        }
    }

    pub fn id(&self) -> Option<i64> {
        match self {
            RegionField::Named { id, .. } | RegionField::Other { id } => *id,
            RegionField::Numeric(id) => Some(*id),
            RegionField::Absent | RegionField::Text(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for RegionField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(RegionField::from_value(&value))
    }
}

/// Integer ids, also when the serializer sent them as numeric strings.
fn id_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Same policy as [`RegionField::display`] applied to raw JSON.
pub fn region_to_text(value: &Value) -> String {
    RegionField::from_value(value).display()
}
