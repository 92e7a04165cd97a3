//! Scalar values stored in an event record

use serde::{Deserialize, Serialize};

/// A single record field value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    Null,
    Long(i64),
    Double(f64),
    String(String),
    List(Vec<String>),
}

impl RecordValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for RecordValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for RecordValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for RecordValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<i64> for RecordValue {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<f64> for RecordValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<Vec<String>> for RecordValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl<T: Into<RecordValue>> From<Option<T>> for RecordValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_conversion() {
        assert_eq!(RecordValue::from(None::<String>), RecordValue::Null);
        assert_eq!(
            RecordValue::from(Some("default")),
            RecordValue::String("default".to_string())
        );
    }

    #[test]
    fn test_untagged_serialization() {
        let values = vec![
            RecordValue::Null,
            RecordValue::Long(7),
            RecordValue::Double(0.5),
            RecordValue::String("x".into()),
            RecordValue::List(vec!["db@t".into()]),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[null,7,0.5,"x",["db@t"]]"#);

        let back: Vec<RecordValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }
}
