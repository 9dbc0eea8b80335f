//! Custom serde helpers for Midgard wire formats.

/// Deserializes an integer that Midgard may send either as a JSON number or
/// as a numeric string (`"1717171717000000000"`). Unparseable strings become
/// zero, matching the lossy contract of the formatters.
pub mod int_or_string {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Str(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => n,
            Raw::Float(f) if f.is_finite() => f as i64,
            Raw::Float(_) => 0,
            Raw::Str(s) => s.trim().parse::<i64>().unwrap_or(0),
        })
    }
}

/// Deserializes a numeric field into its string form, accepting either a
/// JSON number or a string. Missing or null values become `"0"`.
pub mod numeric_string {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(serde_json::Number),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Str(s)) => s,
            Some(Raw::Num(n)) => n.to_string(),
            None => "0".to_string(),
        })
    }
}
