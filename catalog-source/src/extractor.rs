use anyhow::{Context, Result};

pub struct TomlExtractor;

impl TomlExtractor {
    pub fn extract_string(value: &toml::Value, key: &str) -> Result<String> {
        value.get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .context(format!("Key '{key}' is missing or not a string"))
    }

    pub fn extract_string_array(value: &toml::Value, key: &str) -> Result<Vec<String>> {
        let array = value
            .get(key)
            .context(format!("Missing key '{key}'"))?
            .as_array()
            .context(format!("Key '{key}' is not an array"))?;

        array.iter()
            .enumerate()
            .map(|(i, v)| {
                v.as_str()
                    .map(|s| s.to_string())
                    .context(format!("Element at index {i} in key '{key}' is not a string"))
            })
            .collect()
    }

    pub fn extract_optional_string_array(value: &toml::Value, key: &str) -> Result<Vec<String>> {
        if value.get(key).is_none() {
            return Ok(Vec::new());
        }
        Self::extract_string_array(value, key)
    }

    pub fn extract_id(value: &toml::Value, key: &str) -> Result<u32> {
        let integer = value.get(key)
            .and_then(|v| v.as_integer())
            .context(format!("Key '{key}' is missing or not an integer"))?;

        u32::try_from(integer)
            .context(format!("Key '{key}' must be a non-negative 32-bit integer, got {integer}"))
    }

    pub fn extract_tables<'a>(value: &'a toml::Value, key: &str) -> Result<&'a [toml::Value]> {
        match value.get(key) {
            None => Ok(&[]),
            Some(tables) => tables
                .as_array()
                .map(Vec::as_slice)
                .context(format!("Key '{key}' is not an array of tables")),
        }
    }
}
