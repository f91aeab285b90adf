use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfirmError;

/// Localized-string lookup by key and optional component qualifier.
///
/// Every call is attempted exactly once; failures surface to the caller,
/// which decides whether to recover or degrade.
pub trait StringResolver {
    fn get_string(&self, key: &str, component: Option<&str>) -> Result<String, ConfirmError>;
}

// ============================================================================
// Table resolver — built-in strings, extendable from YAML packs
// ============================================================================

pub struct TableResolver {
    strings: HashMap<String, String>,
}

impl TableResolver {
    /// English defaults for every key the widget needs.
    pub fn builtin() -> Self {
        let mut strings = HashMap::new();
        strings.insert("loading".to_string(), "Loading".to_string());
        strings.insert(
            "form/confirmchanges".to_string(),
            "Confirm changes".to_string(),
        );
        Self { strings }
    }

    pub fn empty() -> Self {
        Self {
            strings: HashMap::new(),
        }
    }

    /// Merge a YAML string pack over the current table.
    ///
    /// Pack entries are `component/key: text` (or bare `key: text` for
    /// uncomponented strings); later entries win.
    pub fn load_pack(&mut self, yaml: &str) -> Result<(), ConfirmError> {
        let pack: HashMap<String, String> =
            serde_yaml::from_str(yaml).map_err(|e| ConfirmError::StringResolution {
                key: "*".to_string(),
                component: None,
                detail: format!("string pack parse error: {}", e),
            })?;
        self.strings.extend(pack);
        Ok(())
    }

    fn table_key(key: &str, component: Option<&str>) -> String {
        match component {
            Some(c) => format!("{}/{}", c, key),
            None => key.to_string(),
        }
    }
}

impl Default for TableResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StringResolver for TableResolver {
    fn get_string(&self, key: &str, component: Option<&str>) -> Result<String, ConfirmError> {
        self.strings
            .get(&Self::table_key(key, component))
            .cloned()
            .ok_or_else(|| ConfirmError::StringResolution {
                key: key.to_string(),
                component: component.map(|c| c.to_string()),
                detail: "key not present in string table".to_string(),
            })
    }
}

// ============================================================================
// HTTP resolver — remote language service
// ============================================================================

pub struct HttpResolver {
    pub endpoint: String,
    pub language: String,
}

#[derive(Serialize)]
struct StringRequest<'a> {
    key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    component: Option<&'a str>,
    language: &'a str,
}

#[derive(Deserialize)]
struct StringResponse {
    string: String,
}

impl HttpResolver {
    pub fn new(endpoint: &str, language: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            language: language.to_string(),
        }
    }
}

impl StringResolver for HttpResolver {
    fn get_string(&self, key: &str, component: Option<&str>) -> Result<String, ConfirmError> {
        let request = StringRequest {
            key,
            component,
            language: &self.language,
        };

        let client = reqwest::blocking::Client::new();
        let response = client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .map_err(|e| ConfirmError::StringResolution {
                key: key.to_string(),
                component: component.map(|c| c.to_string()),
                detail: format!("request failed: {}", e),
            })?;

        let parsed: StringResponse =
            response.json().map_err(|e| ConfirmError::StringResolution {
                key: key.to_string(),
                component: component.map(|c| c.to_string()),
                detail: format!("malformed response: {}", e),
            })?;

        Ok(parsed.string)
    }
}
