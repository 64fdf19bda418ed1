use serde::{Deserialize, Serialize};

// Palette returned with every generated site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

/// Structured payload produced by the generation endpoint.
///
/// Every field is required on the wire; a body missing any of them fails to
/// deserialize and is reported as a malformed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub name: String,
    pub description: String,
    pub react_code: String,
    pub colors: Colors,
}

impl GenerationResult {
    // Checks what serde can't: palette values must be hex colors
    pub fn validate(&self) -> Result<(), String> {
        for (key, value) in [
            ("primary", &self.colors.primary),
            ("secondary", &self.colors.secondary),
            ("accent", &self.colors.accent),
        ] {
            if !is_hex_color(value) {
                return Err(format!("color `{key}` is not a hex color: {value:?}"));
            }
        }
        Ok(())
    }
}

// "#rgb", "#rgba", "#rrggbb" or "#rrggbbaa"
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// A generation result remembered in the history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub prompt: String,
    #[serde(flatten)]
    pub result: GenerationResult,
}

impl HistoryEntry {
    pub fn new(id: i64, prompt: impl Into<String>, result: GenerationResult) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            result,
        }
    }
}

// Relay endpoint request body
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
}

// Error body used by the relay endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
