use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

// Wire types for OpenAI-compatible chat completions (structured JSON mode)

const SYSTEM_PROMPT: &str =
    "You are a specialized React and Tailwind UI generator. You only output valid JSON.";

#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub response_format: ResponseFormat,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

// Structured output: the model must answer with a `GenerationResult`
#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: String,
    pub json_schema: JsonSchema,
}

#[derive(Debug, Serialize)]
pub struct JsonSchema {
    pub name: String,
    pub strict: bool,
    pub schema: Value,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
}

impl ChatRequest {
    pub fn for_prompt(model: &str, prompt: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Some(SYSTEM_PROMPT.to_string()),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Some(instruction(prompt)),
                },
            ],
            response_format: ResponseFormat {
                kind: "json_schema".to_string(),
                json_schema: JsonSchema {
                    name: "generation_result".to_string(),
                    strict: true,
                    schema: result_schema(),
                },
            },
        }
    }
}

impl ChatResponse {
    // First choice's content, if the model produced any text
    pub fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
    }
}

/// JSON schema of a generation result as sent upstream.
///
/// Strict mode requires every property listed in `required` and no extras.
pub fn result_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "description": { "type": "string" },
            "reactCode": {
                "type": "string",
                "description": "The full React component code as a string."
            },
            "colors": {
                "type": "object",
                "properties": {
                    "primary": { "type": "string" },
                    "secondary": { "type": "string" },
                    "accent": { "type": "string" }
                },
                "required": ["primary", "secondary", "accent"],
                "additionalProperties": false
            }
        },
        "required": ["name", "description", "reactCode", "colors"],
        "additionalProperties": false
    })
}

/// The user message sent upstream for a prompt.
pub fn instruction(prompt: &str) -> String {
    format!(
        r##"Build a complete single-file React website component styled with Tailwind CSS for this request: "{prompt}".

Reply with one JSON object of exactly this shape:
{{
  "name": "short name for the site",
  "description": "brief explanation of the design choices",
  "reactCode": "full source of one React function component named GeneratedSite",
  "colors": {{ "primary": "#hex", "secondary": "#hex", "accent": "#hex" }}
}}

Requirements:
- Function component syntax, only useState/useEffect if hooks are needed.
- No icon libraries; draw icons with inline SVG.
- Tailwind utility classes for layout, typography and spacing.
- Responsive from mobile to desktop.
- Sections: navigation, hero, features, testimonials, footer."##
    )
}
