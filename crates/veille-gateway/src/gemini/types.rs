//! Wire types for the `generateContent` endpoint.
//!
//! Only the fields this crate reads or writes are modelled; everything else
//! in the response is ignored by serde.

use serde::{Deserialize, Serialize};
use veille_core::entities::Citation;

// ── Request ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

impl GenerateContentRequest {
    /// Single-turn user prompt.
    pub fn prompt(text: String) -> Self {
        Self {
            contents: vec![Content {
                role: Some(String::from("user")),
                parts: vec![Part {
                    text: Some(text),
                    thought: None,
                }],
            }],
            generation_config: None,
            tools: Vec::new(),
        }
    }

    pub fn with_json_schema(mut self, schema: serde_json::Value) -> Self {
        self.generation_config = Some(GenerationConfig {
            response_mime_type: String::from("application/json"),
            response_schema: schema,
        });
        self
    }

    pub fn with_google_search(mut self) -> Self {
        self.tools.push(Tool {
            google_search: GoogleSearch {},
        });
        self
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Set on reasoning summaries, which are not part of the answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
pub struct GoogleSearch {}

// ── Response ───────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
pub struct GroundingChunk {
    #[serde(default)]
    pub web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
pub struct WebSource {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated answer text of the first candidate, `None` when blank.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter(|part| part.thought != Some(true))
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Web citations of the first candidate, in grounding order.
    ///
    /// Chunks without a web uri are dropped; a blank title becomes `None`.
    pub fn citations(&self) -> Vec<Citation> {
        let Some(metadata) = self
            .candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
        else {
            return Vec::new();
        };
        metadata
            .grounding_chunks
            .iter()
            .filter_map(|chunk| chunk.web.as_ref())
            .filter_map(|web| {
                let uri = web.uri.as_deref()?.trim();
                if uri.is_empty() {
                    return None;
                }
                Some(Citation {
                    title: web
                        .title
                        .as_deref()
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(String::from),
                    uri: uri.to_string(),
                })
            })
            .collect()
    }

    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
    }
}

/// JSON payload the strategy schema asks the model for.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyPayload {
    #[serde(default)]
    pub advice: String,
    #[serde(default)]
    pub suggested_keywords: Vec<String>,
    #[serde(default)]
    pub suggested_sources: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn schema_request_shape() {
        let request = GenerateContentRequest::prompt(String::from("hello"))
            .with_json_schema(serde_json::json!({"type": "OBJECT"}));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "contents": [{"role": "user", "parts": [{"text": "hello"}]}],
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": {"type": "OBJECT"}
                }
            })
        );
    }

    #[test]
    fn search_request_shape() {
        let request = GenerateContentRequest::prompt(String::from("hi")).with_google_search();
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["tools"], serde_json::json!([{"googleSearch": {}}]));
        assert!(value.get("generationConfig").is_none());
    }

    #[test]
    fn text_skips_thoughts_and_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [
                    {"text": "planning...", "thought": true},
                    {"text": "## Title\n"},
                    {"text": "- item"}
                ]}
            }]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("## Title\n- item"));
    }

    #[test]
    fn text_none_without_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(response.text(), None);
        assert!(response.citations().is_empty());
    }

    #[test]
    fn citations_drop_chunks_without_uri() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"text": "x"}]},
                "groundingMetadata": {"groundingChunks": [
                    {"web": {"uri": "https://a.example", "title": "a.example"}},
                    {"retrievedContext": {"uri": "gs://bucket"}},
                    {"web": {"title": "no uri"}},
                    {"web": {"uri": "https://b.example", "title": "  "}}
                ]}
            }]
        }))
        .unwrap();
        assert_eq!(
            response.citations(),
            vec![
                Citation {
                    title: Some(String::from("a.example")),
                    uri: String::from("https://a.example"),
                },
                Citation {
                    title: None,
                    uri: String::from("https://b.example"),
                },
            ]
        );
    }

    #[test]
    fn block_reason_read_from_feedback() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .unwrap();
        assert_eq!(response.block_reason(), Some("SAFETY"));
    }
}
