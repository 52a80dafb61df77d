//! Chat completions client for photo analysis.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use emoticam_models::AnalysisResult;

use crate::canned::canned_analysis;
use crate::error::{VisionError, VisionResult};
use crate::parse::parse_analysis;
use crate::prompt::{system_prompt, USER_INSTRUCTION};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default vision-capable model.
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

const MAX_TOKENS: u32 = 1500;
const TEMPERATURE: f32 = 0.7;

/// Where an analysis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisSource {
    /// Parsed from the model's answer
    Model,
    /// Model answer was unusable; canned analysis served
    Canned,
}

impl AnalysisSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisSource::Model => "model",
            AnalysisSource::Canned => "canned",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub analysis: AnalysisResult,
    pub source: AnalysisSource,
}

impl AnalysisOutcome {
    fn canned() -> Self {
        Self {
            analysis: canned_analysis(),
            source: AnalysisSource::Canned,
        }
    }
}

/// Something that can turn a photo into an analysis.
#[async_trait]
pub trait ChildAnalyzer: Send + Sync {
    /// Analyze a base64-encoded JPEG (no data URL prefix).
    async fn analyze(&self, image_base64: &str) -> VisionResult<AnalysisOutcome>;
}

/// Chat completions request.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

/// Chat completions response.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// OpenAI-compatible vision client.
#[derive(Clone)]
pub struct VisionClient {
    api_key: Option<String>,
    base_url: String,
    model: String,
    client: Client,
}

impl VisionClient {
    /// Create a client. A missing key is sent as an unauthenticated request
    /// and left for the upstream to reject.
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client,
        }
    }

    fn build_request(&self, image_base64: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system",
                    content: MessageContent::Text(system_prompt()),
                },
                Message {
                    role: "user",
                    content: MessageContent::Parts(vec![
                        ContentPart::Text {
                            text: USER_INSTRUCTION.to_string(),
                        },
                        ContentPart::ImageUrl {
                            image_url: ImageUrl {
                                url: format!("data:image/jpeg;base64,{}", image_base64),
                            },
                        },
                    ]),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

#[async_trait]
impl ChildAnalyzer for VisionClient {
    async fn analyze(&self, image_base64: &str) -> VisionResult<AnalysisOutcome> {
        let url = format!("{}/chat/completions", self.base_url);
        info!(model = %self.model, "Requesting child analysis");

        let mut request = self.client.post(&url).json(&self.build_request(image_base64));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| VisionError::request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(VisionError::Status {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| VisionError::decode(e.to_string()))?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            warn!("Vision model returned no content, serving canned analysis");
            return Ok(AnalysisOutcome::canned());
        }

        match parse_analysis(&content) {
            Ok(analysis) => {
                info!("Child analysis parsed");
                Ok(AnalysisOutcome {
                    analysis,
                    source: AnalysisSource::Model,
                })
            }
            Err(reason) => {
                warn!(reason = %reason, raw = %content, "Unusable vision output, serving canned analysis");
                Ok(AnalysisOutcome::canned())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> VisionClient {
        VisionClient::new(
            Some("sk-test".to_string()),
            server.uri(),
            DEFAULT_MODEL,
            Client::new(),
        )
    }

    fn completion(content: &str) -> serde_json::Value {
        json!({
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
        })
    }

    async fn mock_completion(server: &MockServer, content: &str) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion(content)))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_request_shape() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-4.1-mini",
                "max_tokens": 1500
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("")))
            .expect(1)
            .mount(&server)
            .await;

        client(&server).analyze("AAAA").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"][0]["type"], "text");
        assert_eq!(body["messages"][1]["content"][1]["type"], "image_url");
        assert_eq!(
            body["messages"][1]["content"][1]["image_url"]["url"],
            "data:image/jpeg;base64,AAAA"
        );
    }

    #[tokio::test]
    async fn test_complete_model_answer_used() {
        let server = MockServer::start().await;
        let answer = json!({
            "childAnalysis": { "ageEstimate": "2-4 years", "primaryEmotion": "Tired/Sleepy" },
            "contentStrategy": { "energyMatch": "Calm content" },
            "youtubeKidsQueries": ["lullaby songs for toddlers"],
            "queryRanking": { "bestMatch": "lullaby songs for toddlers", "reason": "Tired", "rankedQueries": [] }
        });
        mock_completion(&server, &format!("```json\n{}\n```", answer)).await;

        let outcome = client(&server).analyze("AAAA").await.unwrap();

        assert_eq!(outcome.source, AnalysisSource::Model);
        assert_eq!(
            outcome.analysis.child_analysis.unwrap().primary_emotion,
            "Tired/Sleepy"
        );
    }

    #[tokio::test]
    async fn test_loosely_typed_answer_kept() {
        let server = MockServer::start().await;
        let answer = json!({
            "childAnalysis": { "primaryEmotion": "Happy", "moodIndicators": ["smiling", "clapping"] },
            "contentStrategy": { "energyMatch": "Upbeat" },
            "youtubeKidsQueries": ["kids dance songs"],
            "queryRanking": {
                "bestMatch": "kids dance songs",
                "reason": "High energy",
                "rankedQueries": [{ "query": "kids dance songs", "score": "90" }]
            }
        });
        mock_completion(&server, &answer.to_string()).await;

        let outcome = client(&server).analyze("AAAA").await.unwrap();

        assert_eq!(outcome.source, AnalysisSource::Model);
        assert_eq!(
            outcome.analysis.child_analysis.as_ref().unwrap().mood_indicators,
            "smiling, clapping"
        );
        assert_eq!(outcome.analysis.query_ranking.unwrap().lead_score(), Some(90.0));
    }

    #[tokio::test]
    async fn test_incomplete_answer_replaced() {
        let server = MockServer::start().await;
        mock_completion(&server, r#"{ "childAnalysis": { "ageEstimate": "5" } }"#).await;

        let outcome = client(&server).analyze("AAAA").await.unwrap();
        assert_eq!(outcome.source, AnalysisSource::Canned);
        assert_eq!(outcome.analysis, canned_analysis());
    }

    #[tokio::test]
    async fn test_prose_answer_replaced() {
        let server = MockServer::start().await;
        mock_completion(&server, "Sorry, I can't help with that.").await;

        let outcome = client(&server).analyze("AAAA").await.unwrap();
        assert_eq!(outcome.source, AnalysisSource::Canned);
    }

    #[tokio::test]
    async fn test_missing_choices_replaced() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let outcome = client(&server).analyze("AAAA").await.unwrap();
        assert_eq!(outcome.source, AnalysisSource::Canned);
    }

    #[tokio::test]
    async fn test_http_error_surfaces() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let err = client(&server).analyze("AAAA").await.unwrap_err();
        assert!(matches!(err, VisionError::Status { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_missing_key_sends_no_auth_header() {
        let server = MockServer::start().await;
        mock_completion(&server, "").await;

        let client = VisionClient::new(None, server.uri(), DEFAULT_MODEL, Client::new());
        client.analyze("AAAA").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(!requests[0]
            .headers
            .iter()
            .any(|(name, _)| name.as_str().eq_ignore_ascii_case("authorization")));
    }
}
