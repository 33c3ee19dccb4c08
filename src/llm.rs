//! LLM client for OpenRouter's OpenAI-compatible chat completions API.
//!
//! The agent only needs one operation: send the conversation so far plus the
//! tool schemas, get back the assistant's next message. No streaming, no
//! retries; transport failures propagate to the caller.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Default chat completions endpoint.
pub const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Message role in a chat conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// A function invocation requested by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Name of the tool to invoke
    pub name: String,

    /// JSON-encoded arguments string
    pub arguments: String,
}

/// A tool call attached to an assistant message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Provider-assigned call identifier, echoed back in the tool result
    pub id: String,

    #[serde(rename = "type", default = "function_call_type")]
    pub call_type: String,

    pub function: FunctionCall,
}

fn function_call_type() -> String {
    "function".to_string()
}

/// A single message in the conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    /// Render this message for the step-by-step trace printout.
    pub fn render(&self) -> String {
        let header = match self.role {
            Role::System => "System Message",
            Role::User => "Human Message",
            Role::Assistant => "Ai Message",
            Role::Tool => "Tool Message",
        };

        let mut out = format!("{:=^80}\n", format!(" {} ", header));

        if let Some(id) = &self.tool_call_id {
            out.push_str(&format!("Tool call id: {}\n", id));
        }

        if let Some(content) = &self.content {
            if !content.is_empty() {
                out.push_str(content);
                out.push('\n');
            }
        }

        if let Some(tool_calls) = &self.tool_calls {
            if !tool_calls.is_empty() {
                out.push_str("Tool Calls:\n");
                for call in tool_calls {
                    out.push_str(&format!(
                        "  {} ({})\n    Args: {}\n",
                        call.function.name, call.id, call.function.arguments
                    ));
                }
            }
        }

        out
    }
}

/// An LLM backend capable of tool-calling chat completions.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Request the next assistant message for the given conversation.
    async fn chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
        tools: Option<&[Value]>,
    ) -> anyhow::Result<ChatMessage>;
}

/// Chat completions client for OpenRouter.
pub struct OpenRouterClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl OpenRouterClient {
    /// Create a client against the default OpenRouter endpoint.
    pub fn new(api_key: String) -> Self {
        Self::with_api_url(api_key, OPENROUTER_API_URL.to_string())
    }

    /// Create a client against a custom endpoint (useful for testing).
    pub fn with_api_url(api_key: String, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: ChatMessage,
}

#[async_trait]
impl LlmClient for OpenRouterClient {
    async fn chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
        tools: Option<&[Value]>,
    ) -> anyhow::Result<ChatMessage> {
        let mut body = json!({
            "model": model,
            "messages": messages,
        });
        if let Some(tools) = tools {
            body["tools"] = Value::Array(tools.to_vec());
        }

        tracing::debug!(model, message_count = messages.len(), "Requesting chat completion");

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Chat completion request failed ({}): {}", status, body);
        }

        let completion: ChatCompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or_else(|| anyhow::anyhow!("Chat completion response contained no choices"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_omits_unset_fields() {
        let message = ChatMessage {
            role: Role::User,
            content: Some("hello".to_string()),
            tool_calls: None,
            tool_call_id: None,
        };

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["role"], "user");
        assert_eq!(value["content"], "hello");
        assert!(value.get("tool_calls").is_none());
        assert!(value.get("tool_call_id").is_none());
    }

    #[test]
    fn deserializes_assistant_tool_call_response() {
        let raw = r#"{
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_abc",
                        "type": "function",
                        "function": {
                            "name": "create_database",
                            "arguments": "{\"project_name\":\"langgraph\"}"
                        }
                    }]
                }
            }]
        }"#;

        let response: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        let message = &response.choices[0].message;
        assert_eq!(message.role, Role::Assistant);
        assert!(message.content.is_none());

        let calls = message.tool_calls.as_ref().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].function.name, "create_database");
        assert_eq!(calls[0].call_type, "function");
    }

    #[test]
    fn render_shows_header_and_tool_calls() {
        let message = ChatMessage {
            role: Role::Assistant,
            content: None,
            tool_calls: Some(vec![ToolCall {
                id: "call_1".to_string(),
                call_type: "function".to_string(),
                function: FunctionCall {
                    name: "run_sql_query".to_string(),
                    arguments: "{}".to_string(),
                },
            }]),
            tool_call_id: None,
        };

        let rendered = message.render();
        assert!(rendered.contains(" Ai Message "));
        assert!(rendered.starts_with('='));
        assert!(rendered.contains("run_sql_query (call_1)"));
    }

    #[test]
    fn render_shows_tool_result_content() {
        let message = ChatMessage {
            role: Role::Tool,
            content: Some("Query executed successfully".to_string()),
            tool_calls: None,
            tool_call_id: Some("call_1".to_string()),
        };

        let rendered = message.render();
        assert!(rendered.contains(" Tool Message "));
        assert!(rendered.contains("Tool call id: call_1"));
        assert!(rendered.contains("Query executed successfully"));
    }
}
