//! Core agent loop implementation.

use std::sync::Arc;

use serde_json::Value;

use crate::config::Config;
use crate::llm::{ChatMessage, LlmClient, OpenRouterClient, Role, ToolCall};
use crate::neon::NeonClient;
use crate::tools::{CreateDatabase, RunSqlQuery, ToolRegistry};

use super::prompt::build_system_prompt;

/// The tool-calling agent.
pub struct Agent {
    config: Config,
    llm: Arc<dyn LlmClient>,
    tools: ToolRegistry,
}

impl Agent {
    /// Create a new agent with the given configuration.
    pub fn new(config: Config) -> Self {
        let llm = Arc::new(OpenRouterClient::new(config.llm_api_key.clone()));
        let neon = Arc::new(NeonClient::new(config.neon_api_key.clone()));

        let mut tools = ToolRegistry::new();
        tools.register(Arc::new(CreateDatabase::new(neon)));
        tools.register(Arc::new(RunSqlQuery));

        Self { config, llm, tools }
    }

    /// Create an agent from pre-built parts (useful for testing).
    pub fn with_parts(config: Config, llm: Arc<dyn LlmClient>, tools: ToolRegistry) -> Self {
        Self { config, llm, tools }
    }

    /// Run one instruction and return the accumulated message list.
    pub async fn run(&self, task: &str) -> anyhow::Result<Vec<ChatMessage>> {
        // Build initial messages
        let system_prompt = build_system_prompt(&self.tools);
        let mut messages = vec![
            ChatMessage {
                role: Role::System,
                content: Some(system_prompt),
                tool_calls: None,
                tool_call_id: None,
            },
            ChatMessage {
                role: Role::User,
                content: Some(task.to_string()),
                tool_calls: None,
                tool_call_id: None,
            },
        ];

        // Get tool schemas for LLM
        let tool_schemas = self.tools.get_tool_schemas();

        // Agent loop
        for iteration in 0..self.config.max_iterations {
            tracing::debug!("Agent iteration {}", iteration + 1);

            // Call LLM
            let response = self
                .llm
                .chat_completion(&self.config.model, &messages, Some(&tool_schemas))
                .await?;

            // Check for tool calls
            if let Some(tool_calls) = response.tool_calls.clone() {
                if !tool_calls.is_empty() {
                    // Add assistant message with tool calls
                    messages.push(response);

                    // Execute each tool call
                    for tool_call in &tool_calls {
                        tracing::debug!(
                            "Calling tool: {} with args: {}",
                            tool_call.function.name,
                            tool_call.function.arguments
                        );

                        let result = self.execute_tool_call(tool_call).await;

                        let result_str = match result {
                            Ok(output) => output,
                            Err(e) => format!("Error: {}", e),
                        };

                        // Add tool result message
                        messages.push(ChatMessage {
                            role: Role::Tool,
                            content: Some(result_str),
                            tool_calls: None,
                            tool_call_id: Some(tool_call.id.clone()),
                        });
                    }

                    continue;
                }
            }

            // No tool calls - this is the final response
            if response.content.is_some() {
                messages.push(response);
                return Ok(messages);
            }

            // Empty response - shouldn't happen but handle gracefully
            return Err(anyhow::anyhow!("LLM returned empty response"));
        }

        Err(anyhow::anyhow!(
            "Max iterations ({}) reached without completion",
            self.config.max_iterations
        ))
    }

    /// Execute a single tool call.
    async fn execute_tool_call(&self, tool_call: &ToolCall) -> anyhow::Result<String> {
        let args: Value =
            serde_json::from_str(&tool_call.function.arguments).unwrap_or(Value::Null);

        self.tools.execute(&tool_call.function.name, args).await
    }
}
