//! System prompt for the agent.

use crate::tools::ToolRegistry;

/// Build the system prompt with tool definitions.
pub fn build_system_prompt(tools: &ToolRegistry) -> String {
    let tool_descriptions = tools
        .iter()
        .map(|t| format!("\n{}: {}", t.name(), t.description()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are a helpful AI assistant. You will be assisting users with all of your available tools. You can help users by using the following tools: {}.",
        tool_descriptions
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neon::NeonClient;
    use crate::tools::{CreateDatabase, RunSqlQuery};
    use std::sync::Arc;

    #[test]
    fn prompt_lists_registered_tools() {
        let neon = Arc::new(NeonClient::new("test-key".to_string()));
        let mut tools = ToolRegistry::new();
        tools.register(Arc::new(CreateDatabase::new(neon)));
        tools.register(Arc::new(RunSqlQuery));

        let prompt = build_system_prompt(&tools);
        assert!(prompt.contains("create_database:"));
        assert!(prompt.contains("run_sql_query:"));
        assert!(prompt.starts_with("You are a helpful AI assistant."));
    }
}
