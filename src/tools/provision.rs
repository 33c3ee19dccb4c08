//! Database provisioning tool.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::neon::NeonClient;

use super::Tool;

/// Database name provisioned by default in a new Neon project.
const DEFAULT_DATABASE: &str = "neondb";

/// Role owning the default database.
const DEFAULT_ROLE: &str = "neondb_owner";

/// Create a new Neon project and return its connection URI.
pub struct CreateDatabase {
    neon: Arc<NeonClient>,
}

impl CreateDatabase {
    pub fn new(neon: Arc<NeonClient>) -> Self {
        Self { neon }
    }

    async fn provision(&self, project_name: &str) -> anyhow::Result<String> {
        let project = self.neon.create_project(project_name).await?;
        self.neon
            .connection_uri(&project.id, DEFAULT_DATABASE, DEFAULT_ROLE)
            .await
    }
}

#[async_trait]
impl Tool for CreateDatabase {
    fn name(&self) -> &str {
        "create_database"
    }

    fn description(&self) -> &str {
        "Creates a new Neon project. (this takes less than 500ms) Returns the connection URI for the new project."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "project_name": {
                    "type": "string",
                    "description": "Name of the project to create"
                }
            },
            "required": ["project_name"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let project_name = args["project_name"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Missing 'project_name' argument"))?;

        // Failures are reported back to the model, not raised out of the tool.
        match self.provision(project_name).await {
            Ok(uri) => Ok(format!(
                "Project/database created, connection URI: {}",
                uri
            )),
            Err(e) => Ok(format!("Failed to create project: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_tool() -> CreateDatabase {
        // Nothing listens on this port; provisioning fails without leaving the host.
        let neon = Arc::new(NeonClient::with_base_url(
            "test-key".to_string(),
            "http://127.0.0.1:9".to_string(),
        ));
        CreateDatabase::new(neon)
    }

    #[tokio::test]
    async fn missing_project_name_is_an_error() {
        let tool = unreachable_tool();
        let result = tool.execute(json!({})).await;
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Missing 'project_name' argument"));
    }

    #[tokio::test]
    async fn provisioning_failure_is_reported_as_text() {
        let tool = unreachable_tool();
        let result = tool
            .execute(json!({ "project_name": "langgraph" }))
            .await
            .unwrap();
        assert!(result.starts_with("Failed to create project:"));
    }

    #[test]
    fn schema_requires_project_name() {
        let tool = unreachable_tool();
        let schema = tool.parameters_schema();
        assert_eq!(schema["required"][0], "project_name");
    }
}
