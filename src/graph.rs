//! Agent control-flow diagram.
//!
//! Renders the fixed shape of the tool-calling loop as a Mermaid flowchart
//! and writes it to disk after a run, mirroring the graph visualization the
//! agent exposes to users.

use std::path::Path;

/// Render the agent's control-flow graph as Mermaid text.
pub fn mermaid() -> String {
    let mut out = String::from("graph TD;\n");
    out.push_str("\t__start__([__start__]):::first\n");
    out.push_str("\tagent(agent)\n");
    out.push_str("\ttools(tools)\n");
    out.push_str("\t__end__([__end__]):::last\n");
    out.push_str("\t__start__ --> agent;\n");
    out.push_str("\ttools --> agent;\n");
    out.push_str("\tagent -.-> tools;\n");
    out.push_str("\tagent -.-> __end__;\n");
    out
}

/// Write the control-flow diagram to the given path.
pub fn write_diagram(path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, mermaid())
        .map_err(|e| anyhow::anyhow!("Failed to write agent graph to {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mermaid_contains_loop_edges() {
        let diagram = mermaid();
        assert!(diagram.starts_with("graph TD;"));
        assert!(diagram.contains("__start__ --> agent;"));
        assert!(diagram.contains("agent -.-> tools;"));
        assert!(diagram.contains("tools --> agent;"));
        assert!(diagram.contains("agent -.-> __end__;"));
    }

    #[test]
    fn write_diagram_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.mmd");

        write_diagram(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, mermaid());
    }

    #[test]
    fn write_diagram_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("graph.mmd");

        let error = write_diagram(&path).unwrap_err();
        assert!(error.to_string().contains("Failed to write agent graph"));
    }
}
