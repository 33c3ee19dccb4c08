//! # Neon Agent
//!
//! A demo LLM agent that provisions Neon Postgres projects and runs SQL
//! through tool calls.
//!
//! This library provides:
//! - Thin tool wrappers over the Neon console API and a PostgreSQL driver
//! - A tool-based agent loop driven by an OpenRouter-hosted model
//! - A printable conversation transcript and a control-flow diagram
//!
//! ## Architecture
//!
//! The agent follows the "tools in a loop" pattern:
//! 1. Build context with system prompt and the user instruction
//! 2. Call LLM, parse response, execute any tool calls
//! 3. Feed results back to LLM, repeat until it produces a final answer
//!
//! ## Example
//!
//! ```rust,ignore
//! use neon_agent::{agent::Agent, config::Config};
//!
//! let config = Config::from_env()?;
//! let agent = Agent::new(config);
//! let transcript = agent.run("Create a project and a users table").await?;
//! ```

pub mod agent;
pub mod config;
pub mod graph;
pub mod llm;
pub mod neon;
pub mod tools;

pub use config::Config;
