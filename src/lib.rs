//! Terminal chat client for the Digital Music Store AI agent.
//!
//! The agent itself (LLM orchestration, catalog and invoice tools,
//! conversation persistence) lives in a separate service reached over HTTP;
//! this crate ends at serializing requests and rendering responses.
//!
//! # Architecture
//!
//! - **API client**: typed reqwest wrapper over the agent's REST API
//! - **Session**: in-memory conversation state and single-flight send logic
//! - **UI**: pure rendering of the transcript for the terminal
//!
//! # Modules
//!
//! - [`api`]: HTTP client, request/response types, error taxonomy
//! - [`config`]: layered configuration (defaults, file, env, CLI)
//! - [`session`]: conversation orchestration
//! - [`ui`]: message, transcript, and indicator rendering

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::match_same_arms)]
#![allow(clippy::default_trait_access)]

pub mod api;
pub mod config;
pub mod session;
pub mod ui;

pub use api::Client;
pub use session::{ChatSession, SendOutcome};
