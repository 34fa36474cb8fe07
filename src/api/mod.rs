//! HTTP client for the music store agent API.
//!
//! # Example
//!
//! ```rust,no_run
//! use music_store_chat::api::{Client, types::ChatRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("http://localhost:8000")?;
//!
//! let response = client
//!     .send_message(&ChatRequest {
//!         message: "What albums do you have by U2?".into(),
//!         thread_id: None,
//!         customer_id: Some("1".into()),
//!     })
//!     .await?;
//! println!("{}", response.message);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-exports
pub use client::Client;
pub use error::{Error, Result};
