//! Transcript rendering for the terminal.
//!
//! Everything here is a pure function from state to text; the binary decides
//! when to print. Appending to stdout is what keeps the newest message in
//! view.
//!
//! # Structure
//!
//! - [`message`]: one message record to a styled block
//! - [`list`]: the full transcript, welcome panel, and error banner
//! - [`loading`]: the static "thinking" indicator

pub mod list;
pub mod loading;
pub mod message;
