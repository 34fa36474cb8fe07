//! The "assistant is thinking" indicator. Static, no state.

/// Line printed while a request is outstanding.
#[must_use]
pub fn loading_indicator() -> &'static str {
    ". . .  Assistant is thinking..."
}
