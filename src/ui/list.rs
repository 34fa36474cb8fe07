//! Rendering of the whole transcript.

use crate::api::types::ChatMessage;
use crate::ui::{loading::loading_indicator, message::render_message};

/// Render the transcript.
///
/// The welcome panel appears only when there are zero messages, no request in
/// flight, and no error. Otherwise: every message in order, then the loading
/// indicator if active, then the error banner if present. Loading and error
/// are independent of each other.
#[must_use]
pub fn render_transcript(messages: &[ChatMessage], loading: bool, error: Option<&str>) -> String {
    if messages.is_empty() && !loading && error.is_none() {
        return welcome_panel().to_string();
    }

    let mut out = String::new();
    for message in messages {
        out.push_str(&render_message(message));
        out.push('\n');
    }
    if loading {
        out.push_str(loading_indicator());
        out.push('\n');
    }
    if let Some(error) = error {
        out.push_str(&error_banner(error));
        out.push('\n');
    }
    out
}

/// Render the inline error banner.
#[must_use]
pub fn error_banner(error: &str) -> String {
    format!("!! {error}")
}

/// Empty-state greeting shown before the first message.
#[must_use]
pub fn welcome_panel() -> &'static str {
    "\
Welcome to the Digital Music Store!

Ask me anything about:
  - the music catalog: artists, albums, and songs
  - your invoices and purchase history
  - music recommendations

Try: \"My customer ID is 1. What albums do you have by U2?\"
"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::MessageRole;

    fn message(role: MessageRole, content: &str) -> ChatMessage {
        ChatMessage {
            role,
            content: content.into(),
            timestamp: None,
        }
    }

    #[test]
    fn empty_idle_transcript_shows_welcome() {
        let rendered = render_transcript(&[], false, None);
        assert!(rendered.contains("Digital Music Store"));
        assert!(rendered.contains("customer ID is 1"));
    }

    #[test]
    fn loading_suppresses_welcome() {
        let rendered = render_transcript(&[], true, None);
        assert!(!rendered.contains("Digital Music Store"));
        assert!(rendered.contains("thinking"));
    }

    #[test]
    fn error_suppresses_welcome() {
        let rendered = render_transcript(&[], false, Some("it broke"));
        assert!(!rendered.contains("Digital Music Store"));
        assert!(rendered.contains("!! it broke"));
    }

    #[test]
    fn messages_render_in_order() {
        let rendered = render_transcript(
            &[
                message(MessageRole::User, "any U2 albums?"),
                message(MessageRole::Assistant, "We have War."),
            ],
            false,
            None,
        );
        let user = rendered.find("any U2 albums?").unwrap();
        let assistant = rendered.find("We have War.").unwrap();
        assert!(user < assistant);
    }

    #[test]
    fn loading_and_error_can_coexist() {
        let rendered = render_transcript(
            &[message(MessageRole::User, "hello")],
            true,
            Some("slow backend"),
        );
        let indicator = rendered.find("thinking").unwrap();
        let banner = rendered.find("!! slow backend").unwrap();
        assert!(indicator < banner);
    }
}
