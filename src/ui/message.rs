//! Rendering of a single chat message.

use chrono::{DateTime, Local};

use crate::api::types::{ChatMessage, MessageRole};

/// Render one message as a block: role label (with local wall-clock time when
/// the timestamp parses), then the content split on line breaks into separate
/// paragraph lines.
#[must_use]
pub fn render_message(message: &ChatMessage) -> String {
    let label = match message.role {
        MessageRole::User => "You",
        MessageRole::Assistant => "Assistant",
    };

    let mut out = String::new();
    match message.timestamp.as_deref().and_then(format_local_time) {
        Some(time) => out.push_str(&format!("{label} [{time}]\n")),
        None => out.push_str(&format!("{label}\n")),
    }
    for paragraph in message.content.split('\n') {
        out.push_str("  ");
        out.push_str(paragraph);
        out.push('\n');
    }
    out
}

/// Format an RFC 3339 timestamp as local time of day. Unparseable
/// timestamps render as no timestamp at all.
fn format_local_time(raw: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Local).format("%H:%M:%S").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(role: MessageRole, content: &str, timestamp: Option<&str>) -> ChatMessage {
        ChatMessage {
            role,
            content: content.into(),
            timestamp: timestamp.map(String::from),
        }
    }

    #[test]
    fn splits_content_into_paragraphs() {
        let rendered = render_message(&message(
            MessageRole::Assistant,
            "We have three U2 albums:\nAchtung Baby\nWar",
            None,
        ));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Assistant",
                "  We have three U2 albums:",
                "  Achtung Baby",
                "  War",
            ]
        );
    }

    #[test]
    fn user_messages_are_labelled_you() {
        let rendered = render_message(&message(MessageRole::User, "hello", None));
        assert!(rendered.starts_with("You\n"));
    }

    #[test]
    fn valid_timestamp_is_shown_as_local_time() {
        let rendered = render_message(&message(
            MessageRole::User,
            "hello",
            Some("2024-06-01T12:30:45Z"),
        ));
        let header = rendered.lines().next().unwrap();
        assert!(header.starts_with("You ["));
        assert!(header.ends_with(']'));
    }

    #[test]
    fn invalid_timestamp_is_dropped() {
        let rendered = render_message(&message(MessageRole::User, "hello", Some("not-a-time")));
        assert!(rendered.starts_with("You\n"));
    }
}
