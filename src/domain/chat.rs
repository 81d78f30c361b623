// Plain-text chat generation from selected conversations
use super::conversation::Conversation;

/// Concatenate the transcripts of the given conversations, in order.
///
/// Each conversation contributes a header block (title, category, date), a
/// blank line, then one `User:`/`AI:` line per message. Conversations are
/// separated by a blank line. This is local formatting only.
pub fn generate_chat<'a, I>(conversations: I) -> String
where
    I: IntoIterator<Item = &'a Conversation>,
{
    conversations
        .into_iter()
        .map(render_transcript)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_transcript(conv: &Conversation) -> String {
    let header = format!(
        "Title: {}\nCategory: {}\nDate: {}\n\n",
        conv.title, conv.category, conv.date
    );
    let body = conv
        .messages
        .iter()
        .map(|msg| format!("{}: {}", msg.speaker(), msg.text))
        .collect::<Vec<_>>()
        .join("\n");
    header + &body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::Message;

    #[test]
    fn test_generate_chat_empty() {
        let none: [Conversation; 0] = [];
        assert_eq!(generate_chat(&none), "");
    }

    #[test]
    fn test_generate_chat_single() {
        let conv = Conversation::new(1, "T", "C", "2024-01-01", vec![Message::new("hi", true)]);
        let chat = generate_chat([&conv]);

        let positions: Vec<usize> = ["Title: T", "Category: C", "Date: 2024-01-01", "User: hi"]
            .iter()
            .map(|line| chat.find(line).expect("line present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(chat, "Title: T\nCategory: C\nDate: 2024-01-01\n\nUser: hi");
    }

    #[test]
    fn test_generate_chat_keeps_given_order() {
        let first = Conversation::new(
            7,
            "Second listed",
            "Sales",
            "2024-07-21",
            vec![Message::new("price?", true), Message::new("$10", false)],
        );
        let second = Conversation::new(2, "First listed", "HR", "2024-07-20", vec![]);

        let chat = generate_chat([&first, &second]);
        assert_eq!(
            chat,
            "Title: Second listed\nCategory: Sales\nDate: 2024-07-21\n\nUser: price?\nAI: $10\n\n\
             Title: First listed\nCategory: HR\nDate: 2024-07-20\n\n"
        );
    }
}
