//! The core models for managing a stateful chat with an LLM.
use crate::openai::Message;

/// Ordered, append-only record of one session's conversation. The
/// transcript is the single source of truth for what has been shown
/// to the user: entries are never edited, reordered, or removed, and
/// the same sequence feeds both rendering and prompt construction.
#[derive(Default, Clone)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn new_with_messages(messages: Vec<Message>) -> Self {
        Self(messages)
    }

    /// The full ordered sequence, oldest first.
    pub fn messages(&self) -> Vec<Message> {
        self.0.clone()
    }

    pub fn push(&mut self, msg: Message) {
        self.0.push(msg)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openai::Role;

    #[test]
    fn test_push_preserves_append_order() {
        let mut transcript = Transcript::new();
        transcript.push(Message::new(Role::User, "first"));
        transcript.push(Message::new(Role::Assistant, "second"));
        transcript.push(Message::new(Role::User, "third"));

        let messages = transcript.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].content, "first");
        assert_eq!(messages[1].content, "second");
        assert_eq!(messages[2].content, "third");
    }

    #[test]
    fn test_one_turn_adds_two_entries() {
        // N turns of user question plus assistant reply leave 2N
        // entries
        let mut transcript = Transcript::new();
        for turn in 0..5 {
            transcript.push(Message::new(Role::User, &format!("question {}", turn)));
            transcript.push(Message::new(Role::Assistant, &format!("answer {}", turn)));
            assert_eq!(transcript.len(), (turn + 1) * 2);
        }
    }

    #[test]
    fn test_messages_returns_a_snapshot() {
        let mut transcript = Transcript::new();
        transcript.push(Message::new(Role::User, "first"));

        let snapshot = transcript.messages();
        transcript.push(Message::new(Role::Assistant, "second"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn test_new_with_messages() {
        let transcript = Transcript::new_with_messages(vec![
            Message::new(Role::User, "hello"),
            Message::new(Role::Assistant, "hi"),
        ]);
        assert_eq!(transcript.len(), 2);
        assert!(!transcript.is_empty());
        assert_eq!(transcript.iter().count(), 2);
    }
}
