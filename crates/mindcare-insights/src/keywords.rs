use mindcare_core::models::message::Message;

/// A named set of substrings. The group matches when any keyword occurs
/// anywhere in the text, including inside a longer word.
#[derive(Debug, Clone, Copy)]
pub struct KeywordGroup {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

impl KeywordGroup {
    /// `text` is expected to be lowercase already.
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k))
    }
}

/// Lowercased text of every user message, joined by single spaces.
pub fn user_text(messages: &[Message]) -> String {
    messages
        .iter()
        .filter(|m| m.is_from_user())
        .map(|m| m.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
