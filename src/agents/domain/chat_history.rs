//! Chat history retention setting

use crate::agents::validator::ValidationError;

/// How much of a conversation an agent keeps in its chat history.
///
/// On the wire this is a small integer (`chatHistoryConf`); the payload keeps
/// the raw integer so that out-of-range input survives decoding and can be
/// reported by the validator instead of being silently coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatHistoryConf {
    /// Nothing is recorded
    None,
    /// Only the text transcript is recorded
    TextOnly,
    /// Text and voice recordings are kept
    TextAndVoice,
}

impl ChatHistoryConf {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 2;

    /// Wire integer for this setting
    pub fn code(self) -> i32 {
        match self {
            ChatHistoryConf::None => 0,
            ChatHistoryConf::TextOnly => 1,
            ChatHistoryConf::TextAndVoice => 2,
        }
    }
}

impl TryFrom<i32> for ChatHistoryConf {
    type Error = ValidationError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ChatHistoryConf::None),
            1 => Ok(ChatHistoryConf::TextOnly),
            2 => Ok(ChatHistoryConf::TextAndVoice),
            other => Err(ValidationError::InvalidValue {
                field: "chatHistoryConf".to_string(),
                reason: format!(
                    "{} is not a chat history setting (expected {}..={})",
                    other,
                    Self::MIN,
                    Self::MAX
                ),
            }),
        }
    }
}

impl From<ChatHistoryConf> for i32 {
    fn from(conf: ChatHistoryConf) -> Self {
        conf.code()
    }
}

impl std::fmt::Display for ChatHistoryConf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatHistoryConf::None => write!(f, "none"),
            ChatHistoryConf::TextOnly => write!(f, "text_only"),
            ChatHistoryConf::TextAndVoice => write!(f, "text_and_voice"),
        }
    }
}
