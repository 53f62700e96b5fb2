use crate::domain::{ChatId, MediaKind, UserId};

/// Inbound gateway event.
///
/// Decided once at the gateway boundary; the dispatcher never inspects
/// optional fields to guess what it received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IncomingEvent {
    Media(MediaUpload),
    Text(TextMessage),
    Control(ControlActivation),
}

impl IncomingEvent {
    pub fn chat_id(&self) -> ChatId {
        match self {
            IncomingEvent::Media(m) => m.chat_id,
            IncomingEvent::Text(t) => t.chat_id,
            IncomingEvent::Control(c) => c.chat_id,
        }
    }

    pub fn sender(&self) -> UserId {
        match self {
            IncomingEvent::Media(m) => m.sender,
            IncomingEvent::Text(t) => t.sender,
            IncomingEvent::Control(c) => c.sender,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaUpload {
    pub chat_id: ChatId,
    pub sender: UserId,
    pub kind: MediaKind,
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextMessage {
    pub chat_id: ChatId,
    pub sender: UserId,
    pub text: String,
}

/// An inline button press. `payload` is the raw callback data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlActivation {
    pub chat_id: ChatId,
    pub sender: UserId,
    pub callback_id: String,
    pub payload: String,
}

/// Inline keyboard (buttons attached to a message).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineKeyboard {
    pub rows: Vec<Vec<InlineButton>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub callback_data: String,
}

impl InlineButton {
    pub fn new(label: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            callback_data: callback_data.into(),
        }
    }
}

impl InlineKeyboard {
    pub fn single(button: InlineButton) -> Self {
        Self {
            rows: vec![vec![button]],
        }
    }

    /// All buttons side by side in one row.
    pub fn row(buttons: Vec<InlineButton>) -> Self {
        Self {
            rows: vec![buttons],
        }
    }

    pub fn buttons(&self) -> impl Iterator<Item = &InlineButton> {
        self.rows.iter().flatten()
    }
}

/// Persistent reply keyboard shown under the input field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplyMenu {
    pub rows: Vec<Vec<String>>,
}

impl ReplyMenu {
    pub fn new(rows: &[&[&str]]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }
}
