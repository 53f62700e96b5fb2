use async_trait::async_trait;

use crate::{
    domain::{ChatId, MediaKind},
    messaging::types::{InlineKeyboard, ReplyMenu},
    Result,
};

/// Outbound side of the messaging gateway.
///
/// Telegram is the only implementation; tests use a recording fake.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    /// Send an HTML-formatted text, optionally (re)attaching the reply menu.
    async fn send_html(&self, chat_id: ChatId, html: &str, menu: Option<&ReplyMenu>) -> Result<()>;

    /// Re-send stored media by its gateway token, optionally with an inline control.
    async fn send_media(
        &self,
        chat_id: ChatId,
        kind: MediaKind,
        token: &str,
        control: Option<InlineKeyboard>,
    ) -> Result<()>;

    async fn send_inline_keyboard(
        &self,
        chat_id: ChatId,
        html: &str,
        keyboard: InlineKeyboard,
    ) -> Result<()>;

    async fn answer_callback_query(&self, callback_id: &str, text: Option<&str>) -> Result<()>;
}
