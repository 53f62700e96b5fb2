//! Telegram update handlers.
//!
//! Each Telegram update is classified exactly once here, into a core
//! `IncomingEvent`, and handed to the dispatcher. Updates that carry nothing
//! the locker understands are dropped.

use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{CallbackQuery, Message},
};
use tracing::{debug, error};

use locker_core::{
    domain::{ChatId, MediaKind, UserId},
    messaging::types::{ControlActivation, IncomingEvent, MediaUpload, TextMessage},
};

use crate::router::AppState;

fn sender_of(user: &teloxide::types::User) -> UserId {
    UserId(user.id.0 as i64)
}

/// Classify a Telegram message. Media wins over text; photos use the last
/// (largest) size Telegram provides.
pub fn message_event(msg: &Message) -> Option<IncomingEvent> {
    let sender = sender_of(msg.from()?);
    let chat_id = ChatId(msg.chat.id.0);

    let media = if let Some(doc) = msg.document() {
        Some((MediaKind::Document, doc.file.id.clone()))
    } else if let Some(photos) = msg.photo() {
        photos
            .last()
            .map(|best| (MediaKind::Photo, best.file.id.clone()))
    } else {
        msg.video()
            .map(|video| (MediaKind::Video, video.file.id.clone()))
    };

    if let Some((kind, token)) = media {
        return Some(IncomingEvent::Media(MediaUpload {
            chat_id,
            sender,
            kind,
            token,
        }));
    }

    msg.text().map(|text| {
        IncomingEvent::Text(TextMessage {
            chat_id,
            sender,
            text: text.to_string(),
        })
    })
}

/// Classify a button press. Needs both the originating message (for the chat)
/// and callback data.
pub fn callback_event(q: &CallbackQuery) -> Option<IncomingEvent> {
    let chat_id = ChatId(q.message.as_ref()?.chat.id.0);
    let payload = q.data.clone().filter(|d| !d.is_empty())?;

    Some(IncomingEvent::Control(ControlActivation {
        chat_id,
        sender: sender_of(&q.from),
        callback_id: q.id.clone(),
        payload,
    }))
}

async fn dispatch(state: &AppState, event: IncomingEvent) {
    let chat = event.chat_id().0;
    if let Err(e) = state.dispatcher.handle(event).await {
        error!(chat, "failed to deliver reply: {e}");
    }
}

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    match message_event(&msg) {
        Some(event) => dispatch(&state, event).await,
        None => debug!(chat = msg.chat.id.0, "ignoring unsupported message"),
    }
    Ok(())
}

pub async fn handle_callback(q: CallbackQuery, state: Arc<AppState>) -> ResponseResult<()> {
    match callback_event(&q) {
        Some(event) => dispatch(&state, event).await,
        None => {
            // Always answer callback query eventually.
            let _ = state.messenger.answer_callback_query(&q.id, None).await;
        }
    }
    Ok(())
}
