//! Two-phase delete confirmation.
//!
//! `Idle -> AwaitingConfirmation` happens when a listed file's delete button
//! is pressed; the pending deletion then exists only in the yes/no buttons we
//! send back. `Confirm` and `Cancel` both resolve it. Nothing is kept in
//! memory between the phases and confirmation buttons never expire.

use tracing::{info, warn};

use crate::{
    control::ControlPayload,
    domain::{ChatId, MediaKind, UserId},
    menu,
    messaging::types::{ControlActivation, InlineButton, InlineKeyboard},
    Result,
};

use super::Dispatcher;

/// Yes/No prompt, or `None` when the confirm payload would not fit in a button.
pub fn confirmation_keyboard(kind: MediaKind, token: &str) -> Option<InlineKeyboard> {
    let confirm = ControlPayload::confirm(kind, token).to_button_data()?;
    Some(InlineKeyboard::row(vec![
        InlineButton::new(menu::YES_BUTTON, confirm),
        InlineButton::new(menu::NO_BUTTON, ControlPayload::Cancel.to_string()),
    ]))
}

impl Dispatcher {
    pub(super) async fn handle_control(&self, activation: ControlActivation) -> Result<()> {
        // Always answer the callback so the client stops its spinner.
        let _ = self
            .messenger
            .answer_callback_query(&activation.callback_id, None)
            .await;

        let payload: ControlPayload = activation.payload.parse()?;
        let chat_id = activation.chat_id;

        match payload {
            ControlPayload::Delete { kind, token } => {
                self.ask_confirmation(chat_id, activation.sender, kind, &token)
                    .await
            }
            ControlPayload::Confirm { kind, token } => {
                self.confirm_delete(chat_id, activation.sender, kind, &token)
                    .await
            }
            ControlPayload::Cancel => {
                self.messenger
                    .send_html(chat_id, menu::DELETE_CANCELLED, None)
                    .await
            }
        }
    }

    async fn ask_confirmation(
        &self,
        chat_id: ChatId,
        owner: UserId,
        kind: MediaKind,
        token: &str,
    ) -> Result<()> {
        let Some(keyboard) = confirmation_keyboard(kind, token) else {
            warn!(
                owner = owner.0,
                %kind,
                token_len = token.len(),
                "token too long for a confirm button"
            );
            return self
                .messenger
                .send_html(chat_id, menu::DELETE_UNAVAILABLE, None)
                .await;
        };
        self.messenger
            .send_inline_keyboard(chat_id, menu::CONFIRM_PROMPT, keyboard)
            .await
    }

    async fn confirm_delete(
        &self,
        chat_id: ChatId,
        owner: UserId,
        kind: MediaKind,
        token: &str,
    ) -> Result<()> {
        let removed = self.store.delete_one(owner, kind, token).await?;
        info!(owner = owner.0, %kind, removed, "confirmed delete");

        // Success either way: a repeated confirm is a no-op from the user's view.
        self.messenger
            .send_html(chat_id, menu::FILE_DELETED, None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_keyboard_is_one_yes_no_row() {
        let kb = confirmation_keyboard(MediaKind::Document, "T").unwrap();
        assert_eq!(kb.rows.len(), 1);
        let row = &kb.rows[0];
        assert_eq!(row.len(), 2);
        assert_eq!(row[0].label, menu::YES_BUTTON);
        assert_eq!(row[0].callback_data, "confirm|document|T");
        assert_eq!(row[1].label, menu::NO_BUTTON);
        assert_eq!(row[1].callback_data, "cancel");
    }

    #[test]
    fn no_confirmation_keyboard_for_oversized_payload() {
        assert!(confirmation_keyboard(MediaKind::Document, &"x".repeat(47)).is_some());
        assert!(confirmation_keyboard(MediaKind::Document, &"x".repeat(48)).is_none());
    }
}
