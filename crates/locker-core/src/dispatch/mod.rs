//! Event dispatcher: routes each inbound gateway event to media intake, the
//! command router, or the delete workflow, and turns every failure into a
//! reply.

use std::sync::Arc;

use tracing::{error, warn};

use crate::{
    errors::Error,
    menu,
    messaging::{port::MessagingPort, types::IncomingEvent},
    store::FileStore,
    Result,
};

pub mod commands;
pub mod delete_flow;
mod intake;

/// Stateless between events: everything it knows lives in the store.
#[derive(Clone)]
pub struct Dispatcher {
    store: Arc<dyn FileStore>,
    messenger: Arc<dyn MessagingPort>,
}

impl Dispatcher {
    pub fn new(store: Arc<dyn FileStore>, messenger: Arc<dyn MessagingPort>) -> Self {
        Self { store, messenger }
    }

    /// Handle one event to completion.
    ///
    /// Returns `Err` only if the fallback reply for a failed event could not
    /// be sent either.
    pub async fn handle(&self, event: IncomingEvent) -> Result<()> {
        let chat_id = event.chat_id();
        let sender = event.sender();

        let outcome = match event {
            IncomingEvent::Media(upload) => self.save_media(upload).await,
            IncomingEvent::Text(msg) => self.handle_text(msg).await,
            IncomingEvent::Control(activation) => self.handle_control(activation).await,
        };

        match outcome {
            Ok(()) => Ok(()),
            Err(Error::MalformedControlPayload(raw)) => {
                warn!(user = sender.0, payload = %raw, "ignoring malformed control payload");
                self.messenger
                    .send_html(chat_id, menu::USE_MENU, Some(&menu::main_menu()))
                    .await
            }
            Err(e) => {
                error!(user = sender.0, chat = chat_id.0, "event handling failed: {e}");
                self.messenger
                    .send_html(chat_id, menu::FAILURE, None)
                    .await
            }
        }
    }
}
