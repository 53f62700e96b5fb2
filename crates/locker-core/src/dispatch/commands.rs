use tracing::{info, warn};

use crate::{
    control::ControlPayload,
    domain::{ChatId, MediaKind, UserId},
    menu,
    messaging::types::{InlineButton, InlineKeyboard, TextMessage},
    Result,
};

use super::Dispatcher;

/// What a text message asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    List(MediaKind),
    DeleteAll(MediaKind),
    Unknown,
}

fn parse_command(text: &str) -> String {
    // Telegram may send `/cmd@botname arg1 ...`
    let first = text.split_whitespace().next().unwrap_or("");
    first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase()
}

/// Menu labels match with or without their leading emoji.
fn is_label(text: &str, label: &str) -> bool {
    if text == label {
        return true;
    }
    label
        .split_once(' ')
        .map(|(_, bare)| bare == text)
        .unwrap_or(false)
}

pub fn route_text(text: &str) -> Command {
    let text = text.trim();

    if text.starts_with('/') {
        return match parse_command(text).as_str() {
            "start" => Command::Start,
            "help" => Command::Help,
            _ => Command::Unknown,
        };
    }

    if is_label(text, menu::HELP) {
        return Command::Help;
    }
    for kind in MediaKind::ALL {
        if is_label(text, menu::list_label(kind)) {
            return Command::List(kind);
        }
        if is_label(text, menu::delete_all_label(kind)) {
            return Command::DeleteAll(kind);
        }
    }
    Command::Unknown
}

/// Inline control attached to a listed file.
///
/// `None` when the token is too long for either phase of the delete workflow
/// to fit in a button; the file is then listed without one.
pub fn delete_control(kind: MediaKind, token: &str) -> Option<InlineKeyboard> {
    ControlPayload::confirm(kind, token).to_button_data()?;
    let data = ControlPayload::delete(kind, token).to_button_data()?;
    Some(InlineKeyboard::single(InlineButton::new(
        menu::DELETE_BUTTON,
        data,
    )))
}

impl Dispatcher {
    pub(super) async fn handle_text(&self, msg: TextMessage) -> Result<()> {
        let chat_id = msg.chat_id;
        let menu = menu::main_menu();

        match route_text(&msg.text) {
            Command::Start => {
                self.messenger
                    .send_html(chat_id, menu::WELCOME_HTML, Some(&menu))
                    .await
            }
            Command::Help => {
                self.messenger
                    .send_html(chat_id, menu::HELP_HTML, Some(&menu))
                    .await
            }
            Command::List(kind) => self.send_listing(chat_id, msg.sender, kind).await,
            Command::DeleteAll(kind) => {
                let removed = self.store.delete_all(msg.sender, kind).await?;
                info!(owner = msg.sender.0, %kind, removed, "deleted all files of kind");
                self.messenger
                    .send_html(chat_id, &menu::all_deleted(kind), Some(&menu))
                    .await
            }
            Command::Unknown => {
                self.messenger
                    .send_html(chat_id, menu::USE_MENU, Some(&menu))
                    .await
            }
        }
    }

    async fn send_listing(&self, chat_id: ChatId, owner: UserId, kind: MediaKind) -> Result<()> {
        let tokens = self.store.list(owner, kind).await?;
        if tokens.is_empty() {
            return self
                .messenger
                .send_html(chat_id, &menu::none_found(kind), None)
                .await;
        }

        for token in &tokens {
            let control = delete_control(kind, token);
            if control.is_none() {
                warn!(
                    owner = owner.0,
                    %kind,
                    token_len = token.len(),
                    "token too long for a delete button, listing without one"
                );
            }
            self.messenger
                .send_media(chat_id, kind, token, control)
                .await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_commands() {
        assert_eq!(route_text("/start"), Command::Start);
        assert_eq!(route_text("/start@locker_bot"), Command::Start);
        assert_eq!(route_text("/HELP"), Command::Help);
        assert_eq!(route_text("/help me"), Command::Help);
        assert_eq!(route_text("/photos"), Command::Unknown);
        assert_eq!(route_text("/"), Command::Unknown);
    }

    #[test]
    fn menu_labels() {
        assert_eq!(route_text("ℹ️ Help"), Command::Help);
        assert_eq!(route_text("📄 My Documents"), Command::List(MediaKind::Document));
        assert_eq!(route_text("🖼️ My Photos"), Command::List(MediaKind::Photo));
        assert_eq!(route_text("🎥 My Videos"), Command::List(MediaKind::Video));
        assert_eq!(
            route_text("🗑 Delete Documents"),
            Command::DeleteAll(MediaKind::Document)
        );
        assert_eq!(
            route_text("🗑 Delete Photos"),
            Command::DeleteAll(MediaKind::Photo)
        );
        assert_eq!(
            route_text("🗑 Delete Videos"),
            Command::DeleteAll(MediaKind::Video)
        );
    }

    #[test]
    fn labels_without_emoji_and_with_whitespace() {
        assert_eq!(route_text("My Photos"), Command::List(MediaKind::Photo));
        assert_eq!(route_text("  Delete Videos \n"), Command::DeleteAll(MediaKind::Video));
        assert_eq!(route_text("Help"), Command::Help);
    }

    #[test]
    fn anything_else_is_unknown() {
        assert_eq!(route_text("hello"), Command::Unknown);
        assert_eq!(route_text(""), Command::Unknown);
        assert_eq!(route_text("my photos"), Command::Unknown);
        assert_eq!(route_text("Delete"), Command::Unknown);
    }

    #[test]
    fn delete_control_encodes_kind_and_token() {
        let kb = delete_control(MediaKind::Photo, "ph1").unwrap();
        let buttons: Vec<_> = kb.buttons().collect();
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].label, menu::DELETE_BUTTON);
        assert_eq!(buttons[0].callback_data, "delete|photo|ph1");
    }

    #[test]
    fn no_delete_control_for_long_tokens() {
        assert!(delete_control(MediaKind::Document, &"x".repeat(47)).is_some());
        // Delete payload would fit, confirm payload would not.
        assert!(delete_control(MediaKind::Document, &"x".repeat(48)).is_none());
        assert!(delete_control(MediaKind::Photo, &"B".repeat(71)).is_none());
    }
}
