//! User-facing labels and reply texts.

use crate::{domain::MediaKind, messaging::types::ReplyMenu};

pub const MY_DOCUMENTS: &str = "📄 My Documents";
pub const MY_PHOTOS: &str = "🖼️ My Photos";
pub const MY_VIDEOS: &str = "🎥 My Videos";
pub const DELETE_DOCUMENTS: &str = "🗑 Delete Documents";
pub const DELETE_PHOTOS: &str = "🗑 Delete Photos";
pub const DELETE_VIDEOS: &str = "🗑 Delete Videos";
pub const HELP: &str = "ℹ️ Help";

pub const WELCOME_HTML: &str = "👋 Welcome!\n\n\
Send me documents, photos, or videos.\n\
I’ll save them safely for you.\n\n\
👇 Use the menu below:";

pub const HELP_HTML: &str = "ℹ️ <b>Help</b>\n\n\
📄 My Documents – get your documents\n\
🖼️ My Photos – get your photos\n\
🎥 My Videos – get your videos\n\
🗑 Delete … – remove everything of that kind\n\n\
📤 Just send files to save them.\n\
Each file you get back has a 🗑 Delete button.";

pub const USE_MENU: &str = "❓ Use the menu below.";
pub const FAILURE: &str = "⚠️ Something went wrong. Please try again.";

pub const DELETE_BUTTON: &str = "🗑 Delete";
pub const CONFIRM_PROMPT: &str = "⚠️ Delete this file?";
pub const YES_BUTTON: &str = "✅ Yes";
pub const NO_BUTTON: &str = "❌ No";
pub const FILE_DELETED: &str = "✅ File deleted successfully.";
pub const DELETE_CANCELLED: &str = "❎ Delete cancelled.";
pub const DELETE_UNAVAILABLE: &str = "⚠️ This file can't be deleted on its own. Use the 🗑 Delete menu button instead.";

pub fn main_menu() -> ReplyMenu {
    ReplyMenu::new(&[
        &[MY_DOCUMENTS, MY_PHOTOS],
        &[MY_VIDEOS],
        &[DELETE_DOCUMENTS, DELETE_PHOTOS, DELETE_VIDEOS],
        &[HELP],
    ])
}

pub fn list_label(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Document => MY_DOCUMENTS,
        MediaKind::Photo => MY_PHOTOS,
        MediaKind::Video => MY_VIDEOS,
    }
}

pub fn delete_all_label(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Document => DELETE_DOCUMENTS,
        MediaKind::Photo => DELETE_PHOTOS,
        MediaKind::Video => DELETE_VIDEOS,
    }
}

pub fn saved(kind: MediaKind) -> String {
    let name = match kind {
        MediaKind::Document => "Document",
        MediaKind::Photo => "Photo",
        MediaKind::Video => "Video",
    };
    format!("{} {name} saved", kind.emoji())
}

pub fn none_found(kind: MediaKind) -> String {
    let emoji = match kind {
        MediaKind::Document => "📂",
        other => other.emoji(),
    };
    format!("{emoji} No {} found.", kind.plural())
}

pub fn all_deleted(kind: MediaKind) -> String {
    format!("🗑 All your {} have been deleted.", kind.plural())
}
