use std::{fmt, str::FromStr};

/// Telegram user id (numeric). Doubles as the owner of stored files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// Store-assigned record id. Monotonically increasing per store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub i64);

/// The three kinds of media the locker keeps apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Document,
    Photo,
    Video,
}

impl MediaKind {
    pub const ALL: [MediaKind; 3] = [MediaKind::Document, MediaKind::Photo, MediaKind::Video];

    /// Text form used both in the `files.kind` column and in control payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Document => "document",
            MediaKind::Photo => "photo",
            MediaKind::Video => "video",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            MediaKind::Document => "documents",
            MediaKind::Photo => "photos",
            MediaKind::Video => "videos",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            MediaKind::Document => "📄",
            MediaKind::Photo => "🖼️",
            MediaKind::Video => "🎥",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMediaKind(pub String);

impl fmt::Display for UnknownMediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown media kind: {:?}", self.0)
    }
}

impl std::error::Error for UnknownMediaKind {}

impl FromStr for MediaKind {
    type Err = UnknownMediaKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMediaKind(s.to_string()))
    }
}

/// One stored file reference.
///
/// Records are never updated: they are created on intake and removed on an
/// explicit owner request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    pub id: RecordId,
    pub owner_id: UserId,
    pub kind: MediaKind,
    /// Opaque gateway handle (Telegram `file_id`).
    pub token: String,
}
