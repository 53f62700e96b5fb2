use tracing::info;

use crate::{menu, messaging::types::MediaUpload, Result};

use super::Dispatcher;

impl Dispatcher {
    /// Store the uploaded file's token and acknowledge it.
    ///
    /// Single attempt: a failed write is returned to the dispatcher boundary,
    /// never swallowed.
    pub(super) async fn save_media(&self, upload: MediaUpload) -> Result<()> {
        let id = self
            .store
            .put(upload.sender, upload.kind, &upload.token)
            .await?;
        info!(owner = upload.sender.0, kind = %upload.kind, record = id.0, "saved upload");

        self.messenger
            .send_html(upload.chat_id, &menu::saved(upload.kind), None)
            .await
    }
}
