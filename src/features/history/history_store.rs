use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::models::{HistoryView, RequestRecord};
use crate::error::HistoryError;

/// Request history persisted as a JSON array in a single file
///
/// Every append rewrites the whole file. Appends through the same store are
/// serialized, writers in other processes are not
pub struct HistoryStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the whole persisted sequence, a JSON `null` being empty
    pub async fn load(&self) -> Result<Vec<RequestRecord>, HistoryError> {
        let data = fs::read(&self.path).await.map_err(HistoryError::Read)?;
        serde_json::from_slice::<Option<Vec<RequestRecord>>>(&data)
            .map(Option::unwrap_or_default)
            .map_err(HistoryError::Parse)
    }

    /// Appends one record, logging and dropping it on failure
    pub async fn append(&self, record: RequestRecord) {
        let _guard = self.write_lock.lock().await;

        if let Err(e) = self.append_locked(record).await {
            log::error!("{} ({})", e, self.path.display());
        }
    }

    async fn append_locked(&self, record: RequestRecord) -> Result<(), HistoryError> {
        let mut history = match self.load().await {
            Ok(history) => history,
            Err(HistoryError::Read(e)) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                log::warn!("{}; starting a new history", e);
                Vec::new()
            }
        };

        history.push(record);

        let data = serde_json::to_vec(&history).map_err(HistoryError::Serialize)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(HistoryError::CreateDir)?;
        }

        fs::write(&self.path, data).await.map_err(HistoryError::Write)
    }

    /// Renders the history as concatenated `:: time - content - ip ::` segments
    pub async fn render(&self) -> HistoryView {
        match self.load().await {
            Ok(history) => HistoryView::Entries(
                history.iter().map(RequestRecord::to_string).collect(),
            ),
            Err(e) => HistoryView::Unavailable(e),
        }
    }
}
