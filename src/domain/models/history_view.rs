use crate::error::HistoryError;

/// Rendered request history, or the reason it could not be rendered
#[derive(Debug)]
pub enum HistoryView {
    Entries(String),
    Unavailable(HistoryError),
}

impl HistoryView {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_available(&self) -> bool {
        matches!(self, HistoryView::Entries(_))
    }

    /// Flattens the view into the text placed in the response payload
    pub fn into_content(self) -> String {
        match self {
            HistoryView::Entries(content) => content,
            HistoryView::Unavailable(err) => err.to_string(),
        }
    }
}
