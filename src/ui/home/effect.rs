use crate::ui::home::model::ArticleUiModel;

/// One-shot effects: delivered to the observer exactly once, never
/// replayed, never retained in state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeEffect {
    /// A fetch failed terminally; show a dismissible message.
    ShowError(String),
    /// Navigate to the detail view for the selected article.
    OpenDetails(ArticleUiModel),
}
