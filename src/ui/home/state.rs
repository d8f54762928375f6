use crate::paging::Page;
use crate::ui::home::model::ArticleUiModel;
use crate::ui::mvi::UiState;

/// Finite state of the home screen.
///
/// `Success` accumulates every page fetched so far in session order; its
/// paging metadata always belongs to the most recently fetched page.
/// `Empty` is only reachable when the first successful page carries zero
/// items. Failures never appear here; they surface as one-shot effects.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HomeState {
    #[default]
    Idle,
    Loading,
    Empty,
    Success {
        page: Page<ArticleUiModel>,
        /// App-bar title, derived from the first article's source name.
        title: String,
    },
}

impl UiState for HomeState {}

impl HomeState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Page index of the latest fetched page, when in `Success`.
    pub fn current_page(&self) -> Option<u32> {
        match self {
            Self::Success { page, .. } => Some(page.current_page),
            _ => None,
        }
    }

    /// Accumulated articles, empty outside `Success`.
    pub fn articles(&self) -> &[ArticleUiModel] {
        match self {
            Self::Success { page, .. } => &page.items,
            _ => &[],
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Success { title, .. } => title,
            _ => "",
        }
    }
}
