use crate::paging::Page;
use crate::ui::home::model::ArticleUiModel;
use crate::ui::mvi::Intent;

/// Public events accepted by the home store.
#[derive(Debug, Clone)]
pub enum HomeIntent {
    /// Initial load. Only honored from `Idle`; a no-op otherwise.
    FetchData,
    /// Reload page 1, replacing the accumulated list.
    Refresh,
    /// Fetch the page after the latest one and append it. Only honored
    /// from `Success`; dropped while a fetch is in flight.
    LoadMore,
    /// User picked an article. No state change; emits a navigation effect.
    ArticleSelected(ArticleUiModel),
}

impl Intent for HomeIntent {}

/// Internal transitions applied by the store once async work resolves.
/// These are what the pure reducer actually consumes.
#[derive(Debug, Clone)]
pub enum HomeTransition {
    /// A full-screen fetch started (initial load or refresh).
    Loading,
    /// A page arrived. `append` distinguishes load-more from replace.
    Loaded {
        page: Page<ArticleUiModel>,
        append: bool,
    },
}

impl Intent for HomeTransition {}
