//! Event-driven store for the home screen.
//!
//! Owns the accumulated list exclusively and processes intents strictly
//! one at a time in arrival order, so a later fetch can never overwrite
//! state with an earlier fetch's result. State is published through a
//! `watch` channel (latest value retained for late subscribers); effects
//! go through an mpsc channel and are consumed at most once.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::debug;

use crate::domain::NewsRepository;
use crate::mapper::Mapper;
use crate::paging::Page;
use crate::ui::home::effect::HomeEffect;
use crate::ui::home::intent::{HomeIntent, HomeTransition};
use crate::ui::home::model::ArticleUiMapper;
use crate::ui::home::reducer::HomeReducer;
use crate::ui::home::state::HomeState;
use crate::ui::mvi::Reducer;

pub struct HomeStore {
    intent_tx: mpsc::UnboundedSender<HomeIntent>,
    state_rx: watch::Receiver<HomeState>,
    effect_rx: mpsc::UnboundedReceiver<HomeEffect>,
}

impl HomeStore {
    /// Spawn the store's event loop on the current tokio runtime.
    pub fn spawn(repository: Arc<dyn NewsRepository>) -> Self {
        let (intent_tx, intent_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(HomeState::Idle);
        let (effect_tx, effect_rx) = mpsc::unbounded_channel();

        tokio::spawn(run_loop(repository, intent_rx, state_tx, effect_tx));

        Self {
            intent_tx,
            state_rx,
            effect_rx,
        }
    }

    pub fn dispatch(&self, intent: HomeIntent) {
        // A send failure means the loop already stopped; nothing to do.
        let _ = self.intent_tx.send(intent);
    }

    /// Current state snapshot.
    pub fn state(&self) -> HomeState {
        self.state_rx.borrow().clone()
    }

    /// Subscribe to the state stream. The receiver immediately holds the
    /// latest value.
    pub fn subscribe(&self) -> watch::Receiver<HomeState> {
        self.state_rx.clone()
    }

    /// Non-blocking effect poll, for synchronous render loops.
    pub fn try_next_effect(&mut self) -> Option<HomeEffect> {
        self.effect_rx.try_recv().ok()
    }

    /// Await the next effect. `None` once the store loop has stopped.
    pub async fn next_effect(&mut self) -> Option<HomeEffect> {
        self.effect_rx.recv().await
    }
}

async fn run_loop(
    repository: Arc<dyn NewsRepository>,
    mut intent_rx: mpsc::UnboundedReceiver<HomeIntent>,
    state_tx: watch::Sender<HomeState>,
    effect_tx: mpsc::UnboundedSender<HomeEffect>,
) {
    while let Some(intent) = intent_rx.recv().await {
        let current = state_tx.borrow().clone();
        let alive = match intent {
            HomeIntent::FetchData => {
                if current.is_idle() {
                    fetch(&*repository, 1, false, &state_tx, &effect_tx).await
                } else {
                    debug!("FetchData ignored outside Idle");
                    true
                }
            }
            HomeIntent::Refresh => fetch(&*repository, 1, false, &state_tx, &effect_tx).await,
            HomeIntent::LoadMore => match current.current_page() {
                Some(page) => fetch(&*repository, page + 1, true, &state_tx, &effect_tx).await,
                None => {
                    debug!("LoadMore ignored outside Success");
                    true
                }
            },
            HomeIntent::ArticleSelected(article) => {
                effect_tx.send(HomeEffect::OpenDetails(article)).is_ok()
            }
        };

        if !alive {
            // Every observer is gone; abandon in-flight work silently.
            break;
        }
    }
}

/// Run one fetch and apply its outcome. Returns `false` once no state
/// observer is left.
async fn fetch(
    repository: &dyn NewsRepository,
    page: u32,
    append: bool,
    state_tx: &watch::Sender<HomeState>,
    effect_tx: &mpsc::UnboundedSender<HomeEffect>,
) -> bool {
    if !append {
        let loading = HomeReducer::reduce(state_tx.borrow().clone(), HomeTransition::Loading);
        if state_tx.send(loading).is_err() {
            return false;
        }
    }

    match repository.fetch_page(page).await {
        Ok(fetched) => {
            let mapper = ArticleUiMapper;
            let ui_page = Page::new(
                mapper.map_all(fetched.items),
                fetched.total,
                fetched.current_page,
            );
            let next = HomeReducer::reduce(
                state_tx.borrow().clone(),
                HomeTransition::Loaded {
                    page: ui_page,
                    append,
                },
            );
            state_tx.send(next).is_ok()
        }
        Err(err) => {
            // Failures never reach the state stream; the state stays as
            // it was and the message goes out as a one-shot effect.
            effect_tx.send(HomeEffect::ShowError(err.to_string())).is_ok()
        }
    }
}
