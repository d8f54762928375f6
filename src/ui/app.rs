//! Application shell: screen stack, key handling, effect consumption.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::home::{ArticleUiModel, HomeEffect, HomeIntent, HomeState, HomeStore};

const STATUS_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Home,
    Details(ArticleUiModel),
}

pub struct App {
    store: HomeStore,
    screen: Screen,
    selected: usize,
    status: Option<(String, Instant)>,
    should_quit: bool,
}

impl App {
    pub fn new(store: HomeStore) -> Self {
        store.dispatch(HomeIntent::FetchData);
        Self {
            store,
            screen: Screen::Home,
            selected: 0,
            status: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn state(&self) -> HomeState {
        self.store.state()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(msg, _)| msg.as_str())
    }

    /// Drain one-shot effects and expire the transient status line.
    pub fn on_tick(&mut self) {
        while let Some(effect) = self.store.try_next_effect() {
            match effect {
                HomeEffect::ShowError(message) => {
                    self.status = Some((message, Instant::now()));
                }
                HomeEffect::OpenDetails(article) => {
                    self.screen = Screen::Details(article);
                }
            }
        }

        if let Some((_, shown_at)) = &self.status {
            if shown_at.elapsed() >= STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        self.status = None;
        match self.screen {
            Screen::Home => self.on_home_key(key),
            Screen::Details(_) => self.on_details_key(key),
        }
    }

    fn on_home_key(&mut self, key: KeyEvent) {
        let articles = self.store.state().articles().to_vec();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => {
                self.selected = 0;
                self.store.dispatch(HomeIntent::Refresh);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < articles.len() {
                    self.selected += 1;
                } else {
                    // Scrolled past the bottom: ask for the next page.
                    self.store.dispatch(HomeIntent::LoadMore);
                }
            }
            KeyCode::Enter => {
                if let Some(article) = articles.get(self.selected) {
                    self.store
                        .dispatch(HomeIntent::ArticleSelected(article.clone()));
                }
            }
            _ => {}
        }
    }

    fn on_details_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => {
                self.screen = Screen::Home;
            }
            _ => {}
        }
    }
}
