//! Shared test utilities: data generators and scripted sources.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::sync::atomic::AtomicUsize;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{watch, Notify};

use newsdeck::cache::{CacheError, CacheSource};
use newsdeck::domain::{Article, NewsRepository, WireArticleMapper};
use newsdeck::error::FetchError;
use newsdeck::mapper::Mapper;
use newsdeck::paging::Page;
use newsdeck::remote::{ArticleWire, RemoteError, RemoteSource, SourceWire};
use newsdeck::ui::home::HomeState;

pub const TEST_SOURCE_NAME: &str = "Test Source";

pub fn wire_article(n: usize) -> ArticleWire {
    ArticleWire {
        source: Some(SourceWire {
            id: Some("test-source".to_string()),
            name: Some(TEST_SOURCE_NAME.to_string()),
        }),
        author: Some(format!("Author {}", n)),
        title: Some(format!("Headline {}", n)),
        description: Some(format!("Description {}", n)),
        url: Some(format!("https://example.com/article-{}", n)),
        url_to_image: Some(format!("https://example.com/article-{}.jpg", n)),
        published_at: Some("2024-01-01T00:00:00Z".to_string()),
        content: Some(format!("Content {}", n)),
    }
}

pub fn wire_page(count: usize, total: u32, page: u32) -> Page<ArticleWire> {
    let items = (0..count).map(wire_article).collect();
    Page::new(items, total, page)
}

/// Wire page with item numbering offset, so two pages carry distinct urls.
pub fn wire_page_from(start: usize, count: usize, total: u32, page: u32) -> Page<ArticleWire> {
    let items = (start..start + count).map(wire_article).collect();
    Page::new(items, total, page)
}

pub fn article_page(count: usize, total: u32, page: u32) -> Page<Article> {
    let wire = wire_page(count, total, page);
    Page::new(WireArticleMapper.map_all(wire.items), total, page)
}

pub fn article_page_from(start: usize, count: usize, total: u32, page: u32) -> Page<Article> {
    let wire = wire_page_from(start, count, total, page);
    Page::new(WireArticleMapper.map_all(wire.items), total, page)
}

pub fn remote_err() -> RemoteError {
    RemoteError::Api {
        code: "networkDown".to_string(),
        message: "connection refused".to_string(),
    }
}

pub fn missing_snapshot_err() -> CacheError {
    CacheError::Missing {
        path: PathBuf::from("/test/snapshot.json"),
    }
}

/// Remote source that replays a scripted queue of outcomes.
pub struct ScriptedRemote {
    responses: Mutex<VecDeque<Result<Page<ArticleWire>, RemoteError>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedRemote {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn push_ok(self, page: Page<ArticleWire>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(page));
        self
    }

    pub fn push_err(self) -> Self {
        self.responses.lock().unwrap().push_back(Err(remote_err()));
        self
    }

    /// Handle to the call counter, usable after the source is boxed.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl RemoteSource for ScriptedRemote {
    async fn fetch_page(&self, _page: u32) -> Result<Page<ArticleWire>, RemoteError> {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(RemoteError::Status { status: 599 }))
    }
}

/// Cache source backed by an in-memory snapshot.
pub struct ScriptedCache {
    snapshot: Option<Page<ArticleWire>>,
    stored: Arc<Mutex<Vec<Page<ArticleWire>>>>,
    fail_store: bool,
}

impl ScriptedCache {
    pub fn empty() -> Self {
        Self {
            snapshot: None,
            stored: Arc::new(Mutex::new(Vec::new())),
            fail_store: false,
        }
    }

    pub fn with_snapshot(snapshot: Page<ArticleWire>) -> Self {
        Self {
            snapshot: Some(snapshot),
            stored: Arc::new(Mutex::new(Vec::new())),
            fail_store: false,
        }
    }

    pub fn failing_store(mut self) -> Self {
        self.fail_store = true;
        self
    }

    /// Handle to the store log, usable after the cache is boxed.
    pub fn store_log(&self) -> Arc<Mutex<Vec<Page<ArticleWire>>>> {
        Arc::clone(&self.stored)
    }
}

#[async_trait]
impl CacheSource for ScriptedCache {
    async fn fetch_cached(&self) -> Result<Page<ArticleWire>, CacheError> {
        self.snapshot.clone().ok_or_else(missing_snapshot_err)
    }

    async fn store(&self, page: &Page<ArticleWire>) -> Result<(), CacheError> {
        if self.fail_store {
            return Err(CacheError::Write {
                path: PathBuf::from("/test/snapshot.json"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.stored.lock().unwrap().push(page.clone());
        Ok(())
    }
}

/// Repository that serves scripted outcomes per page, optionally gated
/// so tests can observe the in-flight state.
pub struct ScriptedRepository {
    pages: Mutex<HashMap<u32, VecDeque<Result<Page<Article>, FetchError>>>>,
    calls: Arc<Mutex<Vec<u32>>>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedRepository {
    pub fn new() -> Self {
        Self {
            pages: Mutex::new(HashMap::new()),
            calls: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    pub fn with_page(self, page: u32, result: Result<Page<Article>, FetchError>) -> Self {
        self.pages
            .lock()
            .unwrap()
            .entry(page)
            .or_default()
            .push_back(result);
        self
    }

    /// Make every fetch wait until the gate is notified.
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    pub fn gate(&self) -> Arc<Notify> {
        Arc::clone(self.gate.as_ref().expect("repository is not gated"))
    }

    pub fn call_log(&self) -> Arc<Mutex<Vec<u32>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl NewsRepository for ScriptedRepository {
    async fn fetch_page(&self, page: u32) -> Result<Page<Article>, FetchError> {
        self.calls.lock().unwrap().push(page);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.pages
            .lock()
            .unwrap()
            .get_mut(&page)
            .and_then(|queue| queue.pop_front())
            .unwrap_or(Err(FetchError::Cache(missing_snapshot_err())))
    }
}

/// Await until the state stream satisfies the predicate, or panic after
/// a generous timeout.
pub async fn wait_for_state(
    rx: &mut watch::Receiver<HomeState>,
    pred: impl Fn(&HomeState) -> bool,
) -> HomeState {
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            {
                let state = rx.borrow_and_update();
                if pred(&state) {
                    return state.clone();
                }
            }
            rx.changed().await.expect("store stopped unexpectedly");
        }
    })
    .await
    .expect("timed out waiting for state")
}
