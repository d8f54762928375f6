//! Pure reducer transitions for the home screen.

mod common;

use newsdeck::mapper::Mapper;
use newsdeck::paging::Page;
use newsdeck::ui::home::{ArticleUiMapper, ArticleUiModel, HomeReducer, HomeState, HomeTransition};
use newsdeck::ui::mvi::Reducer;

fn ui_page(count: usize, total: u32, page: u32) -> Page<ArticleUiModel> {
    let articles = common::article_page(count, total, page);
    Page::new(ArticleUiMapper.map_all(articles.items), total, page)
}

fn ui_page_from(start: usize, count: usize, total: u32, page: u32) -> Page<ArticleUiModel> {
    let articles = common::article_page_from(start, count, total, page);
    Page::new(ArticleUiMapper.map_all(articles.items), total, page)
}

#[test]
fn initial_state_is_idle() {
    assert_eq!(HomeState::default(), HomeState::Idle);
}

#[test]
fn loading_transition_enters_loading() {
    let state = HomeReducer::reduce(HomeState::Idle, HomeTransition::Loading);
    assert_eq!(state, HomeState::Loading);
}

#[test]
fn loaded_page_replaces_state_and_derives_title() {
    let state = HomeReducer::reduce(
        HomeState::Loading,
        HomeTransition::Loaded {
            page: ui_page(6, 6, 1),
            append: false,
        },
    );

    match state {
        HomeState::Success { page, title } => {
            assert_eq!(page.len(), 6);
            assert_eq!(page.current_page, 1);
            assert_eq!(title, common::TEST_SOURCE_NAME);
        }
        other => panic!("expected Success, got {:?}", other),
    }
}

#[test]
fn empty_first_page_yields_empty() {
    let state = HomeReducer::reduce(
        HomeState::Loading,
        HomeTransition::Loaded {
            page: ui_page(0, 0, 1),
            append: false,
        },
    );
    assert_eq!(state, HomeState::Empty);
}

#[test]
fn append_extends_items_and_takes_latest_metadata() {
    let first = HomeReducer::reduce(
        HomeState::Loading,
        HomeTransition::Loaded {
            page: ui_page(6, 12, 1),
            append: false,
        },
    );

    let state = HomeReducer::reduce(
        first,
        HomeTransition::Loaded {
            page: ui_page_from(6, 6, 12, 2),
            append: true,
        },
    );

    match state {
        HomeState::Success { page, title } => {
            assert_eq!(page.len(), 12);
            assert_eq!(page.current_page, 2);
            assert_eq!(page.total, 12);
            // The title stays derived from the very first item.
            assert_eq!(title, common::TEST_SOURCE_NAME);
        }
        other => panic!("expected Success, got {:?}", other),
    }
}

#[test]
fn append_of_empty_page_keeps_accumulated_success() {
    let first = HomeReducer::reduce(
        HomeState::Loading,
        HomeTransition::Loaded {
            page: ui_page(6, 6, 1),
            append: false,
        },
    );

    let state = HomeReducer::reduce(
        first,
        HomeTransition::Loaded {
            page: ui_page(0, 6, 2),
            append: true,
        },
    );

    match state {
        HomeState::Success { page, .. } => {
            assert_eq!(page.len(), 6);
            assert_eq!(page.current_page, 2);
        }
        other => panic!("expected Success, got {:?}", other),
    }
}

#[test]
fn append_without_prior_success_behaves_like_replace() {
    let state = HomeReducer::reduce(
        HomeState::Loading,
        HomeTransition::Loaded {
            page: ui_page(3, 3, 2),
            append: true,
        },
    );

    match state {
        HomeState::Success { page, .. } => assert_eq!(page.len(), 3),
        other => panic!("expected Success, got {:?}", other),
    }
}

#[test]
fn replacing_load_resets_accumulation() {
    let first = HomeReducer::reduce(
        HomeState::Loading,
        HomeTransition::Loaded {
            page: ui_page(6, 6, 1),
            append: false,
        },
    );
    let second = HomeReducer::reduce(
        first,
        HomeTransition::Loaded {
            page: ui_page(2, 2, 1),
            append: false,
        },
    );

    match second {
        HomeState::Success { page, .. } => assert_eq!(page.len(), 2),
        other => panic!("expected Success, got {:?}", other),
    }
}
