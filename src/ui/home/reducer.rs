use crate::paging::Page;
use crate::ui::home::intent::HomeTransition;
use crate::ui::home::state::HomeState;
use crate::ui::mvi::Reducer;

pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeState;
    type Intent = HomeTransition;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HomeTransition::Loading => HomeState::Loading,
            HomeTransition::Loaded { page, append } => match state {
                HomeState::Success {
                    page: accumulated,
                    title,
                } if append => {
                    // Append keeps the existing title and accumulated
                    // items; paging metadata moves to the latest page.
                    let mut items = accumulated.items;
                    items.extend(page.items);
                    HomeState::Success {
                        page: Page::new(items, page.total, page.current_page),
                        title,
                    }
                }
                _ => {
                    if page.is_empty() {
                        HomeState::Empty
                    } else {
                        let title = page
                            .items
                            .first()
                            .map(|a| a.source_name.clone())
                            .unwrap_or_default();
                        HomeState::Success { page, title }
                    }
                }
            },
        }
    }
}
