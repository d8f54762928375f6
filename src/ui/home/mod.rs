//! Home screen feature: paginated article list with pull-style refresh
//! and load-more, built on the MVI primitives.

mod effect;
mod intent;
mod model;
mod reducer;
mod state;
mod store;

pub use effect::HomeEffect;
pub use intent::{HomeIntent, HomeTransition};
pub use model::{ArticleUiMapper, ArticleUiModel};
pub use reducer::HomeReducer;
pub use state::HomeState;
pub use store::HomeStore;
