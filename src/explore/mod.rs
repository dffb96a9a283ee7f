//! The client-side half of the application as a library: the explore page's
//! listing engine (filter/sort/paginate over the dashboard payload), the
//! locally persisted favorites store, the login session state machine, and
//! the pre-submit form validation rules.
//!
//! Nothing in this module touches the network or the database; it operates on
//! an already-fetched dashboard payload and local state only.

pub mod engine;
pub mod favorites;
pub mod forms;
pub mod session;

pub use engine::{Candidate, ExploreSession, PageView, RoleFilter, SortKey};
pub use favorites::{Favorite, FavoritesStore};
pub use session::SessionPhase;
