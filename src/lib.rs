pub mod app;
pub mod domain;
pub mod explore;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::error::ServiceError;
pub use app::exchange_service::ExchangeService;
pub use domain::{ExperienceLevel, Skill, SkillRole, User, UserSkill};
pub use explore::{ExploreSession, FavoritesStore, SessionPhase};
