//! Plain data types shared by the service, the HTTP layer and the explore engine.

pub mod dashboard;
pub mod skill;
pub mod user;

pub use dashboard::{Dashboard, ExploreRow, SkillListingRow, UserSkillSummary};
pub use skill::{ExperienceLevel, Skill, SkillRole, UserSkill};
pub use user::{User, UserRecord};
