use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A skill in the shared directory. Created lazily the first time any user
/// declares it (get-or-create by name); rows are never deleted independently.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Skill {
    pub skill_id: i32,
    pub skill_name: String,
    pub description: Option<String>,
}

/// One user↔skill association row.
///
/// At most one row exists per (user, skill) pair; the flags are independent,
/// so a row may hold both `can_teach` and `can_learn`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct UserSkill {
    pub id: i32,
    pub user_id: i32,
    pub skill_id: i32,
    pub can_teach: bool,
    pub can_learn: bool,
    pub experience_level: Option<String>,
}

/// The role a declaration or edit expresses. Declares are additive (the other
/// flag on an existing row is left alone); edits rewrite the row to exactly
/// the requested role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SkillRole {
    Teach,
    Learn,
}

impl std::str::FromStr for SkillRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Teach" => Ok(SkillRole::Teach),
            "Learn" => Ok(SkillRole::Learn),
            other => Err(format!("unknown skill role '{}'", other)),
        }
    }
}

/// Self-reported proficiency attached to an association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Expert,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Expert => "Expert",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_exact_labels_only() {
        assert_eq!("Teach".parse::<SkillRole>().unwrap(), SkillRole::Teach);
        assert_eq!("Learn".parse::<SkillRole>().unwrap(), SkillRole::Learn);
        assert!("teach".parse::<SkillRole>().is_err());
        assert!("Other".parse::<SkillRole>().is_err());
    }
}
