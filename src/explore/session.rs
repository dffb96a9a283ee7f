//! Login session state machine.
//!
//! Navigation policy is decoupled from fetch logic: server responses drive
//! transitions between explicit states, and each state maps to the page the
//! client should show next.

/// Where the viewer is in the login flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    /// Logged in but has not declared any skills yet; the client routes to
    /// the add-skills page first.
    AuthenticatedNoSkills { user_id: i32 },
    AuthenticatedWithSkills { user_id: i32 },
}

impl SessionPhase {
    /// Transition on a successful login response (`user_id` + `hasSkills`).
    pub fn after_login(user_id: i32, has_skills: bool) -> Self {
        if has_skills {
            SessionPhase::AuthenticatedWithSkills { user_id }
        } else {
            SessionPhase::AuthenticatedNoSkills { user_id }
        }
    }

    /// Transition once the user has declared their first skill. Anonymous
    /// sessions stay anonymous.
    pub fn after_skills_added(self) -> Self {
        match self {
            SessionPhase::AuthenticatedNoSkills { user_id } => {
                SessionPhase::AuthenticatedWithSkills { user_id }
            }
            other => other,
        }
    }

    pub fn logout(self) -> Self {
        SessionPhase::Anonymous
    }

    pub fn user_id(&self) -> Option<i32> {
        match self {
            SessionPhase::Anonymous => None,
            SessionPhase::AuthenticatedNoSkills { user_id }
            | SessionPhase::AuthenticatedWithSkills { user_id } => Some(*user_id),
        }
    }

    /// The page each state routes to (the original site's file names).
    pub fn redirect_target(&self) -> &'static str {
        match self {
            SessionPhase::Anonymous => "index.html",
            SessionPhase::AuthenticatedNoSkills { .. } => "addskills.html",
            SessionPhase::AuthenticatedWithSkills { .. } => "explore.html",
        }
    }
}
