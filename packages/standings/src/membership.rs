//! Membership source boundary.
//!
//! The membership source is the system of record for which teams currently
//! exist (in the reference deployment, chat-platform roles). The standings
//! core only ever sees it as a roster snapshot.

use async_trait::async_trait;

use crate::errors::domain::DomainError;

/// One team as reported by the membership source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamInfo {
    /// Opaque stable handle; never reused across different teams.
    pub team_key: String,
    pub display_name: String,
    pub display_emoji: Option<String>,
}

impl TeamInfo {
    pub fn new(team_key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            team_key: team_key.into(),
            display_name: display_name.into(),
            display_emoji: None,
        }
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.display_emoji = Some(emoji.into());
        self
    }
}

/// Authoritative roster provider.
///
/// Implementations must return a consistent snapshot for the duration of one
/// reconcile/repair call; the services query it exactly once per call.
#[async_trait]
pub trait MembershipSource: Send + Sync {
    async fn list_teams(&self) -> Result<Vec<TeamInfo>, DomainError>;
}

/// A fixed roster; convenient for tests and batch tools.
#[async_trait]
impl MembershipSource for Vec<TeamInfo> {
    async fn list_teams(&self) -> Result<Vec<TeamInfo>, DomainError> {
        Ok(self.clone())
    }
}
