//! User lookup port.
//!
//! Used only to validate requester/owner identity; the user catalog itself
//! lives outside this core.

use crate::domain::foundation::{DomainError, UserId};
use async_trait::async_trait;

/// Existence check against the user catalog.
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Returns true if the user exists.
    async fn exists(&self, user_id: &UserId) -> Result<bool, DomainError>;
}
