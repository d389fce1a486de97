//! ListOwnRequestsHandler - Query handler for the requester's view.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::request::{ParticipationRequest, RequestError};
use crate::ports::{RequestStore, UserLookup};

/// Query for all requests a user has created, any status.
#[derive(Debug, Clone)]
pub struct ListOwnRequestsQuery {
    pub requester_id: UserId,
}

/// Handler returning a user's own participation requests.
///
/// Unpaginated: the result is bounded by the user's own activity.
pub struct ListOwnRequestsHandler {
    store: Arc<dyn RequestStore>,
    users: Arc<dyn UserLookup>,
}

impl ListOwnRequestsHandler {
    pub fn new(store: Arc<dyn RequestStore>, users: Arc<dyn UserLookup>) -> Self {
        Self { store, users }
    }

    pub async fn handle(
        &self,
        query: ListOwnRequestsQuery,
    ) -> Result<Vec<ParticipationRequest>, RequestError> {
        if !self.users.exists(&query.requester_id).await? {
            return Err(RequestError::user_not_found(query.requester_id));
        }
        Ok(self.store.find_by_requester(&query.requester_id).await?)
    }
}
