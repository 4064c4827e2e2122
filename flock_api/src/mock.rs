//! Shared mock client for tests across the workspace.
//!
//! Enable with the `test-utils` feature; downstream crates drive the
//! expectations and wrap the mock in an [`Arc`](std::sync::Arc) wherever
//! a cloneable client is required.

use async_trait::async_trait;

use flock_types::{Account, Status, UserPage};

use crate::Result;
use crate::params::{FriendsListParams, SearchParams};
use crate::traits::{ListFriends, OwnAccount, SearchStatuses};

mockall::mock! {
    pub FeedClient {}

    #[async_trait]
    impl ListFriends for FeedClient {
        async fn list_friends(&self, params: FriendsListParams) -> Result<UserPage>;
    }

    #[async_trait]
    impl SearchStatuses for FeedClient {
        async fn search_statuses(&self, params: SearchParams) -> Result<Vec<Status>>;
    }

    impl OwnAccount for FeedClient {
        fn account(&self) -> &Account;
    }
}
