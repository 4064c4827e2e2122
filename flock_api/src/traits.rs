//! Client traits the feed core consumes.
//!
//! Transport implementations (HTTP, in-process fakes, …) implement these;
//! the sources only ever see the trait surface. [`FeedApi`] aggregates
//! them for convenience, mirroring how callers hold one client object.

use std::sync::Arc;

use async_trait::async_trait;

use flock_types::{Account, Status, UserPage};

use crate::Result;
use crate::params::{FriendsListParams, SearchParams};

/// Paged listing of the accounts an identity follows.
#[async_trait]
pub trait ListFriends {
    /// One page of followed accounts plus the continuation token for the
    /// next page. The cursor in `params` selects the page; an unset
    /// cursor means the first page.
    async fn list_friends(&self, params: FriendsListParams) -> Result<UserPage>;
}

/// Page-number addressed status search.
#[async_trait]
pub trait SearchStatuses {
    /// One page of statuses matching the query. An empty page means the
    /// result set is exhausted.
    async fn search_statuses(&self, params: SearchParams) -> Result<Vec<Status>>;
}

/// Identity resolution for the caller's own account. Pure accessor, no
/// I/O; clients resolve this once at login.
pub trait OwnAccount {
    fn account(&self) -> &Account;
}

/// Feed Api Super Trait
/// Implements all collaborator traits for convenience.
pub trait FeedApi
where
    Self: ListFriends + SearchStatuses + OwnAccount + Send + Sync,
{
}
impl<T> FeedApi for T where T: ListFriends + SearchStatuses + OwnAccount + Send + Sync + ?Sized {}

#[async_trait]
impl<T> ListFriends for Arc<T>
where
    T: ListFriends + Send + Sync + ?Sized,
{
    async fn list_friends(&self, params: FriendsListParams) -> Result<UserPage> {
        (**self).list_friends(params).await
    }
}

#[async_trait]
impl<T> SearchStatuses for Arc<T>
where
    T: SearchStatuses + Send + Sync + ?Sized,
{
    async fn search_statuses(&self, params: SearchParams) -> Result<Vec<Status>> {
        (**self).search_statuses(params).await
    }
}

impl<T> OwnAccount for Arc<T>
where
    T: OwnAccount + ?Sized,
{
    fn account(&self) -> &Account {
        (**self).account()
    }
}
