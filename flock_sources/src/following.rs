//! Latest statuses of the accounts an identity follows.

use async_trait::async_trait;

use flock_api::{FeedApi, pages};
use flock_types::{Entry, Status, StatusRange, User};

use crate::{FilterSource, PageCursor, Result};

/// Pull-only backfill source over the friends listing.
///
/// Each page of followed accounts is projected to the accounts' latest
/// statuses, order preserved; accounts that have never posted contribute
/// nothing. `matches` is always `false`: this source serves historical
/// pages only and admits nothing from the live stream.
pub struct FollowingSource {
    screen_name: Option<String>,
    cursor: PageCursor<User>,
}

impl FollowingSource {
    /// Follows of the authenticated caller.
    pub fn new() -> Self {
        Self {
            screen_name: None,
            cursor: PageCursor::new(),
        }
    }

    /// Follows of an explicit account. The identity is fixed for the
    /// lifetime of the source, so a live cursor never changes identity
    /// under itself.
    pub fn for_screen_name(screen_name: impl Into<String>) -> Self {
        Self {
            screen_name: Some(screen_name.into()),
            cursor: PageCursor::new(),
        }
    }
}

impl Default for FollowingSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<C> FilterSource<C> for FollowingSource
where
    C: FeedApi + Clone + 'static,
{
    async fn fetch_page(&mut self, client: &C, range: Option<&StatusRange>) -> Result<Vec<Status>> {
        let screen_name = self
            .screen_name
            .clone()
            .unwrap_or_else(|| client.account().screen_name.clone());
        let users = self
            .cursor
            .fetch_page(range, || pages::friends(client.clone(), screen_name))
            .await?;
        Ok(users.into_iter().filter_map(|user| user.status).collect())
    }

    fn matches(&self, _entry: &Entry) -> bool {
        false
    }

    fn is_serializable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::DateTime;
    use flock_api::mock::MockFeedClient;
    use flock_types::{Account, ListCursor, StatusId, UserId, UserPage};

    use super::*;

    #[ctor::ctor]
    fn _setup() {
        flock_api::test_utils::logger();
    }

    fn status(id: u64, text: &str) -> Status {
        Status {
            id: StatusId(id * 100),
            user_id: UserId(id),
            screen_name: format!("user{id}"),
            text: text.to_string(),
            created_at: DateTime::UNIX_EPOCH,
        }
    }

    fn user(id: u64, latest: Option<Status>) -> User {
        User {
            id: UserId(id),
            screen_name: format!("user{id}"),
            name: format!("User {id}"),
            status: latest,
        }
    }

    fn single_page(users: Vec<User>) -> UserPage {
        UserPage {
            users,
            next_cursor: ListCursor::END,
            previous_cursor: ListCursor::default(),
        }
    }

    #[tokio::test]
    async fn uses_the_configured_screen_name() {
        let mut client = MockFeedClient::new();
        client
            .expect_list_friends()
            .withf(|params| params.screen_name.as_deref() == Some("wren"))
            .times(1)
            .returning(|_| Ok(single_page(vec![user(1, Some(status(1, "hello")))])));

        let client = Arc::new(client);
        let mut source = FollowingSource::for_screen_name("wren");
        let statuses = source
            .fetch_page(&client, Some(&StatusRange::new(1)))
            .await
            .expect("page fetch");
        assert_eq!(statuses.len(), 1);
    }

    #[tokio::test]
    async fn falls_back_to_the_callers_own_account() {
        let mut client = MockFeedClient::new();
        client
            .expect_account()
            .return_const(Account::new(UserId(7), "own_account"));
        client
            .expect_list_friends()
            .withf(|params| params.screen_name.as_deref() == Some("own_account"))
            .times(1)
            .returning(|_| Ok(single_page(vec![])));

        let client = Arc::new(client);
        let mut source = FollowingSource::new();
        let statuses = source
            .fetch_page(&client, Some(&StatusRange::new(1)))
            .await
            .expect("page fetch");
        assert!(statuses.is_empty());
    }

    #[tokio::test]
    async fn projects_pages_to_latest_statuses_in_order() {
        let mut client = MockFeedClient::new();
        client.expect_list_friends().times(1).returning(|_| {
            Ok(single_page(vec![
                user(1, Some(status(1, "first"))),
                user(2, None),
                user(3, Some(status(3, "third"))),
            ]))
        });

        let client = Arc::new(client);
        let mut source = FollowingSource::for_screen_name("wren");
        let statuses = source
            .fetch_page(&client, Some(&StatusRange::new(1)))
            .await
            .expect("page fetch");

        let texts: Vec<_> = statuses.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "third"], "silent accounts are skipped");
    }

    #[tokio::test]
    async fn matches_nothing_regardless_of_fetch_activity() {
        let mut client = MockFeedClient::new();
        client
            .expect_list_friends()
            .returning(|_| Ok(single_page(vec![user(1, Some(status(1, "hello")))])));

        let client = Arc::new(client);
        let mut source = FollowingSource::for_screen_name("wren");

        let fresh_entry = Entry::Status(status(9, "streamed"));
        assert!(!FilterSource::<Arc<MockFeedClient>>::matches(
            &source,
            &fresh_entry
        ));

        source
            .fetch_page(&client, Some(&StatusRange::new(1)))
            .await
            .expect("page fetch");
        assert!(
            !FilterSource::<Arc<MockFeedClient>>::matches(&source, &fresh_entry),
            "fetching changes nothing"
        );
        assert!(!FilterSource::<Arc<MockFeedClient>>::matches(
            &source,
            &Entry::Deleted {
                id: StatusId(900),
                user_id: UserId(9),
            }
        ));
    }

    #[test]
    fn not_serializable() {
        let source = FollowingSource::new();
        assert!(!FilterSource::<Arc<MockFeedClient>>::is_serializable(
            &source
        ));
    }
}
