//! Lazy page sequences over the paged listing collaborators.
//!
//! The upstream endpoints only hand out a "next" continuation token, so a
//! result set is reachable strictly front to back. These adapters wrap
//! that discipline in a [`Stream`] of pages: polling drives one listing
//! call, the returned token feeds the next call, and the terminal token
//! ends the stream. There is no rewind; restarting means calling the
//! factory again for a fresh stream.

use std::pin::Pin;

use futures::Stream;

use flock_types::{ListCursor, Status, User};

use crate::params::{FriendsListParams, SearchParams};
use crate::{ListFriends, Result, SearchStatuses};

/// A forward-only sequence of pages.
pub type PageStream<T> = Pin<Box<dyn Stream<Item = Result<Vec<T>>> + Send>>;

/// The accounts `screen_name` follows, one page of [`User`]s per poll.
///
/// After an upstream error the stream yields the error and ends; callers
/// decide whether to build a fresh stream and retry.
pub fn friends<C>(client: C, screen_name: String) -> PageStream<User>
where
    C: ListFriends + Send + Sync + 'static,
{
    Box::pin(async_stream::stream! {
        let mut cursor = ListCursor::default();
        loop {
            let mut params = FriendsListParams::for_screen_name(screen_name.clone());
            params.cursor = cursor;
            match client.list_friends(params).await {
                Ok(page) => {
                    let done = page.is_last();
                    cursor = page.next_cursor;
                    yield Ok(page.users);
                    if done {
                        tracing::debug!(%screen_name, "friends listing hit the terminal cursor, ending stream");
                        break;
                    }
                }
                Err(e) => {
                    yield Err(e);
                    break;
                }
            }
        }
    })
}

/// Statuses matching `query`, one page per poll.
///
/// The search endpoint is page-number addressed; the adapter walks pages
/// 1, 2, 3, … and treats the first empty page as the end of the result
/// set.
pub fn search<C>(client: C, query: String) -> PageStream<Status>
where
    C: SearchStatuses + Send + Sync + 'static,
{
    Box::pin(async_stream::stream! {
        let mut page = 1u32;
        loop {
            let mut params = SearchParams::query(query.clone());
            params.page = page;
            match client.search_statuses(params).await {
                Ok(statuses) => {
                    if statuses.is_empty() {
                        tracing::debug!(%query, page, "search returned an empty page, ending stream");
                        break;
                    }
                    yield Ok(statuses);
                    page += 1;
                }
                Err(e) => {
                    yield Err(e);
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockFeedClient;
    use flock_types::UserPage;
    use futures::StreamExt;
    use mockall::Sequence;

    #[ctor::ctor]
    fn _setup() {
        crate::test_utils::logger();
    }

    fn user(id: u64, screen_name: &str) -> User {
        User {
            id: id.into(),
            screen_name: screen_name.into(),
            name: screen_name.to_uppercase(),
            status: None,
        }
    }

    fn page(users: Vec<User>, next: i64) -> UserPage {
        UserPage {
            users,
            next_cursor: ListCursor(next),
            previous_cursor: ListCursor::default(),
        }
    }

    #[tokio::test]
    async fn friends_threads_cursor_between_calls() {
        let mut client = MockFeedClient::new();
        let mut seq = Sequence::new();

        client
            .expect_list_friends()
            .withf(|params| params.cursor.is_unset() && params.screen_name.as_deref() == Some("wren"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(page(vec![user(1, "a"), user(2, "b")], 99)));
        client
            .expect_list_friends()
            .withf(|params| params.cursor == ListCursor(99))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(page(vec![user(3, "c")], 0)));

        let mut pages = friends(client, "wren".to_string());

        let first = pages.next().await.expect("first page").expect("no error");
        assert_eq!(first.len(), 2);
        let second = pages.next().await.expect("second page").expect("no error");
        assert_eq!(second.len(), 1);
        assert!(pages.next().await.is_none(), "terminal cursor ends stream");
    }

    #[tokio::test]
    async fn friends_is_lazy() {
        let mut client = MockFeedClient::new();
        client
            .expect_list_friends()
            .times(1)
            .returning(|_| Ok(page(vec![user(1, "a")], 50)));

        // Only one poll -> only one listing call, despite more pages
        // being available.
        let mut pages = friends(client, "wren".to_string());
        let first = pages.next().await.expect("first page").expect("no error");
        assert_eq!(first.len(), 1);
    }

    #[tokio::test]
    async fn friends_yields_error_then_ends() {
        let mut client = MockFeedClient::new();
        client.expect_list_friends().times(1).returning(|_| {
            Err(crate::ApiError::upstream(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "connection reset",
            )))
        });

        let mut pages = friends(client, "wren".to_string());
        assert!(pages.next().await.expect("one item").is_err());
        assert!(pages.next().await.is_none(), "stream ends after an error");
    }

    #[tokio::test]
    async fn search_walks_page_numbers_until_empty() {
        let mut client = MockFeedClient::new();
        client.expect_search_statuses().returning(|params| {
            assert_eq!(params.q, "larks");
            match params.page {
                1 | 2 => Ok(vec![status(params.page as u64)]),
                _ => Ok(vec![]),
            }
        });

        let pages: Vec<_> = search(client, "larks".to_string()).collect().await;
        assert_eq!(pages.len(), 2, "empty third page is not yielded");
    }

    fn status(id: u64) -> Status {
        Status {
            id: id.into(),
            user_id: 1.into(),
            screen_name: "a".into(),
            text: format!("status {id}"),
            created_at: chrono::DateTime::UNIX_EPOCH,
        }
    }
}
