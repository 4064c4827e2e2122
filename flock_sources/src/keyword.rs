//! Search-backed source with live push matching.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use flock_api::{FeedApi, pages};
use flock_types::{Entry, Status, StatusRange};

use crate::{FilterSource, PageCursor, Result};

/// Feed of statuses containing a search query.
///
/// Both halves of the contract are live: backfill pages come from the
/// search endpoint, and pushed statuses are admitted by a pure text test
/// against the same query. The configuration is just the query string, so
/// the source round-trips through serde; the runtime cursor is rebuilt
/// from scratch on deserialization.
#[derive(Serialize, Deserialize)]
pub struct KeywordSource {
    query: String,
    #[serde(skip)]
    cursor: PageCursor<Status>,
}

impl KeywordSource {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            cursor: PageCursor::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

#[async_trait]
impl<C> FilterSource<C> for KeywordSource
where
    C: FeedApi + Clone + 'static,
{
    async fn fetch_page(&mut self, client: &C, range: Option<&StatusRange>) -> Result<Vec<Status>> {
        let query = self.query.clone();
        self.cursor
            .fetch_page(range, || pages::search(client.clone(), query))
            .await
    }

    fn matches(&self, entry: &Entry) -> bool {
        entry.status().is_some_and(|status| {
            status
                .text
                .to_lowercase()
                .contains(&self.query.to_lowercase())
        })
    }

    fn is_serializable(&self) -> bool {
        true
    }
}
