#![warn(clippy::unwrap_used)]

//! Filter sources: the components that assemble a logical feed out of the
//! two upstream access modes.
//!
//! A source serves historical backfill through [`FilterSource::fetch_page`]
//! (pull, paged) and judges live entries through [`FilterSource::matches`]
//! (push, one entry at a time). The pull side rides on [`PageCursor`],
//! which maps logical page numbers onto the transport's forward-only page
//! sequences; the push side is pure predicate logic and never touches the
//! network.

mod following;
mod keyword;
mod page_cursor;

pub use following::FollowingSource;
pub use keyword::KeywordSource;
pub use page_cursor::PageCursor;

use async_trait::async_trait;

use flock_api::{ApiError, FeedApi};
use flock_types::{Entry, Status, StatusRange};

pub type Result<T> = std::result::Result<T, SourceError>;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Pages are 1-based; rejected before any cursor state moves.
    #[error("page number must be at least 1, got {0}")]
    InvalidRange(u32),
    /// The listing collaborator failed. The source's cursor is
    /// invalidated so the next fetch restarts instead of serving a page
    /// from a half-advanced sequence.
    #[error(transparent)]
    Upstream(#[from] ApiError),
}

/// A pluggable feed source with pull and push entry points.
///
/// `fetch_page` takes `&mut self`: a source's pagination cursor is
/// unsynchronized state, and exclusive access per instance is the
/// concurrency contract. `matches` is pure and may be called from any
/// number of threads, concurrently with a fetch on the same source.
#[async_trait]
pub trait FilterSource<C>
where
    C: FeedApi,
{
    /// The items belonging to logical page `range.page`; `None` means
    /// "start over from the first page". Deterministic for a fixed
    /// upstream dataset, and cheap for pages requested in increasing
    /// order (one upstream advance per page). Advances this source's
    /// pagination cursor as a side effect.
    async fn fetch_page(&mut self, client: &C, range: Option<&StatusRange>) -> Result<Vec<Status>>;

    /// Whether a single live-stream entry belongs to this source's feed.
    /// Pure; never fetches, never fails.
    fn matches(&self, entry: &Entry) -> bool;

    /// Whether this source's configuration (not its runtime cursor) can
    /// be persisted and later reconstructed identically.
    fn is_serializable(&self) -> bool;
}
