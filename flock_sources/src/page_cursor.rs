//! Resumable pagination over a forward-only page sequence.

use flock_api::PageStream;
use futures::StreamExt;

use flock_types::StatusRange;

use crate::{Result, SourceError};

/// Maps logical page numbers onto a forward-only [`PageStream`].
///
/// The transport hands out pages strictly front to back, one per poll.
/// The cursor keeps the live stream and the page it is positioned on, so
/// in-order consumption costs one poll per page. Anything the stream
/// cannot reach by advancing (page 1, a lower page, an unstarted or
/// exhausted cursor) is served by discarding the stream and building a
/// fresh one.
pub struct PageCursor<T> {
    state: State<T>,
}

enum State<T> {
    /// No live stream: never started, explicitly reset, or invalidated by
    /// a failed fetch.
    Unstarted,
    /// A live stream advanced through `page`, that page's batch held.
    Positioned {
        page: u32,
        current: Vec<T>,
        stream: PageStream<T>,
    },
    /// The stream ended before a requested page. Only a restart moves on.
    Exhausted,
}

impl<T> PageCursor<T> {
    pub fn new() -> Self {
        Self {
            state: State::Unstarted,
        }
    }

    /// The page this cursor is positioned on, `0` when it holds none.
    pub fn current_page(&self) -> u32 {
        match &self.state {
            State::Positioned { page, .. } => *page,
            State::Unstarted | State::Exhausted => 0,
        }
    }

    /// Drops any live stream; the next fetch starts from the beginning.
    pub fn reset(&mut self) {
        self.state = State::Unstarted;
    }
}

impl<T> Default for PageCursor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> PageCursor<T> {
    /// The batch belonging to logical page `range.page`; `None` selects
    /// page 1 and always starts over.
    ///
    /// `restart` is invoked only when the requested page cannot be reached
    /// by advancing the live stream: no stream yet, an explicit start-over
    /// request, page 1, or a page below the current position. Requesting
    /// the current page again returns the held batch without polling.
    ///
    /// A stream error propagates and leaves the cursor `Unstarted`, never
    /// half-advanced. A stream that ends before the requested page yields
    /// an empty batch and parks the cursor in `Exhausted`.
    pub async fn fetch_page<F>(&mut self, range: Option<&StatusRange>, restart: F) -> Result<Vec<T>>
    where
        F: FnOnce() -> PageStream<T>,
    {
        let requested = match range {
            Some(r) if r.page < 1 => return Err(SourceError::InvalidRange(r.page)),
            Some(r) => r.page,
            None => 1,
        };

        // State is taken out of `self` up front so every early return
        // below leaves the cursor `Unstarted`.
        let (mut page, mut current, mut stream) =
            match std::mem::replace(&mut self.state, State::Unstarted) {
                State::Positioned {
                    page,
                    current,
                    stream,
                } if range.is_some() && requested != 1 && requested >= page => {
                    (page, current, stream)
                }
                _ => {
                    tracing::debug!(requested, "starting page sequence from the beginning");
                    (0, Vec::new(), restart())
                }
            };

        while page < requested {
            match stream.next().await {
                Some(Ok(batch)) => {
                    page += 1;
                    current = batch;
                }
                Some(Err(e)) => {
                    tracing::warn!(page, requested, "page sequence failed, invalidating cursor");
                    return Err(e.into());
                }
                None => {
                    tracing::debug!(page, requested, "page sequence ended before requested page");
                    self.state = State::Exhausted;
                    return Ok(Vec::new());
                }
            }
        }

        let batch = current.clone();
        self.state = State::Positioned {
            page,
            current,
            stream,
        };
        Ok(batch)
    }
}
