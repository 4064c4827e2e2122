//! Typed identifiers handed out by the upstream service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric account identifier.
///
/// The service never issues id `0`, so it doubles as the "absent" sentinel
/// in request parameters (see `flock_api::params`).
#[derive(
    Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl UserId {
    pub fn is_unset(&self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        UserId(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Numeric status identifier. Same sentinel convention as [`UserId`].
#[derive(
    Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StatusId(pub u64);

impl StatusId {
    pub fn is_unset(&self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for StatusId {
    fn from(id: u64) -> Self {
        StatusId(id)
    }
}

impl fmt::Display for StatusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque forward-only continuation token from the paged listing endpoints.
///
/// `0` plays a double role on the wire: in a request it means "start from
/// the beginning" (and is elided from the query entirely), in a response it
/// means "no further pages". There is no way to rewind a cursor; going
/// backwards means re-issuing the initial request.
#[derive(
    Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ListCursor(pub i64);

impl ListCursor {
    /// The terminal token: no further pages.
    pub const END: ListCursor = ListCursor(0);

    pub fn is_end(&self) -> bool {
        self.0 == 0
    }

    /// Alias of [`is_end`](Self::is_end) for the request side, where `0`
    /// reads as "cursor not set yet".
    pub fn is_unset(&self) -> bool {
        self.0 == 0
    }
}

impl From<i64> for ListCursor {
    fn from(c: i64) -> Self {
        ListCursor(c)
    }
}

impl fmt::Display for ListCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_ids_are_unset() {
        assert!(UserId::default().is_unset());
        assert!(StatusId::default().is_unset());
        assert!(!UserId(42).is_unset());
    }

    #[test]
    fn cursor_end_sentinel() {
        assert!(ListCursor::END.is_end());
        assert!(ListCursor::default().is_unset());
        assert!(!ListCursor(1474213).is_end());
    }

    #[test]
    fn ids_serialize_as_bare_numbers() {
        assert_eq!(serde_json::to_string(&UserId(42)).expect("serialize"), "42");
        let id: StatusId = serde_json::from_str("7").expect("deserialize");
        assert_eq!(id, StatusId(7));
    }
}
