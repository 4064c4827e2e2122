//! Typed request parameters, one struct per endpoint.
//!
//! Each field has a designated sentinel ("not set") value and
//! `query_pairs` emits only the fields away from their sentinel, so a
//! default-valued parameter never reaches the wire. The omission table is
//! spelled out per endpoint in the method body; there is no reflection
//! and no generic parameter bag.
//!
//! Sentinels follow the service's conventions: numeric ids use `0`
//! (never issued), cursors use `0` (first request carries no cursor),
//! `page` uses `1` (the upstream default page). Booleans are emitted in
//! lowercase, which is what `bool::to_string` produces.

use flock_types::{ListCursor, StatusId, UserId};

/// Page size requested from the friends listing endpoint.
pub const FRIENDS_PAGE_SIZE: u32 = 200;

/// Parameters for the friends listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FriendsListParams {
    /// Identity to list for; skipped when `None` (the service then lists
    /// for the authenticated caller).
    pub screen_name: Option<String>,
    /// Alternative numeric identity; skipped at `UserId(0)`.
    pub user_id: UserId,
    /// Continuation token; skipped at `ListCursor(0)`.
    pub cursor: ListCursor,
    /// Requested page size; skipped at `0` (service default applies).
    pub count: u32,
}

impl FriendsListParams {
    /// The parameter set the page-sequence adapter issues: a screen name
    /// and the standard page size, cursor threaded in per request.
    pub fn for_screen_name(screen_name: impl Into<String>) -> Self {
        Self {
            screen_name: Some(screen_name.into()),
            count: FRIENDS_PAGE_SIZE,
            ..Self::default()
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut q = Vec::new();
        if let Some(name) = &self.screen_name {
            q.push(("screen_name", name.clone()));
        }
        if !self.user_id.is_unset() {
            q.push(("user_id", self.user_id.to_string()));
        }
        if !self.cursor.is_unset() {
            q.push(("cursor", self.cursor.to_string()));
        }
        if self.count != 0 {
            q.push(("count", self.count.to_string()));
        }
        q
    }
}

/// Parameters for a user timeline request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTimelineParams {
    /// Skipped when `None`.
    pub screen_name: Option<String>,
    /// Lower status-id bound; skipped at `StatusId(0)`.
    pub since_id: StatusId,
    /// Upper status-id bound; skipped at `StatusId(0)`.
    pub max_id: StatusId,
    /// Skipped at `0`.
    pub count: u32,
    /// Skipped at `1`, the upstream default page.
    pub page: u32,
    /// Always emitted, lowercase.
    pub include_rts: bool,
}

impl Default for UserTimelineParams {
    fn default() -> Self {
        Self {
            screen_name: None,
            since_id: StatusId::default(),
            max_id: StatusId::default(),
            count: 0,
            page: 1,
            include_rts: true,
        }
    }
}

impl UserTimelineParams {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut q = Vec::new();
        if let Some(name) = &self.screen_name {
            q.push(("screen_name", name.clone()));
        }
        if !self.since_id.is_unset() {
            q.push(("since_id", self.since_id.to_string()));
        }
        if !self.max_id.is_unset() {
            q.push(("max_id", self.max_id.to_string()));
        }
        if self.count != 0 {
            q.push(("count", self.count.to_string()));
        }
        if self.page != 1 {
            q.push(("page", self.page.to_string()));
        }
        q.push(("include_rts", self.include_rts.to_string()));
        q
    }
}

/// Parameters for the status search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Always emitted.
    pub q: String,
    /// Skipped when `None`.
    pub lang: Option<String>,
    /// Skipped at `StatusId(0)`.
    pub since_id: StatusId,
    /// Skipped at `StatusId(0)`.
    pub max_id: StatusId,
    /// Results per page; skipped at `0`.
    pub rpp: u32,
    /// Skipped at `1`.
    pub page: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            q: String::new(),
            lang: None,
            since_id: StatusId::default(),
            max_id: StatusId::default(),
            rpp: 0,
            page: 1,
        }
    }
}

impl SearchParams {
    pub fn query(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Self::default()
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("q", self.q.clone())];
        if let Some(lang) = &self.lang {
            pairs.push(("lang", lang.clone()));
        }
        if !self.since_id.is_unset() {
            pairs.push(("since_id", self.since_id.to_string()));
        }
        if !self.max_id.is_unset() {
            pairs.push(("max_id", self.max_id.to_string()));
        }
        if self.rpp != 0 {
            pairs.push(("rpp", self.rpp.to_string()));
        }
        if self.page != 1 {
            pairs.push(("page", self.page.to_string()));
        }
        pairs
    }
}
