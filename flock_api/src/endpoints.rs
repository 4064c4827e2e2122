//! Request URL construction for transport implementations.
//!
//! The core never fetches these URLs itself; they exist so every client
//! implementation derives its addresses from the same parameter structs
//! and elision rules instead of re-encoding queries by hand. The service
//! base URL is part of client configuration and passed in.

use url::Url;

use crate::Result;
use crate::params::{FriendsListParams, SearchParams, UserTimelineParams};

fn build(base: &Url, path: &str, pairs: &[(&'static str, String)]) -> Result<Url> {
    let mut url = base.join(path)?;
    if !pairs.is_empty() {
        let mut query = url.query_pairs_mut();
        for (name, value) in pairs {
            query.append_pair(name, value);
        }
    }
    Ok(url)
}

pub fn friends_list(base: &Url, params: &FriendsListParams) -> Result<Url> {
    build(base, "friends/list.json", &params.query_pairs())
}

pub fn user_timeline(base: &Url, params: &UserTimelineParams) -> Result<Url> {
    build(base, "statuses/user_timeline.json", &params.query_pairs())
}

pub fn search(base: &Url, params: &SearchParams) -> Result<Url> {
    build(base, "search.json", &params.query_pairs())
}
