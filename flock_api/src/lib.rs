#![warn(clippy::unwrap_used)]

//! Collaborator contracts for the feed core: the paged listing client
//! traits, typed endpoint parameters, and the lazy page sequences the
//! filter sources consume. Nothing in this crate performs network I/O
//! itself; transport lives behind the traits.

pub mod endpoints;
pub mod pages;
pub mod params;
pub mod traits;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use pages::PageStream;
pub use traits::*;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The injected transport client failed (network, decode, or
    /// authorization upstream). The concrete error type is erased; the
    /// caller only needs the failure, not the transport.
    #[error("upstream fetch failed: {0}")]
    Upstream(Box<dyn std::error::Error + Send + Sync>),
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Erases a transport client error (which may be Http, Grpc, or
    /// anything else the collaborator uses).
    pub fn upstream(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        ApiError::Upstream(Box::new(e))
    }
}
