//! Cross-origin policy shared by every HTTP service.
//!
//! A [`CorsPolicy`] is built once from the configured allow-list and handed to
//! the router builder, which turns it into a [`CorsLayer`] covering all routes.

use crate::error::AppError;
use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Wildcard entry in an allow-list.
pub const ALLOW_ALL: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// Every origin is accepted.
    All,
    /// Only these exact origins are accepted.
    List(Vec<HeaderValue>),
}

/// Immutable cross-origin settings.
///
/// Credentials are always allowed and request headers and methods are
/// mirrored back, so the only tunable part is the origin allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicy {
    origins: AllowedOrigins,
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self {
            origins: AllowedOrigins::All,
        }
    }
}

impl CorsPolicy {
    /// Parse a comma-separated allow-list such as
    /// `"https://app.example.com, https://admin.example.com"`.
    ///
    /// Blank entries are ignored. A `*` entry anywhere, or an allow-list with
    /// no entries at all, allows every origin.
    pub fn from_allow_list(raw: &str) -> Result<Self, AppError> {
        let entries: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if entries.is_empty() || entries.contains(&ALLOW_ALL) {
            return Ok(Self::default());
        }

        let origins = entries
            .into_iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| {
                    AppError::ConfigError(anyhow::anyhow!(
                        "Invalid CORS origin '{}': {}",
                        origin,
                        e
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            origins: AllowedOrigins::List(origins),
        })
    }

    pub fn origins(&self) -> &AllowedOrigins {
        &self.origins
    }

    pub fn allows_all(&self) -> bool {
        self.origins == AllowedOrigins::All
    }

    /// Build the tower layer for this policy.
    ///
    /// A literal `*` cannot be combined with credentials, so "allow all"
    /// echoes the caller's `Origin` instead.
    pub fn layer(&self) -> CorsLayer {
        let allow_origin = match &self.origins {
            AllowedOrigins::All => AllowOrigin::mirror_request(),
            AllowedOrigins::List(origins) => AllowOrigin::list(origins.iter().cloned()),
        };

        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_credentials(true)
            .allow_headers(AllowHeaders::mirror_request())
            .allow_methods(AllowMethods::mirror_request())
    }
}
