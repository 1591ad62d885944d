//! Request-scoped asset requirements
//!
//! [`RequiredAssets`] lives in the request extensions. Every extraction during
//! one request returns a handle to the same requirements, and the requirements
//! are dropped with the request. Concurrent requests never see each other's
//! assets.

use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};
use parking_lot::Mutex;

use crate::error::AssetError;
use crate::requirements::{AssetRequirements, IntoAssetNames};
use crate::template::helpers::{AssetTagHelper, DefaultTagHelper, SafeString};

/// Extractor and template handle for the current request's assets
///
/// Methods take `&self` so askama templates can call them while rendering:
///
/// ```text
/// {# views/posts/index.html #}
/// {{ assets.require_js("jquery") }}
/// {{ assets.require_css(["posts", "forms"]) }}
///
/// {# layouts/app.html #}
/// <head>
///   {{ assets.include_required_js()?|safe }}
///   {{ assets.include_required_css()?|safe }}
/// </head>
/// ```
///
/// # Example
///
/// ```rust
/// use acton_assets::extractors::RequiredAssets;
///
/// async fn handler(assets: RequiredAssets) -> String {
///     assets.require_js("htmx");
///     assets.include_required_js().map(|tags| tags.0).unwrap_or_default()
/// }
/// ```
#[derive(Clone)]
pub struct RequiredAssets {
    requirements: Arc<Mutex<AssetRequirements>>,
    helper: Arc<dyn AssetTagHelper>,
}

impl Default for RequiredAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RequiredAssets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequiredAssets")
            .field("requirements", &*self.requirements.lock())
            .finish_non_exhaustive()
    }
}

impl RequiredAssets {
    /// Create empty requirements rendered by [`DefaultTagHelper`]
    #[must_use]
    pub fn new() -> Self {
        Self::with_helper(Arc::new(DefaultTagHelper::default()))
    }

    /// Create empty requirements rendered by a custom tag helper
    #[must_use]
    pub fn with_helper(helper: Arc<dyn AssetTagHelper>) -> Self {
        Self {
            requirements: Arc::new(Mutex::new(AssetRequirements::new())),
            helper,
        }
    }

    /// Require one or more JavaScript assets
    ///
    /// Returns an empty string so the call can sit inside `{{ }}` in a
    /// template without printing anything.
    pub fn require_js(&self, names: impl IntoAssetNames) -> &'static str {
        self.requirements.lock().require_js(names);
        ""
    }

    /// Require one or more stylesheets
    ///
    /// Returns an empty string, like [`Self::require_js`].
    pub fn require_css(&self, names: impl IntoAssetNames) -> &'static str {
        self.requirements.lock().require_css(names);
        ""
    }

    /// Render the `<script>` tags for this request
    ///
    /// Empty if nothing called `require_js`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the tag helper raises.
    pub fn include_required_js(&self) -> Result<SafeString, AssetError> {
        // Helpers may call back into this handle, so render from a copy
        self.snapshot()
            .include_required_js(self.helper.as_ref())
            .map(SafeString)
    }

    /// Render the stylesheet `<link>` tags for this request
    ///
    /// Empty if nothing called `require_css`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the tag helper raises.
    pub fn include_required_css(&self) -> Result<SafeString, AssetError> {
        // Helpers may call back into this handle, so render from a copy
        self.snapshot()
            .include_required_css(self.helper.as_ref())
            .map(SafeString)
    }

    /// Copy of the requirements registered so far
    #[must_use]
    pub fn snapshot(&self) -> AssetRequirements {
        self.requirements.lock().clone()
    }
}

impl<S> FromRequestParts<S> for RequiredAssets
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(assets) = parts.extensions.get::<Self>() {
            return Ok(assets.clone());
        }

        // No AssetMiddleware on this route; keep one handle for the rest of the request
        tracing::warn!(
            path = %parts.uri.path(),
            "RequiredAssets extracted without AssetMiddleware, using default tag helper"
        );
        let assets = Self::new();
        parts.extensions.insert(assets.clone());
        Ok(assets)
    }
}
