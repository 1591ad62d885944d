//! Asset requirement middleware
//!
//! Installs an empty [`RequiredAssets`] in every request so handlers,
//! templates and layouts share one set of requirements per response.
//!
//! # Example
//!
//! ```rust,no_run
//! use acton_assets::config::AssetConfig;
//! use acton_assets::extractors::RequiredAssets;
//! use acton_assets::middleware::AssetMiddleware;
//! use axum::{middleware, routing::get, Router};
//!
//! async fn index(assets: RequiredAssets) -> String {
//!     assets.require_js("htmx");
//!     assets.include_required_js().map(|tags| tags.0).unwrap_or_default()
//! }
//!
//! # fn example() -> Result<(), acton_assets::error::AssetError> {
//! // Default settings
//! let app: Router = Router::new()
//!     .route("/", get(index))
//!     .layer(middleware::from_fn(AssetMiddleware::handle));
//!
//! // Settings from config.toml
//! let config = AssetConfig::load()?;
//! let assets = AssetMiddleware::from_settings(config.assets);
//! let app: Router = Router::new()
//!     .route("/", get(index))
//!     .layer(middleware::from_fn(move |req, next| {
//!         assets.clone().handle_with_config(req, next)
//!     }));
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;

use axum::{extract::Request, middleware::Next, response::Response};

use crate::config::AssetSettings;
use crate::extractors::RequiredAssets;
use crate::template::helpers::{AssetTagHelper, DefaultTagHelper};

/// Middleware that gives each request its own asset requirements
#[derive(Clone)]
pub struct AssetMiddleware {
    helper: Arc<dyn AssetTagHelper>,
}

impl Default for AssetMiddleware {
    fn default() -> Self {
        Self::from_settings(AssetSettings::default())
    }
}

impl fmt::Debug for AssetMiddleware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetMiddleware").finish_non_exhaustive()
    }
}

impl AssetMiddleware {
    /// Create asset middleware with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create asset middleware rendering through [`DefaultTagHelper`]
    #[must_use]
    pub fn from_settings(settings: AssetSettings) -> Self {
        Self::with_helper(Arc::new(DefaultTagHelper::new(settings)))
    }

    /// Create asset middleware rendering through a custom tag helper
    #[must_use]
    pub fn with_helper(helper: Arc<dyn AssetTagHelper>) -> Self {
        Self { helper }
    }

    /// Middleware handler using default settings
    pub async fn handle(request: Request, next: Next) -> Response {
        Self::default().handle_with_config(request, next).await
    }

    /// Middleware handler using this middleware's tag helper
    ///
    /// Any `RequiredAssets` already in the request is replaced, so requirements
    /// never carry over from an outer layer.
    pub async fn handle_with_config(self, mut request: Request, next: Next) -> Response {
        let assets = RequiredAssets::with_helper(self.helper);
        if request.extensions_mut().insert(assets).is_some() {
            tracing::debug!("Replaced existing RequiredAssets in request extensions");
        }
        next.run(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetError;
    use axum::{body::Body, http::StatusCode, middleware, routing::get, Router};
    use tower::ServiceExt;

    struct UpperHelper;

    impl AssetTagHelper for UpperHelper {
        fn javascript_include_tag(&self, sources: &[String]) -> Result<String, AssetError> {
            Ok(sources.join(" ").to_uppercase())
        }

        fn stylesheet_link_tag(&self, sources: &[String]) -> Result<String, AssetError> {
            Ok(sources.join(" ").to_uppercase())
        }
    }

    async fn scripts(assets: RequiredAssets) -> String {
        assets.require_js(["jquery", "effects"]);
        assets.include_required_js().unwrap().0
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_default_middleware_installs_assets() {
        let app = Router::new()
            .route("/", get(scripts))
            .layer(middleware::from_fn(AssetMiddleware::handle));

        let response = app
            .oneshot(axum::http::Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains(r#"src="/javascripts/jquery.js""#));
        assert!(body.contains(r#"src="/javascripts/effects.js""#));
    }

    #[tokio::test]
    async fn test_custom_helper_is_used() {
        let assets = AssetMiddleware::with_helper(Arc::new(UpperHelper));
        let app = Router::new()
            .route("/", get(scripts))
            .layer(middleware::from_fn(move |req, next| {
                assets.clone().handle_with_config(req, next)
            }));

        let response = app
            .oneshot(axum::http::Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(body_string(response).await, "JQUERY EFFECTS");
    }
}
