//! Axum extractors for acton-assets
//!
//! Provides the request-scoped [`RequiredAssets`] handle that views, partials
//! and layouts share while one response is rendered.

mod assets;

pub use assets::RequiredAssets;
