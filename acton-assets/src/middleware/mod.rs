//! Middleware layers for acton-assets
//!
//! Provides middleware for:
//! - Asset requirements (fresh [`RequiredAssets`](crate::extractors::RequiredAssets) per request)

pub mod assets;

pub use assets::AssetMiddleware;
