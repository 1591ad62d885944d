//! acton-assets: request-scoped JavaScript and stylesheet requirements
//!
//! Any view or partial can require the scripts and stylesheets it needs. The
//! layout emits each asset exactly once in its `<head>`, in the order it was
//! first required, however many templates asked for it.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use acton_assets::prelude::*;
//! use askama::Template;
//! use axum::response::Response;
//!
//! #[derive(Template)]
//! #[template(source = r#"{{ assets.require_js("htmx") }}<h1>Home</h1>"#, ext = "html")]
//! struct HomeView {
//!     assets: RequiredAssets,
//! }
//!
//! #[derive(Template)]
//! #[template(
//!     source = "<html><head>{{ assets.include_required_js()?|safe }}</head><body>{{ body|safe }}</body></html>",
//!     ext = "html"
//! )]
//! struct AppLayout {
//!     assets: RequiredAssets,
//!     body: SafeString,
//! }
//!
//! async fn index(assets: RequiredAssets) -> Response {
//!     let view = HomeView { assets: assets.clone() };
//!     view.render_with_layout(|body| AppLayout { assets, body })
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     observability::init()?;
//!
//!     let config = AssetConfig::load()?;
//!     let assets = AssetMiddleware::from_settings(config.assets);
//!
//!     let app = axum::Router::new()
//!         .route("/", axum::routing::get(index))
//!         .layer(axum::middleware::from_fn(move |req, next| {
//!             assets.clone().handle_with_config(req, next)
//!         }));
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

// Lint configuration is handled at the workspace level in Cargo.toml

pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod observability;
pub mod requirements;
pub mod template;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! # Examples
    //!
    //! ```rust
    //! use acton_assets::prelude::*;
    //! ```

    pub use crate::config::{AssetConfig, AssetSettings};
    pub use crate::error::AssetError;
    pub use crate::extractors::RequiredAssets;
    pub use crate::middleware::AssetMiddleware;
    pub use crate::observability;
    pub use crate::requirements::{AssetKind, AssetRequirements, IntoAssetNames};
    pub use crate::template::{
        render_in_layout, AssetLayout, AssetTagHelper, DefaultTagHelper, SafeString,
    };
}
