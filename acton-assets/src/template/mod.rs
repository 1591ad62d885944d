//! Askama integration for required assets
//!
//! A layout's `<head>` comes before its body in the output, but the body is
//! where views and partials call `require_js`/`require_css`. Views therefore
//! render first, and the layout renders afterwards with the finished body
//! and the complete requirements.
//!
//! # Examples
//!
//! ```rust
//! use askama::Template;
//! use acton_assets::extractors::RequiredAssets;
//! use acton_assets::template::{render_in_layout, helpers::SafeString};
//!
//! #[derive(Template)]
//! #[template(source = r#"{{ assets.require_js("jquery") }}<p>{{ title }}</p>"#, ext = "html")]
//! struct PostsView {
//!     assets: RequiredAssets,
//!     title: String,
//! }
//!
//! #[derive(Template)]
//! #[template(
//!     source = "<head>{{ assets.include_required_js()?|safe }}</head><body>{{ body|safe }}</body>",
//!     ext = "html"
//! )]
//! struct AppLayout {
//!     assets: RequiredAssets,
//!     body: SafeString,
//! }
//!
//! let assets = RequiredAssets::new();
//! let view = PostsView { assets: assets.clone(), title: "Posts".to_string() };
//! let html = render_in_layout(&view, |body| AppLayout { assets, body }).unwrap();
//! assert!(html.starts_with(r#"<head><script src="/javascripts/jquery.js""#));
//! ```

use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::error::AssetError;

pub mod helpers;

pub use helpers::{AssetTagHelper, DefaultTagHelper, SafeString};

/// Render `view`, then render the layout built from its output
///
/// # Errors
///
/// Returns [`AssetError::Render`] if either template fails, including errors
/// raised by a tag helper inside the layout.
pub fn render_in_layout<V, L, F>(view: &V, layout: F) -> Result<String, AssetError>
where
    V: Template,
    L: Template,
    F: FnOnce(SafeString) -> L,
{
    let body = view.render()?;
    Ok(layout(SafeString(body)).render()?)
}

/// Extension trait for rendering askama views inside an asset-aware layout
pub trait AssetLayout: Template {
    /// Render inside a layout as an HTML response
    ///
    /// Rendering failures are logged and become
    /// `500 Template rendering failed`.
    fn render_with_layout<L, F>(self, layout: F) -> Response
    where
        Self: Sized,
        L: Template,
        F: FnOnce(SafeString) -> L,
    {
        match render_in_layout(&self, layout) {
            Ok(html) => Html(html).into_response(),
            Err(err) => err.into_response(),
        }
    }
}

// Blanket implementation for all Askama templates
impl<T> AssetLayout for T where T: Template {}
