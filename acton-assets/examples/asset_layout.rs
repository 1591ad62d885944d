//! Layout with per-page script and stylesheet requirements
//!
//! Run with: cargo run --example asset_layout
//! Then visit: http://localhost:3000 and http://localhost:3000/contact

use acton_assets::prelude::*;
use askama::Template;
use axum::{middleware, response::Response, routing::get, Router};

#[derive(Template)]
#[template(
    source = r#"{{ assets.require_css("forms") }}{{ assets.require_js("validation") }}<form>{{ label }}: <input name="q"></form>"#,
    ext = "html"
)]
struct SearchForm {
    assets: RequiredAssets,
    label: String,
}

#[derive(Template)]
#[template(
    source = r#"{{ assets.require_js("htmx") }}<h1>Home</h1>{{ search|safe }}"#,
    ext = "html"
)]
struct HomeView {
    assets: RequiredAssets,
    search: SearchForm,
}

#[derive(Template)]
#[template(
    source = r#"{{ assets.require_js("htmx") }}{{ assets.require_css("contact") }}<h1>Contact</h1>{{ search|safe }}"#,
    ext = "html"
)]
struct ContactView {
    assets: RequiredAssets,
    search: SearchForm,
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html>
<head>
<title>Assets demo</title>
{{ assets.include_required_js()?|safe }}
{{ assets.include_required_css()?|safe }}
</head>
<body>{{ body|safe }}</body>
</html>"#,
    ext = "html"
)]
struct AppLayout {
    assets: RequiredAssets,
    body: SafeString,
}

fn search(assets: &RequiredAssets) -> SearchForm {
    SearchForm {
        assets: assets.clone(),
        label: "Search".to_string(),
    }
}

async fn home(assets: RequiredAssets) -> Response {
    let view = HomeView {
        search: search(&assets),
        assets: assets.clone(),
    };
    view.render_with_layout(|body| AppLayout { assets, body })
}

async fn contact(assets: RequiredAssets) -> Response {
    let view = ContactView {
        search: search(&assets),
        assets: assets.clone(),
    };
    view.render_with_layout(|body| AppLayout { assets, body })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init()?;

    let config = AssetConfig::load()?;
    let assets = AssetMiddleware::from_settings(config.assets);

    let app = Router::new()
        .route("/", get(home))
        .route("/contact", get(contact))
        .layer(middleware::from_fn(move |req, next| {
            assets.clone().handle_with_config(req, next)
        }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    tracing::info!("Listening on http://127.0.0.1:3000");
    axum::serve(listener, app).await?;

    Ok(())
}
