//! Tag generation helpers for required assets
//!
//! [`AssetTagHelper`] is the seam between the requirement registry and
//! whatever turns an asset name into markup. The registry hands over the
//! ordered list of names and returns the helper's output untouched.
//!
//! [`DefaultTagHelper`] resolves names against [`AssetSettings`]:
//!
//! ```rust
//! use acton_assets::template::helpers::{AssetTagHelper, DefaultTagHelper};
//!
//! let helper = DefaultTagHelper::default();
//! let html = helper.javascript_include_tag(&["this".to_string()]).unwrap();
//! assert_eq!(
//!     html,
//!     r#"<script src="/javascripts/this.js" type="text/javascript"></script>"#
//! );
//! ```

use std::path::Path;

use crate::config::AssetSettings;
use crate::error::AssetError;
use crate::requirements::AssetKind;

/// Turns asset names into the tags that load them
///
/// Implementations receive names in first-registration order and must emit
/// one element per name. An empty slice should produce an empty string.
pub trait AssetTagHelper: Send + Sync {
    /// Generate one `<script>` element per source
    fn javascript_include_tag(&self, sources: &[String]) -> Result<String, AssetError>;

    /// Generate one stylesheet `<link>` element per source
    fn stylesheet_link_tag(&self, sources: &[String]) -> Result<String, AssetError>;
}

/// Path-based tag helper
///
/// - `jquery` becomes `/javascripts/jquery.js`
/// - `/vendor/app.js` keeps its path
/// - `https://cdn.example.com/x.js` and `//cdn.example.com/x.js` are used verbatim
/// - `asset_host` and `asset_version` apply to every non-URL source
#[derive(Debug, Clone, Default)]
pub struct DefaultTagHelper {
    settings: AssetSettings,
}

impl DefaultTagHelper {
    /// Create a helper from asset settings
    #[must_use]
    pub const fn new(settings: AssetSettings) -> Self {
        Self { settings }
    }

    /// Settings this helper resolves paths against
    #[must_use]
    pub const fn settings(&self) -> &AssetSettings {
        &self.settings
    }

    /// Resolve an asset name to the URL placed in its tag
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acton_assets::config::AssetSettings;
    /// use acton_assets::requirements::AssetKind;
    /// use acton_assets::template::helpers::DefaultTagHelper;
    ///
    /// let helper = DefaultTagHelper::new(AssetSettings {
    ///     asset_version: Some("42".to_string()),
    ///     ..AssetSettings::default()
    /// });
    /// let path = helper.asset_path(AssetKind::Style, "site").unwrap();
    /// assert_eq!(path, "/stylesheets/site.css?v=42");
    /// ```
    pub fn asset_path(&self, kind: AssetKind, source: &str) -> Result<String, AssetError> {
        if source.trim().is_empty() {
            return Err(AssetError::BlankSource { kind });
        }

        if is_full_url(source) {
            return Ok(source.to_string());
        }

        let (dir, extension) = match kind {
            AssetKind::Script => (&self.settings.javascripts_dir, "js"),
            AssetKind::Style => (&self.settings.stylesheets_dir, "css"),
        };

        // Query and fragment stay out of the extension check
        let (location, suffix) = source
            .find(['?', '#'])
            .map_or((source, ""), |at| source.split_at(at));
        let (query, fragment) = suffix
            .find('#')
            .map_or((suffix, ""), |at| suffix.split_at(at));

        let mut path = if location.starts_with('/') {
            location.to_string()
        } else {
            format!("{}/{location}", dir.trim_end_matches('/'))
        };

        if Path::new(&path).extension().is_none() {
            path.push('.');
            path.push_str(extension);
        }

        path.push_str(query);
        if let Some(version) = &self.settings.asset_version {
            path.push(if query.is_empty() { '?' } else { '&' });
            path.push_str("v=");
            path.push_str(version);
        }
        path.push_str(fragment);

        if let Some(host) = &self.settings.asset_host {
            path.insert_str(0, host.trim_end_matches('/'));
        }

        Ok(path)
    }
}

impl AssetTagHelper for DefaultTagHelper {
    fn javascript_include_tag(&self, sources: &[String]) -> Result<String, AssetError> {
        let tags = sources
            .iter()
            .map(|source| -> Result<String, AssetError> {
                let src = escape_attr(&self.asset_path(AssetKind::Script, source)?)?;
                Ok(format!(
                    r#"<script src="{src}" type="text/javascript"></script>"#
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tags.join("\n"))
    }

    fn stylesheet_link_tag(&self, sources: &[String]) -> Result<String, AssetError> {
        let media = escape_attr(&self.settings.stylesheet_media)?;
        let tags = sources
            .iter()
            .map(|source| -> Result<String, AssetError> {
                let href = escape_attr(&self.asset_path(AssetKind::Style, source)?)?;
                Ok(format!(
                    r#"<link href="{href}" media="{media}" rel="Stylesheet" type="text/css"/>"#
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tags.join("\n"))
    }
}

/// `scheme://...` or protocol-relative `//...`
fn is_full_url(source: &str) -> bool {
    if source.starts_with("//") {
        return true;
    }
    source.split_once("://").is_some_and(|(scheme, _)| {
        let mut chars = scheme.chars();
        chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

fn escape_attr(value: &str) -> Result<String, AssetError> {
    Ok(askama::filters::escape(askama::Html, value)?.to_string())
}

// =============================================================================
// HTML Safe Output
// =============================================================================

/// HTML-safe string wrapper
///
/// Marks a string as safe for direct HTML output (already escaped).
/// Layouts print it with `|safe` so generated tags are not double-escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafeString(pub String);

impl SafeString {
    /// Create a new `SafeString`
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Check whether there is nothing to output
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the markup
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SafeString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SafeString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SafeString {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_javascript_include_tag() {
        let html = DefaultTagHelper::default()
            .javascript_include_tag(&names(&["jquery", "effects", "validation"]))
            .unwrap();

        assert_eq!(
            html,
            "<script src=\"/javascripts/jquery.js\" type=\"text/javascript\"></script>\n\
             <script src=\"/javascripts/effects.js\" type=\"text/javascript\"></script>\n\
             <script src=\"/javascripts/validation.js\" type=\"text/javascript\"></script>"
        );
    }

    #[test]
    fn test_stylesheet_link_tag() {
        let html = DefaultTagHelper::default()
            .stylesheet_link_tag(&names(&["style", "ie-specific"]))
            .unwrap();

        assert_eq!(
            html,
            "<link href=\"/stylesheets/style.css\" media=\"all\" rel=\"Stylesheet\" type=\"text/css\"/>\n\
             <link href=\"/stylesheets/ie-specific.css\" media=\"all\" rel=\"Stylesheet\" type=\"text/css\"/>"
        );
    }

    #[test]
    fn test_no_sources_render_nothing() {
        let helper = DefaultTagHelper::default();
        assert_eq!(helper.javascript_include_tag(&[]).unwrap(), "");
        assert_eq!(helper.stylesheet_link_tag(&[]).unwrap(), "");
    }

    #[test]
    fn test_asset_path_keeps_existing_extension() {
        let helper = DefaultTagHelper::default();
        assert_eq!(
            helper.asset_path(AssetKind::Script, "jquery.min.js").unwrap(),
            "/javascripts/jquery.min.js"
        );
        assert_eq!(
            helper.asset_path(AssetKind::Style, "print.css").unwrap(),
            "/stylesheets/print.css"
        );
    }

    #[test]
    fn test_asset_path_absolute_and_url() {
        let helper = DefaultTagHelper::default();
        assert_eq!(
            helper.asset_path(AssetKind::Script, "/vendor/app").unwrap(),
            "/vendor/app.js"
        );
        assert_eq!(
            helper
                .asset_path(AssetKind::Script, "https://cdn.example.com/htmx.js")
                .unwrap(),
            "https://cdn.example.com/htmx.js"
        );
    }

    #[test]
    fn test_asset_path_subdirectory() {
        let helper = DefaultTagHelper::default();
        assert_eq!(
            helper.asset_path(AssetKind::Style, "admin/forms").unwrap(),
            "/stylesheets/admin/forms.css"
        );
    }

    #[test]
    fn test_asset_path_host_and_version() {
        let helper = DefaultTagHelper::new(AssetSettings {
            asset_host: Some("https://static.example.com/".to_string()),
            asset_version: Some("abc".to_string()),
            ..AssetSettings::default()
        });

        assert_eq!(
            helper.asset_path(AssetKind::Script, "app").unwrap(),
            "https://static.example.com/javascripts/app.js?v=abc"
        );
        assert_eq!(
            helper.asset_path(AssetKind::Script, "app.js?debug=1").unwrap(),
            "https://static.example.com/javascripts/app.js?debug=1&v=abc"
        );
        // Full URLs are left alone
        assert_eq!(
            helper
                .asset_path(AssetKind::Script, "https://cdn.example.com/x.js")
                .unwrap(),
            "https://cdn.example.com/x.js"
        );
    }

    #[test]
    fn test_asset_path_query_and_fragment() {
        let helper = DefaultTagHelper::new(AssetSettings {
            asset_version: Some("7".to_string()),
            ..AssetSettings::default()
        });

        assert_eq!(
            helper.asset_path(AssetKind::Script, "app?x=1").unwrap(),
            "/javascripts/app.js?x=1&v=7"
        );
        assert_eq!(
            helper.asset_path(AssetKind::Style, "site#print").unwrap(),
            "/stylesheets/site.css?v=7#print"
        );
        assert_eq!(
            helper.asset_path(AssetKind::Style, "site?a=b#top").unwrap(),
            "/stylesheets/site.css?a=b&v=7#top"
        );
    }

    #[test]
    fn test_url_in_query_is_not_a_full_url() {
        let helper = DefaultTagHelper::new(AssetSettings {
            asset_host: Some("https://static.example.com".to_string()),
            asset_version: Some("7".to_string()),
            ..AssetSettings::default()
        });

        assert_eq!(
            helper
                .asset_path(AssetKind::Script, "app.js?next=https://x.test")
                .unwrap(),
            "https://static.example.com/javascripts/app.js?next=https://x.test&v=7"
        );
    }

    #[test]
    fn test_protocol_relative_url_is_verbatim() {
        let helper = DefaultTagHelper::new(AssetSettings {
            asset_host: Some("https://static.example.com".to_string()),
            asset_version: Some("7".to_string()),
            ..AssetSettings::default()
        });

        assert_eq!(
            helper.asset_path(AssetKind::Script, "//cdn.test/x.js").unwrap(),
            "//cdn.test/x.js"
        );
        assert_eq!(
            helper
                .asset_path(AssetKind::Style, "git+ssh://mirror/site.css")
                .unwrap(),
            "git+ssh://mirror/site.css"
        );
    }

    #[test]
    fn test_full_url_detection() {
        assert!(is_full_url("https://cdn.example.com/x.js"));
        assert!(is_full_url("//cdn.example.com/x.js"));
        assert!(!is_full_url("app.js?next=https://x.test"));
        assert!(!is_full_url("://missing-scheme.js"));
        assert!(!is_full_url("/javascripts/app.js"));
    }

    #[test]
    fn test_custom_directories_and_media() {
        let helper = DefaultTagHelper::new(AssetSettings {
            javascripts_dir: "/static/js/".to_string(),
            stylesheets_dir: "/static/css".to_string(),
            stylesheet_media: "screen".to_string(),
            ..AssetSettings::default()
        });

        let js = helper.javascript_include_tag(&names(&["app"])).unwrap();
        assert!(js.contains(r#"src="/static/js/app.js""#));

        let css = helper.stylesheet_link_tag(&names(&["app"])).unwrap();
        assert!(css.contains(r#"href="/static/css/app.css""#));
        assert!(css.contains(r#"media="screen""#));
    }

    #[test]
    fn test_blank_source_is_rejected() {
        let helper = DefaultTagHelper::default();
        let result = helper.stylesheet_link_tag(&names(&["ok", "  "]));
        assert!(matches!(
            result,
            Err(AssetError::BlankSource {
                kind: AssetKind::Style
            })
        ));
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let helper = DefaultTagHelper::default();
        let html = helper
            .javascript_include_tag(&names(&[r#"x"><script>alert(1)</script>"#]))
            .unwrap();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&quot;&gt;"));
    }

    #[test]
    fn test_safe_string() {
        let safe = SafeString::new("<p>Hello</p>");
        assert_eq!(format!("{safe}"), "<p>Hello</p>");
        assert!(!safe.is_empty());
        assert!(SafeString::default().is_empty());
    }

    #[test]
    fn test_safe_string_from() {
        let safe: SafeString = "test".into();
        assert_eq!(safe.as_str(), "test");
    }
}
