//! Per-render asset requirements
//!
//! Views and partials call [`AssetRequirements::require_js`] and
//! [`AssetRequirements::require_css`] as they render. The layout then calls
//! [`AssetRequirements::include_required_js`] and
//! [`AssetRequirements::include_required_css`] once, in its `<head>`, to emit
//! one tag per distinct asset.
//!
//! Each identifier appears at most once per set and keeps the position of its
//! first registration. Identifiers are compared byte-for-byte, so `"Site"` and
//! `"site"` are two different assets.
//!
//! # Examples
//!
//! ```rust
//! use acton_assets::requirements::AssetRequirements;
//! use acton_assets::template::helpers::DefaultTagHelper;
//!
//! let mut assets = AssetRequirements::new();
//! assets.require_js("jquery");
//! assets.require_js(["jquery", "effects", "validation"]);
//!
//! assert_eq!(
//!     assets.required_js(),
//!     Some(&["jquery".to_string(), "effects".to_string(), "validation".to_string()][..])
//! );
//!
//! let html = assets.include_required_js(&DefaultTagHelper::default()).unwrap();
//! assert_eq!(html.matches("<script").count(), 3);
//!
//! // Nothing was required, so the layout gets an empty string
//! assert_eq!(assets.include_required_css(&DefaultTagHelper::default()).unwrap(), "");
//! ```

use std::fmt;

use crate::error::AssetError;
use crate::template::helpers::AssetTagHelper;

/// The two kinds of asset a template can require
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// JavaScript, emitted as `<script>` tags
    Script,
    /// CSS, emitted as `<link rel="Stylesheet">` tags
    Style,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Script => f.write_str("javascript"),
            Self::Style => f.write_str("stylesheet"),
        }
    }
}

/// Ordered, duplicate-free list of asset identifiers
///
/// Asset counts per page are small, so membership is a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementSet {
    names: Vec<String>,
}

impl RequirementSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Append `name` unless it is already present
    ///
    /// Returns `true` if the name was added.
    pub fn insert(&mut self, name: String) -> bool {
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Check whether `name` has been required
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    /// Identifiers in first-registration order
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// Number of distinct identifiers
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate identifiers in first-registration order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }
}

impl<'a> IntoIterator for &'a RequirementSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Values accepted by the `require_*` helpers
///
/// A single name or any list of displayable values. An empty list is allowed
/// and registers nothing.
pub trait IntoAssetNames {
    /// Convert into owned identifiers, preserving order
    fn into_asset_names(self) -> Vec<String>;
}

impl IntoAssetNames for &str {
    fn into_asset_names(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoAssetNames for String {
    fn into_asset_names(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoAssetNames for &String {
    fn into_asset_names(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl IntoAssetNames for char {
    fn into_asset_names(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl<T: fmt::Display, const N: usize> IntoAssetNames for [T; N] {
    fn into_asset_names(self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

impl<T: fmt::Display, const N: usize> IntoAssetNames for &[T; N] {
    fn into_asset_names(self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

impl<T: fmt::Display> IntoAssetNames for &[T] {
    fn into_asset_names(self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

impl<T: fmt::Display> IntoAssetNames for Vec<T> {
    fn into_asset_names(self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

/// Script and stylesheet requirements for one render
///
/// Both sets stay `None` until the first `require_*` call for their kind.
/// The value is meant to live exactly as long as the request being rendered;
/// see [`crate::extractors::RequiredAssets`] for the request-scoped handle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetRequirements {
    scripts: Option<RequirementSet>,
    styles: Option<RequirementSet>,
}

impl AssetRequirements {
    /// Create requirements with nothing registered
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scripts: None,
            styles: None,
        }
    }

    /// Require one or more JavaScript assets
    ///
    /// Names already required keep their original position. Returns the
    /// current list of required scripts.
    pub fn require_js(&mut self, names: impl IntoAssetNames) -> &[String] {
        Self::require(&mut self.scripts, AssetKind::Script, names)
    }

    /// Require one or more stylesheets
    ///
    /// Same rules as [`Self::require_js`], against an independent set.
    pub fn require_css(&mut self, names: impl IntoAssetNames) -> &[String] {
        Self::require(&mut self.styles, AssetKind::Style, names)
    }

    /// Required scripts, or `None` if `require_js` was never called
    #[must_use]
    pub fn required_js(&self) -> Option<&[String]> {
        self.scripts.as_ref().map(RequirementSet::as_slice)
    }

    /// Required stylesheets, or `None` if `require_css` was never called
    #[must_use]
    pub fn required_css(&self) -> Option<&[String]> {
        self.styles.as_ref().map(RequirementSet::as_slice)
    }

    /// Render `<script>` tags for every required script
    ///
    /// Returns an empty string if `require_js` was never called. Otherwise the
    /// helper's output is returned as-is, including any error it raises.
    pub fn include_required_js<H>(&self, helper: &H) -> Result<String, AssetError>
    where
        H: AssetTagHelper + ?Sized,
    {
        let Some(scripts) = &self.scripts else {
            return Ok(String::new());
        };
        tracing::debug!(count = scripts.len(), "Including required javascript");
        helper.javascript_include_tag(scripts.as_slice())
    }

    /// Render stylesheet `<link>` tags for every required stylesheet
    ///
    /// Returns an empty string if `require_css` was never called.
    pub fn include_required_css<H>(&self, helper: &H) -> Result<String, AssetError>
    where
        H: AssetTagHelper + ?Sized,
    {
        let Some(styles) = &self.styles else {
            return Ok(String::new());
        };
        tracing::debug!(count = styles.len(), "Including required stylesheets");
        helper.stylesheet_link_tag(styles.as_slice())
    }

    fn require(
        slot: &mut Option<RequirementSet>,
        kind: AssetKind,
        names: impl IntoAssetNames,
    ) -> &[String] {
        let set = slot.get_or_insert_with(RequirementSet::new);
        for name in names.into_asset_names() {
            if set.insert(name) {
                if let Some(added) = set.as_slice().last() {
                    tracing::trace!(%kind, asset = %added, "Asset required");
                }
            } else {
                tracing::trace!(%kind, "Asset already required");
            }
        }
        set.as_slice()
    }
}
