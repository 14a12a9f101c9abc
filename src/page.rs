//! Page document wrapper
//!
//! A `Page` owns the `<body>` children plus the handful of head settings a
//! standalone document needs, and renders the whole
//! `<!DOCTYPE html><html>..</html>` document.

use std::fmt;
use std::path::Path;

use crate::error::{MarkupError, MarkupResult};
use crate::node::{Child, ChildCollection};
use crate::render::{self, RenderConfig};

/// Default `lang` attribute of the `<html>` element.
pub const DEFAULT_LANG: &str = "en";
/// Default `<meta charset>` value.
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// A complete HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    title: String,
    lang: Option<String>,
    charset: Option<String>,
    stylesheets: Vec<String>,
    children: ChildCollection,
}

impl Page {
    /// Create an empty page. The title must be non-empty.
    pub fn new(title: impl Into<String>) -> MarkupResult<Self> {
        Ok(Self {
            title: validate_title(title.into())?,
            lang: Some(DEFAULT_LANG.to_string()),
            charset: Some(DEFAULT_CHARSET.to_string()),
            stylesheets: Vec::new(),
            children: ChildCollection::new(),
        })
    }

    pub fn with_lang(mut self, lang: Option<&str>) -> Self {
        self.lang = lang.map(str::to_string);
        self
    }

    pub fn with_charset(mut self, charset: Option<&str>) -> Self {
        self.charset = charset.map(str::to_string);
        self
    }

    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheets.push(href.into());
        self
    }

    pub fn with_children<I, C>(mut self, children: I) -> MarkupResult<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.children.add(children)?;
        Ok(self)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Settings
    // ─────────────────────────────────────────────────────────────────────────

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> MarkupResult<()> {
        self.title = validate_title(title.into())?;
        Ok(())
    }

    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    pub fn set_lang(&mut self, lang: Option<&str>) {
        self.lang = lang.map(str::to_string);
    }

    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    pub fn set_charset(&mut self, charset: Option<&str>) {
        self.charset = charset.map(str::to_string);
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    pub fn stylesheets_mut(&mut self) -> &mut Vec<String> {
        &mut self.stylesheets
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Body children
    // ─────────────────────────────────────────────────────────────────────────

    pub fn children(&self) -> &ChildCollection {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut ChildCollection {
        &mut self.children
    }

    pub fn add<I, C>(&mut self, children: I) -> MarkupResult<()>
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.children.add(children)
    }

    pub fn set<I, C>(&mut self, children: I) -> MarkupResult<()>
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.children.set(children)
    }

    pub fn insert(&mut self, index: usize, child: impl Into<Child>) -> MarkupResult<()> {
        self.children.insert(index, child)
    }

    pub fn update(&mut self, index: usize, child: impl Into<Child>) -> MarkupResult<Child> {
        self.children.update(index, child)
    }

    pub fn remove(&mut self, index: usize) -> MarkupResult<Child> {
        self.children.remove(index)
    }

    pub fn pop(&mut self, index: Option<usize>) -> MarkupResult<Child> {
        self.children.pop(index)
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Output
    // ─────────────────────────────────────────────────────────────────────────

    pub fn serialize(&self) -> String {
        render::render_page(self, &RenderConfig::COMPACT)
    }

    pub fn prettify(&self, config: &RenderConfig) -> String {
        render::render_page(self, config)
    }

    pub fn persist(&self, path: impl AsRef<Path>) -> MarkupResult<()> {
        self.persist_with(path, &RenderConfig::COMPACT)
    }

    pub fn persist_with(&self, path: impl AsRef<Path>, config: &RenderConfig) -> MarkupResult<()> {
        render::write_file(path.as_ref(), &self.prettify(config))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

fn validate_title(title: String) -> MarkupResult<String> {
    if title.is_empty() {
        return Err(MarkupError::invalid("title must be a non-empty string"));
    }
    Ok(title)
}
