//! Markup rendering
//!
//! Renders elements, children and pages to strings. Compact output is the
//! canonical serialized form; the indenting pass behind the `pretty`
//! feature only adds line breaks and leading whitespace between nodes.

use std::path::Path;

use crate::attr::AttributeMap;
use crate::error::MarkupResult;
use crate::node::{Child, ChildCollection, Element};
use crate::page::Page;

// =============================================================================
// RenderConfig
// =============================================================================

/// Configuration for markup rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Put nested elements on their own indented lines.
    pub pretty: bool,
    /// Spaces per nesting level when `pretty` is set.
    pub indent: usize,
}

impl RenderConfig {
    /// Compact config, identical to `serialize()`.
    pub const COMPACT: Self = Self {
        pretty: false,
        indent: 0,
    };

    /// Indented config with two spaces per level.
    pub const PRETTY: Self = Self {
        pretty: true,
        indent: 2,
    };

    /// Indented config with `indent` spaces per level.
    pub fn pretty(indent: usize) -> Self {
        Self {
            pretty: true,
            indent,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::COMPACT
    }
}

#[cfg(feature = "pretty")]
fn effective(config: &RenderConfig) -> &RenderConfig {
    config
}

#[cfg(not(feature = "pretty"))]
fn effective(config: &RenderConfig) -> &RenderConfig {
    if config.pretty {
        tracing::trace!("`pretty` feature disabled, falling back to compact output");
        &RenderConfig::COMPACT
    } else {
        config
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Render an element in compact form.
pub fn render_element(elem: &Element) -> String {
    render_element_with(elem, &RenderConfig::COMPACT)
}

/// Render an element with the given config.
pub fn render_element_with(elem: &Element, config: &RenderConfig) -> String {
    let mut renderer = Renderer::new(effective(config));
    renderer.element(elem);
    renderer.finish()
}

/// Render a single child in compact form.
pub fn render_child(child: &Child) -> String {
    let mut renderer = Renderer::new(&RenderConfig::COMPACT);
    renderer.child(child);
    renderer.finish()
}

/// Render every child of a collection in compact form, concatenated.
pub fn render_children(children: &ChildCollection) -> String {
    let mut renderer = Renderer::new(&RenderConfig::COMPACT);
    for child in children {
        renderer.child(child);
    }
    renderer.finish()
}

/// Render a full page document.
pub fn render_page(page: &Page, config: &RenderConfig) -> String {
    let mut renderer = Renderer::new(effective(config));
    renderer.page(page);
    renderer.finish()
}

/// Write rendered markup to `path`, replacing existing content.
pub(crate) fn write_file(path: &Path, contents: &str) -> MarkupResult<()> {
    match std::fs::write(path, contents) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), bytes = contents.len(), "persisted markup");
            Ok(())
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to persist markup");
            Err(err.into())
        }
    }
}

// =============================================================================
// Renderer
// =============================================================================

struct Renderer<'a> {
    config: &'a RenderConfig,
    output: String,
    depth: usize,
}

impl<'a> Renderer<'a> {
    fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            output: String::new(),
            depth: 0,
        }
    }

    fn finish(self) -> String {
        self.output
    }

    /// Start a new line at the current depth (pretty mode only).
    fn line(&mut self) {
        if !self.config.pretty {
            return;
        }
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        let width = self.depth * self.config.indent;
        self.output.extend(std::iter::repeat_n(' ', width));
    }

    fn open_tag(&mut self, tag: &str, attrs: &str) {
        self.output.push('<');
        self.output.push_str(tag);
        if !attrs.is_empty() {
            self.output.push(' ');
            self.output.push_str(attrs);
        }
        self.output.push('>');
    }

    fn close_tag(&mut self, tag: &str) {
        self.output.push_str("</");
        self.output.push_str(tag);
        self.output.push('>');
    }

    fn child(&mut self, child: &Child) {
        match child {
            Child::Text(text) => self.output.push_str(text),
            Child::Element(elem) => self.element(elem),
        }
    }

    fn element(&mut self, elem: &Element) {
        self.open_tag(elem.tag(), &elem.attributes().serialize());
        if elem.is_void() {
            return;
        }
        self.contents(elem.children());
        self.close_tag(elem.tag());
    }

    /// Children between an open and close tag. Text-only content stays on
    /// the tag's line.
    fn contents(&mut self, children: &ChildCollection) {
        if !self.config.pretty || children.iter().all(Child::is_text) {
            for child in children {
                self.child(child);
            }
            return;
        }
        self.depth += 1;
        for child in children {
            self.line();
            self.child(child);
        }
        self.depth -= 1;
        self.line();
    }

    fn page(&mut self, page: &Page) {
        self.output.push_str("<!DOCTYPE html>");

        let mut html_attrs = AttributeMap::new();
        if let Some(lang) = page.lang() {
            html_attrs.insert("lang", lang);
        }
        self.line();
        self.open_tag("html", &html_attrs.serialize());
        self.depth += 1;

        // ─────────────────────────────────────────────────────────────────────
        // head
        // ─────────────────────────────────────────────────────────────────────
        self.line();
        self.open_tag("head", "");
        self.depth += 1;
        if let Some(charset) = page.charset() {
            self.line();
            self.open_tag("meta", &AttributeMap::new().with("charset", charset).serialize());
        }
        self.line();
        self.open_tag("title", "");
        self.output.push_str(page.title());
        self.close_tag("title");
        for href in page.stylesheets() {
            let attrs = AttributeMap::new()
                .with("rel", "stylesheet")
                .with("href", href.as_str());
            self.line();
            self.open_tag("link", &attrs.serialize());
        }
        self.depth -= 1;
        self.line();
        self.close_tag("head");

        // ─────────────────────────────────────────────────────────────────────
        // body
        // ─────────────────────────────────────────────────────────────────────
        self.line();
        self.open_tag("body", "");
        self.contents(page.children());
        self.close_tag("body");

        self.depth -= 1;
        self.line();
        self.close_tag("html");
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn nested() -> Element {
        Element::new("div")
            .with_attr("id", "main")
            .with_children([
                Child::from(Element::new("p").with_child("Hi").unwrap()),
                Child::from(Element::new("br")),
                Child::from(Element::new("span")),
            ])
            .unwrap()
    }

    #[test]
    fn test_compact_matches_serialize() {
        let elem = nested();
        assert_eq!(
            render_element(&elem),
            "<div id='main'><p>Hi</p><br><span></span></div>"
        );
        assert_eq!(render_element_with(&elem, &RenderConfig::default()), elem.serialize());
    }

    #[test]
    fn test_render_children_concatenates() {
        let elem = nested();
        assert_eq!(render_children(elem.children()), "<p>Hi</p><br><span></span>");
        assert_eq!(render_child(&Child::from("raw <b>")), "raw <b>");
    }

    #[test]
    fn test_config_constants() {
        assert!(!RenderConfig::COMPACT.pretty);
        assert!(RenderConfig::PRETTY.pretty);
        assert_eq!(RenderConfig::PRETTY.indent, 2);
        assert_eq!(RenderConfig::pretty(4).indent, 4);
    }

    #[cfg(feature = "pretty")]
    #[test]
    fn test_pretty_indents_nested_elements() {
        let elem = nested();
        assert_eq!(
            elem.prettify(&RenderConfig::PRETTY),
            "<div id='main'>\n  <p>Hi</p>\n  <br>\n  <span></span>\n</div>"
        );
        let outer = Element::new("section").with_child(elem).unwrap();
        assert_eq!(
            outer.prettify(&RenderConfig::pretty(1)),
            "<section>\n <div id='main'>\n  <p>Hi</p>\n  <br>\n  <span></span>\n </div>\n</section>"
        );
    }

    #[cfg(feature = "pretty")]
    #[test]
    fn test_pretty_keeps_text_inline() {
        let p = Element::new("p").with_children(["a", "b"]).unwrap();
        assert_eq!(p.prettify_default(), "<p>ab</p>");
        assert_eq!(Element::new("br").prettify_default(), "<br>");
    }

    #[cfg(not(feature = "pretty"))]
    #[test]
    fn test_pretty_falls_back_to_compact() {
        let elem = nested();
        assert_eq!(elem.prettify(&RenderConfig::PRETTY), elem.serialize());
    }
}
