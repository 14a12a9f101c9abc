//! Element type - a tag with attributes and children
//!
//! The core building block of the document tree. Concrete tags are plain
//! `Element`s configured by the factories in [`crate::tags`].

use std::fmt;
use std::path::Path;

use compact_str::CompactString;

use crate::attr::{AttrValue, AttributeMap};
use crate::class::ClassList;
use crate::error::{MarkupError, MarkupResult};
use crate::render::{self, RenderConfig};

use super::{Child, ChildCollection, ChildType};

/// Whether a tag has a closing delimiter and children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<tag attrs>children</tag>`
    Container,
    /// `<tag attrs>`, never has children
    Void,
}

/// Check if a tag is an HTML void element.
pub fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

// =============================================================================
// Element
// =============================================================================

/// Markup element owning its attributes and children.
///
/// `Clone` is a deep copy: mutating a clone never affects the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: CompactString,
    kind: TagKind,
    attrs: AttributeMap,
    children: ChildCollection,
}

impl Element {
    /// Create an element, inferring void/container from the tag name.
    pub fn new(tag: impl Into<CompactString>) -> Self {
        let tag = tag.into();
        let kind = if is_void_tag(&tag) {
            TagKind::Void
        } else {
            TagKind::Container
        };
        Self::with_kind(tag, kind)
    }

    /// Create a container element regardless of tag name.
    pub fn container(tag: impl Into<CompactString>) -> Self {
        Self::with_kind(tag, TagKind::Container)
    }

    /// Create a void element regardless of tag name.
    pub fn void(tag: impl Into<CompactString>) -> Self {
        Self::with_kind(tag, TagKind::Void)
    }

    /// Create a container element accepting only the given child types.
    pub fn restricted<I>(tag: impl Into<CompactString>, types: I) -> Self
    where
        I: IntoIterator<Item = ChildType>,
    {
        Self {
            children: ChildCollection::restricted(types),
            ..Self::container(tag)
        }
    }

    fn with_kind(tag: impl Into<CompactString>, kind: TagKind) -> Self {
        let children = match kind {
            TagKind::Container => ChildCollection::new(),
            TagKind::Void => ChildCollection::bounded(0),
        };
        Self {
            tag: tag.into(),
            kind,
            attrs: AttributeMap::new(),
            children,
        }
    }

    /// Create an element from its parts.
    ///
    /// `classes`, when given, replace the class entry of `attributes`.
    pub fn build<I, C>(
        tag: impl Into<CompactString>,
        children: I,
        attributes: Option<AttributeMap>,
        classes: Option<ClassList>,
    ) -> MarkupResult<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        let mut elem = Self::new(tag);
        if let Some(attributes) = attributes {
            elem.attrs = attributes;
        }
        if let Some(classes) = classes {
            elem.attrs.set_classes(classes);
        }
        elem.children.add(children)?;
        Ok(elem)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Set an attribute (builder pattern).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name, value);
        self
    }

    /// Replace all attributes (builder pattern).
    pub fn with_attrs(mut self, attrs: AttributeMap) -> Self {
        self.attrs = attrs;
        self
    }

    /// Add class tokens (builder pattern).
    pub fn with_class(mut self, classes: &str) -> Self {
        self.attrs.classes_mut().add(classes.split(' '));
        self
    }

    /// Replace the class list (builder pattern).
    pub fn with_classes(mut self, classes: impl Into<ClassList>) -> Self {
        self.attrs.set_classes(classes);
        self
    }

    /// Append a child (builder pattern).
    pub fn with_child(mut self, child: impl Into<Child>) -> MarkupResult<Self> {
        self.children.push(child)?;
        Ok(self)
    }

    /// Append children (builder pattern).
    pub fn with_children<I, C>(mut self, children: I) -> MarkupResult<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.children.add(children)?;
        Ok(self)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    pub fn is_void(&self) -> bool {
        self.kind == TagKind::Void
    }

    pub fn attributes(&self) -> &AttributeMap {
        &self.attrs
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeMap {
        &mut self.attrs
    }

    pub fn classes(&self) -> &ClassList {
        self.attrs.classes()
    }

    pub fn classes_mut(&mut self) -> &mut ClassList {
        self.attrs.classes_mut()
    }

    pub fn children(&self) -> &ChildCollection {
        &self.children
    }

    /// Mutable access to an element child.
    pub fn element_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.children.element_mut(index)
    }

    /// Set or remove the child limit. Void elements stay at zero.
    pub fn set_max_elements(&mut self, max: Option<usize>) -> MarkupResult<()> {
        if self.is_void() && max != Some(0) {
            return Err(MarkupError::invalid(format!(
                "max_elements of void element <{}> is fixed at 0",
                self.tag
            )));
        }
        self.children.set_max_elements(max)
    }

    /// Restrict children to the given types; an empty list lifts the
    /// restriction.
    pub fn set_allowed_types<I>(&mut self, types: I) -> MarkupResult<()>
    where
        I: IntoIterator<Item = ChildType>,
    {
        self.children.set_allowed_types(types)
    }

    pub fn clear_allowed_types(&mut self) {
        self.children.clear_allowed_types();
    }

    /// Concatenated text of all descendant text children.
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    fn collect_text(&self, buf: &mut String) {
        for child in &self.children {
            match child {
                Child::Text(t) => buf.push_str(t),
                Child::Element(e) => e.collect_text(buf),
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Child mutation (delegates to the collection)
    // ─────────────────────────────────────────────────────────────────────────

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

    /// Render to compact markup.
    pub fn serialize(&self) -> String {
        render::render_element(self)
    }

    /// Render with the given configuration.
    pub fn prettify(&self, config: &RenderConfig) -> String {
        render::render_element_with(self, config)
    }

    /// Render with [`RenderConfig::PRETTY`].
    pub fn prettify_default(&self) -> String {
        self.prettify(&RenderConfig::PRETTY)
    }

    /// Write compact markup to `path`, replacing any existing file.
    pub fn persist(&self, path: impl AsRef<Path>) -> MarkupResult<()> {
        self.persist_with(path, &RenderConfig::COMPACT)
    }

    /// Write markup rendered with `config` to `path`.
    pub fn persist_with(&self, path: impl AsRef<Path>, config: &RenderConfig) -> MarkupResult<()> {
        render::write_file(path.as_ref(), &self.prettify(config))
    }

    /// Serialized element followed by `text`.
    pub fn concat(&self, text: &str) -> String {
        let mut output = self.serialize();
        output.push_str(text);
        output
    }

    /// `text` followed by the serialized element.
    pub fn prepend_to(&self, text: &str) -> String {
        let mut output = String::from(text);
        output.push_str(&self.serialize());
        output
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl std::ops::Add<&Element> for String {
    type Output = String;

    fn add(mut self, elem: &Element) -> String {
        self.push_str(&elem.serialize());
        self
    }
}
