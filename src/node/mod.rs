//! Node types: `Element`, `Child`, and the `ChildCollection` that owns them.
//!
//! An element's children are a sum type over raw text and nested elements,
//! so rendering never needs to inspect runtime types.

mod children;
mod element;

pub use children::ChildCollection;
pub use element::{Element, TagKind, is_void_tag};

use std::fmt;

use compact_str::CompactString;

// =============================================================================
// Child
// =============================================================================

/// A single child of an element: raw text or a nested element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Text(String),
    Element(Box<Element>),
}

impl Child {
    // Generates for each variant (text -> Text, element -> Element):
    //   - is_xxx(&self) -> bool
    //   - as_xxx(&self) -> Option<&Type>
    //   - as_xxx_mut(&mut self) -> Option<&mut Type>
    impl_enum_accessors!(text: String, element: Element);

    /// The type used for `allowed_types` checks.
    pub fn child_type(&self) -> ChildType {
        match self {
            Child::Text(_) => ChildType::Text,
            Child::Element(e) => ChildType::Element(CompactString::from(e.tag())),
        }
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<Element> for Child {
    fn from(elem: Element) -> Self {
        Child::Element(Box::new(elem))
    }
}

impl From<Box<Element>> for Child {
    fn from(elem: Box<Element>) -> Self {
        Child::Element(elem)
    }
}

impl fmt::Display for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render_child(self))
    }
}

// =============================================================================
// ChildType
// =============================================================================

/// Kind of child a collection may accept.
///
/// Element kinds are identified by tag name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChildType {
    Text,
    Element(CompactString),
}

impl ChildType {
    /// An element type identified by tag name.
    pub fn tag(tag: &str) -> Self {
        ChildType::Element(CompactString::from(tag))
    }

    /// Check whether `child` is of this type.
    pub fn matches(&self, child: &Child) -> bool {
        match (self, child) {
            (ChildType::Text, Child::Text(_)) => true,
            (ChildType::Element(tag), Child::Element(e)) => tag == e.tag(),
            _ => false,
        }
    }
}

impl fmt::Display for ChildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildType::Text => f.write_str("text"),
            ChildType::Element(tag) => write!(f, "<{tag}>"),
        }
    }
}
