//! balisage - Typed HTML builder
//!
//! Build markup as a tree of [`Element`]s, each owning an [`AttributeMap`]
//! (with a permanent, sanitized [`ClassList`]) and a [`ChildCollection`]
//! that can restrict its children by type and count. Serialization is
//! deterministic: the same tree always renders to the same bytes.
//!
//! ## Modules
//! - `class`: class lists and token sanitization
//! - `attr`: attribute values and the attribute map
//! - `node`: `Element`, `Child` and the constrained child collection
//! - `render`: compact and indented rendering
//! - `page`: full `<!DOCTYPE html>` documents
//! - `tags`: factories for concrete tags
//!
//! ## Usage
//!
//! ```
//! use balisage::prelude::*;
//!
//! let mut list = unordered_list();
//! list.add([list_item(["first"])?, list_item(["second"])?])?;
//! assert!(list.add(["not an item"]).is_err());
//!
//! let div = div_with([Child::from(h1_with(["Title"])?), Child::from(list)])?
//!     .with_classes(ClassList::from_tokens(["Main Content"]));
//! assert_eq!(
//!     div.serialize(),
//!     "<div class='main-content'><h1>Title</h1><ul><li>first</li><li>second</li></ul></div>"
//! );
//! # Ok::<(), balisage::MarkupError>(())
//! ```

#[macro_use]
mod macros;

// =============================================================================
// Modules
// =============================================================================

/// Error types
pub mod error;

/// Class lists and sanitization
pub mod class;

/// Attribute values and maps
pub mod attr;

/// Node types: Element, Child, ChildCollection
pub mod node;

/// Markup rendering
pub mod render;

/// Page documents
pub mod page;

/// Concrete tag factories
pub mod tags;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

pub use attr::{AttrValue, AttributeMap};
pub use class::{ClassList, SanitizeOptions};
pub use error::{ErrorKind, MarkupError, MarkupResult};
pub use node::{Child, ChildCollection, ChildType, Element, TagKind};
pub use page::Page;
pub use render::RenderConfig;
