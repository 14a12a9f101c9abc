//! Prelude module for common imports.
//!
//! ```
//! use balisage::prelude::*;
//! ```

// Node types
pub use crate::node::{Child, ChildCollection, ChildType, Element, TagKind};

// Attributes and classes
pub use crate::attr::{AttrValue, AttributeMap};
pub use crate::class::{ClassList, SanitizeOptions};

// Page and rendering
pub use crate::page::Page;
pub use crate::render::RenderConfig;

// Error
pub use crate::error::{ErrorKind, MarkupError, MarkupResult};

// Tags
pub use crate::tags::*;
