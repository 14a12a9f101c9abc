//! Factory constructors for concrete tags.
//!
//! Concrete tags are plain [`Element`](crate::node::Element)s: each factory
//! fixes a tag name and, where the markup requires it, restricts which
//! children the element accepts.
//!
//! # Available Tags
//!
//! - [`text`] - paragraphs, headings, `div`/`span` and inline formatting
//! - [`media`] - `<img>`, `<br>`, `<hr>`
//! - [`link`] - `<a>`
//! - [`list`] - `<ol>`, `<ul>`, `<li>`
//! - [`table`] - `<table>`, `<tr>`, `<th>`, `<td>` and [`TableBuilder`]

pub mod link;
pub mod list;
pub mod media;
pub mod table;
pub mod text;

pub use link::*;
pub use list::*;
pub use media::*;
pub use table::*;
pub use text::*;
