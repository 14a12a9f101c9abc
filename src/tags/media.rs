//! Media and formatting tags: `<img>`, `<br>`, `<hr>`.

use crate::attr::AttrValue;
use crate::node::Element;

/// `<img src=.. alt=..>`
pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Element {
    Element::new("img")
        .with_attr("src", AttrValue::Text(src.into()))
        .with_attr("alt", AttrValue::Text(alt.into()))
}

/// `<br>`
pub fn line_break() -> Element {
    Element::new("br")
}

/// `<hr>`
pub fn horizontal_rule() -> Element {
    Element::new("hr")
}
