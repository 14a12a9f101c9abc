//! Text tags: paragraphs, headings, block/inline containers and inline
//! formatting.

use crate::error::{MarkupError, MarkupResult};
use crate::node::Element;

define_tags! {
    /// `<p>` paragraph
    paragraph => "p",
    /// `<div>` block container
    div => "div",
    /// `<span>` inline container
    span => "span",
    bold => "b",
    italic => "i",
    strong => "strong",
    emphasis => "em",
    underline => "u",
    strikethrough => "s",
    mark => "mark",
    small => "small",
    /// `<code>` inline code
    code => "code",
    h1 => "h1",
    h2 => "h2",
    h3 => "h3",
    h4 => "h4",
    h5 => "h5",
    h6 => "h6",
}

/// `<h1>`..`<h6>` for `level` 1 through 6.
pub fn heading(level: u8) -> MarkupResult<Element> {
    match level {
        1..=6 => Ok(Element::container(format!("h{level}"))),
        _ => Err(MarkupError::invalid(format!(
            "heading level must be between 1 and 6, got {level}"
        ))),
    }
}

/// Extract the heading level from a tag name (`"h2"` -> `Some(2)`).
pub fn heading_level(tag: &str) -> Option<u8> {
    let level = tag.strip_prefix('h')?.parse::<u8>().ok()?;
    (1..=6).contains(&level).then_some(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_text_factories() {
        assert_eq!(paragraph().serialize(), "<p></p>");
        assert_eq!(paragraph_with(["Hello"]).unwrap().serialize(), "<p>Hello</p>");
        assert_eq!(strikethrough().tag(), "s");
        assert_eq!(emphasis().tag(), "em");
        assert_eq!(
            span_with([bold_with(["b"]).unwrap(), italic_with(["i"]).unwrap()])
                .unwrap()
                .serialize(),
            "<span><b>b</b><i>i</i></span>"
        );
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(heading(3).unwrap().tag(), "h3");
        assert_eq!(heading(1).unwrap(), h1());
        assert_eq!(heading(0).unwrap_err().kind(), ErrorKind::InvalidConfiguration);
        assert!(heading(7).is_err());
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("h1"), Some(1));
        assert_eq!(heading_level("h6"), Some(6));
        assert_eq!(heading_level("h7"), None);
        assert_eq!(heading_level("header"), None);
        assert_eq!(heading_level("p"), None);
    }
}
