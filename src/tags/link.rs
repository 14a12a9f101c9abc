//! Hyperlinks.

use crate::attr::AttrValue;
use crate::error::MarkupResult;
use crate::node::{Child, Element};

/// `<a href=..>` holding the given children.
pub fn link<I, C>(href: impl Into<String>, children: I) -> MarkupResult<Element>
where
    I: IntoIterator<Item = C>,
    C: Into<Child>,
{
    Element::new("a")
        .with_attr("href", AttrValue::Text(href.into()))
        .with_children(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::AttributeMap;
    use crate::class::ClassList;

    #[test]
    fn test_link() {
        let a = link("#", ["Test hyperlink"]).unwrap();
        assert_eq!(a.serialize(), "<a href='#'>Test hyperlink</a>");
    }

    #[test]
    fn test_link_with_attributes() {
        let a = Element::build(
            "a",
            ["Test hyperlink"],
            Some(AttributeMap::from_pairs([("href", "#"), ("alt", "Hyperlink")])),
            Some(ClassList::from_tokens(["class 1", "class2"])),
        )
        .unwrap();
        assert_eq!(
            a.serialize(),
            "<a href='#' alt='Hyperlink' class='class-1 class2'>Test hyperlink</a>"
        );
    }
}
