//! Lists: `<ol>`, `<ul>` and their `<li>` items.
//!
//! Both list kinds accept only `<li>` children.

use crate::error::MarkupResult;
use crate::node::{Child, ChildType, Element};

pub const LIST_ITEM_TAG: &str = "li";

/// Empty `<ol>`.
pub fn ordered_list() -> Element {
    Element::restricted("ol", [ChildType::tag(LIST_ITEM_TAG)])
}

/// Empty `<ul>`.
pub fn unordered_list() -> Element {
    Element::restricted("ul", [ChildType::tag(LIST_ITEM_TAG)])
}

/// `<li>` holding the given children.
pub fn list_item<I, C>(children: I) -> MarkupResult<Element>
where
    I: IntoIterator<Item = C>,
    C: Into<Child>,
{
    Element::container(LIST_ITEM_TAG).with_children(children)
}

/// `<ul>` with one `<li>` per entry, each holding the entry's text.
pub fn unordered_list_of<I, S>(items: I) -> MarkupResult<Element>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let items = items
        .into_iter()
        .map(|item| list_item([Child::Text(item.into())]))
        .collect::<MarkupResult<Vec<_>>>()?;
    unordered_list().with_children(items)
}

/// `<ol>` with one `<li>` per entry, each holding the entry's text.
pub fn ordered_list_of<I, S>(items: I) -> MarkupResult<Element>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let items = items
        .into_iter()
        .map(|item| list_item([Child::Text(item.into())]))
        .collect::<MarkupResult<Vec<_>>>()?;
    ordered_list().with_children(items)
}
