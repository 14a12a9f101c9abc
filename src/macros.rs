//! Accessor and tag-factory macros
//!
//! Both macros use `paste` for identifier concatenation.

/// Generate is_xxx, as_xxx, as_xxx_mut for enums with one payload per variant
///
/// Uses paste's `:camel` modifier to convert method name to variant name.
/// The payload may be boxed; accessors borrow through the box.
///
/// # Generated methods per variant:
/// - `is_xxx(&self) -> bool`
/// - `as_xxx(&self) -> Option<&Type>`
/// - `as_xxx_mut(&mut self) -> Option<&mut Type>`
///
/// # Example
/// ```ignore
/// impl Child {
///     // text -> Text, element -> Element
///     impl_enum_accessors!(text: String, element: Element);
/// }
/// ```
macro_rules! impl_enum_accessors {
    ($($variant:ident : $ty:ty),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Check if this is a " $variant " child"]
                pub fn [<is_ $variant>](&self) -> bool {
                    matches!(self, Self::[<$variant:camel>](_))
                }

                #[doc = "Try to get as " $variant " reference"]
                pub fn [<as_ $variant>](&self) -> Option<&$ty> {
                    match self {
                        Self::[<$variant:camel>](v) => Some(::std::borrow::Borrow::borrow(v)),
                        _ => None,
                    }
                }

                #[doc = "Try to get as mutable " $variant " reference"]
                pub fn [<as_ $variant _mut>](&mut self) -> Option<&mut $ty> {
                    match self {
                        Self::[<$variant:camel>](v) => Some(::std::borrow::BorrowMut::borrow_mut(v)),
                        _ => None,
                    }
                }
            )*
        }
    };
}

/// Generate factory functions for container tags
///
/// Each entry produces `fn name() -> Element` for an empty element and
/// `fn name_with(children) -> MarkupResult<Element>` that adds children.
///
/// # Example
/// ```ignore
/// define_tags! {
///     /// `<div>` block container
///     div => "div",
/// }
/// // Expands to: pub fn div() -> Element, pub fn div_with(...) -> MarkupResult<Element>
/// ```
macro_rules! define_tags {
    ($($(#[$meta:meta])* $name:ident => $tag:literal),* $(,)?) => {
        ::paste::paste! {
            $(
                $(#[$meta])*
                pub fn $name() -> $crate::node::Element {
                    $crate::node::Element::container($tag)
                }

                #[doc = "`<" $tag ">` holding the given children"]
                pub fn [<$name _with>]<I, C>(children: I) -> $crate::error::MarkupResult<$crate::node::Element>
                where
                    I: IntoIterator<Item = C>,
                    C: Into<$crate::node::Child>,
                {
                    $name().with_children(children)
                }
            )*
        }
    };
}
