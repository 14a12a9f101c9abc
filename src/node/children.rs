//! Ordered child collection with capacity and type constraints
//!
//! Every mutation validates first and mutates second, so a rejected call
//! leaves the collection exactly as it was.

use std::ops::Index;

use smallvec::SmallVec;

use crate::error::{MarkupError, MarkupResult};

use super::{Child, ChildType, Element};

/// Children of one element.
#[derive(Debug, Clone, Default)]
pub struct ChildCollection {
    children: SmallVec<[Child; 8]>,
    max_elements: Option<usize>,
    allowed_types: Option<SmallVec<[ChildType; 2]>>,
}

impl ChildCollection {
    /// Create an empty, unconstrained collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection accepting only the given child types.
    pub fn restricted<I>(types: I) -> Self
    where
        I: IntoIterator<Item = ChildType>,
    {
        let types: SmallVec<[ChildType; 2]> = types.into_iter().collect();
        Self {
            allowed_types: (!types.is_empty()).then_some(types),
            ..Self::default()
        }
    }

    /// Create an empty collection holding at most `max` children.
    pub fn bounded(max: usize) -> Self {
        Self {
            max_elements: Some(max),
            ..Self::default()
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Constraints
    // ─────────────────────────────────────────────────────────────────────────

    /// Maximum number of children, if limited.
    pub fn max_elements(&self) -> Option<usize> {
        self.max_elements
    }

    /// Set or remove the maximum number of children.
    ///
    /// Fails if the collection already holds more than `max`.
    pub fn set_max_elements(&mut self, max: Option<usize>) -> MarkupResult<()> {
        if let Some(max) = max
            && max < self.children.len()
        {
            return Err(MarkupError::invalid(format!(
                "max_elements must be greater than or equal to the current number of elements ({})",
                self.children.len()
            )));
        }
        self.max_elements = max;
        Ok(())
    }

    /// Allowed child types, if restricted.
    pub fn allowed_types(&self) -> Option<&[ChildType]> {
        self.allowed_types.as_deref()
    }

    /// Restrict children to the given types. An empty list lifts the
    /// restriction.
    ///
    /// Fails without changing anything if a current child is not allowed.
    pub fn set_allowed_types<I>(&mut self, types: I) -> MarkupResult<()>
    where
        I: IntoIterator<Item = ChildType>,
    {
        let types: SmallVec<[ChildType; 2]> = types.into_iter().collect();
        if types.is_empty() {
            self.allowed_types = None;
            return Ok(());
        }
        if !self.children.iter().all(|c| types.iter().any(|t| t.matches(c))) {
            return Err(MarkupError::invalid(format!(
                "Types of current elements are not one of ({})",
                format_types(&types)
            )));
        }
        self.allowed_types = Some(types);
        Ok(())
    }

    /// Remove the type restriction.
    pub fn clear_allowed_types(&mut self) {
        self.allowed_types = None;
    }

    fn validate(&self, incoming: &[Child], resulting_len: usize) -> MarkupResult<()> {
        if let Some(types) = &self.allowed_types {
            for child in incoming {
                if !types.iter().any(|t| t.matches(child)) {
                    return Err(MarkupError::TypeConstraint {
                        got: child.child_type().to_string(),
                        allowed: format_types(types),
                    });
                }
            }
        }
        if let Some(max) = self.max_elements
            && resulting_len > max
        {
            return Err(MarkupError::Capacity {
                proposed: resulting_len,
                max,
            });
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> MarkupResult<()> {
        let len = self.children.len();
        if index >= len {
            return Err(MarkupError::IndexOutOfRange { index, len });
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────

    /// Append children.
    pub fn add<I, C>(&mut self, children: I) -> MarkupResult<()>
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        let incoming: SmallVec<[Child; 8]> = children.into_iter().map(Into::into).collect();
        self.validate(&incoming, self.children.len() + incoming.len())?;
        self.children.extend(incoming);
        Ok(())
    }

    /// Append a single child.
    pub fn push(&mut self, child: impl Into<Child>) -> MarkupResult<()> {
        self.add([child.into()])
    }

    /// Insert a child at `index`; `index == len()` appends.
    pub fn insert(&mut self, index: usize, child: impl Into<Child>) -> MarkupResult<()> {
        let child = child.into();
        let len = self.children.len();
        if index > len {
            return Err(MarkupError::IndexOutOfRange { index, len });
        }
        self.validate(std::slice::from_ref(&child), len + 1)?;
        self.children.insert(index, child);
        Ok(())
    }

    /// Replace all children.
    pub fn set<I, C>(&mut self, children: I) -> MarkupResult<()>
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        let incoming: SmallVec<[Child; 8]> = children.into_iter().map(Into::into).collect();
        self.validate(&incoming, incoming.len())?;
        self.children = incoming;
        Ok(())
    }

    /// Replace the child at `index`, returning the old one.
    pub fn update(&mut self, index: usize, child: impl Into<Child>) -> MarkupResult<Child> {
        let child = child.into();
        self.check_index(index)?;
        self.validate(std::slice::from_ref(&child), self.children.len())?;
        Ok(std::mem::replace(&mut self.children[index], child))
    }

    /// Remove and return the child at `index`.
    pub fn remove(&mut self, index: usize) -> MarkupResult<Child> {
        self.check_index(index)?;
        Ok(self.children.remove(index))
    }

    /// Remove and return the child at `index`, or the last child when `None`.
    pub fn pop(&mut self, index: Option<usize>) -> MarkupResult<Child> {
        match index {
            Some(index) => self.remove(index),
            None => self
                .children
                .pop()
                .ok_or(MarkupError::IndexOutOfRange { index: 0, len: 0 }),
        }
    }

    /// Remove every child.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Access
    // ─────────────────────────────────────────────────────────────────────────

    /// Get the child at `index`.
    pub fn get(&self, index: usize) -> Option<&Child> {
        self.children.get(index)
    }

    /// Mutable access to an element child.
    ///
    /// Text children are replaced through [`update`](Self::update).
    pub fn element_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.children.get_mut(index).and_then(Child::as_element_mut)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Child> {
        self.children.iter()
    }

    pub fn as_slice(&self) -> &[Child] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Concatenated rendering of every child.
    pub fn serialize(&self) -> String {
        crate::render::render_children(self)
    }
}

fn format_types(types: &[ChildType]) -> String {
    types
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl PartialEq for ChildCollection {
    fn eq(&self, other: &Self) -> bool {
        self.children == other.children
    }
}

impl Eq for ChildCollection {}

impl PartialEq<[Child]> for ChildCollection {
    fn eq(&self, other: &[Child]) -> bool {
        self.children.as_slice() == other
    }
}

impl Index<usize> for ChildCollection {
    type Output = Child;

    fn index(&self, index: usize) -> &Child {
        &self.children[index]
    }
}

impl<'a> IntoIterator for &'a ChildCollection {
    type Item = &'a Child;
    type IntoIter = std::slice::Iter<'a, Child>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl<C: Into<Child>> FromIterator<C> for ChildCollection {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().map(Into::into).collect(),
            max_elements: None,
            allowed_types: None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn sample() -> ChildCollection {
        ChildCollection::from_iter([
            Child::from(Element::new("div").with_child(Element::new("hr")).unwrap()),
            Child::from(Element::new("br")),
        ])
    }

    #[test]
    fn test_add_and_serialize() {
        let mut children = sample();
        children.add([Element::new("hr")]).unwrap();
        children.add(["text", "more"]).unwrap();
        assert_eq!(children.len(), 5);
        assert_eq!(children.serialize(), "<div><hr></div><br><hr>textmore");
    }

    #[test]
    fn test_insert_update_remove_pop() {
        let mut children = sample();
        children.insert(1, "middle").unwrap();
        assert_eq!(children.serialize(), "<div><hr></div>middle<br>");

        let old = children.update(0, Element::new("hr")).unwrap();
        assert!(old.is_element());
        assert_eq!(children.serialize(), "<hr>middle<br>");

        let removed = children.remove(1).unwrap();
        assert_eq!(removed, Child::from("middle"));

        let last = children.pop(None).unwrap();
        assert_eq!(last, Child::from(Element::new("br")));
        let first = children.pop(Some(0)).unwrap();
        assert_eq!(first, Child::from(Element::new("hr")));
        assert!(children.is_empty());

        assert_eq!(children.pop(None).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
        assert_eq!(children.remove(3).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
        assert_eq!(children.insert(1, "x").unwrap_err().kind(), ErrorKind::IndexOutOfRange);
        children.insert(0, "x").unwrap();
        assert_eq!(children.len(), 1);
    }

    #[test]
    fn test_capacity_violation_is_atomic() {
        let mut children = sample();
        children.set_max_elements(Some(2)).unwrap();
        let before = children.clone();

        let err = children.add([Element::new("br")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "3 elements would exceed the maximum number of elements (2)"
        );
        let err = children.insert(0, Element::new("br")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Capacity);
        let err = children
            .set([Element::new("br"), Element::new("hr"), Element::new("div")])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Capacity);
        assert_eq!(children, before);
        assert_eq!(children.len(), 2);

        children.clear();
        children.set_max_elements(Some(0)).unwrap();
        let err = children.push(Element::new("br")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "1 element would exceed the maximum number of elements (0)"
        );
    }

    #[test]
    fn test_max_elements_setter() {
        let mut children = sample();
        assert_eq!(children.max_elements(), None);
        children.set_max_elements(Some(10)).unwrap();
        assert_eq!(children.max_elements(), Some(10));
        children.set_max_elements(None).unwrap();
        assert_eq!(children.max_elements(), None);
        children.set_max_elements(Some(2)).unwrap();

        let err = children.set_max_elements(Some(1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "max_elements must be greater than or equal to the current number of elements (2)"
        );
        assert_eq!(children.max_elements(), Some(2));
    }

    #[test]
    fn test_allowed_types() {
        let mut children = sample();
        let err = children.set_allowed_types([ChildType::Text]).unwrap_err();
        assert_eq!(err.to_string(), "Types of current elements are not one of (text)");
        assert!(children.allowed_types().is_none());

        children.set_allowed_types([ChildType::tag("div"), ChildType::tag("br")]).unwrap();
        assert_eq!(children.allowed_types().map(<[ChildType]>::len), Some(2));

        children.set_allowed_types(Vec::new()).unwrap();
        assert!(children.allowed_types().is_none());

        children.clear();
        children.set_allowed_types([ChildType::Text]).unwrap();
        children.push("Test string").unwrap();

        let before = children.clone();
        let err = children
            .add([Child::from("ok"), Child::from(Element::new("br"))])
            .unwrap_err();
        assert_eq!(err.to_string(), "Got <br>, expected one of (text)");
        assert_eq!(children, before);

        let err = children.update(0, Element::new("hr")).unwrap_err();
        assert_eq!(err.to_string(), "Got <hr>, expected one of (text)");
        let err = children.insert(0, Element::new("br")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeConstraint);
        assert_eq!(children, before);
    }

    #[test]
    fn test_type_checked_before_capacity() {
        let mut children = ChildCollection::new();
        children.set_max_elements(Some(0)).unwrap();
        children.set_allowed_types([ChildType::Text]).unwrap();
        let err = children.push(Element::new("br")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeConstraint);
    }

    #[test]
    fn test_element_mut_and_index() {
        let mut children = sample();
        children
            .element_mut(0)
            .unwrap()
            .attributes_mut()
            .insert("id", "test");
        assert_eq!(children[0].to_string(), "<div id='test'><hr></div>");
        assert!(children.element_mut(5).is_none());
        assert_eq!(children.iter().count(), 2);
    }

    #[test]
    fn test_equality() {
        let mut constrained = sample();
        constrained.set_max_elements(Some(2)).unwrap();
        assert_eq!(constrained, sample());
        assert_ne!(sample(), ChildCollection::from_iter(["a", "b"]));

        let expected = vec![
            Child::from(Element::new("div").with_child(Element::new("hr")).unwrap()),
            Child::from(Element::new("br")),
        ];
        assert!(sample() == expected[..]);
    }
}
