//! Property-based tests for the markup data model
//!
//! These tests check the invariants that must hold for any input:
//! - sanitizing a class token twice changes nothing
//! - class lists deduplicate on sanitized form
//! - attribute strings survive a parse/serialize/parse cycle
//! - child collections never exceed their limits, and rejected mutations
//!   leave them untouched

use balisage::class::sanitize;
use balisage::prelude::*;
use proptest::prelude::*;

/// Generate class tokens with mixed case and stray spaces
fn class_token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z][a-zA-Z0-9_-]{0,10}",
        "[ ]{0,2}[a-zA-Z0-9]{1,6}[ ]{1,2}[a-zA-Z0-9]{1,6}[ ]{0,2}",
        "[ a-zA-Z0-9_\\t-]{0,16}",
    ]
}

/// Generate attribute keys other than `class`
fn attr_key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,8}".prop_filter("class is reserved", |k| k != "class")
}

/// Generate a single `key='value'` or bare `key` token
fn attr_token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (attr_key_strategy(), "[a-zA-Z0-9][a-zA-Z0-9 .-]{0,11}")
            .prop_map(|(k, v)| format!("{k}='{v}'")),
        attr_key_strategy(),
    ]
}

#[derive(Debug, Clone)]
enum Mutation {
    Add(usize),
    Push,
    Insert(usize),
    Set(usize),
    Remove(usize),
    Pop,
}

fn mutation_strategy() -> impl Strategy<Value = Mutation> {
    prop_oneof![
        (0usize..4).prop_map(Mutation::Add),
        Just(Mutation::Push),
        (0usize..6).prop_map(Mutation::Insert),
        (0usize..6).prop_map(Mutation::Set),
        (0usize..6).prop_map(Mutation::Remove),
        Just(Mutation::Pop),
    ]
}

fn apply(children: &mut ChildCollection, mutation: &Mutation) -> MarkupResult<()> {
    match *mutation {
        Mutation::Add(n) => children.add((0..n).map(|i| format!("t{i}"))),
        Mutation::Push => children.push(Element::new("br")),
        Mutation::Insert(i) => children.insert(i, "inserted"),
        Mutation::Set(n) => children.set((0..n).map(|_| Element::new("hr"))),
        Mutation::Remove(i) => children.remove(i).map(drop),
        Mutation::Pop => children.pop(None).map(drop),
    }
}

/// Generate small element trees of text and nested elements
fn element_strategy() -> impl Strategy<Value = Element> {
    let leaf = prop_oneof![
        "[a-z ]{0,8}".prop_map(Child::from),
        prop_oneof![Just("br"), Just("hr"), Just("img")].prop_map(|t| Child::from(Element::new(t))),
    ];
    let tree = leaf.prop_recursive(3, 24, 4, |inner| {
        (
            prop_oneof![Just("div"), Just("p"), Just("span")],
            prop::collection::vec(inner, 0..4),
            "[a-z]{0,6}",
        )
            .prop_map(|(tag, children, class)| {
                let elem = Element::new(tag)
                    .with_class(&class)
                    .with_children(children)
                    .expect("unconstrained container");
                Child::from(elem)
            })
    });
    prop::collection::vec(tree, 0..4)
        .prop_map(|children| Element::new("section").with_children(children).expect("unconstrained container"))
}

proptest! {
    #[test]
    fn test_sanitize_is_idempotent(token in class_token_strategy()) {
        let once = sanitize(&token);
        prop_assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn test_class_add_deduplicates(token in class_token_strategy()) {
        let mut once = ClassList::new();
        once.add([token.as_str()]);

        let mut twice = ClassList::new();
        twice.add([token.as_str(), token.as_str()]);
        prop_assert_eq!(once.serialize(), twice.serialize());

        let sanitized = sanitize(&token);
        let mut mixed = ClassList::new();
        mixed.add([token.as_str(), sanitized.as_str()]);
        prop_assert_eq!(once.serialize(), mixed.serialize());
    }

    #[test]
    fn test_class_set_last_wins(token in "[a-zA-Z][a-zA-Z0-9]{0,8}( [a-zA-Z0-9]{1,4})?") {
        let variant = format!(" {} ", token.to_uppercase());
        prop_assume!(sanitize(&token) == sanitize(&variant));

        let mut classes = ClassList::new();
        classes.set([token.as_str(), variant.as_str()]);
        prop_assert_eq!(classes.len(), 1);
        prop_assert_eq!(classes.entries()[0].0.as_str(), variant.as_str());
        let expected = sanitize(&token);
        prop_assert_eq!(classes.entries()[0].1.as_str(), expected.as_str());
    }

    #[test]
    fn test_attribute_round_trip(tokens in prop::collection::vec(attr_token_strategy(), 0..6)) {
        let source = tokens.join(" ");
        let parsed = AttributeMap::from_string(&source);
        let reparsed = AttributeMap::from_string(&parsed.serialize());
        prop_assert_eq!(&parsed, &reparsed);
        prop_assert_eq!(parsed.serialize(), reparsed.serialize());
    }

    #[test]
    fn test_capacity_invariant(
        max in 0usize..5,
        mutations in prop::collection::vec(mutation_strategy(), 0..20),
    ) {
        let mut children = ChildCollection::bounded(max);
        for mutation in &mutations {
            let before = children.clone();
            if let Err(err) = apply(&mut children, mutation) {
                prop_assert_eq!(&children, &before, "{:?} failed with {} but mutated", mutation, err);
            }
            prop_assert!(children.len() <= max);
        }
    }

    #[test]
    fn test_type_invariant(text in "[a-z]{0,8}", tag in "(p|div|span|ol)") {
        let mut list = unordered_list();
        list.add([list_item([text.as_str()]).expect("unconstrained item")]).expect("li is allowed");
        let before = list.clone();

        prop_assert_eq!(list.add([text.as_str()]).map_err(|e| e.kind()), Err(ErrorKind::TypeConstraint));
        prop_assert_eq!(
            list.add([Element::new(tag.as_str())]).map_err(|e| e.kind()),
            Err(ErrorKind::TypeConstraint)
        );
        prop_assert_eq!(list.insert(0, Element::new(tag.as_str())).map_err(|e| e.kind()), Err(ErrorKind::TypeConstraint));
        prop_assert_eq!(&list, &before);
    }

    #[test]
    fn test_serialize_is_deterministic(elem in element_strategy()) {
        let first = elem.serialize();
        prop_assert_eq!(&first, &elem.serialize());
        prop_assert_eq!(&first, &elem.clone().serialize());
        prop_assert_eq!(&first, &elem.to_string());
    }
}
