//! Attribute system for elements
//!
//! Attributes are kept as ordered `(name, value)` pairs, the same shape as a
//! plain `Vec<(String, String)>`, but values carry boolean and absent states
//! and the `class` key always holds a [`ClassList`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::class::ClassList;
use crate::error::{MarkupError, MarkupResult};

/// The reserved attribute key bound to a [`ClassList`].
pub const CLASS_KEY: &str = "class";

// =============================================================================
// AttrValue
// =============================================================================

/// Value of a single attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Rendered as `key='value'`; omitted when empty
    Text(String),
    /// `true` renders the bare key, `false` omits the attribute
    Bool(bool),
    /// Rendered as the bare key
    Absent,
    /// Only ever stored under [`CLASS_KEY`]
    Classes(ClassList),
}

impl AttrValue {
    /// Get the text value, if this is a text attribute.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the class list, if this is the class attribute.
    pub fn as_classes(&self) -> Option<&ClassList> {
        match self {
            Self::Classes(c) => Some(c),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<ClassList> for AttrValue {
    fn from(c: ClassList) -> Self {
        Self::Classes(c)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

macro_rules! impl_attr_value_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(n: $ty) -> Self {
                    Self::Text(n.to_string())
                }
            }
        )*
    };
}

impl_attr_value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Coerce a value for storage under `key`.
fn coerce(key: &str, value: AttrValue) -> AttrValue {
    if key == CLASS_KEY {
        match value {
            AttrValue::Classes(c) => AttrValue::Classes(c),
            AttrValue::Text(s) => AttrValue::Classes(ClassList::from_string(&s)),
            AttrValue::Bool(_) | AttrValue::Absent => AttrValue::Classes(ClassList::new()),
        }
    } else {
        match value {
            AttrValue::Classes(c) => AttrValue::Text(c.serialize()),
            other => other,
        }
    }
}

// =============================================================================
// AttributeMap
// =============================================================================

/// Ordered attribute map with a permanent `class` entry.
#[derive(Debug, Clone)]
pub struct AttributeMap {
    entries: Vec<(String, AttrValue)>,
}

impl Default for AttributeMap {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeMap {
    /// Create a map holding only an empty class list.
    pub fn new() -> Self {
        Self {
            entries: vec![(CLASS_KEY.to_string(), AttrValue::Classes(ClassList::new()))],
        }
    }

    /// Create a map from `(name, value)` pairs.
    ///
    /// A `class` entry keeps its position; otherwise it is appended last.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttrValue>,
    {
        let mut map = Self { entries: Vec::new() };
        map.set(pairs);
        map
    }

    /// Parse a serialized attribute string such as `id='main' hidden`.
    ///
    /// Tokens are whitespace separated; a `name='value'` token may contain
    /// whitespace inside the quotes. A token without a value is boolean true.
    pub fn from_string(text: &str) -> Self {
        let pairs = split_preserving_quotes(text).into_iter().map(|token| {
            let (key, value) = token.split_once('=').unwrap_or((token, ""));
            let value = value.trim_matches('\'');
            let value = if value.is_empty() {
                AttrValue::Bool(true)
            } else {
                AttrValue::Text(value.to_string())
            };
            (key.to_string(), value)
        });
        Self::from_pairs(pairs)
    }

    /// Chainable [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────

    /// Merge entries; keys that already exist keep their current value.
    ///
    /// Since `class` always exists, classes are never changed through `add`.
    pub fn add<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttrValue>,
    {
        for (key, value) in pairs {
            let key = key.into();
            if self.contains(&key) {
                continue;
            }
            let value = coerce(&key, value.into());
            self.entries.push((key, value));
        }
    }

    /// Replace every entry. Missing `class` reverts to an empty class list.
    pub fn set<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttrValue>,
    {
        self.entries.clear();
        for (key, value) in pairs {
            self.insert(key, value);
        }
        if !self.contains(CLASS_KEY) {
            self.entries.push((CLASS_KEY.to_string(), AttrValue::Classes(ClassList::new())));
        }
    }

    /// Set one attribute, overwriting in place or appending.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = coerce(&name, value.into());
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Remove an attribute, returning its value.
    ///
    /// Removing `class` returns the old list and leaves an empty one behind.
    pub fn remove(&mut self, name: &str) -> MarkupResult<AttrValue> {
        let pos = self
            .entries
            .iter()
            .position(|(k, _)| k == name)
            .ok_or_else(|| MarkupError::AttributeNotFound(name.to_string()))?;
        if name == CLASS_KEY {
            let old = std::mem::replace(&mut self.entries[pos].1, AttrValue::Classes(ClassList::new()));
            return Ok(old);
        }
        Ok(self.entries.remove(pos).1)
    }

    /// Remove every attribute except an empty class list.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Access
    // ─────────────────────────────────────────────────────────────────────────

    /// Get an attribute value by name.
    pub fn get(&self, name: &str) -> MarkupResult<&AttrValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
            .ok_or_else(|| MarkupError::AttributeNotFound(name.to_string()))
    }

    /// Check if an attribute exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == name)
    }

    /// The class list stored under `class`.
    pub fn classes(&self) -> &ClassList {
        // The class entry is structurally permanent.
        match self.entries.iter().find(|(k, _)| k == CLASS_KEY) {
            Some((_, AttrValue::Classes(c))) => c,
            _ => unreachable!("class entry is always a ClassList"),
        }
    }

    /// Mutable access to the class list.
    pub fn classes_mut(&mut self) -> &mut ClassList {
        match self.entries.iter_mut().find(|(k, _)| k == CLASS_KEY) {
            Some((_, AttrValue::Classes(c))) => c,
            _ => unreachable!("class entry is always a ClassList"),
        }
    }

    /// Replace the class list, keeping the entry's position.
    pub fn set_classes(&mut self, classes: impl Into<ClassList>) {
        *self.classes_mut() = classes.into();
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries, counting `class`.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing but an empty class list is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, v)| matches!(v, AttrValue::Classes(c) if c.is_empty()))
    }

    /// Render as space-separated `key='value'` / bare `key` tokens.
    pub fn serialize(&self) -> String {
        let mut output = String::new();
        for (key, value) in &self.entries {
            let rendered = match value {
                AttrValue::Bool(true) | AttrValue::Absent => None,
                AttrValue::Bool(false) => continue,
                AttrValue::Text(s) if s.is_empty() => continue,
                AttrValue::Text(s) => Some(s.clone()),
                AttrValue::Classes(c) if c.is_empty() => continue,
                AttrValue::Classes(c) => Some(c.serialize()),
            };
            if !output.is_empty() {
                output.push(' ');
            }
            output.push_str(key);
            if let Some(value) = rendered {
                output.push_str("='");
                output.push_str(&value);
                output.push('\'');
            }
        }
        output
    }
}

impl PartialEq for AttributeMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|(k, v)| other.get(k).is_ok_and(|ov| ov == v))
    }
}

impl Eq for AttributeMap {}

impl fmt::Display for AttributeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeMap
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

// =============================================================================
// Tokenizer
// =============================================================================

/// Matches a `name='quoted value'` token or any run of non-whitespace.
static ATTRIBUTE_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^'\s]+='[^']*'|\S+").expect("valid attribute token pattern"));

/// Split an attribute string on whitespace, keeping `name='quoted value'`
/// tokens whole.
pub fn split_preserving_quotes(text: &str) -> Vec<&str> {
    ATTRIBUTE_TOKEN_REGEX
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
