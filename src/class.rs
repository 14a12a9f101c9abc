//! Class list for the reserved `class` attribute
//!
//! A `ClassList` remembers every token as the caller supplied it (the
//! original) together with the sanitized form that is written to markup.
//! Only sanitized forms take part in equality and output.

use std::fmt;
use std::sync::LazyLock;

use compact_str::CompactString;
use regex::Regex;
use rustc_hash::FxHashSet;

use crate::error::{MarkupError, MarkupResult};

/// Replacement table used by every new `ClassList`: spaces become hyphens.
pub const DEFAULT_REPLACEMENTS: &[(&str, &str)] = &[(" ", "-")];

/// Case and whitespace handling applied before the replacement table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizeOptions {
    /// Lowercase the token
    pub lowercase: bool,
    /// Strip leading and trailing whitespace
    pub trim: bool,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            trim: true,
        }
    }
}

/// Sanitize a class token with the default options and replacement table.
pub fn sanitize(name: &str) -> CompactString {
    sanitize_with(name, SanitizeOptions::default(), DEFAULT_REPLACEMENTS)
}

/// Sanitize a class token: lowercase, trim, then apply each replacement in
/// table order.
pub fn sanitize_with<K, V>(name: &str, options: SanitizeOptions, replacements: &[(K, V)]) -> CompactString
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut name = if options.lowercase {
        name.to_lowercase()
    } else {
        name.to_string()
    };
    if options.trim {
        name = name.trim().to_string();
    }
    for (pattern, replacement) in replacements {
        name = name.replace(pattern.as_ref(), replacement.as_ref());
    }
    CompactString::from(name)
}

static CLASS_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[_a-zA-Z]+[_a-zA-Z0-9-]*$").expect("valid class name pattern"));

/// Check whether a string is a valid CSS class name.
pub fn is_valid_class_name(name: &str) -> bool {
    CLASS_NAME_REGEX.is_match(name)
}

// =============================================================================
// ClassList
// =============================================================================

/// Ordered set of class tokens keyed by original spelling.
#[derive(Debug, Clone)]
pub struct ClassList {
    /// (original, sanitized) pairs in insertion order
    entries: Vec<(CompactString, CompactString)>,
    replacements: Vec<(CompactString, CompactString)>,
    options: SanitizeOptions,
}

impl Default for ClassList {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassList {
    /// Create an empty class list with the default replacement table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            replacements: default_replacements(),
            options: SanitizeOptions::default(),
        }
    }

    /// Create a class list from raw tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut classes = Self::new();
        classes.set(tokens);
        classes
    }

    /// Create a class list by splitting a string on single spaces.
    ///
    /// Empty segments from repeated or surrounding spaces are dropped.
    pub fn from_string(text: &str) -> Self {
        Self::from_tokens(text.split(' '))
    }

    /// Use different sanitize options, re-sanitizing the stored tokens.
    pub fn with_options(mut self, options: SanitizeOptions) -> Self {
        self.options = options;
        self.resanitize();
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────

    /// Add tokens, skipping any whose sanitized form is already present.
    pub fn add<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            let token = token.as_ref();
            let sanitized = self.sanitize(token);
            if sanitized.is_empty() || self.contains_sanitized(&sanitized) {
                continue;
            }
            self.entries.push((CompactString::from(token), sanitized));
        }
    }

    /// Replace all tokens.
    ///
    /// When two tokens sanitize to the same class the later one replaces the
    /// earlier one.
    pub fn set<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.entries.clear();
        for token in tokens {
            let token = token.as_ref();
            let sanitized = self.sanitize(token);
            if sanitized.is_empty() {
                continue;
            }
            self.entries.retain(|(_, s)| *s != sanitized);
            self.entries.push((CompactString::from(token), sanitized));
        }
    }

    /// Remove a class by original spelling, falling back to sanitized form.
    ///
    /// Returns the removed `(original, sanitized)` pair.
    pub fn remove(&mut self, name: &str) -> MarkupResult<(CompactString, CompactString)> {
        if let Some(pos) = self.entries.iter().position(|(o, _)| o == name) {
            return Ok(self.entries.remove(pos));
        }
        let sanitized = self.sanitize(name);
        match self.entries.iter().position(|(_, s)| *s == sanitized) {
            Some(pos) => Ok(self.entries.remove(pos)),
            None => Err(MarkupError::ClassNotFound(name.to_string())),
        }
    }

    /// Remove every class.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Replacement table
    // ─────────────────────────────────────────────────────────────────────────

    /// Current replacement table as (pattern, replacement) pairs.
    pub fn replacements(&self) -> &[(CompactString, CompactString)] {
        &self.replacements
    }

    /// Install a new replacement table and re-sanitize from the originals.
    pub fn set_replacements<I, K, V>(&mut self, replacements: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<CompactString>,
        V: Into<CompactString>,
    {
        self.replacements = replacements
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.resanitize();
    }

    /// Restore the default replacement table.
    pub fn reset_replacements(&mut self) {
        self.replacements = default_replacements();
        self.resanitize();
    }

    fn resanitize(&mut self) {
        let originals: Vec<CompactString> = self.entries.iter().map(|(o, _)| o.clone()).collect();
        self.set(originals);
    }

    /// Sanitize a token with this list's options and replacements.
    pub fn sanitize(&self, name: &str) -> CompactString {
        sanitize_with(name, self.options, &self.replacements)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// (original, sanitized) pairs in insertion order.
    pub fn entries(&self) -> &[(CompactString, CompactString)] {
        &self.entries
    }

    /// Iterate over sanitized tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, s)| s.as_str())
    }

    /// Check whether a token (original or sanitized) is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(o, _)| o == name) || self.contains_sanitized(&self.sanitize(name))
    }

    fn contains_sanitized(&self, sanitized: &str) -> bool {
        self.entries.iter().any(|(_, s)| s == sanitized)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Space-separated sanitized tokens.
    pub fn serialize(&self) -> String {
        let mut output = String::new();
        for (i, token) in self.iter().enumerate() {
            if i > 0 {
                output.push(' ');
            }
            output.push_str(token);
        }
        output
    }

    fn sanitized_set(&self) -> FxHashSet<&str> {
        self.iter().collect()
    }
}

fn default_replacements() -> Vec<(CompactString, CompactString)> {
    DEFAULT_REPLACEMENTS
        .iter()
        .map(|(k, v)| (CompactString::from(*k), CompactString::from(*v)))
        .collect()
}

impl PartialEq for ClassList {
    fn eq(&self, other: &Self) -> bool {
        self.sanitized_set() == other.sanitized_set()
    }
}

impl Eq for ClassList {}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl From<&str> for ClassList {
    fn from(text: &str) -> Self {
        Self::from_string(text)
    }
}

impl From<String> for ClassList {
    fn from(text: String) -> Self {
        Self::from_string(&text)
    }
}

impl<S: AsRef<str>> From<Vec<S>> for ClassList {
    fn from(tokens: Vec<S>) -> Self {
        Self::from_tokens(tokens)
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for ClassList {
    fn from(tokens: [S; N]) -> Self {
        Self::from_tokens(tokens)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

// =============================================================================
// Tests
// =============================================================================
