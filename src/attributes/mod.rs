//! Attribute storage for graphs, nodes and edges.
//!
//! Every DOT entity carries a set of `key=value` styling attributes. This module provides
//! [`Attributes`], the ordered store used by all entities, the three kinds of
//! [`AttributeValue`] it can hold, and the [`Styleable`] trait through which graphs, nodes
//! and edges expose their store.
//!
//! # Value Kinds
//!
//! - [`AttributeValue::String`] - Plain text, quoted and escaped on output (`key="value"`)
//! - [`AttributeValue::Literal`] - Written verbatim; the caller guarantees valid DOT (`key=value`)
//! - [`AttributeValue::Html`] - An HTML-like label, wrapped in angle brackets (`key=<value>`)
//!
//! # Ordering
//!
//! Entries are always written in ascending lexicographic key order, independently of the
//! order in which they were set. This makes the serialized form of an entity reproducible
//! byte for byte.
//!
//! # Examples
//!
//! ```rust
//! use dotscribe::attributes::{Attributes, Key};
//!
//! let mut attributes = Attributes::new();
//! attributes.set_string(Key::Style, "filled");
//! attributes.set_string(Key::Color, "lightgrey");
//! attributes.set_html(Key::Label, "<B>Hi</B>");
//!
//! assert_eq!(
//!     attributes.to_dot_string(true),
//!     r#"[color="lightgrey",label=<<B>Hi</B>>,style="filled"]"#
//! );
//! ```

mod constants;

pub use constants::{ArrowType, ClusterMode, DirType, Key, RankDir, Shape, Splines, Style};

use std::{
    cell::{Ref, RefCell, RefMut},
    collections::BTreeMap,
    fmt,
    io::{self, Write},
};

use crate::{dot::writer::DotWriter, utils::escape_dot, Result};

/// A single attribute value together with its output kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeValue {
    /// Plain string, written double-quoted with backslash escaping.
    String(String),
    /// Raw DOT text, written byte for byte without quoting or escaping.
    ///
    /// Useful for renderer escape sequences such as `\l` (left-justified line), e.g.
    /// `Literal("\"my left-aligned text\\l\"")`. The caller is responsible for producing
    /// valid DOT.
    Literal(String),
    /// HTML-like label content, written wrapped in `<` and `>`.
    Html(String),
}

impl AttributeValue {
    /// Creates a plain string value.
    pub fn string(value: impl Into<String>) -> Self {
        AttributeValue::String(value.into())
    }

    /// Creates a literal value that is written as-is.
    pub fn literal(value: impl Into<String>) -> Self {
        AttributeValue::Literal(value.into())
    }

    /// Creates an HTML label value.
    pub fn html(value: impl Into<String>) -> Self {
        AttributeValue::Html(value.into())
    }

    /// Returns the raw, unformatted value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            AttributeValue::String(value)
            | AttributeValue::Literal(value)
            | AttributeValue::Html(value) => value,
        }
    }

    /// Appends `key=<formatted value>` to `out`.
    fn push_entry(&self, key: &str, out: &mut String) {
        out.push_str(key);
        out.push('=');
        match self {
            AttributeValue::String(value) => {
                out.push('"');
                out.push_str(&escape_dot(value));
                out.push('"');
            }
            AttributeValue::Literal(value) => out.push_str(value),
            AttributeValue::Html(value) => {
                out.push('<');
                out.push_str(value);
                out.push('>');
            }
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<&String> for AttributeValue {
    fn from(value: &String) -> Self {
        AttributeValue::String(value.clone())
    }
}

/// Ordered key/value attribute store.
///
/// Keys are unique; setting an existing key overwrites its value. Iteration and output
/// follow ascending key order. Any type implementing `AsRef<str>` can be used as a key,
/// including [`Key`] and plain string slices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: BTreeMap<String, AttributeValue>,
}

impl Attributes {
    /// Creates an empty attribute store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for `key`, replacing any previous value.
    pub fn set(&mut self, key: impl AsRef<str>, value: impl Into<AttributeValue>) {
        self.entries.insert(key.as_ref().to_string(), value.into());
    }

    /// Sets a plain string value for `key`.
    pub fn set_string(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.set(key, AttributeValue::String(value.into()));
    }

    /// Sets a literal value for `key`.
    pub fn set_literal(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.set(key, AttributeValue::Literal(value.into()));
    }

    /// Sets an HTML label value for `key`.
    pub fn set_html(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.set(key, AttributeValue::Html(value.into()));
    }

    /// Sets every entry of `entries`, overwriting existing keys.
    pub fn set_all<K, V, I>(&mut self, entries: I)
    where
        K: AsRef<str>,
        V: Into<AttributeValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.set(key, value);
        }
    }

    /// Sets every entry of `entries` as a plain string value.
    pub fn set_all_strings<K, V, I>(&mut self, entries: I)
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.set_string(key, value);
        }
    }

    /// Sets every entry of `entries` as a literal value.
    pub fn set_all_literals<K, V, I>(&mut self, entries: I)
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.set_literal(key, value);
        }
    }

    /// Sets every entry of `entries` as an HTML label value.
    pub fn set_all_html<K, V, I>(&mut self, entries: I)
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.set_html(key, value);
        }
    }

    /// Returns the value stored for `key`, if any.
    #[must_use]
    pub fn get(&self, key: impl AsRef<str>) -> Option<&AttributeValue> {
        self.entries.get(key.as_ref())
    }

    /// Returns the raw value stored for `key`, or an empty string if unset.
    #[must_use]
    pub fn get_string(&self, key: impl AsRef<str>) -> String {
        self.get(key)
            .map(|value| value.as_str().to_string())
            .unwrap_or_default()
    }

    /// Removes `key`. Removing an absent key is a no-op.
    pub fn delete(&mut self, key: impl AsRef<str>) {
        self.entries.remove(key.as_ref());
    }

    /// Returns a copy of all entries.
    ///
    /// Mutating the returned map does not affect this store.
    #[must_use]
    pub fn all(&self) -> BTreeMap<String, AttributeValue> {
        self.entries.clone()
    }

    /// Returns an iterator over the entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Formats the store as DOT text.
    ///
    /// With `bracketed` the entries are joined by `,` and wrapped in `[...]`; otherwise
    /// every entry is terminated by `;`. An empty store formats to an empty string.
    #[must_use]
    pub fn to_dot_string(&self, bracketed: bool) -> String {
        if self.entries.is_empty() {
            return String::new();
        }

        let mut out = String::new();
        if bracketed {
            out.push('[');
        }
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if bracketed && index > 0 {
                out.push(',');
            }
            value.push_entry(key, &mut out);
            if !bracketed {
                out.push(';');
            }
        }
        if bracketed {
            out.push(']');
        }
        out
    }

    /// Writes the formatted store to `sink`.
    ///
    /// A non-empty store is emitted with a single write; an empty store writes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Write`] carrying the number of bytes the sink accepted
    /// if the sink fails.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W, bracketed: bool) -> Result<u64> {
        DotWriter::run(sink, |out| self.write_dot(out, bracketed))
    }

    pub(crate) fn write_dot<W: Write + ?Sized>(
        &self,
        out: &mut DotWriter<'_, W>,
        bracketed: bool,
    ) -> io::Result<()> {
        if self.entries.is_empty() {
            return Ok(());
        }
        out.write_str(&self.to_dot_string(bracketed))
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: AsRef<str>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        attributes.set_all(iter);
        attributes
    }
}

/// Implemented by entities that carry an attribute store.
///
/// Graphs, nodes and edges are shared handles, so their stores live behind a [`RefCell`]
/// and every method here takes `&self`. The setters return `&Self` for chaining.
///
/// # Examples
///
/// ```rust
/// use dotscribe::{attributes::{Key, Styleable}, Graph, GraphOptions};
///
/// let graph = Graph::new(GraphOptions::new())?;
/// let node = graph.node("n1");
/// node.set_attribute_string(Key::Color, "red")
///     .set_attribute_literal(Key::Label, "\"left\\l\"");
///
/// assert_eq!(node.attribute_string(Key::Color), "red");
/// # Ok::<(), dotscribe::Error>(())
/// ```
pub trait Styleable {
    /// Returns the cell holding this entity's attribute store.
    fn attribute_cell(&self) -> &RefCell<Attributes>;

    /// Borrows the attribute store.
    ///
    /// # Panics
    ///
    /// Panics if the store is currently borrowed mutably.
    fn attributes(&self) -> Ref<'_, Attributes> {
        self.attribute_cell().borrow()
    }

    /// Mutably borrows the attribute store.
    ///
    /// # Panics
    ///
    /// Panics if the store is currently borrowed.
    fn attributes_mut(&self) -> RefMut<'_, Attributes> {
        self.attribute_cell().borrow_mut()
    }

    /// Sets the value for `key`.
    fn set_attribute(&self, key: impl AsRef<str>, value: impl Into<AttributeValue>) -> &Self {
        self.attributes_mut().set(key, value);
        self
    }

    /// Sets a plain string value for `key`.
    fn set_attribute_string(&self, key: impl AsRef<str>, value: impl Into<String>) -> &Self {
        self.attributes_mut().set_string(key, value);
        self
    }

    /// Sets a literal value for `key`.
    fn set_attribute_literal(&self, key: impl AsRef<str>, value: impl Into<String>) -> &Self {
        self.attributes_mut().set_literal(key, value);
        self
    }

    /// Sets an HTML label value for `key`.
    fn set_attribute_html(&self, key: impl AsRef<str>, value: impl Into<String>) -> &Self {
        self.attributes_mut().set_html(key, value);
        self
    }

    /// Returns a copy of the value stored for `key`.
    fn attribute(&self, key: impl AsRef<str>) -> Option<AttributeValue> {
        self.attributes().get(key).cloned()
    }

    /// Returns the raw value stored for `key`, or an empty string if unset.
    fn attribute_string(&self, key: impl AsRef<str>) -> String {
        self.attributes().get_string(key)
    }

    /// Removes `key` from the store.
    fn delete_attribute(&self, key: impl AsRef<str>) -> &Self {
        self.attributes_mut().delete(key);
        self
    }

    /// Returns `true` if any attribute is set.
    fn has_attributes(&self) -> bool {
        !self.attributes().is_empty()
    }
}
