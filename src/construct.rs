//! The fundamental constructs of a parsed source text.
//!
//! - Anchors = (Namespace?, Name), one per statement endpoint
//! - Modifiers = {key: Value}, typed annotations on a statement
//! - Statements = (Source anchor, Target anchor, Modifiers)
//! - Documents = (Statements, Comments)
//!
//! All constructs are flat and owned by value. A document is built once by
//! [`crate::stl::parse`] and never mutated afterwards, which is why fields
//! are encapsulated and only exposed through getters.

// used to keep modifier keys in a stable order when serialized
use std::collections::BTreeMap;

// used to print out readable forms of a construct
use std::fmt;

use serde::Serialize;

use crate::datatype::{DataType, Value};

// ------------- Anchor -------------
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Anchor {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    raw: String, // trimmed bracket contents, kept verbatim for exact-match lookups
}

impl Anchor {
    pub fn new(namespace: Option<String>, name: String, raw: String) -> Self {
        Self {
            name,
            namespace,
            raw,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }
    pub fn raw(&self) -> &str {
        &self.raw
    }
    pub fn in_namespace(&self, namespace: &str) -> bool {
        self.namespace.as_deref() == Some(namespace)
    }
}
impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.raw)
    }
}

// ------------- Modifiers -------------
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Modifiers {
    values: BTreeMap<String, Value>,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }
    /// Later writes win, which is how several `::mod(...)` blocks combine.
    pub fn insert(&mut self, key: String, value: Value) {
        self.values.insert(key, value);
    }
    pub fn merge(&mut self, other: Modifiers) {
        self.values.extend(other.values);
    }
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let pairs: Vec<String> = self
            .values
            .iter()
            .map(|(k, v)| match v {
                Value::Text(s) => format!("{}=\"{}\"", k, s),
                _ => format!("{}={}", k, v),
            })
            .collect();
        write!(f, "::mod({})", pairs.join(", "))
    }
}

// ------------- Statement -------------
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    source: Anchor,
    target: Anchor,
    modifiers: Modifiers,
}

impl Statement {
    pub fn new(source: Anchor, target: Anchor, modifiers: Modifiers) -> Self {
        Self {
            source,
            target,
            modifiers,
        }
    }
    pub fn source(&self) -> &Anchor {
        &self.source
    }
    pub fn target(&self) -> &Anchor {
        &self.target
    }
    pub fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }
    pub fn modifier(&self, key: &str) -> Option<&Value> {
        self.modifiers.get(key)
    }
    /// Typed lookup; a value of another kind reads as absent.
    pub fn modifier_as<T: DataType>(&self, key: &str) -> Option<T> {
        self.modifiers.get(key).and_then(T::convert)
    }
}
impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{} -> {}", self.source, self.target)
        } else {
            write!(f, "{} -> {} {}", self.source, self.target, self.modifiers)
        }
    }
}

// ------------- Document -------------
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    statements: Vec<Statement>, // in source order
    comments: Vec<String>,
}

impl Document {
    pub fn new(statements: Vec<Statement>, comments: Vec<String>) -> Self {
        Self {
            statements,
            comments,
        }
    }
    pub fn parse(text: &str) -> Self {
        crate::stl::parse(text)
    }
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }
    pub fn comments(&self) -> &[String] {
        &self.comments
    }
    pub fn len(&self) -> usize {
        self.statements.len()
    }
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
