//! Core types for the signal-tree editing module.

use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;

pub use sigtree_address::{Address, Segment};

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditError {
    /// Target selector is not one of `""`, `"Time"`, `"Data"`.
    #[error("INVALID_TARGET: {0:?}")]
    InvalidTarget(String),

    /// A collection root carries two elements with the same name.
    #[error("DUPLICATE_ELEMENT_NAME: {0:?}")]
    DuplicateElementName(String),

    /// A path segment did not resolve to an existing child. `prefix` is
    /// the dotted form of the segments consumed before the failure.
    #[error("ADDRESS_NOT_FOUND: no child {segment:?} under {prefix:?}")]
    AddressNotFound { segment: String, prefix: String },

    /// Descent or rebuild was attempted through a node kind that has no
    /// traversal rule, such as a series with path segments remaining.
    #[error("UNSUPPORTED_NODE_TYPE: cannot descend into {kind}")]
    UnsupportedNodeType { kind: &'static str },

    /// The transform returned a [`Selected`] variant that does not match
    /// the active target selector.
    #[error("INVALID_TRANSFORM: returned {got}, expected {expected}")]
    InvalidTransform {
        expected: &'static str,
        got: &'static str,
    },

    /// Failure raised by the caller's transform, propagated unchanged.
    #[error("TRANSFORM: {0}")]
    Transform(String),
}

// ── Node ──────────────────────────────────────────────────────────────────

/// Order-preserving map of field name to child node.
pub type Fields = IndexMap<String, Node>;

/// A value in the polymorphic tree being edited.
///
/// The set of kinds is closed: every traversal in this crate matches
/// exhaustively, so adding a kind is a compile error at each site that
/// must learn about it rather than a runtime fallthrough.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Ordered sequence of uniquely named elements.
    Collection(Collection),
    /// Named wrapper around a single inner values container.
    Signal(Signal),
    /// Plain field map, insertion order preserved.
    Map(Fields),
    /// Terminal time-series leaf.
    Series(Series),
}

impl Node {
    /// Runtime tag name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Collection(_) => "collection",
            Node::Signal(_) => "signal",
            Node::Map(_) => "map",
            Node::Series(_) => "series",
        }
    }
}

/// Ordered sequence of named elements. Element names are unique; this is
/// a precondition of [`edit`](crate::edit::edit), checked at entry when
/// the collection is the root, not re-derived here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Collection {
    pub elements: Vec<Element>,
}

/// One named slot in a [`Collection`].
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub node: Node,
}

impl Element {
    pub fn new(name: impl Into<String>, node: Node) -> Self {
        Element {
            name: name.into(),
            node,
        }
    }
}

impl Collection {
    pub fn new(elements: Vec<Element>) -> Self {
        Collection { elements }
    }

    /// Look up an element's node by name.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.elements
            .iter()
            .find(|el| el.name == name)
            .map(|el| &el.node)
    }

    /// Position of the element with the given name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.elements.iter().position(|el| el.name == name)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl From<Collection> for Node {
    fn from(c: Collection) -> Node {
        Node::Collection(c)
    }
}

/// A named signal wrapping one inner values container.
///
/// The wrapper is transparent to addressing: a segment consumed at a
/// signal resolves against the children of `values`, which by
/// construction is a [`Node::Map`] or [`Node::Collection`].
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub name: String,
    pub values: Box<Node>,
}

impl Signal {
    pub fn new(name: impl Into<String>, values: Node) -> Self {
        Signal {
            name: name.into(),
            values: Box::new(values),
        }
    }
}

impl From<Signal> for Node {
    fn from(s: Signal) -> Node {
        Node::Signal(s)
    }
}

/// Terminal leaf holding the two opaque facets of a time series. The
/// core never looks inside the payloads; it only copies and replaces
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub time: Value,
    pub data: Value,
}

impl Series {
    pub fn new(time: Value, data: Value) -> Self {
        Series { time, data }
    }
}

impl From<Series> for Node {
    fn from(s: Series) -> Node {
        Node::Series(s)
    }
}

// ── Target selector ───────────────────────────────────────────────────────

/// Which part of each reached series is handed to the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The whole series; the transform's return replaces it wholesale.
    Whole,
    /// Only the time facet; the data facet is untouched.
    Time,
    /// Only the data facet; the time facet is untouched.
    Data,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Whole => "",
            Target::Time => "Time",
            Target::Data => "Data",
        }
    }

    /// Parse the caller-facing selector string. The empty string selects
    /// the whole series.
    pub fn from_str(s: &str) -> Result<Self, EditError> {
        match s {
            "" => Ok(Target::Whole),
            "Time" => Ok(Target::Time),
            "Data" => Ok(Target::Data),
            other => Err(EditError::InvalidTarget(other.to_string())),
        }
    }
}

// ── Selected ──────────────────────────────────────────────────────────────

/// What the transform receives at each series, and what it must return.
/// The variant always matches the active [`Target`]; returning a
/// different variant fails the edit with [`EditError::InvalidTransform`].
#[derive(Debug, Clone, PartialEq)]
pub enum Selected {
    Whole(Series),
    Time(Value),
    Data(Value),
}

impl Selected {
    /// Runtime tag name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Selected::Whole(_) => "Whole",
            Selected::Time(_) => "Time",
            Selected::Data(_) => "Data",
        }
    }
}
