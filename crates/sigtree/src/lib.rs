//! sigtree — deep editing of nested signal trees.
//!
//! A signal tree is a heterogeneous nest of named containers: ordered
//! [`Collection`]s of uniquely named elements, named [`Signal`] wrappers
//! around a values container, plain field [`Map`](Node::Map)s, and
//! terminal [`Series`] leaves carrying opaque `Time`/`Data` payloads.
//! [`edit`] addresses a node with a dotted address like
//! `"Signal1.sin_t"`, applies a caller-supplied transform to every
//! series at or beneath it, and returns a new tree with everything
//! outside the addressed subtree untouched.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use sigtree::{edit, Collection, Element, Node, Selected, Series, Signal};
//!
//! let mut values = sigtree::Fields::new();
//! values.insert(
//!     "sin_t".to_string(),
//!     Series::new(json!([0.0, 1.0]), json!([0.0, 0.84])).into(),
//! );
//! let root: Node = Collection::new(vec![Element::new(
//!     "Signal1",
//!     Signal::new("Signal1", Node::Map(values)).into(),
//! )])
//! .into();
//!
//! // Shift every Time value under Signal1 by one.
//! let shifted = edit(root, "Signal1", "Time", |sel| match sel {
//!     Selected::Time(t) => Ok(Selected::Time(json!(t
//!         .as_array()
//!         .unwrap()
//!         .iter()
//!         .map(|x| x.as_f64().unwrap() + 1.0)
//!         .collect::<Vec<_>>()))),
//!     other => Ok(other),
//! })
//! .unwrap();
//! # let _ = shifted;
//! ```

pub mod edit;
pub mod get;
pub mod set;
pub mod types;
pub mod validate;
pub mod walk;

pub use edit::{edit, edit_all, edit_each};
pub use get::{get, get_by_address};
pub use set::set;
pub use types::{
    Collection, EditError, Element, Fields, Node, Selected, Series, Signal, Target,
};
pub use validate::validate_unique_names;
pub use walk::walk;
