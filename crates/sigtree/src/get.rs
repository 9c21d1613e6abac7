//! Navigation: descend from a root node along parsed address segments.

use sigtree_address::{format_address, parse_address, Segment};

use crate::types::{EditError, Node};

fn not_found(segment: &str, prefix: &[Segment]) -> EditError {
    EditError::AddressNotFound {
        segment: segment.to_string(),
        prefix: format_address(prefix),
    }
}

/// Resolve one segment against a node's children.
///
/// A signal is transparent: the segment is resolved against its inner
/// values container rather than the wrapper itself.
fn step<'a>(node: &'a Node, segment: &str, prefix: &[Segment]) -> Result<&'a Node, EditError> {
    match node {
        Node::Collection(c) => c.get(segment).ok_or_else(|| not_found(segment, prefix)),
        Node::Signal(s) => step(&s.values, segment, prefix),
        Node::Map(fields) => fields.get(segment).ok_or_else(|| not_found(segment, prefix)),
        Node::Series(_) => Err(EditError::UnsupportedNodeType { kind: node.kind() }),
    }
}

/// Get the node at `path`, consuming segments one at a time.
///
/// An empty path returns the root itself. A segment with no matching
/// child fails with [`EditError::AddressNotFound`] carrying the failing
/// segment and the prefix consumed so far; segments remaining at a
/// series fail with [`EditError::UnsupportedNodeType`].
///
/// The node comes back by shared reference; callers that go on to edit
/// clone it and splice a rebuilt copy back with [`set`](crate::set::set),
/// so the original tree is never mutated through this return value.
pub fn get<'a>(root: &'a Node, path: &[Segment]) -> Result<&'a Node, EditError> {
    let mut current = root;
    for (consumed, segment) in path.iter().enumerate() {
        current = step(current, segment, &path[..consumed])?;
    }
    Ok(current)
}

/// Parse a dotted address and get the node it names.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use sigtree::{get_by_address, Element, Collection, Node, Series};
///
/// let root: Node = Collection::new(vec![Element::new(
///     "s",
///     Series::new(json!([0, 1]), json!([10, 20])).into(),
/// )])
/// .into();
/// assert!(matches!(get_by_address(&root, "s"), Ok(Node::Series(_))));
/// assert!(get_by_address(&root, "missing").is_err());
/// ```
pub fn get_by_address<'a>(root: &'a Node, address: &str) -> Result<&'a Node, EditError> {
    get(root, &parse_address(address))
}
