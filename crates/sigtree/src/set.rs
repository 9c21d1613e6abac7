//! Rebuild: splice a replacement subtree into a root at a given path.

use sigtree_address::{format_address, is_root, Segment};

use crate::types::{EditError, Element, Node, Signal};

fn not_found(segment: &str, prefix: &[Segment]) -> EditError {
    EditError::AddressNotFound {
        segment: segment.to_string(),
        prefix: format_address(prefix),
    }
}

/// Return a new root identical to `root` except that the node at `path`
/// is `replacement`.
///
/// The root is consumed; only the spine from the root down to the
/// replaced node is reconstructed, and every container on it keeps its
/// element order, names, and keys. An empty path returns `replacement`
/// directly, discarding the old root.
///
/// Within [`edit`](crate::edit::edit) the same path has already been
/// resolved by [`get`](crate::get::get), so the error arms here mirror
/// the navigator's defensively rather than assume success:
/// [`EditError::AddressNotFound`] for a missing child and
/// [`EditError::UnsupportedNodeType`] for segments remaining at a
/// series.
pub fn set(root: Node, path: &[Segment], replacement: Node) -> Result<Node, EditError> {
    if is_root(path) {
        return Ok(replacement);
    }
    splice(root, path, 0, replacement)
}

fn splice(
    node: Node,
    path: &[Segment],
    consumed: usize,
    replacement: Node,
) -> Result<Node, EditError> {
    if consumed == path.len() {
        return Ok(replacement);
    }
    let segment = &path[consumed];
    let kind = node.kind();
    match node {
        Node::Collection(mut c) => {
            let index = c
                .index_of(segment)
                .ok_or_else(|| not_found(segment, &path[..consumed]))?;
            let el = c.elements.remove(index);
            let node = splice(el.node, path, consumed + 1, replacement)?;
            c.elements.insert(index, Element { name: el.name, node });
            Ok(Node::Collection(c))
        }
        // The wrapper is transparent: the segment is consumed by the
        // inner container, not by the signal itself.
        Node::Signal(s) => {
            let values = splice(*s.values, path, consumed, replacement)?;
            Ok(Node::Signal(Signal {
                name: s.name,
                values: Box::new(values),
            }))
        }
        Node::Map(mut fields) => {
            let (index, name, child) = fields
                .shift_remove_full(segment.as_str())
                .ok_or_else(|| not_found(segment, &path[..consumed]))?;
            let child = splice(child, path, consumed + 1, replacement)?;
            fields.shift_insert(index, name, child);
            Ok(Node::Map(fields))
        }
        Node::Series(_) => Err(EditError::UnsupportedNodeType { kind }),
    }
}
