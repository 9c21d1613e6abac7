//! Dotted-address utilities for signal trees.
//!
//! An address like `"Signal1.sin_t"` names a node inside a nested tree of
//! named containers. This crate only deals with the string form: splitting
//! an address into segments, joining segments back, and the small algebra
//! over segment sequences (root test, ancestry, equality). Whether a
//! segment actually resolves to a child is decided by the tree traversal,
//! not here.
//!
//! # Example
//!
//! ```
//! use sigtree_address::{parse_address, format_address};
//!
//! let path = parse_address("Signal1.sin_t");
//! assert_eq!(path, vec!["Signal1".to_string(), "sin_t".to_string()]);
//!
//! let address = format_address(&path);
//! assert_eq!(address, "Signal1.sin_t");
//! ```

/// One segment of a dotted address.
pub type Segment = String;

/// A parsed address: an ordered sequence of segments, root-first.
pub type Address = Vec<Segment>;

/// Parse a dotted address string into segments.
///
/// Splits on `.` and drops empty segments, so leading, trailing, and
/// doubled dots are tolerated rather than rejected. The empty string
/// yields an empty sequence, which addresses the root itself. No
/// existence checking happens here; an unknown segment fails later, at
/// the point of descent.
///
/// # Example
///
/// ```
/// use sigtree_address::parse_address;
///
/// assert_eq!(parse_address(""), Vec::<String>::new());
/// assert_eq!(parse_address("a.b"), vec!["a", "b"]);
/// assert_eq!(parse_address(".a..b."), vec!["a", "b"]);
/// ```
pub fn parse_address(address: &str) -> Address {
    address
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Format segments back into a dotted address string.
///
/// Returns the empty string for the root (no segments). Inverse of
/// [`parse_address`] up to empty-segment normalization.
///
/// # Example
///
/// ```
/// use sigtree_address::format_address;
///
/// assert_eq!(format_address(&[]), "");
/// assert_eq!(format_address(&["a".to_string(), "b".to_string()]), "a.b");
/// ```
pub fn format_address(path: &[Segment]) -> String {
    path.join(".")
}

/// Check if a path addresses the root node.
///
/// # Example
///
/// ```
/// use sigtree_address::is_root;
///
/// assert!(is_root(&[]));
/// assert!(!is_root(&["a".to_string()]));
/// ```
pub fn is_root(path: &[Segment]) -> bool {
    path.is_empty()
}

/// Check if `parent` is a strict ancestor of `child`.
///
/// # Example
///
/// ```
/// use sigtree_address::is_child;
///
/// let parent = vec!["a".to_string()];
/// let child = vec!["a".to_string(), "b".to_string()];
/// assert!(is_child(&parent, &child));
/// assert!(!is_child(&child, &parent));
/// assert!(!is_child(&parent, &parent));
/// ```
pub fn is_child(parent: &[Segment], child: &[Segment]) -> bool {
    parent.len() < child.len() && parent == &child[..parent.len()]
}

/// Check if two paths address the same node.
pub fn is_address_equal(a: &[Segment], b: &[Segment]) -> bool {
    a == b
}
