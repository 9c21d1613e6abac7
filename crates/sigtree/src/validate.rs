//! Entry validation run before any traversal.

use std::collections::HashSet;

use crate::types::{Collection, EditError};

/// Reject a collection whose element names are not unique.
///
/// Element-name uniqueness is a precondition of every lookup-by-name in
/// the edit pipeline, so [`edit`](crate::edit::edit) runs this on a
/// collection root before parsing the address or touching the tree. It
/// is not re-run on the rebuilt output.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use sigtree::{validate_unique_names, Collection, Element, Series};
///
/// let dup = Collection::new(vec![
///     Element::new("a", Series::new(json!([0]), json!([1])).into()),
///     Element::new("a", Series::new(json!([2]), json!([3])).into()),
/// ]);
/// assert!(validate_unique_names(&dup).is_err());
/// ```
pub fn validate_unique_names(collection: &Collection) -> Result<(), EditError> {
    let mut seen = HashSet::with_capacity(collection.len());
    for el in &collection.elements {
        if !seen.insert(el.name.as_str()) {
            return Err(EditError::DuplicateElementName(el.name.clone()));
        }
    }
    Ok(())
}
