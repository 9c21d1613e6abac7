//! The `edit` entry points: validate, then pipeline parse → get → walk
//! → set.

use sigtree_address::parse_address;

use crate::get::get;
use crate::set::set;
use crate::types::{EditError, Node, Selected, Target};
use crate::validate::validate_unique_names;
use crate::walk::walk;

/// Apply `f` to every series at or beneath `address`, returning a new
/// root with the transformed subtree spliced back in.
///
/// `target` selects what each series hands to the transform: `""` for
/// the whole series, `"Time"` or `"Data"` for one facet (anything else
/// is [`EditError::InvalidTarget`]). A collection root is checked for
/// unique element names before any traversal. The root is consumed;
/// on success the caller gets the fully rebuilt tree, on error nothing
/// half-applied — the walk runs on a clone of the addressed subtree and
/// is only spliced in once it has fully succeeded.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use sigtree::{edit, Collection, Element, Node, Selected, Series};
///
/// let root: Node = Collection::new(vec![Element::new(
///     "s",
///     Series::new(json!([0.0, 1.0]), json!([10.0, 20.0])).into(),
/// )])
/// .into();
///
/// let out = edit(root, "s", "Time", |sel| match sel {
///     Selected::Time(t) => Ok(Selected::Time(json!(t
///         .as_array()
///         .unwrap()
///         .iter()
///         .map(|x| x.as_f64().unwrap() + 1.0)
///         .collect::<Vec<_>>()))),
///     other => Ok(other),
/// })
/// .unwrap();
///
/// let expected: Node = Collection::new(vec![Element::new(
///     "s",
///     Series::new(json!([1.0, 2.0]), json!([10.0, 20.0])).into(),
/// )])
/// .into();
/// assert_eq!(out, expected);
/// ```
pub fn edit<F>(data: Node, address: &str, target: &str, mut f: F) -> Result<Node, EditError>
where
    F: FnMut(Selected) -> Result<Selected, EditError>,
{
    let target = Target::from_str(target)?;
    if let Node::Collection(c) = &data {
        validate_unique_names(c)?;
    }
    let path = parse_address(address);
    let sub = get(&data, &path)?.clone();
    let sub = walk(sub, target, &mut f)?;
    set(data, &path, sub)
}

/// Fold [`edit`] over a list of addresses: each address is applied to
/// the result of the previous one, so later addresses see earlier
/// edits. The first failure aborts the fold.
pub fn edit_all<F, S>(
    data: Node,
    addresses: &[S],
    target: &str,
    mut f: F,
) -> Result<Node, EditError>
where
    F: FnMut(Selected) -> Result<Selected, EditError>,
    S: AsRef<str>,
{
    let mut current = data;
    for address in addresses {
        current = edit(current, address.as_ref(), target, &mut f)?;
    }
    Ok(current)
}

/// Apply [`edit`] independently to each root in a sequence, collecting
/// the results in order. The first failure aborts the whole batch; no
/// partially edited sequence is returned.
pub fn edit_each<F>(
    roots: Vec<Node>,
    address: &str,
    target: &str,
    mut f: F,
) -> Result<Vec<Node>, EditError>
where
    F: FnMut(Selected) -> Result<Selected, EditError>,
{
    let mut out = Vec::with_capacity(roots.len());
    for root in roots {
        out.push(edit(root, address, target, &mut f)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Collection, Element, Fields, Series, Signal};
    use serde_json::{json, Value};

    fn leaf(t: i64, d: i64) -> Node {
        Series::new(json!([t]), json!([d])).into()
    }

    fn fixture() -> Node {
        let mut values = Fields::new();
        values.insert("sin_t".to_string(), leaf(0, 1));
        values.insert("cos_t".to_string(), leaf(0, 2));
        Collection::new(vec![
            Element::new("Signal1", Signal::new("Signal1", Node::Map(values)).into()),
            Element::new("Signal2", leaf(5, 6)),
        ])
        .into()
    }

    fn bump(v: Value) -> Value {
        json!(v
            .as_array()
            .unwrap()
            .iter()
            .map(|x| x.as_i64().unwrap() + 1)
            .collect::<Vec<_>>())
    }

    fn bump_data(sel: Selected) -> Result<Selected, EditError> {
        match sel {
            Selected::Data(d) => Ok(Selected::Data(bump(d))),
            other => Ok(other),
        }
    }

    #[test]
    fn identity_on_root_address() {
        let root = fixture();
        let out = edit(root.clone(), "", "", |sel| Ok(sel)).unwrap();
        assert_eq!(out, root);
    }

    #[test]
    fn edits_only_beneath_the_address() {
        let out = edit(fixture(), "Signal1", "Data", bump_data).unwrap();
        let Node::Collection(c) = &out else {
            panic!("expected collection root");
        };
        // Sibling untouched
        assert_eq!(c.elements[1].node, leaf(5, 6));
        let Node::Signal(s) = &c.elements[0].node else {
            panic!("expected signal");
        };
        let Node::Map(fields) = s.values.as_ref() else {
            panic!("expected map");
        };
        assert_eq!(fields["sin_t"], leaf(0, 2));
        assert_eq!(fields["cos_t"], leaf(0, 3));
    }

    #[test]
    fn invalid_target_is_rejected_first() {
        let err = edit(fixture(), "Signal1", "data", |sel| Ok(sel)).unwrap_err();
        assert_eq!(err, EditError::InvalidTarget("data".to_string()));
    }

    #[test]
    fn duplicate_root_names_rejected_before_traversal() {
        let root: Node = Collection::new(vec![
            Element::new("a", leaf(0, 0)),
            Element::new("a", leaf(1, 1)),
        ])
        .into();
        let mut calls = 0usize;
        let err = edit(root, "a", "", |sel| {
            calls += 1;
            Ok(sel)
        })
        .unwrap_err();
        assert_eq!(err, EditError::DuplicateElementName("a".to_string()));
        assert_eq!(calls, 0, "transform must never run on a rejected root");
    }

    #[test]
    fn missing_segment_fails_before_transform_runs() {
        let mut calls = 0usize;
        let err = edit(fixture(), "Signal1.tan_t", "", |sel| {
            calls += 1;
            Ok(sel)
        })
        .unwrap_err();
        assert_eq!(
            err,
            EditError::AddressNotFound {
                segment: "tan_t".to_string(),
                prefix: "Signal1".to_string(),
            }
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn duplicate_names_below_root_are_not_checked() {
        // Uniqueness is an entry precondition on the root only
        let inner = Collection::new(vec![
            Element::new("x", leaf(0, 0)),
            Element::new("x", leaf(1, 1)),
        ]);
        let root: Node =
            Collection::new(vec![Element::new("outer", inner.into())]).into();
        assert!(edit(root, "", "", |sel| Ok(sel)).is_ok());
    }

    #[test]
    fn non_collection_roots_are_accepted() {
        // Map root
        let mut fields = Fields::new();
        fields.insert("s".to_string(), leaf(1, 2));
        let out = edit(Node::Map(fields), "s", "Data", bump_data).unwrap();
        let Node::Map(fields) = &out else {
            panic!("expected map root");
        };
        assert_eq!(fields["s"], leaf(1, 3));

        // Bare series root
        let out = edit(leaf(1, 2), "", "Data", bump_data).unwrap();
        assert_eq!(out, leaf(1, 3));

        // Signal root
        let mut inner = Fields::new();
        inner.insert("s".to_string(), leaf(1, 2));
        let root: Node = Signal::new("sig", Node::Map(inner)).into();
        let out = edit(root, "s", "Data", bump_data).unwrap();
        let Node::Signal(s) = &out else {
            panic!("expected signal root");
        };
        let Node::Map(fields) = s.values.as_ref() else {
            panic!("expected map");
        };
        assert_eq!(fields["s"], leaf(1, 3));
    }

    #[test]
    fn edit_all_accumulates_across_addresses() {
        let folded =
            edit_all(fixture(), &["Signal1", "Signal2"], "Data", bump_data).unwrap();
        let nested = edit(
            edit(fixture(), "Signal1", "Data", bump_data).unwrap(),
            "Signal2",
            "Data",
            bump_data,
        )
        .unwrap();
        assert_eq!(folded, nested);
    }

    #[test]
    fn edit_all_repeated_address_compounds() {
        let out = edit_all(leaf(0, 0), &["", ""], "Data", bump_data).unwrap();
        assert_eq!(out, leaf(0, 2));
    }

    #[test]
    fn edit_each_maps_roots_independently() {
        let out = edit_each(vec![leaf(0, 0), leaf(1, 1)], "", "Data", bump_data).unwrap();
        assert_eq!(out, vec![leaf(0, 1), leaf(1, 2)]);
    }

    #[test]
    fn edit_each_aborts_on_first_failure() {
        let roots = vec![fixture(), fixture()];
        let mut calls = 0usize;
        let err = edit_each(roots, "missing", "", |sel| {
            calls += 1;
            Ok(sel)
        })
        .unwrap_err();
        assert!(matches!(err, EditError::AddressNotFound { .. }));
        assert_eq!(calls, 0);
    }
}
