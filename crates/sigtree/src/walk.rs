//! Walk: rebuild a subtree with the transform applied at every series.

use crate::types::{Collection, EditError, Element, Fields, Node, Selected, Series, Signal, Target};

/// Rebuild `node` with `f` applied once at every series beneath it, in
/// document order.
///
/// Containers come back with the same arity, names, and ordering; only
/// series content changes. At each series the transform receives the
/// [`Selected`] variant matching `target` and must return the same
/// variant: the whole series for [`Target::Whole`], or just the selected
/// facet for [`Target::Time`] / [`Target::Data`], the other facet
/// untouched. A wrong-variant return fails with
/// [`EditError::InvalidTransform`]; any error the transform itself
/// returns aborts the walk immediately, so no partially transformed
/// tree escapes.
pub fn walk<F>(node: Node, target: Target, f: &mut F) -> Result<Node, EditError>
where
    F: FnMut(Selected) -> Result<Selected, EditError>,
{
    match node {
        Node::Collection(c) => {
            let mut elements = Vec::with_capacity(c.elements.len());
            for el in c.elements {
                elements.push(Element {
                    name: el.name,
                    node: walk(el.node, target, f)?,
                });
            }
            Ok(Node::Collection(Collection { elements }))
        }
        Node::Signal(s) => {
            let values = walk(*s.values, target, f)?;
            Ok(Node::Signal(Signal {
                name: s.name,
                values: Box::new(values),
            }))
        }
        Node::Map(fields) => {
            let mut out = Fields::with_capacity(fields.len());
            for (name, child) in fields {
                out.insert(name, walk(child, target, f)?);
            }
            Ok(Node::Map(out))
        }
        Node::Series(series) => apply(series, target, f),
    }
}

/// Base case: hand the selected part of one series to the transform and
/// fold its result back in.
fn apply<F>(series: Series, target: Target, f: &mut F) -> Result<Node, EditError>
where
    F: FnMut(Selected) -> Result<Selected, EditError>,
{
    let rebuilt = match target {
        Target::Whole => match f(Selected::Whole(series))? {
            Selected::Whole(s) => s,
            other => return Err(wrong_variant(target, &other)),
        },
        Target::Time => match f(Selected::Time(series.time))? {
            Selected::Time(time) => Series {
                time,
                data: series.data,
            },
            other => return Err(wrong_variant(target, &other)),
        },
        Target::Data => match f(Selected::Data(series.data))? {
            Selected::Data(data) => Series {
                time: series.time,
                data,
            },
            other => return Err(wrong_variant(target, &other)),
        },
    };
    Ok(Node::Series(rebuilt))
}

fn wrong_variant(target: Target, got: &Selected) -> EditError {
    EditError::InvalidTransform {
        expected: match target {
            Target::Whole => "Whole",
            Target::Time => "Time",
            Target::Data => "Data",
        },
        got: got.kind(),
    }
}
