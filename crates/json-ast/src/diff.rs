//! Structural diff over [`JsonValue`] trees.
//!
//! Like [`merge`](crate::merge), this is a collaborator of the value
//! algebra rather than part of it: the algebra promises values can be
//! diffed, the decomposition policy lives here.

use crate::merge::Mergeable;
use crate::value::{Field, JsonValue};

/// The outcome of diffing one value against another, decomposed into what
/// changed in place, what only the right side has, and what only the left
/// side has. Components with no content are `Nothing`.
#[derive(Debug, Clone, PartialEq)]
pub struct Diff {
    pub changed: JsonValue,
    pub added: JsonValue,
    pub deleted: JsonValue,
}

impl Diff {
    /// A diff with no content in any component.
    pub fn empty() -> Diff {
        Diff {
            changed: JsonValue::Nothing,
            added: JsonValue::Nothing,
            deleted: JsonValue::Nothing,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.changed.is_nothing() && self.added.is_nothing() && self.deleted.is_nothing()
    }

    /// Applies `f` to each component that has content; `Nothing` stays
    /// `Nothing`.
    pub fn map<F>(self, f: F) -> Diff
    where
        F: Fn(JsonValue) -> JsonValue,
    {
        let apply = |value: JsonValue| match value {
            JsonValue::Nothing => JsonValue::Nothing,
            other => f(other),
        };
        Diff {
            changed: apply(self.changed),
            added: apply(self.added),
            deleted: apply(self.deleted),
        }
    }

    /// Componentwise deep merge of two diffs.
    fn merge(self, other: Diff) -> Diff {
        Diff {
            changed: self.changed.merge(other.changed),
            added: self.added.merge(other.added),
            deleted: self.deleted.merge(other.deleted),
        }
    }

    /// Componentwise concatenation, used when combining positional array
    /// element diffs.
    fn concat(self, other: Diff) -> Diff {
        Diff {
            changed: self.changed.concat(other.changed),
            added: self.added.concat(other.added),
            deleted: self.deleted.concat(other.deleted),
        }
    }
}

/// The diff capability the value algebra exposes to consumers.
pub trait Diffable {
    /// Computes the structural difference from `self` to `other`.
    fn diff(&self, other: &Self) -> Diff;
}

impl Diffable for JsonValue {
    /// Decomposition rules:
    ///
    /// - Equal values produce an empty diff.
    /// - Objects diff field-wise by name; each field's diff is wrapped back
    ///   into a single-field object and the per-field results merge.
    ///   Left-only fields land in `deleted`, right-only fields in `added`.
    /// - Arrays diff positionally; a longer left tail lands in `deleted`,
    ///   a longer right tail in `added`.
    /// - Against `Nothing`, the present side is wholly added or deleted.
    /// - Anything else is a replacement: `changed` carries the right value.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_ast::{Diffable, JsonValue};
    ///
    /// let before = JsonValue::Object(vec![
    ///     ("name".to_string(), JsonValue::from("joe")),
    ///     ("age".to_string(), JsonValue::from(10)),
    /// ]);
    /// let after = JsonValue::Object(vec![
    ///     ("name".to_string(), JsonValue::from("joe")),
    ///     ("age".to_string(), JsonValue::from(11)),
    /// ]);
    ///
    /// let diff = before.diff(&after);
    /// assert_eq!(
    ///     diff.changed,
    ///     JsonValue::Object(vec![("age".to_string(), JsonValue::from(11))]),
    /// );
    /// assert!(diff.added.is_nothing());
    /// assert!(diff.deleted.is_nothing());
    /// ```
    fn diff(&self, other: &JsonValue) -> Diff {
        match (self, other) {
            (x, y) if x == y => Diff::empty(),
            (JsonValue::Object(xs), JsonValue::Object(ys)) => diff_fields(xs, ys),
            (JsonValue::Array(xs), JsonValue::Array(ys)) => diff_values(xs, ys),
            (JsonValue::Nothing, y) => Diff {
                changed: JsonValue::Nothing,
                added: y.clone(),
                deleted: JsonValue::Nothing,
            },
            (x, JsonValue::Nothing) => Diff {
                changed: JsonValue::Nothing,
                added: JsonValue::Nothing,
                deleted: x.clone(),
            },
            (_, y) => Diff {
                changed: y.clone(),
                added: JsonValue::Nothing,
                deleted: JsonValue::Nothing,
            },
        }
    }
}

fn diff_fields(xs: &[Field], ys: &[Field]) -> Diff {
    let mut pool: Vec<&Field> = ys.iter().collect();
    let mut acc = Diff::empty();

    for (name, x) in xs {
        match pool.iter().position(|(other, _)| other == name) {
            Some(found) => {
                let (_, y) = pool.remove(found);
                let field_diff = x
                    .diff(y)
                    .map(|value| JsonValue::Object(vec![(name.clone(), value)]));
                acc = acc.merge(field_diff);
            }
            None => {
                acc = acc.merge(Diff {
                    changed: JsonValue::Nothing,
                    added: JsonValue::Nothing,
                    deleted: JsonValue::Object(vec![(name.clone(), x.clone())]),
                });
            }
        }
    }

    if !pool.is_empty() {
        acc = acc.merge(Diff {
            changed: JsonValue::Nothing,
            added: JsonValue::Object(pool.into_iter().cloned().collect()),
            deleted: JsonValue::Nothing,
        });
    }
    acc
}

fn diff_values(xs: &[JsonValue], ys: &[JsonValue]) -> Diff {
    let mut acc = Diff::empty();
    for (x, y) in xs.iter().zip(ys) {
        acc = acc.concat(x.diff(y));
    }

    let common = xs.len().min(ys.len());
    if xs.len() > common {
        acc.deleted = acc.deleted.concat(JsonValue::Array(xs[common..].to_vec()));
    } else if ys.len() > common {
        acc.added = acc.added.concat(JsonValue::Array(ys[common..].to_vec()));
    }
    acc
}
