//! Deep merge over [`JsonValue`] trees.
//!
//! Lives outside the value module on purpose: the algebra only promises
//! that values *can* be merged; the policy of how two trees combine is
//! owned here.

use crate::value::{Field, JsonValue};

/// The merge capability the value algebra exposes to consumers.
pub trait Mergeable {
    /// Combines two values into one, right operand taking precedence where
    /// the trees conflict.
    fn merge(self, other: Self) -> Self;
}

impl Mergeable for JsonValue {
    /// Deep merge:
    ///
    /// - Two objects merge field-wise by name, recursively.
    /// - Two arrays merge element-wise by equality: a left element that has
    ///   an equal counterpart on the right merges with it (and consumes
    ///   it), everything else is kept, leftovers from the right append.
    /// - `Nothing` on either side yields the other operand.
    /// - Any other combination resolves to the right operand.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_ast::{JsonValue, Mergeable};
    ///
    /// let base = JsonValue::Object(vec![
    ///     ("name".to_string(), JsonValue::from("joe")),
    ///     ("age".to_string(), JsonValue::from(10)),
    /// ]);
    /// let update = JsonValue::Object(vec![
    ///     ("age".to_string(), JsonValue::from(11)),
    /// ]);
    ///
    /// let merged = base.merge(update);
    /// assert_eq!(merged, JsonValue::Object(vec![
    ///     ("name".to_string(), JsonValue::from("joe")),
    ///     ("age".to_string(), JsonValue::from(11)),
    /// ]));
    /// ```
    fn merge(self, other: JsonValue) -> JsonValue {
        match (self, other) {
            (JsonValue::Object(xs), JsonValue::Object(ys)) => {
                JsonValue::Object(merge_fields(xs, ys))
            }
            (JsonValue::Array(xs), JsonValue::Array(ys)) => JsonValue::Array(merge_values(xs, ys)),
            (JsonValue::Nothing, y) => y,
            (x, JsonValue::Nothing) => x,
            (_, y) => y,
        }
    }
}

/// Left fields in order, each merged with its same-named match from the
/// shrinking right pool; unmatched right fields append at the end.
fn merge_fields(xs: Vec<Field>, mut ys: Vec<Field>) -> Vec<Field> {
    let mut merged = Vec::with_capacity(xs.len() + ys.len());
    for (name, x) in xs {
        match ys.iter().position(|(other, _)| *other == name) {
            Some(found) => {
                let (_, y) = ys.remove(found);
                merged.push((name, x.merge(y)));
            }
            None => merged.push((name, x)),
        }
    }
    merged.append(&mut ys);
    merged
}

/// Same pool discipline as [`merge_fields`], keyed on value equality
/// instead of field name.
fn merge_values(xs: Vec<JsonValue>, mut ys: Vec<JsonValue>) -> Vec<JsonValue> {
    let mut merged = Vec::with_capacity(xs.len() + ys.len());
    for x in xs {
        match ys.iter().position(|y| *y == x) {
            Some(found) => {
                let y = ys.remove(found);
                merged.push(x.merge(y));
            }
            None => merged.push(x),
        }
    }
    merged.append(&mut ys);
    merged
}
