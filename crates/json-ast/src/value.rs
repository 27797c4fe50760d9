//! [`JsonValue`] — the closed value algebra every other module operates on.
//!
//! A JSON document is represented as an immutable tree of enum variants.
//! Structural operations never mutate a tree: consuming operations take
//! `self` by value and return a fresh value, borrowing operations return
//! references or primitives. Because trees own their children exclusively
//! and nothing here uses interior mutability, any number of threads may
//! traverse, compare, or escape-encode the same tree concurrently.

use bigdecimal::BigDecimal;
use indexmap::IndexMap;
use num_bigint::BigInt;
use std::ops;

/// A single member of an object: a plain `(name, value)` tuple with no
/// identity of its own.
pub type Field = (String, JsonValue);

/// Any JSON value, plus [`Nothing`](JsonValue::Nothing), the marker for
/// "no value here at all", distinct from JSON `null`.
///
/// `Nothing` is the identity of [`concat`](JsonValue::concat) and is what
/// lookups return when there is nothing to return. Well-formed trees do not
/// nest it inside arrays or objects; operations treat it as contributing
/// nothing.
///
/// Integers and decimals are arbitrary-precision. `Int` and `Decimal` exist
/// precisely because exactness matters, so they are never approximated with
/// fixed-width types; `Double` is the lossy floating representation.
///
/// # Examples
///
/// ```
/// use json_ast::JsonValue;
///
/// let doc = JsonValue::Object(vec![
///     ("name".to_string(), JsonValue::from("Alice")),
///     ("scores".to_string(), JsonValue::Array(vec![
///         JsonValue::from(95),
///         JsonValue::from(87),
///     ])),
/// ]);
/// assert!(doc.is_object());
/// assert_eq!(doc.children().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub enum JsonValue {
    /// Absence of a value. Monoid identity; not JSON `null`.
    Nothing,
    /// JSON `null`.
    Null,
    /// JSON `true` / `false`.
    Bool(bool),
    /// JSON number, exact integer representation.
    Int(BigInt),
    /// JSON number, floating representation.
    Double(f64),
    /// JSON number, exact decimal representation.
    Decimal(BigDecimal),
    /// JSON string.
    Str(String),
    /// JSON array. Element order is significant.
    Array(Vec<JsonValue>),
    /// JSON object. Field order is preserved as given; duplicate names are
    /// permitted at construction and collapse under set-equality and
    /// [`values`](JsonValue::values).
    Object(Vec<Field>),
}

/// What [`JsonValue::values`] unboxes to: the same shape with native
/// payloads and objects turned into a key-to-value map.
#[derive(Debug, Clone, PartialEq)]
pub enum Native {
    /// Unboxed [`JsonValue::Nothing`].
    Absent,
    /// Unboxed JSON `null`.
    Null,
    Bool(bool),
    Int(BigInt),
    Double(f64),
    Decimal(BigDecimal),
    Str(String),
    Array(Vec<Native>),
    /// Insertion-ordered map. Duplicate source keys resolve last-write-wins.
    Object(IndexMap<String, Native>),
}

// Shared target for indexed access on non-array variants.
static NOTHING: JsonValue = JsonValue::Nothing;

impl JsonValue {
    /// Unboxes the tree into native values.
    ///
    /// Scalars yield their payload, `Nothing` yields [`Native::Absent`],
    /// arrays unbox element-wise, and objects become an insertion-ordered
    /// map built by inserting fields front to back, so a duplicate name
    /// keeps its first position but takes the last value.
    ///
    /// Reading is side-effect free; unboxing twice yields equal results.
    pub fn values(&self) -> Native {
        match self {
            JsonValue::Nothing => Native::Absent,
            JsonValue::Null => Native::Null,
            JsonValue::Bool(b) => Native::Bool(*b),
            JsonValue::Int(i) => Native::Int(i.clone()),
            JsonValue::Double(d) => Native::Double(*d),
            JsonValue::Decimal(d) => Native::Decimal(d.clone()),
            JsonValue::Str(s) => Native::Str(s.clone()),
            JsonValue::Array(items) => Native::Array(items.iter().map(JsonValue::values).collect()),
            JsonValue::Object(fields) => {
                let mut map = IndexMap::with_capacity(fields.len());
                for (name, value) in fields {
                    map.insert(name.clone(), value.values());
                }
                Native::Object(map)
            }
        }
    }

    /// Direct sub-values: object field values (names discarded) or array
    /// elements, in order. Every other variant has no children.
    pub fn children(&self) -> Vec<&JsonValue> {
        match self {
            JsonValue::Object(fields) => fields.iter().map(|(_, value)| value).collect(),
            JsonValue::Array(items) => items.iter().collect(),
            _ => Vec::new(),
        }
    }

    /// `None` for `Nothing`, `Some` for everything else.
    ///
    /// ```
    /// use json_ast::JsonValue;
    ///
    /// assert!(JsonValue::Nothing.to_option().is_none());
    /// assert!(JsonValue::from("x").to_option().is_some());
    /// ```
    pub fn to_option(&self) -> Option<&JsonValue> {
        match self {
            JsonValue::Nothing => None,
            other => Some(other),
        }
    }

    /// Consuming form of [`to_option`](JsonValue::to_option).
    pub fn into_option(self) -> Option<JsonValue> {
        match self {
            JsonValue::Nothing => None,
            other => Some(other),
        }
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, JsonValue::Nothing)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// True for all three numeric variants: `Int`, `Double`, `Decimal`.
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            JsonValue::Int(_) | JsonValue::Double(_) | JsonValue::Decimal(_)
        )
    }

    pub fn is_str(&self) -> bool {
        matches!(self, JsonValue::Str(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[Field]> {
        match self {
            JsonValue::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Combines two values into one. Associative, with `Nothing` as the
    /// two-sided identity. Also available as the `+` operator.
    ///
    /// The case split is ordered and order matters: an array on the left
    /// absorbs a non-array right operand by appending, while an array on
    /// the right absorbs a non-array left operand by prepending.
    ///
    /// 1. `Nothing` on either side yields the other operand.
    /// 2. Two arrays concatenate flat.
    /// 3. Array + value appends the value as one element.
    /// 4. Value + array prepends the value as one element.
    /// 5. Two plain values form a fresh two-element array.
    ///
    /// ```
    /// use json_ast::JsonValue;
    ///
    /// let a = JsonValue::Array(vec![JsonValue::from(1)]);
    /// assert_eq!(
    ///     a.concat(JsonValue::from(2)),
    ///     JsonValue::Array(vec![JsonValue::from(1), JsonValue::from(2)]),
    /// );
    /// ```
    pub fn concat(self, other: JsonValue) -> JsonValue {
        match (self, other) {
            (JsonValue::Nothing, x) => x,
            (x, JsonValue::Nothing) => x,
            (JsonValue::Array(mut xs), JsonValue::Array(ys)) => {
                xs.extend(ys);
                JsonValue::Array(xs)
            }
            (JsonValue::Array(mut xs), v) => {
                xs.push(v);
                JsonValue::Array(xs)
            }
            (v, JsonValue::Array(xs)) => {
                let mut items = Vec::with_capacity(xs.len() + 1);
                items.push(v);
                items.extend(xs);
                JsonValue::Array(items)
            }
            (x, y) => JsonValue::Array(vec![x, y]),
        }
    }
}

/// Folds a sequence of values through [`JsonValue::concat`].
///
/// ```
/// use json_ast::{concat, JsonValue};
///
/// let combined = concat([JsonValue::from(1), JsonValue::from(2), JsonValue::from(3)]);
/// assert_eq!(
///     combined,
///     JsonValue::Array(vec![JsonValue::from(1), JsonValue::from(2), JsonValue::from(3)]),
/// );
/// ```
pub fn concat<I>(values: I) -> JsonValue
where
    I: IntoIterator<Item = JsonValue>,
{
    values
        .into_iter()
        .fold(JsonValue::Nothing, JsonValue::concat)
}

impl ops::Add for JsonValue {
    type Output = JsonValue;

    fn add(self, other: JsonValue) -> JsonValue {
        self.concat(other)
    }
}

impl Default for JsonValue {
    /// The monoid identity, `Nothing`.
    fn default() -> Self {
        JsonValue::Nothing
    }
}

/// Positional access. Arrays index like slices (out of range panics);
/// every other variant yields `Nothing` for any index.
impl ops::Index<usize> for JsonValue {
    type Output = JsonValue;

    fn index(&self, index: usize) -> &JsonValue {
        match self {
            JsonValue::Array(items) => &items[index],
            _ => &NOTHING,
        }
    }
}

/// Structural equality. Objects compare as *sets* of fields (order and
/// duplicate repetition are ignored) while arrays compare as ordered
/// sequences. Distinct variants are never equal, so `Int(1)` does not
/// equal `Double(1.0)`.
impl PartialEq for JsonValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsonValue::Nothing, JsonValue::Nothing) => true,
            (JsonValue::Null, JsonValue::Null) => true,
            (JsonValue::Bool(a), JsonValue::Bool(b)) => a == b,
            (JsonValue::Int(a), JsonValue::Int(b)) => a == b,
            (JsonValue::Double(a), JsonValue::Double(b)) => a == b,
            (JsonValue::Decimal(a), JsonValue::Decimal(b)) => a == b,
            (JsonValue::Str(a), JsonValue::Str(b)) => a == b,
            (JsonValue::Array(a), JsonValue::Array(b)) => a == b,
            (JsonValue::Object(a), JsonValue::Object(b)) => field_set_eq(a, b),
            _ => false,
        }
    }
}

/// Set equality over field tuples: every field of `a` occurs in `b` and
/// vice versa. Duplicates collapse to membership.
fn field_set_eq(a: &[Field], b: &[Field]) -> bool {
    a.iter().all(|field| b.contains(field)) && b.iter().all(|field| a.contains(field))
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Bool(b)
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::Str(s.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::Str(s)
    }
}

impl From<f64> for JsonValue {
    fn from(d: f64) -> Self {
        JsonValue::Double(d)
    }
}

impl From<i32> for JsonValue {
    fn from(i: i32) -> Self {
        JsonValue::Int(BigInt::from(i))
    }
}

impl From<i64> for JsonValue {
    fn from(i: i64) -> Self {
        JsonValue::Int(BigInt::from(i))
    }
}

impl From<u64> for JsonValue {
    fn from(i: u64) -> Self {
        JsonValue::Int(BigInt::from(i))
    }
}

impl From<BigInt> for JsonValue {
    fn from(i: BigInt) -> Self {
        JsonValue::Int(i)
    }
}

impl From<BigDecimal> for JsonValue {
    fn from(d: BigDecimal) -> Self {
        JsonValue::Decimal(d)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(items: Vec<JsonValue>) -> Self {
        JsonValue::Array(items)
    }
}
