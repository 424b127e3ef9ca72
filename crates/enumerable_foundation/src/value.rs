//! Core value type for all collection data.

use std::any::Any;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::array::Array;
use crate::collection::{Arrayable, Collection};
use crate::types::Type;

/// Core value type stored in collections.
///
/// Raw array-like data is carried as [`Value::Array`] until it is inserted
/// into a [`Collection`], at which point it is wrapped into a nested
/// [`Value::Collection`]. A value stored inside a collection is never an
/// `Array`.
#[derive(Clone)]
pub enum Value {
    /// The null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(Arc<str>),
    /// Raw, unwrapped array-like data.
    Array(Array),
    /// Nested collection.
    Collection(Collection),
    /// Opaque host object, compared by identity.
    Object(Opaque),
}

type ArrayView = fn(&(dyn Any + Send + Sync)) -> Option<Array>;

/// Opaque host object stored in a collection.
///
/// Equality and hashing use pointer identity; clones share the object.
/// Objects wrapped with [`Opaque::arrayable`] can also stand in wherever
/// an array-like source is expected (`merge`, `diff`, `replace`, ...).
#[derive(Clone)]
pub struct Opaque {
    type_name: &'static str,
    inner: Arc<dyn Any + Send + Sync>,
    array_view: Option<ArrayView>,
}

impl Opaque {
    /// Wraps a host object.
    #[must_use]
    pub fn new<T: Any + Send + Sync>(object: T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            inner: Arc::new(object),
            array_view: None,
        }
    }

    /// Wraps a host object that can materialize itself as an array.
    #[must_use]
    pub fn arrayable<T: Arrayable + Any + Send + Sync>(object: T) -> Self {
        Self {
            array_view: Some(|any| any.downcast_ref::<T>().map(Arrayable::to_array)),
            ..Self::new(object)
        }
    }

    /// The object's array form, if it was wrapped with [`Opaque::arrayable`].
    #[must_use]
    pub fn to_array(&self) -> Option<Array> {
        self.array_view.and_then(|view| view(&*self.inner))
    }

    /// Returns the Rust type name of the wrapped object.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Attempts to borrow the wrapped object as `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Returns true if both handles point to the same object.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn address(&self) -> usize {
        Arc::as_ptr(&self.inner).cast::<()>() as usize
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Opaque {}

impl Hash for Opaque {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address().hash(state);
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<object {}>", self.type_name)
    }
}

/// A numeric view of a value, used by aggregations and numeric comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// Integral number.
    Int(i64),
    /// Floating point number.
    Float(f64),
}

impl Number {
    /// Converts to `f64`.
    ///
    /// Note: Converting large i64 values to f64 may lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(n) => n as f64,
            Self::Float(f) => f,
        }
    }

    /// Adds two numbers, staying integral while the sum is exact.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_add(b)
                .map_or_else(|| Self::Float(self.as_f64() + other.as_f64()), Self::Int),
            _ => Self::Float(self.as_f64() + other.as_f64()),
        }
    }

    /// Divides by a count, staying integral when the division is exact.
    #[must_use]
    pub fn div(self, divisor: i64) -> Self {
        match self {
            Self::Int(n) if divisor != 0 && n % divisor == 0 => Self::Int(n / divisor),
            #[allow(clippy::cast_precision_loss)]
            _ => Self::Float(self.as_f64() / divisor as f64),
        }
    }

    /// Total ordering over numbers.
    ///
    /// Int/float pairs compare exactly (no rounding through `f64`) and
    /// `-0.0` equals `0.0`. A NaN with the sign bit set orders before every
    /// other number, any other NaN after every other number.
    #[must_use]
    pub fn total_cmp(self, other: Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(&b),
            (Self::Float(a), Self::Float(b)) => float_cmp(a, b),
            (Self::Int(a), Self::Float(b)) => int_float_cmp(a, b),
            (Self::Float(a), Self::Int(b)) => int_float_cmp(b, a).reverse(),
        }
    }
}

/// Position of a float relative to the real line: -1 for a negative NaN,
/// 1 for a positive NaN, 0 for everything else.
fn nan_side(f: f64) -> i8 {
    match (f.is_nan(), f.is_sign_negative()) {
        (false, _) => 0,
        (true, true) => -1,
        (true, false) => 1,
    }
}

fn float_cmp(a: f64, b: f64) -> Ordering {
    nan_side(a)
        .cmp(&nan_side(b))
        .then_with(|| a.partial_cmp(&b).unwrap_or(Ordering::Equal))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn int_float_cmp(i: i64, f: f64) -> Ordering {
    // 2^63 as f64; every f64 at or beyond it is outside the i64 range.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    match nan_side(f) {
        -1 => return Ordering::Greater,
        1 => return Ordering::Less,
        _ => {}
    }
    if f >= LIMIT {
        return Ordering::Less;
    }
    if f < -LIMIT {
        return Ordering::Greater;
    }
    let whole = f.trunc();
    let fraction = f - whole;
    i.cmp(&(whole as i64)).then(if fraction > 0.0 {
        Ordering::Less
    } else if fraction < 0.0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    })
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(n) => Self::Int(n),
            Number::Float(f) => Self::Float(f),
        }
    }
}

impl Value {
    /// Returns the type of this value.
    #[must_use]
    pub fn value_type(&self) -> Type {
        match self {
            Self::Null => Type::Null,
            Self::Bool(_) => Type::Bool,
            Self::Int(_) => Type::Int,
            Self::Float(_) => Type::Float,
            Self::String(_) => Type::String,
            Self::Array(_) | Self::Collection(_) => Type::collection(Type::Any),
            Self::Object(_) => Type::Object,
        }
    }

    /// Returns true if this value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if this value is a nested collection.
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Collection(_))
    }

    /// Returns true if this value is a bool, number or string.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::String(_)
        )
    }

    /// Returns true if this value is truthy.
    ///
    /// Null, `false`, `0`, `0.0`, `""`, `"0"` and empty arrays or
    /// collections are falsy; everything else is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Float(f) => *f != 0.0,
            Self::String(s) => !(s.is_empty() || &**s == "0"),
            Self::Array(a) => !a.is_empty(),
            Self::Collection(c) => !c.is_empty(),
            Self::Object(_) => true,
        }
    }

    /// Returns true if this value is a number or a numeric string.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to read this value as a number.
    ///
    /// Ints and floats convert directly; strings convert when they are numeric
    /// (optional surrounding whitespace, sign, decimal point and exponent).
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Int(n) => Some(Number::Int(*n)),
            Self::Float(f) => Some(Number::Float(*f)),
            Self::String(s) => parse_numeric(s),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a nested collection.
    #[must_use]
    pub const fn as_collection(&self) -> Option<&Collection> {
        match self {
            Self::Collection(c) => Some(c),
            _ => None,
        }
    }

    /// Attempts to extract a mutable nested collection.
    pub fn as_collection_mut(&mut self) -> Option<&mut Collection> {
        match self {
            Self::Collection(c) => Some(c),
            _ => None,
        }
    }

    /// Attempts to extract a raw array.
    #[must_use]
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Attempts to extract an opaque object.
    #[must_use]
    pub const fn as_object(&self) -> Option<&Opaque> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Converts this value to text the way string coercion does.
    ///
    /// Null and `false` become `""`, `true` becomes `"1"`, floats drop a
    /// trailing `.0`. Arrays and collections become `"Array"`, objects
    /// their type name.
    #[must_use]
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Null | Self::Bool(false) => Cow::Borrowed(""),
            Self::Bool(true) => Cow::Borrowed("1"),
            Self::Int(n) => Cow::Owned(n.to_string()),
            Self::Float(f) => Cow::Owned(float_text(*f)),
            Self::String(s) => Cow::Borrowed(s),
            Self::Array(_) | Self::Collection(_) => Cow::Borrowed("Array"),
            Self::Object(o) => Cow::Borrowed(o.type_name()),
        }
    }

    /// Strict equality: same variant and same payload.
    ///
    /// Floats compare with IEEE `==`, so `0.0` equals `-0.0` and NaN equals
    /// nothing. Arrays and collections must hold the same keys in the same
    /// order with strictly equal values. `PartialEq` differs here: it
    /// compares float bits so that it stays consistent with `Hash`.
    #[must_use]
    pub fn strict_eq(&self, other: &Self) -> bool {
        fn pairs_strict_eq<'a>(
            mut left: impl Iterator<Item = (&'a crate::Key, &'a Value)>,
            mut right: impl Iterator<Item = (&'a crate::Key, &'a Value)>,
        ) -> bool {
            loop {
                match (left.next(), right.next()) {
                    (None, None) => return true,
                    (Some((ka, va)), Some((kb, vb))) if ka == kb && va.strict_eq(vb) => {}
                    _ => return false,
                }
            }
        }

        match (self, other) {
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => pairs_strict_eq(a.iter(), b.iter()),
            (Self::Collection(a), Self::Collection(b)) => pairs_strict_eq(a.iter(), b.iter()),
            _ => self == other,
        }
    }

    /// Loose equality with numeric and truthiness coercion.
    ///
    /// - numbers compare numerically across int and float
    /// - a number and a numeric string compare numerically, otherwise as text
    /// - booleans compare by truthiness, null compares equal to falsy values
    /// - arrays and collections compare key by key, ignoring order
    /// - objects compare by identity
    #[must_use]
    pub fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(b), v) | (v, Self::Bool(b)) => *b == v.is_truthy(),
            (Self::Null, Self::String(s)) | (Self::String(s), Self::Null) => s.is_empty(),
            (Self::Null, v) | (v, Self::Null) => !v.is_truthy(),
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Int(_) | Self::Float(_), Self::Int(_) | Self::Float(_)) => {
                self.as_number().map(Number::as_f64) == other.as_number().map(Number::as_f64)
            }
            (Self::String(a), Self::String(b)) => match (parse_numeric(a), parse_numeric(b)) {
                (Some(x), Some(y)) => x.total_cmp(y).is_eq(),
                _ => a == b,
            },
            (Self::Int(_) | Self::Float(_), Self::String(s))
            | (Self::String(s), Self::Int(_) | Self::Float(_)) => {
                let number = if self.as_str().is_some() { other } else { self };
                match (parse_numeric(s), number.as_number()) {
                    (Some(x), Some(y)) => x.as_f64() == y.as_f64(),
                    _ => number.to_text() == **s,
                }
            }
            (Self::Object(a), Self::Object(b)) => a.ptr_eq(b),
            (
                Self::Array(_) | Self::Collection(_),
                Self::Array(_) | Self::Collection(_),
            ) => loose_eq_entries(self, other),
            _ => false,
        }
    }

    /// Wraps raw arrays (recursively) into collections.
    ///
    /// This is the conversion every insertion path applies.
    #[must_use]
    pub fn wrapped(self) -> Self {
        match self {
            Self::Array(array) => Self::Collection(Collection::from_array(array)),
            other => other,
        }
    }
}

fn loose_eq_entries(a: &Value, b: &Value) -> bool {
    let lookup = |v: &Value, k| match v {
        Value::Array(a) => a.get(k).cloned(),
        Value::Collection(c) => c.get(k).cloned(),
        _ => None,
    };
    let entries: Vec<(crate::Key, Value)> = match a {
        Value::Array(arr) => arr.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        Value::Collection(c) => c.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        _ => return false,
    };
    let other_len = match b {
        Value::Array(arr) => arr.len(),
        Value::Collection(c) => c.len(),
        _ => return false,
    };
    entries.len() == other_len
        && entries
            .iter()
            .all(|(k, v)| lookup(b, k).is_some_and(|w| v.loose_eq(&w)))
}

/// Parses a numeric string.
fn parse_numeric(s: &str) -> Option<Number> {
    let trimmed = s.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'));
    if !is_numeric_literal(trimmed) {
        return None;
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(Number::Int(n));
    }
    trimmed.parse::<f64>().ok().map(Number::Float)
}

fn is_numeric_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }
    if digits == 0 {
        return false;
    }
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == bytes.len()
}

fn float_text(f: f64) -> String {
    if f.is_nan() {
        "NAN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { "INF" } else { "-INF" }.to_string()
    } else {
        f.to_string()
    }
}

// Implement PartialEq manually to handle float comparison
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Collection(a), Self::Collection(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(n) => n.hash(state),
            Self::Float(n) => n.to_bits().hash(state),
            Self::String(s) => s.hash(state),
            Self::Array(a) => a.hash(state),
            Self::Collection(c) => c.hash(state),
            Self::Object(o) => o.hash(state),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n:?}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Array(a) => write!(f, "{a:?}"),
            Self::Collection(c) => write!(f, "{c:?}"),
            Self::Object(o) => write!(f, "{o:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Array(a) => write!(f, "{a}"),
            Self::Collection(c) => write!(f, "{c}"),
            other => write!(f, "{}", other.to_text()),
        }
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or_else(|_| Self::Float(n as f64), Self::Int)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<crate::Key> for Value {
    fn from(key: crate::Key) -> Self {
        key.to_value()
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Self::Array(a)
    }
}

impl From<Collection> for Value {
    fn from(c: Collection) -> Self {
        Self::Collection(c)
    }
}

impl From<Opaque> for Value {
    fn from(o: Opaque) -> Self {
        Self::Object(o)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}
