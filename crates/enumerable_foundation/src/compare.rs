//! Comparison modes for sorting, uniqueness and extrema.

use std::cmp::Ordering;

use crate::value::{Number, Value};

/// How two values are compared by `sort`, `unique`, `min`, `max` and friends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
    /// Mixed-kind comparison. Values order by class first
    /// (`null/bool < number < string < collection < object`), then by
    /// content: numbers and numeric strings numerically, other strings
    /// byte-wise, null before `false` before `true`, collections by size
    /// and then element-wise.
    #[default]
    Regular,
    /// Both sides read as numbers; non-numeric values count as zero.
    Numeric,
    /// Both sides converted to text and compared byte-wise.
    String,
    /// Like [`SortMode::String`], ignoring ASCII case.
    StringCaseInsensitive,
    /// Text comparison where digit runs compare as numbers (`"a2" < "a10"`).
    Natural,
}

impl Value {
    /// Compares two values under the given mode.
    ///
    /// The ordering is total, so it can drive stable sorts directly.
    #[must_use]
    pub fn compare(&self, other: &Self, mode: SortMode) -> Ordering {
        match mode {
            SortMode::Regular => regular_cmp(self, other),
            SortMode::Numeric => numeric_cmp(self, other),
            SortMode::String => self.to_text().as_bytes().cmp(other.to_text().as_bytes()),
            SortMode::StringCaseInsensitive => self
                .to_text()
                .to_ascii_lowercase()
                .cmp(&other.to_text().to_ascii_lowercase()),
            SortMode::Natural => natural_cmp(&self.to_text(), &other.to_text()),
        }
    }
}

/// Comparison class used by [`SortMode::Regular`].
///
/// Values of different classes order by class; within a class they order
/// by content. Numeric strings belong to the numeric class.
fn class_rank(v: &Value) -> u8 {
    match v {
        Value::Null | Value::Bool(_) => 0,
        Value::Int(_) | Value::Float(_) => 1,
        Value::String(_) if v.is_numeric() => 1,
        Value::String(_) => 2,
        Value::Array(_) | Value::Collection(_) => 3,
        Value::Object(_) => 4,
    }
}

fn numeric_cmp(a: &Value, b: &Value) -> Ordering {
    let zero = Number::Int(0);
    a.as_number()
        .unwrap_or(zero)
        .total_cmp(b.as_number().unwrap_or(zero))
}

fn regular_cmp(a: &Value, b: &Value) -> Ordering {
    let rank = class_rank(a).cmp(&class_rank(b));
    if rank.is_ne() {
        return rank;
    }
    match (a, b) {
        (Value::Null | Value::Bool(_), _) => {
            (!a.is_null(), a.is_truthy()).cmp(&(!b.is_null(), b.is_truthy()))
        }
        (Value::String(x), Value::String(y)) if class_rank(a) == 2 => {
            x.as_bytes().cmp(y.as_bytes())
        }
        (Value::Object(x), Value::Object(y)) => x.type_name().cmp(y.type_name()),
        (Value::Array(_) | Value::Collection(_), _) => {
            let left = entry_values(a);
            let right = entry_values(b);
            left.len().cmp(&right.len()).then_with(|| {
                left.iter()
                    .zip(&right)
                    .map(|(x, y)| regular_cmp(x, y))
                    .find(|o| o.is_ne())
                    .unwrap_or(Ordering::Equal)
            })
        }
        _ => numeric_cmp(a, b),
    }
}

fn entry_values(v: &Value) -> Vec<&Value> {
    match v {
        Value::Array(a) => a.values().collect(),
        Value::Collection(c) => c.values_iter().collect(),
        _ => Vec::new(),
    }
}

/// Natural ordering: digit runs compare by numeric value, the rest byte-wise.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (mut x, mut y) = (a.as_bytes(), b.as_bytes());
    loop {
        match (x.first(), y.first()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(c), Some(d)) if c.is_ascii_digit() && d.is_ascii_digit() => {
                let (run_x, rest_x) = split_digits(x);
                let (run_y, rest_y) = split_digits(y);
                let trimmed_x = trim_leading_zeros(run_x);
                let trimmed_y = trim_leading_zeros(run_y);
                let ord = trimmed_x
                    .len()
                    .cmp(&trimmed_y.len())
                    .then_with(|| trimmed_x.cmp(trimmed_y));
                if ord.is_ne() {
                    return ord;
                }
                x = rest_x;
                y = rest_y;
            }
            (Some(c), Some(d)) => {
                if c != d {
                    return c.cmp(d);
                }
                x = &x[1..];
                y = &y[1..];
            }
        }
    }
}

fn split_digits(s: &[u8]) -> (&[u8], &[u8]) {
    let end = s.iter().position(|c| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn trim_leading_zeros(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|&c| c != b'0').unwrap_or(s.len());
    &s[start..]
}
