//! Numeric aggregation, extrema and joining.

use crate::compare::SortMode;
use crate::value::{Number, Value};

use super::Collection;

/// Glue used by [`Collection::implode`] when callers have no preference.
pub const DEFAULT_GLUE: &str = ".";

impl Collection {
    /// Numeric view of every value that reads as a number, in order.
    fn numbers(&self) -> impl Iterator<Item = Number> + '_ {
        self.values_iter().filter_map(Value::as_number)
    }

    /// Sum of the numeric values (numeric strings included).
    ///
    /// Stays integral while the sum fits in `i64`. Returns `None` when no
    /// value is numeric.
    #[must_use]
    pub fn sum(&self) -> Option<Value> {
        self.numbers().reduce(Number::add).map(Value::from)
    }

    /// Arithmetic mean of the numeric values.
    ///
    /// Integral only when the division is exact.
    #[must_use]
    pub fn avg(&self) -> Option<Value> {
        let (total, count) = self
            .numbers()
            .fold((None, 0i64), |(total, count), n| {
                (Some(total.map_or(n, |t: Number| t.add(n))), count + 1)
            });
        total.map(|t| Value::from(t.div(count)))
    }

    /// Median of the numeric values.
    ///
    /// With an even count, the mean of the two middle values.
    #[must_use]
    pub fn median(&self) -> Option<Value> {
        let mut numbers: Vec<Number> = self.numbers().collect();
        numbers.sort_by(|a, b| a.total_cmp(*b));
        let middle = numbers.len() / 2;
        let median = if numbers.len() % 2 == 0 {
            let (low, high) = (numbers.get(middle.checked_sub(1)?)?, numbers.get(middle)?);
            low.add(*high).div(2)
        } else {
            *numbers.get(middle)?
        };
        Some(Value::from(median))
    }

    /// Smallest value under [`SortMode::Regular`]; the first of equal minima.
    #[must_use]
    pub fn min(&self) -> Option<&Value> {
        self.values_iter().reduce(|best, v| {
            if v.compare(best, SortMode::Regular).is_lt() {
                v
            } else {
                best
            }
        })
    }

    /// Largest value under [`SortMode::Regular`]; the first of equal maxima.
    #[must_use]
    pub fn max(&self) -> Option<&Value> {
        self.values_iter().reduce(|best, v| {
            if v.compare(best, SortMode::Regular).is_gt() {
                v
            } else {
                best
            }
        })
    }

    /// Joins the string and numeric values with `glue`; other values are
    /// skipped.
    #[must_use]
    pub fn implode(&self, glue: &str) -> String {
        self.values_iter()
            .filter(|v| matches!(v, Value::String(_) | Value::Int(_) | Value::Float(_)))
            .map(|v| v.to_text())
            .collect::<Vec<_>>()
            .join(glue)
    }
}
