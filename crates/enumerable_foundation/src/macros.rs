//! Literal construction of collections.

/// Builds a [`Collection`](crate::Collection) from a literal.
///
/// ```
/// use enumerable_foundation::{collection, Key, Value};
///
/// let list = collection![1, "two", 3.5];
/// assert_eq!(list.get(1), Some(&Value::from("two")));
///
/// let map = collection! { "a" => 1, 7 => collection![true] };
/// assert_eq!(map.last_key(), Some(&Key::Int(7)));
/// ```
///
/// Values go through the normal insertion path, so raw arrays are wrapped
/// and the auto-increment counter is maintained.
#[macro_export]
macro_rules! collection {
    () => {
        $crate::Collection::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut collection = $crate::Collection::new();
        $(
            collection.insert($key, $value);
        )+
        collection
    }};
    ($($value:expr),+ $(,)?) => {{
        let mut collection = $crate::Collection::new();
        $(
            collection.append($value);
        )+
        collection
    }};
}
