//! Dynamically typed values for pipeline stages.
//!
//! Pipelines mix argument types freely, the way dynamic languages do, so
//! every value flowing through a [`Pipe`](crate::pipe::Pipe) is carried in a
//! [`PipeValue`]: a cheaply clonable, reference-counted handle over any
//! `Send + Sync + 'static` value. Concrete types are recovered at the
//! callable boundary by downcasting.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Marker stored in place of a return value that does not exist yet.
///
/// Private on purpose: callers observe absence through
/// [`PipeValue::is_absent`], never by downcasting to the marker itself.
struct Absent;

/// A dynamically typed, cheaply clonable value.
///
/// Cloning a `PipeValue` clones the handle, not the payload: both clones
/// point at the same allocation, which is what makes the sentinel protocol's
/// identity comparison ([`PipeValue::ptr_eq`]) meaningful.
///
/// # Examples
///
/// ```rust
/// use fluent_pipe::value::PipeValue;
///
/// let value = PipeValue::new(42_i32);
/// assert_eq!(value.downcast_ref::<i32>(), Some(&42));
/// assert_eq!(value.get::<i32>(), Some(42));
/// assert!(value.is::<i32>());
/// assert!(!value.is::<String>());
/// ```
#[derive(Clone)]
pub struct PipeValue {
    inner: Arc<dyn Any + Send + Sync>,
}

impl PipeValue {
    /// Wraps an arbitrary value.
    pub fn new<T: Send + Sync + 'static>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }

    /// Returns the marker for a return value that does not exist yet.
    ///
    /// [`Pipe::then_to`](crate::pipe::Pipe::then_to) passes this to its
    /// callable when invoked before any `to` call has stored a result.
    pub fn absent() -> Self {
        Self::new(Absent)
    }

    /// Whether this value is the absence marker.
    pub fn is_absent(&self) -> bool {
        self.inner.downcast_ref::<Absent>().is_some()
    }

    /// Returns a reference to the payload if it has type `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Clones the payload out if it has type `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_pipe::value::PipeValue;
    ///
    /// let value = PipeValue::new(String::from("piped"));
    /// assert_eq!(value.get::<String>(), Some(String::from("piped")));
    /// assert_eq!(value.get::<i32>(), None);
    /// ```
    pub fn get<T: Clone + 'static>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }

    /// Whether the payload has type `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.inner.downcast_ref::<T>().is_some()
    }

    /// Identity comparison: whether two handles point at the same
    /// allocation.
    ///
    /// Payload equality is deliberately not offered: dynamic values are
    /// compared by identity (the sentinel protocol) or by downcasting to a
    /// concrete type first.
    pub fn ptr_eq(first: &Self, second: &Self) -> bool {
        Arc::ptr_eq(&first.inner, &second.inner)
    }
}

impl fmt::Debug for PipeValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_absent() {
            formatter.write_str("PipeValue(<absent>)")
        } else {
            formatter.write_str("PipeValue(..)")
        }
    }
}

/// Builds a `Vec<PipeValue>` from plain expressions.
///
/// Each expression is wrapped with [`PipeValue::new`], so the entries may
/// have different concrete types.
///
/// # Examples
///
/// ```rust
/// use fluent_pipe::pipe_values;
///
/// let values = pipe_values![1_i32, "two".to_string(), 3.0_f64];
/// assert_eq!(values.len(), 3);
/// assert_eq!(values[0].get::<i32>(), Some(1));
///
/// let empty = pipe_values![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! pipe_values {
    () => {
        ::std::vec::Vec::<$crate::value::PipeValue>::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut values = ::std::vec::Vec::new();
        $(values.push($crate::value::PipeValue::new($value));)+
        values
    }};
}
