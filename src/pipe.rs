//! The chainable value-holder at the center of the library.
//!
//! A [`Pipe`] carries two pieces of state: the `params` it was constructed
//! with (fixed for its lifetime) and the `return value` produced by the most
//! recent invocation. The two chaining operations have deliberately
//! different ownership contracts:
//!
//! - [`Pipe::to`] is an in-place update. It spreads `params` as the
//!   callable's positional arguments, stores the result, and returns the
//!   same instance, so repeated calls overwrite the stored result without
//!   touching `params`.
//! - [`Pipe::then_to`] is a pure construction. It hands the stored result to
//!   the callable as a single value and returns a fresh `Pipe` owning the
//!   outcome; the receiver is never mutated, so earlier stages of a chain
//!   remain valid and inspectable after later stages run.

use smallvec::{SmallVec, smallvec};

use crate::callable::Callable;
use crate::error::PipeError;
use crate::value::PipeValue;

/// A fluent pipeline stage holding params and the latest result.
///
/// # Examples
///
/// ## Spreading params with `to`
///
/// ```rust
/// use fluent_pipe::prelude::*;
///
/// let add = Callable::from_fn2(|first: i32, second: i32| first + second);
///
/// let mut pipe = Pipe::new(pipe_values![20_i32, 22_i32]);
/// pipe.to(&add)?;
///
/// assert_eq!(
///     pipe.return_value().and_then(PipeValue::get::<i32>),
///     Some(42),
/// );
/// # Ok::<(), PipeError>(())
/// ```
///
/// ## Chaining stages with `then_to`
///
/// ```rust
/// use fluent_pipe::prelude::*;
///
/// let length = Callable::from_fn1(|text: String| text.len());
/// let double = Callable::from_fn1(|count: usize| count * 2);
///
/// let mut pipe = Pipe::new(pipe_values!["pipeline".to_string()]);
/// let result = pipe
///     .to(&length)?
///     .then_to(&double)?;
///
/// assert_eq!(
///     result.return_value().and_then(PipeValue::get::<usize>),
///     Some(16),
/// );
/// // The original pipe still holds its own, earlier result.
/// assert_eq!(
///     pipe.return_value().and_then(PipeValue::get::<usize>),
///     Some(8),
/// );
/// # Ok::<(), PipeError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Pipe {
    params: SmallVec<[PipeValue; 4]>,
    returned: Option<PipeValue>,
}

impl Pipe {
    /// Creates a pipe holding the given initial values, in order.
    ///
    /// Any values are accepted, including none; no validation is performed.
    pub fn new(initial_values: impl IntoIterator<Item = PipeValue>) -> Self {
        Self {
            params: initial_values.into_iter().collect(),
            returned: None,
        }
    }

    /// Creates a pipe with no params.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The values this pipe was constructed with.
    ///
    /// Fixed at construction; no operation on the pipe ever changes them.
    pub fn params(&self) -> &[PipeValue] {
        &self.params
    }

    /// The result stored by the most recent [`to`](Self::to) call, or `None`
    /// if `to` has never been called on this instance.
    pub fn return_value(&self) -> Option<&PipeValue> {
        self.returned.as_ref()
    }

    /// Invokes `function` with this pipe's params spread as positional
    /// arguments, stores the result, and returns the same instance for
    /// further chaining.
    ///
    /// Passing `None` performs an identity pass-through: the stored result
    /// becomes a [`PipeValue`] wrapping a `Vec<PipeValue>` equal to the
    /// params sequence itself. (Unlike [`then_to`](Self::then_to), the
    /// callable here is optional; the asymmetry is intentional.)
    ///
    /// Repeated calls overwrite the previously stored result; `params` is
    /// never altered.
    ///
    /// # Errors
    ///
    /// Propagates whatever the callable raises, unmodified. On error the
    /// previously stored result is left untouched; no partial update is
    /// committed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_pipe::prelude::*;
    ///
    /// let mut pipe = Pipe::empty();
    /// pipe.to(None)?;
    ///
    /// let passed_through = pipe
    ///     .return_value()
    ///     .and_then(PipeValue::get::<Vec<PipeValue>>)
    ///     .unwrap();
    /// assert!(passed_through.is_empty());
    /// # Ok::<(), PipeError>(())
    /// ```
    pub fn to<'a>(
        &mut self,
        function: impl Into<Option<&'a Callable>>,
    ) -> Result<&mut Self, PipeError> {
        let result = match function.into() {
            Some(function) => function.call(&self.params)?,
            None => PipeValue::new(self.params.to_vec()),
        };
        self.returned = Some(result);
        Ok(self)
    }

    /// Invokes `function` with exactly one argument (this pipe's current
    /// return value) and returns a brand-new pipe whose params is the
    /// single-element sequence holding the outcome (which is also its
    /// stored result).
    ///
    /// The receiver is never mutated. The value is handed off as a single
    /// positional argument even when it wraps a sequence; `then_to` is the
    /// deliberate switch from `to`'s spread convention to single-value
    /// hand-off between stages.
    ///
    /// Calling `then_to` before any `to` call passes
    /// [`PipeValue::absent`] to the callable; the callable must be prepared
    /// for it if that path is reachable.
    ///
    /// # Errors
    ///
    /// Propagates whatever the callable raises, unmodified; no new pipe is
    /// produced in that case.
    pub fn then_to(&self, function: &Callable) -> Result<Self, PipeError> {
        let input = self.returned.clone().unwrap_or_else(PipeValue::absent);
        let result = function.call(&[input])?;
        Ok(Self {
            params: smallvec![result.clone()],
            returned: Some(result),
        })
    }
}

impl FromIterator<PipeValue> for Pipe {
    fn from_iter<I: IntoIterator<Item = PipeValue>>(iterator: I) -> Self {
        Self::new(iterator)
    }
}

static_assertions::assert_impl_all!(Pipe: Send, Sync);
static_assertions::assert_impl_all!(Callable: Send, Sync);
static_assertions::assert_impl_all!(PipeValue: Send, Sync);
