//! Delegate factories: helpers producing plain [`Callable`]s that
//! encapsulate a more involved operation, so it can plug into a pipeline
//! stage like any ordinary function.
//!
//! Two factories are provided:
//!
//! - [`delegate_with_param_mask`] bridges [`then_to`](crate::pipe::Pipe::then_to)'s
//!   single-value hand-off into a multi-argument callable, injecting the
//!   piped value at arbitrary argument positions via the
//!   [`here`](crate::sentinel::here) sentinel.
//! - [`delegate_constructor`] lets object construction participate as a
//!   pipeline stage, with construction failures surfacing at call time.

use crate::callable::Callable;
use crate::error::{ArityMismatchError, ConstructionError, PipeError};
use crate::sentinel::is_here;
use crate::value::PipeValue;

/// Builds a unary [`Callable`] that injects its input into a parameter mask
/// before invoking `target`.
///
/// The mask is an ordered template mixing literal values with occurrences of
/// the [`here`](crate::sentinel::here) sentinel. On invocation the mask is
/// scanned left to right: every sentinel occurrence is replaced by the input
/// value (all of them receive the same input), every literal passes through
/// unchanged, and `target` is called with the constructed argument list.
///
/// Failures raised by `target` propagate unmodified. Invoking the returned
/// callable with anything other than exactly one argument is an
/// [`ArityMismatchError`].
///
/// # Examples
///
/// ```rust
/// use fluent_pipe::callable::Callable;
/// use fluent_pipe::delegate::delegate_with_param_mask;
/// use fluent_pipe::sentinel::here;
/// use fluent_pipe::pipe_values;
/// use fluent_pipe::value::PipeValue;
///
/// let join = Callable::new(|arguments| {
///     let joined = arguments
///         .iter()
///         .filter_map(|argument| argument.get::<String>())
///         .collect::<String>();
///     Ok(PipeValue::new(joined))
/// });
///
/// let mask = vec![
///     PipeValue::new("A".to_string()),
///     here(),
///     PipeValue::new("C".to_string()),
///     here(),
/// ];
/// let masked = delegate_with_param_mask(mask, join);
///
/// let result = masked.call(&pipe_values!["B".to_string()]).unwrap();
/// assert_eq!(result.get::<String>(), Some("ABCB".to_string()));
/// ```
pub fn delegate_with_param_mask(mask: Vec<PipeValue>, target: Callable) -> Callable {
    Callable::new(move |arguments: &[PipeValue]| {
        if arguments.len() != 1 {
            return Err(PipeError::ArityMismatch(ArityMismatchError {
                expected: 1,
                actual: arguments.len(),
            }));
        }
        let input = &arguments[0];
        let actual_arguments = mask
            .iter()
            .map(|entry| {
                if is_here(entry) {
                    input.clone()
                } else {
                    entry.clone()
                }
            })
            .collect::<Vec<_>>();
        target.call(&actual_arguments)
    })
}

/// Builds a variadic [`Callable`] that constructs instances through the
/// given factory.
///
/// The factory receives the full positional argument list and produces an
/// instance of `T` (or a [`ConstructionError`]). It runs only when the
/// returned callable is invoked, never at factory-creation time, so an
/// unconstructible setup surfaces as an error at the pipeline stage that
/// actually attempts construction.
///
/// # Examples
///
/// ```rust
/// use fluent_pipe::callable::Callable;
/// use fluent_pipe::delegate::delegate_constructor;
/// use fluent_pipe::pipe_values;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let construct_point = delegate_constructor(|arguments| {
///     Ok(Point {
///         x: arguments[0].get::<i32>().unwrap_or_default(),
///         y: arguments[1].get::<i32>().unwrap_or_default(),
///     })
/// });
///
/// let result = construct_point.call(&pipe_values![3_i32, 4_i32]).unwrap();
/// assert_eq!(result.get::<Point>(), Some(Point { x: 3, y: 4 }));
/// ```
pub fn delegate_constructor<T, Factory>(factory: Factory) -> Callable
where
    T: Send + Sync + 'static,
    Factory: Fn(&[PipeValue]) -> Result<T, ConstructionError> + Send + Sync + 'static,
{
    Callable::new(move |arguments: &[PipeValue]| {
        factory(arguments)
            .map(PipeValue::new)
            .map_err(PipeError::Construction)
    })
}
