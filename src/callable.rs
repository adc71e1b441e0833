//! The function abstraction pipeline stages plug in as.
//!
//! A [`Callable`] takes an ordered sequence of [`PipeValue`]s as its
//! positional argument list and produces a single [`PipeValue`], or fails
//! with a [`PipeError`]. "Spreading" a pipe's params is simply applying the
//! whole sequence as that argument list.
//!
//! Two ways to build one:
//!
//! - [`Callable::new`] accepts a raw closure over the argument slice, for
//!   variadic stages or stages that need to fail with their own errors.
//! - [`Callable::from_fn0`] through [`Callable::from_fn6`] adapt ordinary
//!   typed functions. The adapter checks the argument count against the
//!   function's arity and downcasts every position to the expected type, so
//!   a mismatch surfaces as an [`ArityMismatchError`] or
//!   [`TypeMismatchError`] instead of a panic.

use std::fmt;
use std::sync::Arc;

use crate::error::{ArityMismatchError, PipeError, TypeMismatchError};
use crate::value::PipeValue;

/// A clonable handle to a pipeline-compatible function.
///
/// Cloning is cheap (the underlying closure is reference-counted), so the
/// same callable can be reused across stages and pipes.
///
/// # Examples
///
/// ## Typed adapter
///
/// ```rust
/// use fluent_pipe::callable::Callable;
/// use fluent_pipe::pipe_values;
///
/// let add = Callable::from_fn2(|first: i32, second: i32| first + second);
/// let result = add.call(&pipe_values![2_i32, 3_i32]).unwrap();
/// assert_eq!(result.get::<i32>(), Some(5));
/// ```
///
/// ## Raw variadic callable
///
/// ```rust
/// use fluent_pipe::callable::Callable;
/// use fluent_pipe::pipe_values;
/// use fluent_pipe::value::PipeValue;
///
/// let count_arguments = Callable::new(|arguments| {
///     Ok(PipeValue::new(arguments.len()))
/// });
/// let result = count_arguments.call(&pipe_values![1, 2, 3]).unwrap();
/// assert_eq!(result.get::<usize>(), Some(3));
/// ```
#[derive(Clone)]
pub struct Callable {
    function: Arc<dyn Fn(&[PipeValue]) -> Result<PipeValue, PipeError> + Send + Sync>,
}

macro_rules! impl_typed_adapter {
    ($arity:literal $(, $type_param:ident : $argument:ident : $position:expr)*) => {
        paste::paste! {
            #[doc = concat!(
                "Adapts a typed ", stringify!($arity), "-argument function into a [`Callable`].\n\n",
                "The returned callable fails with [`ArityMismatchError`] when invoked with ",
                "any other number of arguments, and with [`TypeMismatchError`] when an ",
                "argument's dynamic type does not match the function's parameter type. ",
                "Argument payloads are cloned out of their handles before the call.",
            )]
            pub fn [<from_fn $arity>]<$($type_param,)* R, Function>(function: Function) -> Self
            where
                $($type_param: Clone + Send + Sync + 'static,)*
                R: Send + Sync + 'static,
                Function: Fn($($type_param),*) -> R + Send + Sync + 'static,
            {
                Self::new(move |arguments: &[PipeValue]| {
                    if arguments.len() != $arity {
                        return Err(PipeError::ArityMismatch(ArityMismatchError {
                            expected: $arity,
                            actual: arguments.len(),
                        }));
                    }
                    $(
                        let $argument = arguments[$position]
                            .downcast_ref::<$type_param>()
                            .cloned()
                            .ok_or(PipeError::TypeMismatch(TypeMismatchError {
                                position: $position,
                                expected: ::std::any::type_name::<$type_param>(),
                            }))?;
                    )*
                    Ok(PipeValue::new(function($($argument),*)))
                })
            }
        }
    };
}

impl Callable {
    /// Wraps a raw closure over the positional argument slice.
    ///
    /// The closure receives every supplied argument and may fail with any
    /// [`PipeError`]; no arity or type checking is performed on its behalf.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&[PipeValue]) -> Result<PipeValue, PipeError> + Send + Sync + 'static,
    {
        Self {
            function: Arc::new(function),
        }
    }

    /// Invokes the callable with the given positional arguments.
    ///
    /// # Errors
    ///
    /// Returns whatever error the underlying function raises; this crate
    /// never intercepts it.
    pub fn call(&self, arguments: &[PipeValue]) -> Result<PipeValue, PipeError> {
        (self.function)(arguments)
    }

    impl_typed_adapter!(0);
    impl_typed_adapter!(1, A: first: 0);
    impl_typed_adapter!(2, A: first: 0, B: second: 1);
    impl_typed_adapter!(3, A: first: 0, B: second: 1, C: third: 2);
    impl_typed_adapter!(4, A: first: 0, B: second: 1, C: third: 2, D: fourth: 3);
    impl_typed_adapter!(5, A: first: 0, B: second: 1, C: third: 2, D: fourth: 3, E: fifth: 4);
    impl_typed_adapter!(
        6,
        A: first: 0,
        B: second: 1,
        C: third: 2,
        D: fourth: 3,
        E: fifth: 4,
        F: sixth: 5
    );
}

impl fmt::Debug for Callable {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Callable(..)")
    }
}
