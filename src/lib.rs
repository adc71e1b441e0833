//! # fluent-pipe
//!
//! A fluent value-composition pipeline for Rust: thread an initial set of
//! values through a sequence of callables, where each stage's output becomes
//! the next stage's input, without intermediate temporaries or manually
//! nested calls.
//!
//! ## Overview
//!
//! The library is built around a single chainable entity plus a small set of
//! helpers:
//!
//! - **[`Pipe`](pipe::Pipe)**: the value-holder. [`to`](pipe::Pipe::to)
//!   invokes a callable with the pipe's params spread as positional
//!   arguments and stores the result in place;
//!   [`then_to`](pipe::Pipe::then_to) hands the stored result to the next
//!   callable as a single value and produces a fresh `Pipe`.
//! - **[`PipeValue`](value::PipeValue)**: a cheaply clonable, dynamically
//!   typed value handle, so pipelines can mix argument types the way
//!   dynamic languages do.
//! - **[`Callable`](callable::Callable)**: the function abstraction every
//!   stage plugs in as: an ordered argument sequence in, a single value
//!   out, with arity and type checking at the boundary.
//! - **Delegate factories**:
//!   [`delegate_with_param_mask`](delegate::delegate_with_param_mask)
//!   injects the piped value into an arbitrary argument position of a
//!   multi-argument callable via the [`here`](sentinel::here) sentinel, and
//!   [`delegate_constructor`](delegate::delegate_constructor) lets object
//!   construction participate as an ordinary pipeline stage.
//!
//! ## Example
//!
//! ```rust
//! use fluent_pipe::prelude::*;
//!
//! let uppercase = Callable::from_fn1(|text: String| text.to_uppercase());
//! let exclaim = Callable::from_fn1(|text: String| format!("{text}!"));
//!
//! let mut pipe = Pipe::new(pipe_values!["hello".to_string()]);
//! let result = pipe
//!     .to(&uppercase)?
//!     .then_to(&exclaim)?;
//!
//! assert_eq!(
//!     result.return_value().and_then(PipeValue::get::<String>),
//!     Some("HELLO!".to_string()),
//! );
//! # Ok::<(), fluent_pipe::error::PipeError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use fluent_pipe::prelude::*;
/// ```
pub mod prelude {
    pub use crate::callable::Callable;
    pub use crate::delegate::{delegate_constructor, delegate_with_param_mask};
    pub use crate::error::{
        ArityMismatchError, ConstructionError, InvocationError, PipeError, TypeMismatchError,
    };
    pub use crate::pipe::Pipe;
    pub use crate::pipe_values;
    pub use crate::sentinel::{here, is_here};
    pub use crate::value::PipeValue;
}

pub mod callable;
pub mod delegate;
pub mod error;
pub mod pipe;
pub mod sentinel;
pub mod value;
