//! Error types for pipeline invocation.
//!
//! This module provides the error types surfaced by [`Callable`](crate::callable::Callable)
//! invocations and the delegate factories. No operation in this crate
//! catches, wraps, logs, or retries; every failure is returned unmodified
//! to the immediate caller of the operation that triggered it.

/// Represents an argument-count mismatch between a callable and the values
/// supplied to it.
///
/// Raised by the typed [`Callable`](crate::callable::Callable) adapters when
/// the number of values passed (for example a pipe's params spread by
/// [`Pipe::to`](crate::pipe::Pipe::to)) does not equal the arity the
/// callable was built with.
///
/// # Examples
///
/// ```rust
/// use fluent_pipe::error::ArityMismatchError;
///
/// let error = ArityMismatchError { expected: 2, actual: 3 };
/// assert_eq!(
///     format!("{}", error),
///     "arity mismatch: callable expects 2 argument(s), 3 supplied"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArityMismatchError {
    /// The number of arguments the callable was built to accept.
    pub expected: usize,
    /// The number of values actually supplied.
    pub actual: usize,
}

impl std::fmt::Display for ArityMismatchError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "arity mismatch: callable expects {} argument(s), {} supplied",
            self.expected, self.actual
        )
    }
}

impl std::error::Error for ArityMismatchError {}

/// Represents a dynamic value whose concrete type does not match what the
/// callable expects at a given argument position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMismatchError {
    /// Zero-based position of the offending argument.
    pub position: usize,
    /// The type name the callable expects at that position.
    pub expected: &'static str,
}

impl std::fmt::Display for TypeMismatchError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "type mismatch at argument {}: expected {}",
            self.position, self.expected
        )
    }
}

impl std::error::Error for TypeMismatchError {}

/// Represents a failure to construct an instance inside a
/// [`delegate_constructor`](crate::delegate::delegate_constructor) stage.
///
/// The factory supplied to `delegate_constructor` runs only when the
/// returned callable is invoked, so this error surfaces at call time, never
/// at factory-creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructionError {
    /// The name of the type that could not be constructed.
    pub type_name: &'static str,
    /// Why construction failed.
    pub message: String,
}

impl std::fmt::Display for ConstructionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "failed to construct {}: {}",
            self.type_name, self.message
        )
    }
}

impl std::error::Error for ConstructionError {}

/// Represents a failure raised by a caller-supplied callable itself.
///
/// Raw callables built with [`Callable::new`](crate::callable::Callable::new)
/// use this to signal their own failures through a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationError {
    /// A description of the failure, authored by the callable.
    pub message: String,
}

impl std::fmt::Display for InvocationError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "invocation failed: {}", self.message)
    }
}

impl std::error::Error for InvocationError {}

/// Represents errors that can occur while running a pipeline stage.
///
/// This enum provides a unified error type for all pipeline-related
/// failures: invocation errors (arity, type, or the callable's own failure)
/// and construction errors (a constructor delegate's factory failed at call
/// time).
///
/// # Examples
///
/// ```rust
/// use fluent_pipe::error::{ArityMismatchError, PipeError};
///
/// let error = PipeError::ArityMismatch(ArityMismatchError { expected: 1, actual: 0 });
/// println!("{}", error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipeError {
    /// The callable was supplied the wrong number of arguments.
    ArityMismatch(ArityMismatchError),
    /// An argument's dynamic type did not match the callable's expectation.
    TypeMismatch(TypeMismatchError),
    /// A constructor delegate's factory failed.
    Construction(ConstructionError),
    /// The caller-supplied callable reported a failure of its own.
    Invocation(InvocationError),
}

impl PipeError {
    /// Shorthand for an [`InvocationError`] with the given message.
    pub fn invocation(message: impl Into<String>) -> Self {
        Self::Invocation(InvocationError {
            message: message.into(),
        })
    }
}

impl std::fmt::Display for PipeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArityMismatch(error) => write!(formatter, "{error}"),
            Self::TypeMismatch(error) => write!(formatter, "{error}"),
            Self::Construction(error) => write!(formatter, "{error}"),
            Self::Invocation(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for PipeError {}

impl From<ArityMismatchError> for PipeError {
    fn from(error: ArityMismatchError) -> Self {
        Self::ArityMismatch(error)
    }
}

impl From<TypeMismatchError> for PipeError {
    fn from(error: TypeMismatchError) -> Self {
        Self::TypeMismatch(error)
    }
}

impl From<ConstructionError> for PipeError {
    fn from(error: ConstructionError) -> Self {
        Self::Construction(error)
    }
}

impl From<InvocationError> for PipeError {
    fn from(error: InvocationError) -> Self {
        Self::Invocation(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_mismatch_display() {
        let error = ArityMismatchError {
            expected: 3,
            actual: 1,
        };
        assert_eq!(
            format!("{error}"),
            "arity mismatch: callable expects 3 argument(s), 1 supplied"
        );
    }

    #[test]
    fn test_type_mismatch_display() {
        let error = TypeMismatchError {
            position: 1,
            expected: "alloc::string::String",
        };
        assert_eq!(
            format!("{error}"),
            "type mismatch at argument 1: expected alloc::string::String"
        );
    }

    #[test]
    fn test_construction_error_display() {
        let error = ConstructionError {
            type_name: "Widget",
            message: String::from("missing part"),
        };
        assert_eq!(format!("{error}"), "failed to construct Widget: missing part");
    }

    #[test]
    fn test_pipe_error_from_variants() {
        let arity = ArityMismatchError {
            expected: 1,
            actual: 2,
        };
        assert_eq!(PipeError::from(arity), PipeError::ArityMismatch(arity));

        let invocation = PipeError::invocation("stage refused");
        assert_eq!(
            format!("{invocation}"),
            "invocation failed: stage refused"
        );
    }
}
