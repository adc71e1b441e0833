//! The shared `here` sentinel token.
//!
//! Parameter masks (see [`delegate_with_param_mask`](crate::delegate::delegate_with_param_mask))
//! mark where the piped value should be injected with a placeholder that
//! must be distinguishable from any real argument. That placeholder is a
//! process-wide singleton [`PipeValue`], compared by identity, never by
//! payload.

use std::sync::OnceLock;

use crate::value::PipeValue;

/// Payload of the sentinel. Private so no ordinary value can impersonate it.
struct Here;

static HERE: OnceLock<PipeValue> = OnceLock::new();

/// Returns the shared sentinel token.
///
/// The token is created on first access and retained for the remainder of
/// the process; every call returns a handle to the same allocation, so
/// identity comparison holds across calls:
///
/// ```rust
/// use fluent_pipe::sentinel::here;
/// use fluent_pipe::value::PipeValue;
///
/// assert!(PipeValue::ptr_eq(&here(), &here()));
/// ```
pub fn here() -> PipeValue {
    HERE.get_or_init(|| PipeValue::new(Here)).clone()
}

/// Whether the given value is the shared sentinel token.
///
/// Ordinary values never compare equal to the sentinel, even ones wrapping
/// identical payload types:
///
/// ```rust
/// use fluent_pipe::sentinel::{here, is_here};
/// use fluent_pipe::value::PipeValue;
///
/// assert!(is_here(&here()));
/// assert!(!is_here(&PipeValue::new("here")));
/// ```
pub fn is_here(value: &PipeValue) -> bool {
    PipeValue::ptr_eq(value, &here())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_here_is_identity_stable() {
        let first = here();
        let second = here();
        assert!(PipeValue::ptr_eq(&first, &second));
    }

    #[test]
    fn test_clone_of_sentinel_is_still_the_sentinel() {
        let token = here();
        assert!(is_here(&token.clone()));
    }

    #[test]
    fn test_user_values_are_not_the_sentinel() {
        assert!(!is_here(&PipeValue::new(())));
        assert!(!is_here(&PipeValue::absent()));
    }
}
