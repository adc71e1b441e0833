//! Unit tests for the `Pipe` entity.
//!
//! Covers construction, the params accessor, `to` (spread invocation,
//! identity pass-through, overwrite semantics, instance identity), the
//! stored return value, and `then_to` (single-value hand-off, fresh
//! instances, untouched receivers).

use fluent_pipe::prelude::*;

// =============================================================================
// Construction and params accessor
// =============================================================================

#[test]
fn test_params_round_trip() {
    let pipe = Pipe::new(pipe_values![1_i32, 2_i32, 3_i32]);
    let stored = pipe
        .params()
        .iter()
        .map(|value| value.get::<i32>().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(stored, vec![1, 2, 3]);
}

#[test]
fn test_params_default_to_empty() {
    assert!(Pipe::empty().params().is_empty());
    assert!(Pipe::new(pipe_values![]).params().is_empty());
}

#[test]
fn test_params_accept_mixed_types() {
    let pipe = Pipe::new(pipe_values![true, String::from("two"), 3.0_f64]);
    assert!(pipe.params()[0].is::<bool>());
    assert!(pipe.params()[1].is::<String>());
    assert!(pipe.params()[2].is::<f64>());
}

// =============================================================================
// `to`: spread invocation and identity pass-through
// =============================================================================

#[test]
fn test_to_spreads_params_as_positional_arguments() {
    let subtract = Callable::from_fn2(|minuend: i32, subtrahend: i32| minuend - subtrahend);

    let mut pipe = Pipe::new(pipe_values![10_i32, 3_i32]);
    pipe.to(&subtract).unwrap();

    assert_eq!(pipe.return_value().and_then(PipeValue::get::<i32>), Some(7));
}

#[test]
fn test_to_without_function_passes_params_through() {
    let mut pipe = Pipe::empty();
    pipe.to(None).unwrap();

    let passed_through = pipe
        .return_value()
        .and_then(PipeValue::get::<Vec<PipeValue>>)
        .unwrap();
    assert!(passed_through.is_empty());
}

#[test]
fn test_to_without_function_preserves_nonempty_params() {
    let mut pipe = Pipe::new(pipe_values![4_i32, 5_i32]);
    pipe.to(None).unwrap();

    let passed_through = pipe
        .return_value()
        .and_then(PipeValue::get::<Vec<PipeValue>>)
        .unwrap();
    let recovered = passed_through
        .iter()
        .map(|value| value.get::<i32>().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(recovered, vec![4, 5]);
}

#[test]
fn test_return_value_is_none_before_any_invocation() {
    assert!(Pipe::new(pipe_values![1_i32]).return_value().is_none());
}

// =============================================================================
// `to`: overwrite semantics and instance identity
// =============================================================================

#[test]
fn test_second_to_overwrites_first_result() {
    let double = Callable::from_fn1(|value: i32| value * 2);
    let negate = Callable::from_fn1(|value: i32| -value);

    let mut pipe = Pipe::new(pipe_values![21_i32]);
    pipe.to(&double).unwrap();
    assert_eq!(
        pipe.return_value().and_then(PipeValue::get::<i32>),
        Some(42)
    );

    pipe.to(&negate).unwrap();
    assert_eq!(
        pipe.return_value().and_then(PipeValue::get::<i32>),
        Some(-21)
    );
}

#[test]
fn test_to_returns_the_same_instance() {
    let identity = Callable::from_fn1(|value: i32| value);

    let mut pipe = Pipe::new(pipe_values![1_i32]);
    let address_before = std::ptr::from_ref(&pipe) as usize;

    let chained = pipe.to(&identity).unwrap();
    let address_after = std::ptr::from_ref(&*chained) as usize;

    assert_eq!(address_before, address_after);
}

#[test]
fn test_to_never_alters_params() {
    let consume = Callable::from_fn1(|value: i32| value + 1);

    let mut pipe = Pipe::new(pipe_values![9_i32]);
    pipe.to(&consume).unwrap();
    pipe.to(&consume).unwrap();

    assert_eq!(pipe.params().len(), 1);
    assert_eq!(pipe.params()[0].get::<i32>(), Some(9));
}

// =============================================================================
// `to`: error conditions
// =============================================================================

#[test]
fn test_to_propagates_arity_mismatch() {
    let binary = Callable::from_fn2(|first: i32, second: i32| first + second);

    let mut pipe = Pipe::new(pipe_values![1_i32, 2_i32, 3_i32]);
    let error = pipe.to(&binary).unwrap_err();

    assert_eq!(
        error,
        PipeError::ArityMismatch(ArityMismatchError {
            expected: 2,
            actual: 3,
        })
    );
}

#[test]
fn test_failed_to_commits_no_partial_update() {
    let store = Callable::from_fn1(|value: i32| value);
    let failing = Callable::new(|_| Err(PipeError::invocation("stage exploded")));

    let mut pipe = Pipe::new(pipe_values![11_i32]);
    pipe.to(&store).unwrap();
    assert!(pipe.to(&failing).is_err());

    assert_eq!(
        pipe.return_value().and_then(PipeValue::get::<i32>),
        Some(11)
    );
}

// =============================================================================
// `then_to`: new-instance chaining
// =============================================================================

#[test]
fn test_then_to_returns_a_fresh_instance() {
    let stringify = Callable::from_fn1(|value: i32| value.to_string());

    let mut pipe = Pipe::new(pipe_values![8_i32]);
    pipe.to(&Callable::from_fn1(|value: i32| value)).unwrap();

    let receiver_address = std::ptr::from_ref(&pipe) as usize;
    let next = pipe.then_to(&stringify).unwrap();
    let next_address = std::ptr::from_ref(&next) as usize;

    assert_ne!(receiver_address, next_address);
}

#[test]
fn test_then_to_hands_off_a_single_value() {
    let double = Callable::from_fn1(|value: i32| value * 2);
    let add = Callable::from_fn2(|first: i32, second: i32| first + second);

    let mut pipe = Pipe::new(pipe_values![3_i32, 4_i32]);
    let next = pipe.to(&add).unwrap().then_to(&double).unwrap();

    assert_eq!(
        next.return_value().and_then(PipeValue::get::<i32>),
        Some(14)
    );
    assert_eq!(next.params().len(), 1);
    assert_eq!(next.params()[0].get::<i32>(), Some(14));
}

#[test]
fn test_then_to_does_not_spread_sequences() {
    // The stored result is a Vec; then_to must pass it as one argument,
    // not as two.
    let make_pair = Callable::from_fn0(|| vec![1_i32, 2_i32]);
    let measure = Callable::from_fn1(|pair: Vec<i32>| pair.len());

    let mut pipe = Pipe::empty();
    let next = pipe.to(&make_pair).unwrap().then_to(&measure).unwrap();

    assert_eq!(
        next.return_value().and_then(PipeValue::get::<usize>),
        Some(2)
    );
}

#[test]
fn test_then_to_leaves_the_receiver_untouched() {
    let seed = Callable::from_fn1(|value: i32| value * 10);
    let next_stage = Callable::from_fn1(|value: i32| value + 1);

    let mut pipe = Pipe::new(pipe_values![5_i32]);
    pipe.to(&seed).unwrap();
    let _ = pipe.then_to(&next_stage).unwrap();

    assert_eq!(pipe.params().len(), 1);
    assert_eq!(pipe.params()[0].get::<i32>(), Some(5));
    assert_eq!(
        pipe.return_value().and_then(PipeValue::get::<i32>),
        Some(50)
    );
}

#[test]
fn test_then_to_before_to_passes_the_absent_marker() {
    let observe_absence = Callable::new(|arguments| {
        assert_eq!(arguments.len(), 1);
        Ok(PipeValue::new(arguments[0].is_absent()))
    });

    let pipe = Pipe::new(pipe_values![1_i32, 2_i32]);
    let next = pipe.then_to(&observe_absence).unwrap();

    assert_eq!(
        next.return_value().and_then(PipeValue::get::<bool>),
        Some(true)
    );
}

#[test]
fn test_failed_then_to_produces_no_new_pipe() {
    let failing = Callable::new(|_| Err(PipeError::invocation("no hand-off")));

    let mut pipe = Pipe::new(pipe_values![1_i32]);
    pipe.to(&Callable::from_fn1(|value: i32| value)).unwrap();

    let error = pipe.then_to(&failing).unwrap_err();
    assert_eq!(error, PipeError::invocation("no hand-off"));
}
