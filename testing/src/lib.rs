//! # StudyHub Testing
//!
//! Reducer test utilities: a fluent Given-When-Then harness over
//! [`studyhub_core::reducer::Reducer`], plus small effect assertions.
//!
//! ## Example
//!
//! ```ignore
//! use studyhub_testing::ReducerTest;
//!
//! ReducerTest::new(SessionReducer)
//!     .with_env(())
//!     .given_state(SessionState::LoggedOut)
//!     .when_action(SessionAction::Logout)
//!     .then_state(|state| assert!(!state.is_logged_in()))
//!     .then_effects(|effects| assert!(effects.is_empty()))
//!     .run();
//! ```

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use studyhub_core::reducer::Reducer;

/// Type alias for state assertion functions.
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for effect assertion functions.
type EffectAssertion<E> = Box<dyn FnOnce(&[E])>;

/// Fluent Given-When-Then harness for testing reducers.
///
/// The harness runs one action against one initial state and hands the
/// resulting state and effect descriptions to the registered assertions.
pub struct ReducerTest<R>
where
    R: Reducer,
{
    reducer: R,
    environment: Option<R::Environment>,
    initial_state: Option<R::State>,
    action: Option<R::Action>,
    state_assertions: Vec<StateAssertion<R::State>>,
    effect_assertions: Vec<EffectAssertion<R::Effect>>,
}

impl<R> ReducerTest<R>
where
    R: Reducer,
{
    /// Create a new reducer test with the given reducer.
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            initial_state: None,
            action: None,
            state_assertions: Vec::new(),
            effect_assertions: Vec::new(),
        }
    }

    /// Set the environment for the test.
    #[must_use]
    pub fn with_env(mut self, env: R::Environment) -> Self {
        self.environment = Some(env);
        self
    }

    /// Set the initial state (Given).
    #[must_use]
    pub fn given_state(mut self, state: R::State) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the action to test (When).
    #[must_use]
    pub fn when_action(mut self, action: R::Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Add an assertion about the resulting state (Then).
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&R::State) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the resulting effects (Then).
    #[must_use]
    pub fn then_effects<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[R::Effect]) + 'static,
    {
        self.effect_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions.
    ///
    /// # Panics
    ///
    /// Panics if initial state, action, or environment is not set, or if
    /// any assertion fails.
    #[allow(clippy::expect_used)] // Test harness can use expect
    pub fn run(self) {
        let mut state = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        let action = self.action.expect("Action must be set with when_action()");

        let env = self
            .environment
            .expect("Environment must be set with with_env()");

        // Execute reducer
        let effects = self.reducer.reduce(&mut state, action, &env);

        // Run state assertions
        for assertion in self.state_assertions {
            assertion(&state);
        }

        // Run effect assertions
        for assertion in self.effect_assertions {
            assertion(&effects);
        }
    }
}

/// Helper assertions for effect slices.
pub mod assertions {
    /// Assert that there are no effects.
    ///
    /// # Panics
    ///
    /// Panics if `effects` is not empty.
    pub fn assert_no_effects<E: std::fmt::Debug>(effects: &[E]) {
        assert!(
            effects.is_empty(),
            "Expected no effects, but found {}: {:?}",
            effects.len(),
            effects
        );
    }

    /// Assert the number of effects.
    ///
    /// # Panics
    ///
    /// Panics if the number of effects doesn't match `expected`.
    pub fn assert_effects_count<E: std::fmt::Debug>(effects: &[E], expected: usize) {
        assert_eq!(
            effects.len(),
            expected,
            "Expected {} effects, but found {}: {:?}",
            expected,
            effects.len(),
            effects
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyhub_core::{SmallVec, smallvec};

    struct FlagReducer;

    #[derive(Debug, PartialEq)]
    enum FlagAction {
        Raise,
        Lower,
    }

    #[derive(Debug, PartialEq)]
    enum FlagEffect {
        Notify,
    }

    impl Reducer for FlagReducer {
        type State = bool;
        type Action = FlagAction;
        type Effect = FlagEffect;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut bool,
            action: FlagAction,
            (): &(),
        ) -> SmallVec<[FlagEffect; 4]> {
            match action {
                FlagAction::Raise => {
                    *state = true;
                    smallvec![FlagEffect::Notify]
                },
                FlagAction::Lower => {
                    *state = false;
                    smallvec![]
                },
            }
        }
    }

    #[test]
    fn harness_runs_state_and_effect_assertions() {
        ReducerTest::new(FlagReducer)
            .with_env(())
            .given_state(false)
            .when_action(FlagAction::Raise)
            .then_state(|state| assert!(*state))
            .then_effects(|effects| {
                assert_eq!(effects, &[FlagEffect::Notify]);
            })
            .run();
    }

    #[test]
    fn no_effects_assertion_accepts_quiet_transitions() {
        ReducerTest::new(FlagReducer)
            .with_env(())
            .given_state(true)
            .when_action(FlagAction::Lower)
            .then_state(|state| assert!(!*state))
            .then_effects(assertions::assert_no_effects)
            .run();
    }
}
