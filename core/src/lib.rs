//! # StudyHub Core
//!
//! The minimal state-machine substrate shared by the StudyHub client crates.
//!
//! Stateful features (today: the session store) are written as reducers:
//!
//! ```text
//! (State, Action, Environment) → (State, Effects)
//! ```
//!
//! - **State**: owned, `Clone`-able domain state
//! - **Action**: every input the feature reacts to — user intent and the
//!   results of completed side effects
//! - **Reducer**: the pure transition function; all branching lives here
//! - **Effect**: a *description* of a side effect, returned as a value and
//!   executed by whatever runtime drives the reducer
//! - **Environment**: injected dependencies, so tests can substitute fakes
//!
//! Keeping transitions pure means every session-lifecycle rule can be
//! exercised in-memory, without storage or a network in the loop.

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use smallvec::{SmallVec, smallvec};

/// Reducer module - the core trait for feature transition logic.
pub mod reducer {
    use smallvec::SmallVec;

    /// The transition function of a feature's state machine.
    ///
    /// A reducer validates the action against the current state, mutates
    /// the state in place, and returns descriptions of the side effects the
    /// runtime should perform next. It must not perform I/O itself.
    ///
    /// Effects are plain values of the feature's own [`Reducer::Effect`]
    /// type, so tests can assert on exactly what a transition asked for.
    /// The runtime contract is that returned effects are executed **in
    /// order**, each completed before the next starts; dependent-write
    /// chains rely on that.
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for SessionReducer {
    ///     type State = SessionState;
    ///     type Action = SessionAction;
    ///     type Effect = SessionEffect;
    ///     type Environment = ();
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut SessionState,
    ///         action: SessionAction,
    ///         env: &(),
    ///     ) -> SmallVec<[SessionEffect; 4]> {
    ///         match action {
    ///             SessionAction::Logout => smallvec![SessionEffect::ServerLogout],
    ///             _ => smallvec![],
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on.
        type State;

        /// The action type this reducer processes.
        type Action;

        /// The effect description type this reducer emits.
        type Effect;

        /// The environment type carrying injected dependencies.
        type Environment;

        /// Apply one action to the state, returning follow-up effects.
        ///
        /// Most transitions produce zero or one effect; the inline capacity
        /// of four covers every reducer in this workspace without a heap
        /// allocation.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Self::Effect; 4]>;
    }
}

/// Environment module - dependency traits shared across features.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Abstracts the wall clock so expiry logic is testable.
    pub trait Clock: Send + Sync {
        /// The current time.
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// A clock frozen at a fixed instant, for deterministic tests.
    #[derive(Debug, Clone, Copy)]
    pub struct FixedClock {
        /// The instant this clock always reports.
        pub time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a clock pinned to `time`.
        #[must_use]
        pub const fn at(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }
}
