//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions on lifecycle enums such as the dialogue stage.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for Stage {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!(
///             (self, target),
///             (Start, ModeSelection) |
///             (ModeSelection, ModeStyle) |
///             // ... etc
///         )
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Start => vec![ModeSelection],
///             // ... etc
///         }
///     }
/// }
///
/// // Usage:
/// let next = current_stage.transition_to(Stage::ModeStyle)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    ///
    /// This is the preferred way to change state, as it ensures
    /// the transition is valid according to the state machine rules.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal three-state machine exercising the trait's default methods.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum FittingRoom {
        Waiting,
        Trying,
        Done,
    }

    impl StateMachine for FittingRoom {
        fn can_transition_to(&self, target: &Self) -> bool {
            use FittingRoom::*;
            matches!(
                (self, target),
                (Waiting, Trying) | (Trying, Trying) | (Trying, Done)
            )
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use FittingRoom::*;
            match self {
                Waiting => vec![Trying],
                Trying => vec![Trying, Done],
                Done => vec![],
            }
        }
    }

    #[test]
    fn valid_transition_returns_the_target() {
        assert_eq!(
            FittingRoom::Waiting.transition_to(FittingRoom::Trying),
            Ok(FittingRoom::Trying)
        );
    }

    #[test]
    fn invalid_transition_returns_validation_error() {
        let result = FittingRoom::Waiting.transition_to(FittingRoom::Done);
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn self_loops_are_allowed_when_declared() {
        assert_eq!(
            FittingRoom::Trying.transition_to(FittingRoom::Trying),
            Ok(FittingRoom::Trying)
        );
    }

    #[test]
    fn terminal_state_has_no_transitions() {
        assert!(FittingRoom::Done.is_terminal());
        assert!(!FittingRoom::Waiting.is_terminal());
        assert!(FittingRoom::Done.valid_transitions().is_empty());
    }

    #[test]
    fn can_transition_to_agrees_with_valid_transitions() {
        for state in [FittingRoom::Waiting, FittingRoom::Trying, FittingRoom::Done] {
            for target in state.valid_transitions() {
                assert!(state.can_transition_to(&target));
            }
        }
    }
}
