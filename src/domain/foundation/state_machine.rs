//! Transition rules for lifecycle enums.

use super::ValidationError;

/// A lifecycle enum with a fixed set of allowed moves.
///
/// Implementors list the outgoing moves per state; `can_transition_to`
/// and `transition_to` follow from that list.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// States reachable in one move.
    fn valid_transitions(&self) -> Vec<Self>;

    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_transition(self, target))
        }
    }
}
