//! Session state machine
//!
//! Running and Paused toggle into each other; GameOver is terminal.

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Running,
    Paused,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    TogglePause,
    CannonStruck,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub applied: bool,
    pub from: SessionState,
    pub to: SessionState,
    pub action: SessionAction,
}

impl SessionState {
    /// Get next state for a given action (if valid)
    pub fn next(self, action: SessionAction) -> Option<SessionState> {
        match (self, action) {
            (SessionState::Running, SessionAction::TogglePause) => Some(SessionState::Paused),
            (SessionState::Paused, SessionAction::TogglePause) => Some(SessionState::Running),
            (SessionState::Running, SessionAction::CannonStruck) => Some(SessionState::GameOver),
            (SessionState::Paused, SessionAction::CannonStruck) => Some(SessionState::GameOver),

            // GameOver absorbs everything
            (SessionState::GameOver, _) => None,
        }
    }

    pub fn can_transition(self, action: SessionAction) -> bool {
        self.next(action).is_some()
    }

    /// Attempt a transition in place
    pub fn transition(&mut self, action: SessionAction) -> Transition {
        let from = *self;
        match from.next(action) {
            Some(to) => {
                *self = to;
                Transition {
                    applied: true,
                    from,
                    to,
                    action,
                }
            }
            None => Transition {
                applied: false,
                from,
                to: from,
                action,
            },
        }
    }

    pub fn is_running(self) -> bool {
        self == SessionState::Running
    }

    pub fn is_paused(self) -> bool {
        self == SessionState::Paused
    }

    pub fn is_game_over(self) -> bool {
        self == SessionState::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(SessionState::default(), SessionState::Running);
    }

    #[test]
    fn test_pause_toggles() {
        let mut state = SessionState::Running;
        let result = state.transition(SessionAction::TogglePause);
        assert!(result.applied);
        assert_eq!(result.from, SessionState::Running);
        assert_eq!(state, SessionState::Paused);

        state.transition(SessionAction::TogglePause);
        assert_eq!(state, SessionState::Running);
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut state = SessionState::Running;
        state.transition(SessionAction::CannonStruck);
        assert!(state.is_game_over());

        let result = state.transition(SessionAction::TogglePause);
        assert!(!result.applied);
        assert_eq!(result.to, SessionState::GameOver);
        assert!(!state.can_transition(SessionAction::CannonStruck));
        assert!(state.is_game_over());
    }

    #[test]
    fn test_paused_can_still_end() {
        assert_eq!(
            SessionState::Paused.next(SessionAction::CannonStruck),
            Some(SessionState::GameOver)
        );
    }
}
