//! Event accumulator threaded through rule helpers.
//!
//! An `Accumulator` owns the working copy of the state plus the events
//! emitted during the current reducer call. Rule helpers take it by value
//! and hand it back, so a resolution pipeline reads as a chain of
//! `acc = step(acc, ...)` calls with no shared mutable draft.

use crate::core::{EventKind, GameEvent, GameState};

/// Working state + new events for one reducer call.
#[derive(Clone, Debug)]
pub struct Accumulator {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

impl Accumulator {
    /// Start accumulating on top of `state`.
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            events: Vec::new(),
        }
    }

    /// Append an event to both the state log and this call's events.
    ///
    /// Ids come from `state.next_event_id`, so the log stays contiguous.
    #[must_use]
    pub fn emit(mut self, kind: EventKind) -> Self {
        let event = GameEvent::new(self.state.next_event_id, kind);
        self.state.next_event_id += 1;
        self.state.events.push_back(event.clone());
        self.events.push(event);
        self
    }

    /// Finish the call.
    #[must_use]
    pub fn finish(self) -> Transition {
        Transition {
            state: self.state,
            events: self.events,
        }
    }
}

/// Result of a successful reducer call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The new state.
    pub state: GameState,
    /// Events appended by this call, in order.
    pub events: Vec<GameEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MatchConfig, PlayerId};

    #[test]
    fn test_emit_assigns_contiguous_ids() {
        let state = GameState::new(1, &MatchConfig::default());
        let acc = Accumulator::new(state)
            .emit(EventKind::TurnEnded { player: PlayerId::Player })
            .emit(EventKind::TurnStarted {
                player: PlayerId::Enemy,
                turn: 2,
            });

        let ids: Vec<_> = acc.events.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(acc.state.next_event_id, 2);
        assert_eq!(acc.state.events.len(), 2);
    }

    #[test]
    fn test_finish_keeps_only_new_events() {
        let state = GameState::new(1, &MatchConfig::default());
        let first = Accumulator::new(state)
            .emit(EventKind::TurnEnded { player: PlayerId::Player })
            .finish();

        let second = Accumulator::new(first.state)
            .emit(EventKind::TurnEnded { player: PlayerId::Enemy })
            .finish();

        assert_eq!(second.events.len(), 1);
        assert_eq!(second.events[0].id, 1);
        assert_eq!(second.state.events.len(), 2);
    }
}
