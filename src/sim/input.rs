//! Press/release bookkeeping between the window's key events and the
//! once-per-frame [`InputCmd`] snapshot.

use super::InputCmd;

/// Logical controls, independent of the key that triggers them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Forward,
    Back,
    TurnLeft,
    TurnRight,
}

/// Held-key counts per action, fed by key events.
///
/// Each press adds one and each release takes one away, so holding two
/// bindings for the same action and letting go of one keeps the motion
/// going. A release without a matching press (a key held across a
/// [`reset`](Self::reset)) is dropped, so counts never go negative.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputState {
    held: [u32; 4],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: Action) {
        let n = &mut self.held[action as usize];
        *n = n.saturating_add(1);
    }

    pub fn release(&mut self, action: Action) {
        let n = &mut self.held[action as usize];
        *n = n.saturating_sub(1);
    }

    /// Current net intents.
    #[inline]
    pub fn snapshot(&self) -> InputCmd {
        let count = |a: Action| self.held[a as usize] as i32;
        InputCmd {
            move_intent: count(Action::Forward) - count(Action::Back),
            rotate_intent: count(Action::TurnLeft) - count(Action::TurnRight),
        }
    }

    /// Forget every held key (e.g. when the window loses focus).
    pub fn reset(&mut self) {
        self.held = [0; 4];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_actions_cancel() {
        let mut input = InputState::new();
        input.press(Action::Forward);
        input.press(Action::Back);
        assert_eq!(input.snapshot().move_intent, 0);

        input.release(Action::Back);
        assert_eq!(input.snapshot().move_intent, 1);
        input.release(Action::Forward);
        assert_eq!(input.snapshot(), InputCmd::default());
    }

    #[test]
    fn overlapping_bindings_compose() {
        let mut input = InputState::new();
        // arrow key and letter key both mapped to turning left
        input.press(Action::TurnLeft);
        input.press(Action::TurnLeft);
        input.release(Action::TurnLeft);
        assert_eq!(input.snapshot().rotate_intent, 1);

        input.press(Action::TurnRight);
        assert_eq!(input.snapshot().rotate_intent, 0);

        input.reset();
        assert_eq!(input.snapshot(), InputCmd::default());
    }

    #[test]
    fn release_after_reset_is_ignored() {
        let mut input = InputState::new();
        input.press(Action::Forward);
        input.press(Action::TurnRight);
        input.reset();

        // keys let go after focus comes back
        input.release(Action::Forward);
        input.release(Action::TurnRight);
        assert_eq!(input.snapshot(), InputCmd::default());

        input.press(Action::Forward);
        assert_eq!(input.snapshot().move_intent, 1);
        input.release(Action::Forward);
        input.release(Action::Forward);
        assert_eq!(input.snapshot().move_intent, 0);
    }
}
