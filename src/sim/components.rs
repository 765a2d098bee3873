/// Net movement pressure for one frame.
///
/// Signed so overlapping key presses cancel instead of fighting:
/// `> 0` and `< 0` move or turn, `0` does nothing on that axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputCmd {
    pub move_intent: i32,   // + forward / − back
    pub rotate_intent: i32, // + left / − right
}
