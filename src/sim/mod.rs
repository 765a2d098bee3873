mod clock;
mod components;
mod input;
mod movement;

pub use clock::{Clock, InstantClock, delta_seconds};
pub use components::InputCmd;
pub use input::{Action, InputState};
pub use movement::{MOVE_SPEED, TURN_RATE, advance};
