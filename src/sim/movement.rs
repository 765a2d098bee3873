//! Player motion: walk along the heading with per-axis wall checks, turn by
//! rotating heading and camera plane together.

use crate::sim::InputCmd;
use crate::world::{Grid, Pose};

/* ----------------------------------------------------------------- */
/*  Speed constants (per second of frame time)                       */
/* ----------------------------------------------------------------- */
pub const MOVE_SPEED: f64 = 5.0; // cells / second
pub const TURN_RATE: f64 = 3.0; // radians / second

/// Integrate one frame of intents into a new pose.
///
/// X and Y are tried separately; an axis whose destination cell is not
/// open stays put while the other one still moves, which lets the player
/// slide along walls. The Y test uses the already-updated X.
pub fn advance(pose: &Pose, cmd: InputCmd, grid: &Grid, dt: f64) -> Pose {
    let move_speed = dt * MOVE_SPEED;
    let rot_speed = dt * TURN_RATE;

    let mut next = *pose;

    /* 1. walk -------------------------------------------------------- */
    let walk = match cmd.move_intent.signum() {
        1 => pose.dir * move_speed,
        -1 => -pose.dir * move_speed,
        _ => glam::DVec2::ZERO,
    };
    if walk != glam::DVec2::ZERO {
        if grid.is_traversable(next.pos.x + walk.x, next.pos.y) {
            next.pos.x += walk.x;
        }
        if grid.is_traversable(next.pos.x, next.pos.y + walk.y) {
            next.pos.y += walk.y;
        }
    }

    /* 2. turn -------------------------------------------------------- */
    match cmd.rotate_intent.signum() {
        1 => next.rotate(rot_speed),
        -1 => next.rotate(-rot_speed),
        _ => {}
    }

    next
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn boxed_3x3() -> Grid {
        Grid::from_rows(&[[1u16, 1, 1], [1, 0, 1], [1, 1, 1]]).unwrap()
    }

    fn centre_pose() -> Pose {
        Pose::new(dvec2(1.5, 1.5), dvec2(-1.0, 0.0), dvec2(0.0, 0.66))
    }

    fn cmd(move_intent: i32, rotate_intent: i32) -> InputCmd {
        InputCmd {
            move_intent,
            rotate_intent,
        }
    }

    #[test]
    fn forward_step_into_open_cell() {
        let next = advance(&centre_pose(), cmd(1, 0), &boxed_3x3(), 0.1);
        assert!((next.pos.x - 1.0).abs() < 1e-12);
        assert_eq!(next.pos.y, 1.5);
        assert_eq!(next.dir, centre_pose().dir);
    }

    #[test]
    fn backward_blocked_by_wall() {
        // 1.5 + 0.6 = 2.1 lands in the east wall
        let next = advance(&centre_pose(), cmd(-1, 0), &boxed_3x3(), 0.12);
        assert_eq!(next.pos, centre_pose().pos);
    }

    #[test]
    fn slides_along_blocked_axis() {
        let grid = Grid::from_rows(&[
            [1u16, 1, 1, 1],
            [1, 0, 0, 1],
            [1, 0, 0, 1],
            [1, 1, 1, 1],
        ])
        .unwrap();
        // heading up-left into the corner; x is open, y hits the top wall
        let dir = dvec2(-1.0, -1.0).normalize();
        let pose = Pose::new(dvec2(2.5, 1.2), dir, dir.perp() * 0.66);

        let next = advance(&pose, cmd(1, 0), &grid, 0.1);
        assert!((next.pos.x - (2.5 + dir.x * 0.5)).abs() < 1e-12);
        assert_eq!(next.pos.y, 1.2);
    }

    #[test]
    fn no_intent_no_motion() {
        let pose = centre_pose();
        assert_eq!(advance(&pose, InputCmd::default(), &boxed_3x3(), 0.5), pose);
    }

    #[test]
    fn only_the_sign_of_the_intent_matters() {
        let a = advance(&centre_pose(), cmd(1, 0), &boxed_3x3(), 0.05);
        let b = advance(&centre_pose(), cmd(3, 0), &boxed_3x3(), 0.05);
        assert_eq!(a, b);
    }

    #[test]
    fn turn_left_rotates_counter_clockwise() {
        let pose = centre_pose();
        let next = advance(&pose, cmd(0, 1), &boxed_3x3(), 0.1);

        let (s, c) = 0.3_f64.sin_cos();
        let expect_dir = dvec2(-c, -s);
        let expect_plane = dvec2(-0.66 * s, 0.66 * c);
        assert!((next.dir - expect_dir).length() < 1e-12);
        assert!((next.plane - expect_plane).length() < 1e-12);
        assert!((next.dir.length_squared() - 1.0).abs() < 1e-12);
        assert_eq!(next.pos, pose.pos);
    }

    #[test]
    fn turn_right_undoes_turn_left() {
        let pose = centre_pose();
        let left = advance(&pose, cmd(0, 1), &boxed_3x3(), 0.1);
        let back = advance(&left, cmd(0, -1), &boxed_3x3(), 0.1);
        assert!((back.dir - pose.dir).length() < 1e-12);
        assert!((back.plane - pose.plane).length() < 1e-12);
    }
}
