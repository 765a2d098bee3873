//! Per-column ray / grid intersection (DDA).
//!
//! The ray steps one grid line at a time, always along the axis whose next
//! boundary is nearer, until it enters a wall cell.

use glam::{DVec2, IVec2, ivec2};

use crate::{
    engine::types::{RayHit, Side},
    world::{EMPTY, Grid, Pose},
};

/// Stand-in for `1 / 0` when a ray component is exactly zero.
const INFINITE_DELTA: f64 = 1e30;

/// Camera-space x for `column`: `-1` at the left edge, towards `+1` at the right.
#[inline(always)]
pub fn camera_x(column: usize, screen_w: usize) -> f64 {
    2.0 * column as f64 / screen_w as f64 - 1.0
}

/// Cast the ray for `column` and return the nearest wall.
///
/// `pose.pos` must lie inside an open cell. On a grid with a solid border
/// every ray hits; a ray that walks off an open edge returns `None`. The
/// walk visits each cell at most once, so it ends after at most
/// `width + height` steps either way.
pub fn cast_column(grid: &Grid, pose: &Pose, column: usize, screen_w: usize) -> Option<RayHit> {
    let ray_dir = pose.ray_dir(camera_x(column, screen_w));
    cast_ray(grid, pose.pos, ray_dir)
}

/// DDA walk from `pos` along `ray_dir`.
pub fn cast_ray(grid: &Grid, pos: DVec2, ray_dir: DVec2) -> Option<RayHit> {
    let mut map: IVec2 = ivec2(pos.x.floor() as i32, pos.y.floor() as i32);

    /* length of ray from one x or y-side to the next ------------------*/
    let delta = DVec2::new(delta_dist(ray_dir.x), delta_dist(ray_dir.y));

    /* step direction and distance to the first x / y boundary ---------*/
    let (step_x, mut side_x) = if ray_dir.x < 0.0 {
        (-1, (pos.x - map.x as f64) * delta.x)
    } else {
        (1, (map.x as f64 + 1.0 - pos.x) * delta.x)
    };
    let (step_y, mut side_y) = if ray_dir.y < 0.0 {
        (-1, (pos.y - map.y as f64) * delta.y)
    } else {
        (1, (map.y as f64 + 1.0 - pos.y) * delta.y)
    };

    /* walk ------------------------------------------------------------*/
    let (side, tile) = loop {
        let side = if side_x < side_y {
            side_x += delta.x;
            map.x += step_x;
            Side::X
        } else {
            side_y += delta.y;
            map.y += step_y;
            Side::Y
        };

        match grid.get(map.x, map.y) {
            None => return None,
            Some(EMPTY) => continue,
            Some(tile) => break (side, tile),
        }
    };

    /* distance to the camera plane (no fish-eye) ----------------------*/
    let perp_wall_dist = match side {
        Side::X => side_x - delta.x,
        Side::Y => side_y - delta.y,
    };

    /* exact hit point along the wall face -----------------------------*/
    let wall = match side {
        Side::X => pos.y + perp_wall_dist * ray_dir.y,
        Side::Y => pos.x + perp_wall_dist * ray_dir.x,
    };

    Some(RayHit {
        perp_wall_dist,
        map,
        tile,
        side,
        wall_x: wall - wall.floor(),
        ray_dir,
    })
}

#[inline(always)]
fn delta_dist(component: f64) -> f64 {
    if component == 0.0 {
        INFINITE_DELTA
    } else {
        (1.0 / component).abs()
    }
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

    #[test]
    fn camera_x_covers_the_screen() {
        assert_eq!(camera_x(0, 640), -1.0);
        assert_eq!(camera_x(320, 640), 0.0);
        assert_eq!(camera_x(0, 1), -1.0);
        assert!(camera_x(639, 640) < 1.0);
    }

    #[test]
    fn single_column_hits_west_wall() {
        let hit = cast_column(&boxed_3x3(), &centre_pose(), 0, 1).unwrap();

        assert_eq!(hit.ray_dir, dvec2(-1.0, -0.66));
        // |dx| > |dy| from the cell centre: the x boundary comes first.
        assert_eq!(hit.side, Side::X);
        assert_eq!(hit.map, ivec2(0, 1));
        assert_eq!(hit.tile, 1);
        assert!((hit.perp_wall_dist - 0.5).abs() < 1e-12);
        // y at the wall: 1.5 + 0.5 * -0.66 = 1.17
        assert!((hit.wall_x - 0.17).abs() < 1e-9);
    }

    #[test]
    fn every_column_terminates_with_positive_distance() {
        let grid = Grid::reference();
        let mut pose = Pose::reference_start(0.66);
        for turn in 0..36 {
            pose.rotate(turn as f64 * 0.1745);
            for col in 0..320 {
                let hit = cast_column(grid, &pose, col, 320).expect("bordered grid");
                assert!(hit.perp_wall_dist > 0.0);
                assert!(hit.tile > 0);
                assert!((0.0..1.0).contains(&hit.wall_x));
            }
        }
    }

    #[test]
    fn axis_aligned_rays_use_the_sentinel() {
        let grid = boxed_3x3();
        let pos = dvec2(1.25, 1.5);

        let east = cast_ray(&grid, pos, dvec2(1.0, 0.0)).unwrap();
        assert_eq!(east.side, Side::X);
        assert_eq!(east.map, ivec2(2, 1));
        assert!((east.perp_wall_dist - 0.75).abs() < 1e-12);

        let north = cast_ray(&grid, pos, dvec2(0.0, -1.0)).unwrap();
        assert_eq!(north.side, Side::Y);
        assert_eq!(north.map, ivec2(1, 0));
        assert!((north.perp_wall_dist - 0.5).abs() < 1e-12);
        assert!((north.wall_x - 0.25).abs() < 1e-12);
    }

    #[test]
    fn flat_wall_has_no_fisheye() {
        // Long corridor, wall at x = 0 facing the viewer.
        let mut rows = vec![vec![1u16; 12]; 12];
        for row in rows.iter_mut().take(11).skip(1) {
            row[1..11].fill(0);
        }
        let grid = Grid::from_rows(&rows).unwrap();
        let pose = Pose::new(dvec2(6.5, 6.0), dvec2(-1.0, 0.0), dvec2(0.0, 0.66));

        for col in 0..64 {
            let hit = cast_column(&grid, &pose, col, 64).unwrap();
            assert_eq!(hit.side, Side::X);
            assert_eq!(hit.map.x, 0);
            assert!((hit.perp_wall_dist - 5.5).abs() < 1e-9, "column {col}");
        }
    }

    #[test]
    fn open_edge_is_a_miss() {
        let grid = Grid::from_rows(&[[1u16, 1, 1], [0, 0, 1], [1, 1, 1]]).unwrap();
        let miss = cast_ray(&grid, dvec2(1.5, 1.5), dvec2(-1.0, 0.0));
        assert!(miss.is_none());
    }
}
