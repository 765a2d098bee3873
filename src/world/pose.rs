use glam::{DVec2, dvec2};

/// Player view-point in grid space.
///
/// * `pos`   – x,y in cell units; the integer part selects the cell.
/// * `dir`   – heading, roughly unit length.
/// * `plane` – camera plane, perpendicular to `dir`; its length over the
///   length of `dir` sets the horizontal field of view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub pos: DVec2,
    pub dir: DVec2,
    pub plane: DVec2,
}

impl Pose {
    pub fn new(pos: DVec2, dir: DVec2, plane: DVec2) -> Self {
        Self { pos, dir, plane }
    }

    /// Start pose for the reference level: cell (22, 12), looking down −X,
    /// camera plane of length `plane_len` along +Y.
    pub fn reference_start(plane_len: f64) -> Self {
        Self::new(dvec2(22.0, 12.0), dvec2(-1.0, 0.0), dvec2(0.0, plane_len))
    }

    /// Ray direction for camera-space offset `camera_x` in `[-1, 1]`.
    #[inline(always)]
    pub fn ray_dir(&self, camera_x: f64) -> DVec2 {
        self.dir + self.plane * camera_x
    }

    /// Rotate heading and camera plane by `angle` radians
    /// (positive = counter-clockwise = turn left).
    pub fn rotate(&mut self, angle: f64) {
        let rot = DVec2::from_angle(angle);
        self.dir = rot.rotate(self.dir);
        self.plane = rot.rotate(self.plane);
    }

    /// Horizontal field of view in radians.
    pub fn fov(&self) -> f64 {
        2.0 * (self.plane.length() / self.dir.length()).atan()
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
