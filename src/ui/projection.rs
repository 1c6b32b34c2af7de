/// Orthographic projection of 3D points onto a 2D plot.
///
/// Each axis is normalised to `[-1, 1]` over the data range (and flipped when
/// reversed), the scene is turned by `yaw` around the vertical axis and then
/// tilted by `pitch`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    ranges: [(f64, f64); 3],
    reversed: [bool; 3],
    pub yaw: f64,
    pub pitch: f64,
}

impl Projection {
    pub fn fit(points: &[[f64; 3]], reversed: [bool; 3]) -> Self {
        let mut ranges = [(f64::INFINITY, f64::NEG_INFINITY); 3];
        for p in points {
            for (axis, range) in ranges.iter_mut().enumerate() {
                range.0 = range.0.min(p[axis]);
                range.1 = range.1.max(p[axis]);
            }
        }
        Self {
            ranges,
            reversed,
            yaw: 0.6,
            pitch: 0.5,
        }
    }

    fn normalize(&self, axis: usize, v: f64) -> f64 {
        let (lo, hi) = self.ranges[axis];
        let span = hi - lo;
        let t = if span.is_finite() && span > f64::EPSILON {
            (v - lo) / span * 2.0 - 1.0
        } else {
            0.0
        };
        if self.reversed[axis] {
            -t
        } else {
            t
        }
    }

    /// Screen position of a point.
    pub fn project(&self, p: [f64; 3]) -> [f64; 2] {
        self.project_normalized([
            self.normalize(0, p[0]),
            self.normalize(1, p[1]),
            self.normalize(2, p[2]),
        ])
    }

    fn project_normalized(&self, [x, y, z]: [f64; 3]) -> [f64; 2] {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        let xr = x * cy - y * sy;
        let yr = x * sy + y * cy;
        [xr, z * cp - yr * sp]
    }

    /// Screen segments for the three axes, drawn from the low corner of the
    /// normalised cube.
    pub fn axis_segments(&self) -> [[[f64; 2]; 2]; 3] {
        let origin = [-1.0, -1.0, -1.0];
        let ends = [[1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [-1.0, -1.0, 1.0]];
        let o = self.project_normalized(origin);
        ends.map(|e| [o, self.project_normalized(e)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: [f64; 2], b: [f64; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9
    }

    #[test]
    fn test_front_view_reversed_axes() {
        let points = [[0.0, 0.0, 0.0], [10.0, 10.0, 4.0]];
        let mut proj = Projection::fit(&points, [true, true, true]);
        proj.yaw = 0.0;
        proj.pitch = 0.0;
        // reversed: the largest value lands on the low side
        assert!(approx(proj.project([10.0, 0.0, 4.0]), [-1.0, -1.0]));
        assert!(approx(proj.project([0.0, 5.0, 0.0]), [1.0, 1.0]));
    }

    #[test]
    fn test_unreversed_front_view() {
        let points = [[0.0, 0.0, 0.0], [2.0, 2.0, 2.0]];
        let mut proj = Projection::fit(&points, [false; 3]);
        proj.yaw = 0.0;
        proj.pitch = 0.0;
        assert!(approx(proj.project([2.0, 1.0, 0.0]), [1.0, -1.0]));
    }

    #[test]
    fn test_flat_axis_centres() {
        let points = [[1.0, 5.0, 3.0], [2.0, 5.0, 3.0]];
        let mut proj = Projection::fit(&points, [false; 3]);
        proj.pitch = 0.0;
        proj.yaw = 0.0;
        assert!(approx(proj.project([1.5, 5.0, 3.0]), [0.0, 0.0]));
    }

    #[test]
    fn test_axis_segments_share_origin() {
        let proj = Projection::fit(&[[0.0; 3], [1.0; 3]], [true; 3]);
        let segs = proj.axis_segments();
        assert!(approx(segs[0][0], segs[1][0]));
        assert!(approx(segs[1][0], segs[2][0]));
    }
}
