//! Orthographic orbit camera over a normalised scene

use std::f64::consts::FRAC_PI_2;

/// Keeps the camera off the poles, where azimuth stops meaning anything
const MAX_ELEVATION: f64 = FRAC_PI_2 - 0.05;
const MIN_ZOOM: f64 = 0.2;
const MAX_ZOOM: f64 = 10.0;

/// Axis-aligned data bounds, used to fit any dataset into [-1, 1]^3
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneBounds {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl SceneBounds {
    pub fn from_axes(axes: [(f64, f64); 3]) -> Self {
        Self {
            min: [axes[0].0, axes[1].0, axes[2].0],
            max: [axes[0].1, axes[1].1, axes[2].1],
        }
    }

    /// Map a data point into [-1, 1] per axis; flat axes collapse to 0
    pub fn normalize(&self, p: [f64; 3]) -> [f64; 3] {
        let mut out = [0.0; 3];
        for axis in 0..3 {
            let span = self.max[axis] - self.min[axis];
            if span != 0.0 {
                out[axis] = (p[axis] - self.min[axis]) / span * 2.0 - 1.0;
            }
        }
        out
    }

    /// Corners of the normalised box, bit i of the index picks max on axis i
    pub fn unit_corners() -> [[f64; 3]; 8] {
        let mut corners = [[0.0; 3]; 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            for (axis, c) in corner.iter_mut().enumerate() {
                *c = if i & (1 << axis) == 0 { -1.0 } else { 1.0 };
            }
        }
        corners
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub azimuth: f64,
    pub elevation: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            azimuth: -1.07,
            elevation: 0.63,
            zoom: 1.0,
        }
    }
}

impl Camera {
    /// Screen-plane coordinates (x right, y up) of a normalised point
    pub fn project(&self, p: [f64; 3]) -> (f64, f64) {
        let (sa, ca) = self.azimuth.sin_cos();
        let (se, ce) = self.elevation.sin_cos();

        let screen_x = -p[0] * sa + p[1] * ca;
        let screen_y = -p[0] * ca * se - p[1] * sa * se + p[2] * ce;
        (screen_x * self.zoom, screen_y * self.zoom)
    }

    /// Distance along the view direction; larger is further away
    pub fn depth(&self, p: [f64; 3]) -> f64 {
        let (sa, ca) = self.azimuth.sin_cos();
        let (se, ce) = self.elevation.sin_cos();
        -(p[0] * ce * ca + p[1] * ce * sa + p[2] * se)
    }

    pub fn orbit(&mut self, d_azimuth: f64, d_elevation: f64) {
        self.azimuth = (self.azimuth + d_azimuth).rem_euclid(std::f64::consts::TAU);
        self.elevation = (self.elevation + d_elevation).clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }

    pub fn zoom_by(&mut self, factor: f64) {
        if factor.is_finite() && factor > 0.0 {
            self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }
}
