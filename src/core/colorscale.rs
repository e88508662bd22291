//! Continuous color scales for the color channel

use serde::Serialize;

/// Viridis stops, evenly spaced over [0, 1]
const VIRIDIS: [[u8; 3]; 17] = [
    [0x44, 0x01, 0x54],
    [0x48, 0x18, 0x6a],
    [0x47, 0x2d, 0x7b],
    [0x42, 0x40, 0x86],
    [0x3b, 0x52, 0x8b],
    [0x33, 0x63, 0x8d],
    [0x2c, 0x72, 0x8e],
    [0x26, 0x82, 0x8e],
    [0x21, 0x91, 0x8c],
    [0x1f, 0xa0, 0x88],
    [0x28, 0xae, 0x80],
    [0x3f, 0xbc, 0x73],
    [0x5e, 0xc9, 0x62],
    [0x84, 0xd4, 0x4b],
    [0xad, 0xdc, 0x30],
    [0xd8, 0xe2, 0x19],
    [0xfd, 0xe7, 0x25],
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum ColorScale {
    #[default]
    Viridis,
}

impl ColorScale {
    /// Name understood by Plotly's `colorscale`
    pub fn name(self) -> &'static str {
        match self {
            ColorScale::Viridis => "Viridis",
        }
    }

    fn stops(self) -> &'static [[u8; 3]] {
        match self {
            ColorScale::Viridis => &VIRIDIS,
        }
    }

    /// Color at `t` in [0, 1]; out-of-range and NaN values are clamped
    pub fn sample(self, t: f64) -> [u8; 3] {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let scaled = t * (stops.len() - 1) as f64;
        let lo = (scaled.floor() as usize).min(stops.len() - 1);
        let hi = (lo + 1).min(stops.len() - 1);
        let s = scaled - lo as f64;

        let mix = |a: u8, b: u8| (a as f64 * (1.0 - s) + b as f64 * s).round() as u8;
        let (a, b) = (stops[lo], stops[hi]);
        [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
    }

    /// Map `value` within `[min, max]` onto the scale
    ///
    /// A degenerate range maps everything to the middle of the scale.
    pub fn sample_in(self, value: f64, (min, max): (f64, f64)) -> [u8; 3] {
        let span = max - min;
        if span == 0.0 {
            return self.sample(0.5);
        }
        self.sample((value - min) / span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_stops() {
        assert_eq!(ColorScale::Viridis.sample(0.0), [0x44, 0x01, 0x54]);
        assert_eq!(ColorScale::Viridis.sample(1.0), [0xfd, 0xe7, 0x25]);
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(ColorScale::Viridis.sample(-3.0), ColorScale::Viridis.sample(0.0));
        assert_eq!(ColorScale::Viridis.sample(7.0), ColorScale::Viridis.sample(1.0));
        assert_eq!(ColorScale::Viridis.sample(f64::NAN), ColorScale::Viridis.sample(0.0));
    }

    #[test]
    fn midpoint_interpolates_between_stops() {
        // 1/32 sits halfway between the first two stops
        let c = ColorScale::Viridis.sample(1.0 / 32.0);
        assert_eq!(c, [0x46, 0x0d, 0x5f]);
    }

    #[test]
    fn sample_in_normalises_range() {
        let scale = ColorScale::Viridis;
        assert_eq!(scale.sample_in(-10.0, (-10.0, 30.0)), scale.sample(0.0));
        assert_eq!(scale.sample_in(30.0, (-10.0, 30.0)), scale.sample(1.0));
        assert_eq!(scale.sample_in(4.0, (4.0, 4.0)), scale.sample(0.5));
    }

    #[test]
    fn tiny_range_still_spans_the_scale() {
        let scale = ColorScale::Viridis;
        let range = (1e-20, 2e-20);
        assert_eq!(scale.sample_in(1e-20, range), scale.sample(0.0));
        assert_eq!(scale.sample_in(2e-20, range), scale.sample(1.0));
    }

    #[test]
    fn plotly_name() {
        assert_eq!(ColorScale::Viridis.name(), "Viridis");
    }
}
