use std::f32::consts::PI;

use crate::fan::RimSample;

/// Straight (non-premultiplied) RGB color, channels nominally in `[0, 1]`.
///
/// The vertex shader passes these values through untouched, so whatever is
/// stored here is what gets rasterized.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    pub const GREEN: Rgb = Rgb::new(0.0, 1.0, 0.0);
    pub const BLUE: Rgb = Rgb::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn gray(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Color from three sine waves of `angle`, phase-shifted by a third of a turn each.
    ///
    /// Each channel is `0.5 + 0.5 * sin(angle + k * 2π/3)` for `k = 0, 1, 2`,
    /// so the result always lies in `[0, 1]`.
    #[inline]
    pub fn from_phase(angle: f32) -> Self {
        Self::new(
            0.5 + 0.5 * angle.sin(),
            0.5 + 0.5 * (angle + 2.0 * PI / 3.0).sin(),
            0.5 + 0.5 * (angle + 4.0 * PI / 3.0).sin(),
        )
    }

    /// Linear interpolation; `t = 0` yields `self` and `t = 1` yields `other` exactly.
    #[inline]
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let s = 1.0 - t;
        Rgb::new(
            self.r * s + other.r * t,
            self.g * s + other.g * t,
            self.b * s + other.b * t,
        )
    }

    #[inline]
    pub fn scale(self, k: f32) -> Rgb {
        Rgb::new(self.r * k, self.g * k, self.b * k)
    }

    #[inline]
    pub fn clamped(self) -> Rgb {
        Rgb::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// True when every channel lies in `[0, 1]`.
    #[inline]
    pub fn is_normalized(self) -> bool {
        [self.r, self.g, self.b].iter().all(|c| (0.0..=1.0).contains(c))
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[f32; 3]> for Rgb {
    #[inline]
    fn from([r, g, b]: [f32; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

/// Hub color plus a two-stop rim gradient for fan-topology shapes.
///
/// Rim vertex `i` of `n` segments gets `lerp(from, to, i / n)`, so the first
/// and the closing rim vertex carry the two endpoint colors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Gradient {
    pub hub: Rgb,
    pub from: Rgb,
    pub to: Rgb,
}

impl Gradient {
    #[inline]
    pub const fn new(hub: Rgb, from: Rgb, to: Rgb) -> Self {
        Self { hub, from, to }
    }

    /// Rim color at parameter `t` in `[0, 1]`.
    #[inline]
    pub fn at(&self, t: f32) -> Rgb {
        self.from.lerp(self.to, t.clamp(0.0, 1.0)).clamped()
    }

    pub fn sample(&self, sample: Option<RimSample>, segments: u32) -> Rgb {
        match sample {
            None => self.hub,
            Some(s) => self.at(s.index as f32 / segments.max(1) as f32),
        }
    }
}

/// Data-only color source for fan shapes (ellipse, circle, star, polygon).
///
/// Resolved per vertex through [`FanColor::sample`]; `None` is the hub vertex,
/// whose angle is undefined.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FanColor {
    /// Same color for hub and rim.
    Solid(Rgb),
    /// Rim color `base + amplitude * sin(angle)`, clamped to `[0, 1]`.
    Wave { hub: Rgb, base: Rgb, amplitude: Rgb },
    /// Rim color picked by rim-index parity (star points vs. valleys).
    Alternating { hub: Rgb, even: Rgb, odd: Rgb },
    Gradient(Gradient),
}

impl FanColor {
    pub fn sample(&self, sample: Option<RimSample>, segments: u32) -> Rgb {
        match (*self, sample) {
            (FanColor::Solid(c), _) => c,
            (FanColor::Gradient(g), s) => g.sample(s, segments),

            (FanColor::Wave { hub, .. }, None) => hub,
            (FanColor::Wave { base, amplitude, .. }, Some(s)) => {
                let k = s.angle.sin();
                Rgb::new(
                    base.r + amplitude.r * k,
                    base.g + amplitude.g * k,
                    base.b + amplitude.b * k,
                )
                .clamped()
            }

            (FanColor::Alternating { hub, .. }, None) => hub,
            (FanColor::Alternating { even, odd, .. }, Some(s)) => {
                if s.index % 2 == 0 { even } else { odd }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rim(index: u32, angle: f32) -> Option<RimSample> {
        Some(RimSample { index, angle })
    }

    #[test]
    fn lerp_hits_endpoints_exactly() {
        let a = Rgb::new(0.5, 0.1, 0.8);
        let b = Rgb::new(0.9, 0.4, 0.6);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn from_phase_stays_normalized() {
        for i in 0..360 {
            let c = Rgb::from_phase(i as f32 * PI / 180.0);
            assert!(c.is_normalized(), "{c:?} at {i} degrees");
        }
    }

    #[test]
    fn from_phase_at_zero() {
        let c = Rgb::from_phase(0.0);
        assert_eq!(c.r, 0.5);
        assert!((c.g - (0.5 + 0.5 * (3f32.sqrt() / 2.0))).abs() < 1e-6);
        assert!((c.b - (0.5 - 0.5 * (3f32.sqrt() / 2.0))).abs() < 1e-6);
    }

    #[test]
    fn clamped_pulls_channels_into_range() {
        let c = Rgb::new(-0.2, 0.5, 1.7).clamped();
        assert_eq!(c, Rgb::new(0.0, 0.5, 1.0));
        assert!(c.is_normalized());
    }

    #[test]
    fn gradient_hub_and_endpoints() {
        let g = Gradient::new(Rgb::new(0.0, 0.8, 1.0), Rgb::new(0.0, 0.8, 1.0), Rgb::new(0.0, 0.3, 1.0));
        assert_eq!(g.sample(None, 8), g.hub);
        assert_eq!(g.sample(rim(0, 0.0), 8), g.from);
        assert_eq!(g.sample(rim(8, 0.0), 8), g.to);
    }

    #[test]
    fn wave_follows_sine_of_angle() {
        let wave = FanColor::Wave {
            hub: Rgb::new(0.5, 0.0, 0.0),
            base: Rgb::new(0.5, 0.0, 0.0),
            amplitude: Rgb::new(0.5, 0.0, 0.0),
        };
        assert_eq!(wave.sample(None, 30), Rgb::new(0.5, 0.0, 0.0));
        assert_eq!(wave.sample(rim(0, 0.0), 30), Rgb::new(0.5, 0.0, 0.0));
        let top = wave.sample(rim(7, PI / 2.0), 30);
        assert!((top.r - 1.0).abs() < 1e-6);
        assert!(top.is_normalized());
    }

    #[test]
    fn alternating_uses_rim_parity() {
        let star = FanColor::Alternating {
            hub: Rgb::new(1.0, 1.0, 0.2),
            even: Rgb::new(1.0, 0.6, 0.0),
            odd: Rgb::new(1.0, 1.0, 0.0),
        };
        assert_eq!(star.sample(None, 10), Rgb::new(1.0, 1.0, 0.2));
        assert_eq!(star.sample(rim(4, 0.0), 10), Rgb::new(1.0, 0.6, 0.0));
        assert_eq!(star.sample(rim(5, 0.0), 10), Rgb::new(1.0, 1.0, 0.0));
    }
}
