use std::collections::VecDeque;

use crate::NoiseRampError;

/// Hue the ramp drifts toward while lightening.
pub const YELLOW_HUE: f64 = 60.0;
/// Hue the ramp drifts toward while darkening.
pub const PURPLE_HUE: f64 = 280.0;

const LIGHT_BRIGHTNESS_TARGET: f64 = 95.0;
const DARK_BRIGHTNESS_TARGET: f64 = 5.0;

/// HSB color. Hue in `[0, 360)`, saturation and brightness in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Hsb {
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Standard HSB to RGB conversion, quantized to 8-bit channels.
    pub fn to_rgb8(self) -> [u8; 3] {
        let hue = ((self.hue % 360.0) + 360.0) % 360.0;
        let saturation = (self.saturation / 100.0).clamp(0.0, 1.0);
        let value = (self.brightness / 100.0).clamp(0.0, 1.0);

        let chroma = value * saturation;
        let sector = hue / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let m = value - chroma;
        [
            ((r + m) * 255.0).round() as u8,
            ((g + m) * 255.0).round() as u8,
            ((b + m) * 255.0).round() as u8,
        ]
    }
}

/// Odd-length gradient running darkest to lightest, with the base color
/// at the center index. Built once, immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    colors: Vec<Hsb>,
}

impl ColorRamp {
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Index holding the original base color.
    pub fn center(&self) -> usize {
        self.colors.len() / 2
    }

    pub fn get(&self, index: usize) -> Option<&Hsb> {
        self.colors.get(index)
    }

    /// All rungs, darkest first. Callers concatenate ramps from here;
    /// the ramp itself enforces no relation between ramps.
    pub fn colors(&self) -> &[Hsb] {
        &self.colors
    }

    /// Maps `t` in `[0, 1]` to a rung, clamping out-of-range input.
    pub fn pick_unit(&self, t: f64) -> Hsb {
        let last = self.colors.len() as isize - 1;
        let index = ((t * self.colors.len() as f64).floor() as isize).clamp(0, last);
        self.colors[index as usize]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hsb> {
        self.colors.iter()
    }
}

impl<'a> IntoIterator for &'a ColorRamp {
    type Item = &'a Hsb;
    type IntoIter = std::slice::Iter<'a, Hsb>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// Shifts a color lighter or darker, drifting its hue as it goes.
///
/// Positive `shift` lightens and pulls the hue toward yellow; zero or
/// negative darkens and pulls toward purple. The hue pull saturates once
/// `|shift| >= 0.5`. Saturation is clamped to `[5, 95]` and brightness
/// to `[15, 95]`.
///
/// The hue interpolation is deliberately non-circular: it never crosses
/// the 0/360 boundary.
pub fn adjust_brightness_with_hue_shift(c: Hsb, shift: f64) -> Hsb {
    let target_hue = if shift > 0.0 { YELLOW_HUE } else { PURPLE_HUE };
    let pull = (2.0 * shift.abs()).clamp(0.0, 1.0);

    Hsb {
        hue: c.hue + (target_hue - c.hue) * pull,
        saturation: (c.saturation + shift * 75.0).clamp(5.0, 95.0),
        brightness: (c.brightness + shift * 100.0).clamp(15.0, 95.0),
    }
}

/// Builds a symmetric ramp around `base`: equally many darker rungs in
/// front and lighter rungs behind, shading from near-black to near-white
/// through the base hue.
///
/// An even `requested_steps` gets one extra rung so the base sits on an
/// exact center. Zero steps is rejected.
pub fn build_ramp(base: Hsb, requested_steps: usize) -> Result<ColorRamp, NoiseRampError> {
    if requested_steps == 0 {
        return Err(NoiseRampError::RampStepsOutOfRange {
            requested: requested_steps,
        });
    }

    let steps = if requested_steps % 2 == 0 {
        requested_steps + 1
    } else {
        requested_steps
    };
    let half = (steps - 1) / 2;

    let mut colors = VecDeque::with_capacity(steps);
    colors.push_back(base);

    for i in 1..=half {
        let fraction = i as f64 / half as f64;

        let lighten = (LIGHT_BRIGHTNESS_TARGET - base.brightness) * fraction / 100.0;
        colors.push_back(adjust_brightness_with_hue_shift(base, lighten));

        let darken = (DARK_BRIGHTNESS_TARGET - base.brightness) * fraction / 100.0;
        colors.push_front(adjust_brightness_with_hue_shift(base, darken));
    }

    Ok(ColorRamp {
        colors: colors.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teal() -> Hsb {
        Hsb::new(160.0, 80.0, 50.0)
    }

    #[test]
    fn even_requests_are_forced_odd() {
        for (requested, expected) in [(1, 1), (2, 3), (3, 3), (16, 17), (17, 17)] {
            let ramp = build_ramp(teal(), requested).unwrap();
            assert_eq!(ramp.len(), expected);
            assert_eq!(*ramp.get(ramp.center()).unwrap(), teal());
        }
    }

    #[test]
    fn single_step_ramp_is_just_the_base() {
        let ramp = build_ramp(teal(), 1).unwrap();
        assert_eq!(ramp.colors(), &[teal()]);
    }

    #[test]
    fn zero_steps_is_rejected() {
        assert!(matches!(
            build_ramp(teal(), 0),
            Err(NoiseRampError::RampStepsOutOfRange { requested: 0 })
        ));
    }

    #[test]
    fn brightness_moves_monotonically_outward_from_center() {
        let ramp = build_ramp(teal(), 17).unwrap();
        let center = ramp.center();

        for i in 1..=center {
            let lighter = ramp.get(center + i).unwrap();
            let darker = ramp.get(center - i).unwrap();
            assert!(lighter.brightness >= ramp.get(center + i - 1).unwrap().brightness);
            assert!(darker.brightness <= ramp.get(center - i + 1).unwrap().brightness);
        }

        assert!(ramp.get(0).unwrap().brightness < teal().brightness);
        assert!(ramp.get(ramp.len() - 1).unwrap().brightness > teal().brightness);
    }

    #[test]
    fn seventeen_step_teal_ramp_shades_dark_to_light() {
        let ramp = build_ramp(teal(), 17).unwrap();
        assert_eq!(ramp.len(), 17);

        let darkest = ramp.get(0).unwrap();
        assert!((15.0..=20.0).contains(&darkest.brightness));
        assert!(darkest.hue > 160.0 && darkest.hue <= PURPLE_HUE);

        let lightest = ramp.get(16).unwrap();
        assert!((90.0..=95.0).contains(&lightest.brightness));
        assert!(lightest.hue < 160.0 && lightest.hue >= YELLOW_HUE);

        assert_eq!(*ramp.get(8).unwrap(), teal());
    }

    #[test]
    fn zero_shift_is_identity_for_in_range_colors() {
        let c = Hsb::new(200.0, 50.0, 50.0);
        assert_eq!(adjust_brightness_with_hue_shift(c, 0.0), c);
    }

    #[test]
    fn full_lighten_saturates_at_the_ceilings() {
        let shifted = adjust_brightness_with_hue_shift(teal(), 1.0);
        assert_eq!(shifted.hue, YELLOW_HUE);
        assert_eq!(shifted.saturation, 95.0);
        assert_eq!(shifted.brightness, 95.0);
    }

    #[test]
    fn full_darken_saturates_at_the_floors() {
        let shifted = adjust_brightness_with_hue_shift(teal(), -1.0);
        assert_eq!(shifted.hue, PURPLE_HUE);
        assert_eq!(shifted.saturation, 5.0);
        // -1 lands on the brightness floor of 15, not the ramp target of 5.
        assert_eq!(shifted.brightness, 15.0);
    }

    #[test]
    fn hue_lerp_is_not_wraparound_aware() {
        // 350 is 70 degrees from yellow going through 0, but the lerp
        // walks the long way down instead.
        let shifted = adjust_brightness_with_hue_shift(Hsb::new(350.0, 50.0, 50.0), 0.25);
        assert_eq!(shifted.hue, 350.0 + (YELLOW_HUE - 350.0) * 0.5);
    }

    #[test]
    fn pick_unit_clamps_to_the_rungs() {
        let ramp = build_ramp(teal(), 5).unwrap();

        assert_eq!(ramp.pick_unit(0.0), *ramp.get(0).unwrap());
        assert_eq!(ramp.pick_unit(0.5), *ramp.get(2).unwrap());
        assert_eq!(ramp.pick_unit(1.0), *ramp.get(4).unwrap());
        assert_eq!(ramp.pick_unit(-3.0), *ramp.get(0).unwrap());
        assert_eq!(ramp.pick_unit(7.0), *ramp.get(4).unwrap());
    }

    #[test]
    fn rgb_conversion_hits_the_primary_corners() {
        assert_eq!(Hsb::new(0.0, 100.0, 100.0).to_rgb8(), [255, 0, 0]);
        assert_eq!(Hsb::new(120.0, 100.0, 100.0).to_rgb8(), [0, 255, 0]);
        assert_eq!(Hsb::new(240.0, 100.0, 100.0).to_rgb8(), [0, 0, 255]);
        assert_eq!(Hsb::new(0.0, 0.0, 0.0).to_rgb8(), [0, 0, 0]);
        assert_eq!(Hsb::new(0.0, 0.0, 100.0).to_rgb8(), [255, 255, 255]);
    }
}
