use rand::Rng;
use thiserror::Error;

pub mod color;
pub mod layout;
pub mod noise;
pub mod sketch;

pub use color::{adjust_brightness_with_hue_shift, build_ramp, ColorRamp, Hsb};
pub use noise::{FbmField, NoiseField, PerlinField};
pub use sketch::SketchParameters;

#[derive(Debug, Error)]
pub enum NoiseRampError {
    /// A source range with `min == max` has no defined affine image.
    #[error("source range on the {axis} axis has zero width")]
    ZeroWidthSourceRange { axis: &'static str },
    #[error("color ramp requires at least one step, requested {requested}")]
    RampStepsOutOfRange { requested: usize },
    #[cfg(feature = "serialize")]
    #[error("config write failed: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serialize")]
    #[error("config encoding failed: {0}")]
    Config(#[from] serde_json::Error),
}

/// Span on one axis. `min` and `max` are kept as given; callers may pass
/// them in either order, widths are always taken as absolute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> f64 {
        (self.max - self.min).abs()
    }
}

impl From<(f64, f64)> for Range {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

/// Remaps points from a source rectangle into noise space and samples a
/// 3-D coherent-noise field there.
///
/// The third noise coordinate (`depth`) belongs to the mapper; sketches
/// advance it between frames or sub-steps to animate an otherwise static
/// 2-D field. Axis sizes are cached at construction.
#[derive(Debug, Clone)]
pub struct RangeMapper<N: NoiseField> {
    noise: N,
    src_x: Range,
    src_y: Range,
    dest_x: Range,
    dest_y: Range,
    src_x_size: f64,
    src_y_size: f64,
    dest_x_size: f64,
    dest_y_size: f64,
    depth: f64,
}

impl<N: NoiseField> RangeMapper<N> {
    /// Conventional per-frame depth increment used by the sketches.
    pub const DEPTH_STEP: f64 = 0.01;
    /// Conventional span for [`randomize_depth`](Self::randomize_depth).
    pub const DEPTH_SPAN: (f64, f64) = (0.0, 20.0);

    pub fn new(
        noise: N,
        source_x: Range,
        source_y: Range,
        dest_x: Range,
        dest_y: Range,
    ) -> Result<Self, NoiseRampError> {
        if source_x.size() == 0.0 {
            return Err(NoiseRampError::ZeroWidthSourceRange { axis: "x" });
        }
        if source_y.size() == 0.0 {
            return Err(NoiseRampError::ZeroWidthSourceRange { axis: "y" });
        }

        Ok(Self {
            noise,
            src_x: source_x,
            src_y: source_y,
            dest_x,
            dest_y,
            src_x_size: source_x.size(),
            src_y_size: source_y.size(),
            dest_x_size: dest_x.size(),
            dest_y_size: dest_y.size(),
            depth: 0.0,
        })
    }

    /// Remaps `(x, y)` per axis into the destination ranges and samples
    /// the noise field at the mapped point and the current depth.
    ///
    /// The result lies in `[0, 1]`. Points outside the source ranges are
    /// extrapolated by the same affine map.
    pub fn sample_at(&self, x: f64, y: f64) -> f64 {
        let mapped_x = (x - self.src_x.min) / self.src_x_size * self.dest_x_size + self.dest_x.min;
        let mapped_y = (y - self.src_y.min) / self.src_y_size * self.dest_y_size + self.dest_y.min;

        self.noise.sample(mapped_x, mapped_y, self.depth)
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn set_depth(&mut self, z: f64) {
        self.depth = z;
    }

    /// Relative increment. Repeated calls accumulate without bound.
    pub fn advance_depth(&mut self, amount: f64) {
        self.depth += amount;
    }

    /// Draws a new depth uniformly from `[min, max)`, consuming the
    /// caller's seeded stream.
    pub fn randomize_depth(&mut self, rng: &mut impl Rng, min: f64, max: f64) {
        self.depth = rng.gen_range(min..max);
    }
}
