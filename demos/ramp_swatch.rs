//! Renders a stack of color ramps as horizontal swatch strips.

use image::{Rgb, RgbImage};
use noise_ramp::{build_ramp, Hsb};
use rand::{rngs::StdRng, Rng, SeedableRng};

const RAMP_STEPS: usize = 17;
const RAMP_COUNT: usize = 4;
const CELL: u32 = 24;

fn main() {
    let mut rng = StdRng::seed_from_u64(99);

    let mut ramps = Vec::with_capacity(RAMP_COUNT);
    let mut base_hue = rng.gen_range(0.0f64..360.0).floor();
    for _ in 0..RAMP_COUNT {
        let base = Hsb::new(base_hue, rng.gen_range(40.0..60.0), 60.0);
        ramps.push(build_ramp(base, RAMP_STEPS).unwrap());
        base_hue = (base_hue + 60.0) % 360.0;
    }

    let width = RAMP_STEPS as u32 * CELL;
    let height = RAMP_COUNT as u32 * CELL;
    let mut image_buf = RgbImage::new(width, height);

    for (px, py, pixel) in image_buf.enumerate_pixels_mut() {
        let ramp = &ramps[(py / CELL) as usize];
        let color = ramp.pick_unit(px as f64 / width as f64);
        *pixel = Rgb(color.to_rgb8());
    }

    std::fs::create_dir_all("out").unwrap();
    image_buf.save("out/ramp-swatch.png").unwrap();
    println!("wrote out/ramp-swatch.png");
}
