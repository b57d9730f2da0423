//! Pixel-fire grid: a coarse cell grid shaded through two concatenated
//! complementary color ramps by a drifting noise field.

use image::{Rgb, RgbImage};
use noise_ramp::{build_ramp, Hsb, PerlinField, Range, RangeMapper, SketchParameters};
use rand::Rng;

const GRID_SIZE: u32 = 54;
const RAMP_STEPS: usize = 17;
const NOISE_INCREMENT: f64 = 0.0255;

fn main() {
    let params = SketchParameters {
        name: "pixel-fire".to_string(),
        seed: "lets find a good one...".to_string(),
        fps: 10,
        duration_in_frames: 8,
        is_animated: true,
        export_frames: true,
        ..Default::default()
    };

    let mut rng = params.rng();

    let base_hue = rng.gen_range(0.0..360.0).floor();
    let ramp = build_ramp(
        Hsb::new(base_hue, rng.gen_range(40.0..60.0), 60.0),
        RAMP_STEPS,
    )
    .unwrap();
    let counter_ramp = build_ramp(
        Hsb::new((base_hue + 180.0) % 360.0, rng.gen_range(50.0..80.0), 80.0),
        RAMP_STEPS,
    )
    .unwrap();
    let palette: Vec<Hsb> = ramp
        .colors()
        .iter()
        .chain(counter_ramp.colors())
        .copied()
        .collect();

    let noise_span = GRID_SIZE as f64 * NOISE_INCREMENT;
    let mut mapper = RangeMapper::new(
        PerlinField::new(params.resolve_noise_seed()),
        Range::new(0.0, params.width as f64),
        Range::new(0.0, params.height as f64),
        Range::new(0.0, noise_span),
        Range::new(0.0, noise_span),
    )
    .unwrap();

    std::fs::create_dir_all("out").unwrap();

    let cell = params.width / GRID_SIZE;
    for frame in 0..params.duration_in_frames {
        mapper.set_depth(frame as f64 * NOISE_INCREMENT);

        let mut image_buf = RgbImage::new(params.width, params.height);
        for (px, py, pixel) in image_buf.enumerate_pixels_mut() {
            // Snap to the cell's top-left corner.
            let x = (px / cell * cell) as f64;
            let y = (py / cell * cell) as f64;
            let value = mapper.sample_at(x, y);

            let index = ((value * palette.len() as f64) as usize).min(palette.len() - 1);
            *pixel = Rgb(palette[index].to_rgb8());
        }

        let frame_path = format!("out/{}", params.frame_filename(frame, "png"));
        image_buf.save(&frame_path).unwrap();
        println!("wrote {}", frame_path);
    }

    let config_path = format!("out/{}-config.json", params.output_basename());
    params.write_config(&config_path).unwrap();
    println!("wrote {}", config_path);
    println!("Done.");
}
