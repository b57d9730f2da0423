//! Flow ribbons: a closed ring of points repeatedly advected along
//! angles read from the noise field, leaving overlapping outlines.

use noise_ramp::{layout, PerlinField, Range, RangeMapper, SketchParameters};
use tiny_skia::{Color, Paint, PathBuilder, Pixmap, Stroke, Transform};

const RING_STEPS: usize = 45;
const RIBBON_PASSES: usize = 40;

fn main() {
    let params = SketchParameters {
        name: "warble".to_string(),
        seed: "stripey cask".to_string(),
        ..Default::default()
    };

    let mut rng = params.rng();

    let mut mapper = RangeMapper::new(
        PerlinField::new(params.resolve_noise_seed()),
        Range::new(0.0, params.width as f64),
        Range::new(0.0, params.height as f64),
        Range::new(0.0, 4.0),
        Range::new(0.0, 4.0),
    )
    .unwrap();

    let (depth_min, depth_max) = RangeMapper::<PerlinField>::DEPTH_SPAN;
    mapper.randomize_depth(&mut rng, depth_min, depth_max);

    let mut pixmap = Pixmap::new(params.width, params.height).unwrap();
    pixmap.fill(Color::BLACK);

    let mut paint = Paint::default();
    paint.set_color_rgba8(180, 180, 180, 255);
    paint.anti_alias = true;
    let stroke = Stroke::default();

    let center = (params.width as f64 * 0.5, params.height as f64 * 0.5);
    let mut points = layout::ring_points(center, params.width as f64 * 0.2, RING_STEPS);

    for _ in 0..RIBBON_PASSES {
        let mut pb = PathBuilder::new();
        for (i, pt) in points.iter_mut().enumerate() {
            let dist = 8.0 * mapper.sample_at(2.0 * pt.0, pt.1);
            let angle = (720.0 * mapper.sample_at(pt.0, pt.1)).to_radians();
            pt.0 += dist * angle.cos();
            pt.1 += dist * angle.sin();

            if i == 0 {
                pb.move_to(pt.0 as f32, pt.1 as f32);
            } else {
                pb.line_to(pt.0 as f32, pt.1 as f32);
            }
        }
        pb.close();

        if let Some(path) = pb.finish() {
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }

        mapper.advance_depth(0.001);
    }

    std::fs::create_dir_all("out").unwrap();
    let out_path = format!("out/{}.png", params.output_basename());
    pixmap.save_png(&out_path).unwrap();
    println!("wrote {}", out_path);
}
