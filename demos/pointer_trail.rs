/// Drag a simulated pointer across the mosaic and save what it uncovered.
/// Usage: `pointer_trail [image path]`; without a path a flat color is used.

use {
  circle_split::{
    config::{Config, Size},
    input::{DevicePoint, PointerEvent},
    CircleSplit, ImageSource
  },
  anyhow::Result,
  euclid::Size2D,
  image::Rgb,
  rand::prelude::*,
  std::path::PathBuf
};

const DISPLAY_SIDE: f32 = 400.0;

/// Random walk that bounces off the edges of the display.
fn pointer_trail(rng: &mut impl Rng, steps: usize) -> Vec<DevicePoint> {
  let mut point = DevicePoint::splat(DISPLAY_SIDE / 2.0);
  let mut heading = rng.gen_range(0.0..std::f32::consts::TAU);
  (0..steps).map(|_| {
    heading += rng.gen_range(-0.4..0.4);
    point += euclid::Vector2D::from_angle_and_length(euclid::Angle::radians(heading), 6.0);
    point = point.clamp(DevicePoint::zero(), DevicePoint::splat(DISPLAY_SIDE - 1.0));
    point
  }).collect()
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  let path = "out.png";
  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
  let mut mosaic = CircleSplit::new(
    Config { size: Size::Fixed(DISPLAY_SIDE), ..Config::default() },
    Size2D::splat(DISPLAY_SIDE)
  )?;

  match std::env::args().nth(1) {
    Some(image) => mosaic.set_image(ImageSource::Path(PathBuf::from(image)))?,
    None => mosaic.set_color(Rgb([236, 112, 99]))?
  }
  while mosaic.is_loading() {
    mosaic.tick();
    std::thread::sleep(std::time::Duration::from_millis(16));
  }
  if mosaic.circles().is_empty() {
    anyhow::bail!("nothing to draw, see the log for the image error");
  }

  // a coarse base layer first, then the trail refines it
  mosaic.split_to_level(4);
  mosaic.tick();

  for chunk in pointer_trail(&mut rng, 2000).chunks(8) {
    chunk.iter()
      .for_each(|&offset| { mosaic.on_pointer_move(PointerEvent::Mouse { offset }); });
    mosaic.tick();
  }
  println!("{} circles, max level {}", mosaic.circles().len(), mosaic.max_level());

  mosaic.surface().save(path)?;
  mosaic.destroy();
  Ok(())
}
