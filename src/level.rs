use num_traits::Float;

/// Highest level a circle may reach on a surface of `surface_diameter` before its radius falls
/// below `min_diameter`.
///
/// Starts from the root radius at level 1 and halves it while it is still at least
/// `min_diameter`. The radius is compared against the *diameter* setting; together with
/// [`pixel_level`] this gives the ceiling every split request is clamped to.
///
/// `min_diameter` must be positive, otherwise the radius never drops below it.
pub fn max_level<F: Float>(surface_diameter: F, min_diameter: F) -> u32 {
  let two = F::one() + F::one();
  let mut radius = surface_diameter / two;
  let mut level = 1;
  while radius >= min_diameter {
    radius = radius / two;
    level += 1;
  }
  level
}

/// Deepest level whose circles are still at least one pixel across on a `side` pixel surface.
pub fn pixel_level(side: u32) -> u32 {
  side.max(1).ilog2() + 1
}

#[cfg(test)] mod tests {
  use super::*;

  #[test] fn halving_sequence() {
    // 128 64 32 16 8 4 2 | 1
    assert_eq!(max_level(256.0f32, 2.0), 8);
    assert_eq!(max_level(256.0f64, 2.0), 8);
  }

  #[test] fn min_larger_than_root() {
    assert_eq!(max_level(10.0f32, 6.0), 1);
    assert_eq!(max_level(10.0f32, 5.0), 2);
  }

  #[test] fn grows_as_minimum_shrinks() {
    let levels = [8.0, 4.0, 2.0, 1.0, 0.5]
      .map(|min| max_level(512.0f32, min));
    assert!(levels.windows(2).all(|w| w[1] == w[0] + 1), "{levels:?}");
  }

  #[test] fn pixel_level_stops_at_one_pixel() {
    // diameters 256 128 64 32 16 8 4 2 1
    assert_eq!(pixel_level(256), 9);
    assert_eq!(pixel_level(300), 9);
    assert_eq!(pixel_level(1), 1);
  }
}
