use {
  crate::{
    error::{Error, Result},
    fit::FitMode,
    geometry::DeviceSpace
  },
  euclid::Size2D
};

/// Surface oversampling applied when no ratio is configured.
pub const DEFAULT_PIXEL_RATIO: f32 = 2.0;

/// Displayed side of the mosaic, in device pixels.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum Size {
  /// Largest square fitting the container.
  #[default]
  Auto,
  Fixed(f32),
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Config {
  /// Smallest circle diameter worth splitting down to, in device pixels.
  pub min_diameter: f32,
  pub size: Size,
  /// Placement of the source image on the sampling surface.
  pub image_center_type: FitMode,
  /// Whether pointer input splits circles at all.
  pub event_enabled: bool,
  /// Surface pixels per device pixel.
  pub pixel_ratio: f32,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      min_diameter: 2.0,
      size: Size::Auto,
      image_center_type: FitMode::Contain,
      event_enabled: true,
      pixel_ratio: DEFAULT_PIXEL_RATIO,
    }
  }
}

impl Config {
  pub fn validate(&self) -> Result<()> {
    positive("min_diameter", self.min_diameter)?;
    positive("pixel_ratio", self.pixel_ratio)?;
    if let Size::Fixed(size) = self.size {
      positive("size", size)?;
    }
    Ok(())
  }

  /// Displayed side for a container of the given size.
  pub fn display_side(&self, container: Size2D<f32, DeviceSpace>) -> f32 {
    match self.size {
      Size::Auto => container.width.min(container.height),
      Size::Fixed(size) => size,
    }
  }

  /// Side of the oversampled square surface, in surface pixels.
  pub fn surface_side(&self, container: Size2D<f32, DeviceSpace>) -> Result<u32> {
    let side = (self.display_side(container) * self.pixel_ratio).round();
    if !side.is_finite() || side < 1.0 {
      return Err(Error::InvalidConfig(format!(
        "surface for a {}x{} container would be empty", container.width, container.height
      )));
    }
    Ok(side as u32)
  }

  /// `min_diameter` in surface pixels.
  pub fn surface_min_diameter(&self) -> f32 {
    self.min_diameter * self.pixel_ratio
  }
}

fn positive(name: &str, value: f32) -> Result<()> {
  if value.is_finite() && value > 0.0 {
    Ok(())
  } else {
    Err(Error::InvalidConfig(format!("{name} must be finite and positive, got {value}")))
  }
}
