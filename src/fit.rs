//! Aspect-fit placement of a source image inside a container.

use {
  crate::geometry::PixelSpace,
  euclid::{Size2D, Vector2D as V2}
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FitMode {
  /// Fill the whole container, cropping what sticks out.
  Cover,
  /// Fit the whole image inside the container, letterboxing the rest.
  #[default]
  Contain,
}

/// Uniform scale factor and top-left offset of the placed image.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Fit {
  pub ratio: f32,
  /// `x` is the left offset, `y` the top offset. Negative when the image is cropped.
  pub offset: V2<f32, PixelSpace>,
}

impl Fit {
  /// Computes the placement of `origin` inside `container`.
  ///
  /// Both sizes must have a non-zero area, otherwise the ratio is not finite.
  pub fn new(
    container: Size2D<f32, PixelSpace>,
    origin: Size2D<f32, PixelSpace>,
    mode: FitMode
  ) -> Self {
    let origin_ratio = origin.width / origin.height;
    let container_ratio = container.width / container.height;
    // wider source scales to height under cover, to width under contain
    let by_height = match mode {
      FitMode::Cover => origin_ratio > container_ratio,
      FitMode::Contain => origin_ratio < container_ratio,
    };

    if origin_ratio == container_ratio {
      return Fit {
        ratio: container.width / origin.width,
        offset: V2::zero()
      };
    }

    let ratio = if by_height {
      container.height / origin.height
    } else {
      container.width / origin.width
    };
    let scaled = origin * ratio;
    let offset = if by_height {
      V2::new((container.width - scaled.width) / 2.0, 0.0)
    } else {
      V2::new(0.0, (container.height - scaled.height) / 2.0)
    };
    Fit { ratio, offset }
  }

  /// Size of the image once scaled by `ratio`.
  pub fn size(&self, origin: Size2D<f32, PixelSpace>) -> Size2D<f32, PixelSpace> {
    origin * self.ratio
  }
}
