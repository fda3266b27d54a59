//! .
//!
//! The origin of both coordinate systems is in the top-left corner. Circle geometry lives in
//! [`PixelSpace`], the oversampled raster both surfaces share; pointer input arrives in
//! [`DeviceSpace`] and is scaled by the pixel ratio before it touches any circle.

use euclid::{Box2D, Point2D, Vector2D as V2};

/// Surface pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;
/// Display (pointer event) coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct DeviceSpace;

pub type P2 = Point2D<f32, PixelSpace>;

/// One circle of the mosaic.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
  pub center: P2,
  pub r: f32,
  /// 1 for the unsplit root, incremented by every subdivision.
  pub level: u32,
  /// Center of the circle this one was split from. Inert apart from a prospective merge.
  pub parent: Option<P2>,
}

impl Circle {
  /// The unsplit root, covering a square surface of side `side`.
  pub fn root(side: f32) -> Self {
    Circle {
      center: P2::splat(side / 2.0),
      r: side / 2.0,
      level: 1,
      parent: None,
    }
  }

  pub fn bounding_box(&self) -> Box2D<f32, PixelSpace> {
    let half = V2::splat(self.r);
    Box2D::new(self.center - half, self.center + half)
  }

  pub fn area(&self) -> f32 {
    std::f32::consts::PI * self.r * self.r
  }

  /// Point inside the bounding *square* of the circle, edges excluded.
  ///
  /// This is not a distance test: the corners of the square outside the disc count as hits,
  /// which is what makes sweeping the pointer across the gaps between circles split them.
  pub fn hit(&self, point: P2) -> bool {
    point.x > self.center.x - self.r && point.x < self.center.x + self.r &&
    point.y > self.center.y - self.r && point.y < self.center.y + self.r
  }
}
