//! Quadrant subdivision of a single circle.

use {
  crate::{
    drawing::Surface,
    geometry::{Circle, P2},
    registry::{CircleId, CircleRegistry},
    sample::Sample
  },
  euclid::{Box2D, Vector2D as V2},
  image::Rgb,
  std::ops::Range
};

/// Snapshot of a circle taken when it was tagged, consumed once by [`split`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SplitRequest {
  pub center: P2,
  pub r: f32,
  pub level: u32,
  pub target_level: u32,
  pub id: CircleId,
}

impl SplitRequest {
  pub fn new(id: CircleId, circle: &Circle, target_level: u32) -> Self {
    SplitRequest {
      center: circle.center,
      r: circle.r,
      level: circle.level,
      target_level,
      id,
    }
  }

  /// Whether the registry still holds the circle this request was taken from.
  pub fn is_current(&self, registry: &CircleRegistry) -> bool {
    registry.get(self.id).map_or(false, |circle|
      circle.center == self.center && circle.r == self.r && circle.level == self.level
    )
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SplitOutcome {
  /// The circle was subdivided. `id` now holds the top-left child, `appended` the others.
  Split { id: CircleId, appended: Range<usize>, level: u32 },
  /// Nothing to do: the circle is already at or past the (clamped) target.
  AtTarget,
  /// The index no longer refers to the circle the request was made for.
  Stale,
  /// The grid would hold more children than the surface has pixels.
  TooFine,
}

/// Replaces the requested circle by a `2^gap × 2^gap` grid of children, each painted with the
/// color sampled at its own center.
///
/// The child in the top-left cell takes over the parent's slot, the rest are appended in row
/// major order.
pub fn split(
  registry: &mut CircleRegistry,
  surface: &mut impl Surface,
  sampler: &impl Sample,
  request: SplitRequest,
  max_level: u32
) -> SplitOutcome {
  use rayon::prelude::*;

  if request.target_level <= request.level {
    return SplitOutcome::AtTarget;
  }
  if !request.is_current(registry) {
    tracing::debug!(id = request.id.0, ?request, "dropping split request for outdated circle");
    return SplitOutcome::Stale;
  }
  let target_level = request.target_level.min(max_level);
  if target_level <= request.level {
    return SplitOutcome::AtTarget;
  }

  let gap = target_level - request.level;
  let dimensions = surface.dimensions();
  let pixels = dimensions.width as usize * dimensions.height as usize;
  let size = match 1usize.checked_shl(gap)
    .filter(|size| size.checked_mul(*size).map_or(false, |cells| cells <= pixels))
  {
    Some(size) => size,
    None => {
      tracing::debug!(id = request.id.0, gap, pixels, "dropping split request finer than the surface");
      return SplitOutcome::TooFine;
    }
  };
  let r = request.r / size as f32;
  let top_left = request.center - V2::splat(request.r);

  let cells = itertools::iproduct!(0..size, 0..size).collect::<Vec<_>>();
  let children = cells
    .into_par_iter()
    .map(|(i, j)| {
      let center = P2::new(
        top_left.x + j as f32 * 2.0 * r + r,
        top_left.y + i as f32 * 2.0 * r + r
      );
      let circle = Circle {
        center,
        r,
        level: target_level,
        parent: Some(request.center),
      };
      (circle, sampler.sample(center))
    })
    .collect::<Vec<(Circle, Rgb<u8>)>>();

  surface.clear_rect(Box2D::new(top_left, request.center + V2::splat(request.r)));
  children.iter()
    .for_each(|(circle, color)| surface.fill_circle(circle.center, circle.r, *color));

  let mut children = children.into_iter().map(|(circle, _)| circle);
  if let Some(first) = children.next() {
    registry.replace_at(request.id, first);
  }
  let appended = registry.extend(children);

  tracing::debug!(
    id = request.id.0,
    from = request.level,
    to = target_level,
    children = size * size,
    "split circle"
  );
  SplitOutcome::Split { id: request.id, appended, level: target_level }
}

#[cfg(test)] mod tests;
