//! Pointer and touch input in display coordinates.

use {
  crate::geometry::{DeviceSpace, PixelSpace, P2},
  euclid::{Point2D, Scale}
};

pub type DevicePoint = Point2D<f32, DeviceSpace>;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
  /// Mouse movement, already relative to the mosaic element.
  Mouse { offset: DevicePoint },
  /// First touch point, relative to the viewport.
  Touch { client: DevicePoint },
}

/// What the host should do with an event after the mosaic saw it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EventResponse {
  /// Not handled, let the platform proceed as usual.
  Ignored,
  /// Handled: suppress the default scroll / selection behavior and stop propagation.
  Consumed,
}

impl EventResponse {
  pub fn prevent_default(self) -> bool { self == EventResponse::Consumed }
  pub fn stop_propagation(self) -> bool { self == EventResponse::Consumed }
}

/// Maps device coordinates onto the oversampled surface.
#[derive(Debug, Clone)]
pub struct InputAdapter {
  bound: bool,
  /// Top-left corner of the mosaic element in viewport coordinates.
  origin: DevicePoint,
  pixel_ratio: Scale<f32, DeviceSpace, PixelSpace>,
}

impl InputAdapter {
  pub fn new(origin: DevicePoint, pixel_ratio: f32, bound: bool) -> Self {
    InputAdapter { bound, origin, pixel_ratio: Scale::new(pixel_ratio) }
  }

  pub fn bind(&mut self) { self.bound = true }
  pub fn unbind(&mut self) { self.bound = false }
  pub fn is_bound(&self) -> bool { self.bound }

  pub fn set_origin(&mut self, origin: DevicePoint) {
    self.origin = origin;
  }

  /// Surface coordinate of the event, or `None` while unbound.
  pub fn translate(&self, event: PointerEvent) -> Option<P2> {
    if !self.bound {
      return None;
    }
    let local = match event {
      PointerEvent::Mouse { offset } => offset,
      PointerEvent::Touch { client } => (client - self.origin).to_point(),
    };
    Some(self.pixel_ratio.transform_point(local))
  }
}
