//! Test doubles for the drawing and sampling seams.

use {
  crate::{
    drawing::Surface,
    geometry::{PixelSpace, P2},
    sample::Sample
  },
  euclid::{Box2D, Size2D},
  image::Rgb,
  std::sync::atomic::{AtomicUsize, Ordering}
};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
  Clear(Box2D<f32, PixelSpace>),
  Fill { center: P2, r: f32, color: Rgb<u8> },
}

/// Surface that only records what was asked of it.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
  pub size: Size2D<u32, PixelSpace>,
  pub ops: Vec<Op>,
}

impl RecordingSurface {
  pub fn new(side: u32) -> Self {
    RecordingSurface { size: Size2D::splat(side), ops: vec![] }
  }

  pub fn fills(&self) -> impl Iterator<Item = (P2, f32, Rgb<u8>)> + '_ {
    self.ops.iter().filter_map(|op| match op {
      Op::Fill { center, r, color } => Some((*center, *r, *color)),
      Op::Clear(_) => None
    })
  }
}

impl Surface for RecordingSurface {
  fn dimensions(&self) -> Size2D<u32, PixelSpace> { self.size }
  fn clear_rect(&mut self, rect: Box2D<f32, PixelSpace>) { self.ops.push(Op::Clear(rect)) }
  fn fill_circle(&mut self, center: P2, r: f32, color: Rgb<u8>) {
    self.ops.push(Op::Fill { center, r, color })
  }
}

/// Colors every point by its quadrant on a `side` square and counts lookups.
#[derive(Debug, Default)]
pub struct CountingSampler {
  pub side: f32,
  pub calls: AtomicUsize,
}

impl CountingSampler {
  pub fn new(side: f32) -> Self {
    CountingSampler { side, calls: AtomicUsize::new(0) }
  }

  pub fn calls(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }
}

impl Sample for CountingSampler {
  fn sample(&self, point: P2) -> Rgb<u8> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    let half = self.side / 2.0;
    Rgb([
      if point.x < half { 0 } else { 255 },
      if point.y < half { 0 } else { 255 },
      0
    ])
  }
}
