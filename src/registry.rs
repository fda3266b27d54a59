use {
  crate::geometry::{Circle, P2},
  std::ops::Range
};

/// Index of a circle inside the [`CircleRegistry`].
///
/// Only meaningful until the next split: the circle at an index may be replaced by its first
/// child, so holders of a `CircleId` re-validate it before use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CircleId(pub usize);

#[derive(Debug, Clone)]
struct Slot {
  circle: Circle,
  queued: bool,
}

/// Dense arena of every circle currently drawn, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct CircleRegistry {
  slots: Vec<Slot>,
}

impl CircleRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Drops every record and starts over with `initial` alone.
  pub fn reset(&mut self, initial: Circle) {
    self.clear();
    self.slots.push(Slot { circle: initial, queued: false });
  }

  pub fn clear(&mut self) {
    self.slots.clear();
  }

  /// First circle, in insertion order, whose bounding square contains `point`.
  pub fn find(&self, point: P2) -> Option<CircleId> {
    self.slots.iter()
      .position(|slot| slot.circle.hit(point))
      .map(CircleId)
  }

  pub fn get(&self, id: CircleId) -> Option<&Circle> {
    self.slots.get(id.0).map(|slot| &slot.circle)
  }

  pub fn len(&self) -> usize {
    self.slots.len()
  }

  pub fn is_empty(&self) -> bool {
    self.slots.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (CircleId, &Circle)> + '_ {
    self.slots.iter()
      .enumerate()
      .map(|(i, slot)| (CircleId(i), &slot.circle))
  }

  pub fn is_queued(&self, id: CircleId) -> bool {
    self.slots.get(id.0).map_or(false, |slot| slot.queued)
  }

  /// Marks the circle as waiting for a split. Returns `false` if it already was, or is gone.
  pub(crate) fn mark_queued(&mut self, id: CircleId) -> bool {
    match self.slots.get_mut(id.0) {
      Some(slot) if !slot.queued => {
        slot.queued = true;
        true
      }
      _ => false
    }
  }

  pub(crate) fn unmark_queued(&mut self, id: CircleId) {
    if let Some(slot) = self.slots.get_mut(id.0) {
      slot.queued = false;
    }
  }

  pub(crate) fn unmark_all(&mut self) {
    self.slots.iter_mut().for_each(|slot| slot.queued = false);
  }

  /// Overwrites a live record. Returns `None` without touching anything if `id` is out of range.
  pub(crate) fn replace_at(&mut self, id: CircleId, circle: Circle) -> Option<()> {
    let slot = self.slots.get_mut(id.0)?;
    *slot = Slot { circle, queued: false };
    Some(())
  }

  pub(crate) fn append(&mut self, circle: Circle) -> CircleId {
    self.slots.push(Slot { circle, queued: false });
    CircleId(self.slots.len() - 1)
  }

  /// Appends every circle, returning the range of new indices.
  pub(crate) fn extend(&mut self, circles: impl IntoIterator<Item = Circle>) -> Range<usize> {
    let start = self.slots.len();
    circles.into_iter().for_each(|circle| { self.append(circle); });
    start..self.slots.len()
  }
}

#[cfg(test)] mod tests {
  use super::*;

  fn circle(x: f32, y: f32, r: f32) -> Circle {
    Circle { center: P2::new(x, y), r, level: 2, parent: None }
  }

  #[test] fn reset_leaves_single_root() {
    let mut registry = CircleRegistry::new();
    registry.append(circle(1.0, 1.0, 1.0));
    registry.append(circle(3.0, 1.0, 1.0));
    registry.reset(Circle::root(64.0));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get(CircleId(0)), Some(&Circle::root(64.0)));
  }

  #[test] fn find_prefers_first_inserted() {
    let mut registry = CircleRegistry::new();
    let a = registry.append(circle(10.0, 10.0, 10.0));
    let b = registry.append(circle(12.0, 12.0, 10.0));
    assert_eq!(registry.find(P2::new(11.0, 11.0)), Some(a));
    assert_eq!(registry.find(P2::new(21.0, 21.0)), Some(b));
    assert_eq!(registry.find(P2::new(40.0, 40.0)), None);
  }

  #[test] fn queued_mark_is_exclusive() {
    let mut registry = CircleRegistry::new();
    let id = registry.append(circle(10.0, 10.0, 10.0));
    assert!(registry.mark_queued(id));
    assert!(!registry.mark_queued(id));
    assert!(registry.is_queued(id));
    registry.unmark_queued(id);
    assert!(!registry.is_queued(id));
    assert!(!registry.mark_queued(CircleId(7)));
  }

  #[test] fn replace_out_of_range_is_refused() {
    let mut registry = CircleRegistry::new();
    registry.reset(Circle::root(8.0));
    assert!(registry.replace_at(CircleId(1), circle(0.0, 0.0, 1.0)).is_none());
    assert_eq!(registry.len(), 1);
  }

  #[test] fn extend_reports_new_range() {
    let mut registry = CircleRegistry::new();
    registry.reset(Circle::root(8.0));
    let range = registry.extend([circle(1.0, 1.0, 1.0), circle(3.0, 1.0, 1.0)]);
    assert_eq!(range, 1..3);
    assert_eq!(registry.len(), 3);
  }
}
