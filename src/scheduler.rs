//! Frame pacing and the queue of split requests collected between frames.

use crate::split::SplitRequest;

/// Pending splits, drained last-in first-out.
#[derive(Debug, Clone, Default)]
pub struct SplitQueue {
  requests: Vec<SplitRequest>,
}

impl SplitQueue {
  pub fn push(&mut self, request: SplitRequest) {
    self.requests.push(request);
  }

  pub fn pop(&mut self) -> Option<SplitRequest> {
    self.requests.pop()
  }

  pub fn clear(&mut self) {
    self.requests.clear();
  }

  pub fn len(&self) -> usize {
    self.requests.len()
  }

  pub fn is_empty(&self) -> bool {
    self.requests.is_empty()
  }
}

/// Identifies one requested frame callback.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameHandle(pub u64);

/// Keeps at most one frame callback outstanding, the way a render loop re-arms itself at the
/// end of every frame. The loop stops only through [`FrameScheduler::cancel`].
#[derive(Debug, Clone, Default)]
pub struct FrameScheduler {
  pending: Option<FrameHandle>,
  issued: u64,
}

impl FrameScheduler {
  pub fn new() -> Self {
    Self::default()
  }

  /// Arms the next frame, replacing any frame still outstanding.
  pub fn request_frame(&mut self) -> FrameHandle {
    self.issued += 1;
    let handle = FrameHandle(self.issued);
    self.pending = Some(handle);
    handle
  }

  /// Consumes the outstanding frame, if any. The caller runs the frame and re-arms.
  pub fn fire(&mut self) -> Option<FrameHandle> {
    self.pending.take()
  }

  pub fn cancel(&mut self) {
    if let Some(handle) = self.pending.take() {
      tracing::debug!(frame = handle.0, "cancelled frame");
    }
  }

  pub fn is_running(&self) -> bool {
    self.pending.is_some()
  }

  /// Number of frames requested so far.
  pub fn frames(&self) -> u64 {
    self.issued
  }
}

/// What a single frame did.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct FrameStats {
  pub frame: u64,
  /// Requests taken off the queue.
  pub drained: usize,
  /// Requests that actually split a circle.
  pub split: usize,
  /// Circles added to the registry.
  pub created: usize,
}

#[cfg(test)] mod tests {
  use {
    super::*,
    crate::{geometry::Circle, registry::CircleId}
  };

  fn request(level: u32) -> SplitRequest {
    SplitRequest::new(CircleId(level as usize), &Circle::root(8.0), level)
  }

  #[test] fn queue_is_lifo() {
    let mut queue = SplitQueue::default();
    (1..=3).for_each(|i| queue.push(request(i)));
    assert_eq!(queue.len(), 3);
    let order = std::iter::from_fn(|| queue.pop())
      .map(|r| r.target_level)
      .collect::<Vec<_>>();
    assert_eq!(order, [3, 2, 1]);
    assert!(queue.is_empty());
  }

  #[test] fn frame_rearms_until_cancelled() {
    let mut scheduler = FrameScheduler::new();
    assert!(scheduler.fire().is_none());
    let first = scheduler.request_frame();
    assert_eq!(scheduler.fire(), Some(first));
    assert!(!scheduler.is_running());
    let second = scheduler.request_frame();
    assert_ne!(first, second);
    scheduler.cancel();
    assert!(scheduler.fire().is_none());
    assert_eq!(scheduler.frames(), 2);
  }
}
