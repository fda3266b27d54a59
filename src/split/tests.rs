use {
  super::*,
  crate::testing::{CountingSampler, Op, RecordingSurface},
  proptest::prelude::*
};

fn setup(side: f32) -> (CircleRegistry, RecordingSurface, CountingSampler) {
  let mut registry = CircleRegistry::new();
  registry.reset(Circle::root(side));
  (registry, RecordingSurface::new(side as u32), CountingSampler::new(side))
}

fn root_request(registry: &CircleRegistry, target_level: u32) -> SplitRequest {
  let id = CircleId(0);
  SplitRequest::new(id, registry.get(id).unwrap(), target_level)
}

#[test] fn one_level_makes_four_quarters() {
  let (mut registry, mut surface, sampler) = setup(256.0);
  let request = root_request(&registry, 2);
  let outcome = split(&mut registry, &mut surface, &sampler, request, 8);

  assert_eq!(outcome, SplitOutcome::Split { id: CircleId(0), appended: 1..4, level: 2 });
  let circles = registry.iter().map(|(_, c)| *c).collect::<Vec<_>>();
  let centers = circles.iter().map(|c| (c.center.x, c.center.y)).collect::<Vec<_>>();
  assert_eq!(centers, [(64.0, 64.0), (192.0, 64.0), (64.0, 192.0), (192.0, 192.0)]);
  assert!(circles.iter().all(|c| c.r == 64.0 && c.level == 2));
  assert!(circles.iter().all(|c| c.parent == Some(P2::new(128.0, 128.0))));
  assert_eq!(sampler.calls(), 4);
}

#[test] fn erases_parent_before_painting() {
  let (mut registry, mut surface, sampler) = setup(64.0);
  let request = root_request(&registry, 2);
  split(&mut registry, &mut surface, &sampler, request, 8);

  assert_eq!(surface.ops[0], Op::Clear(Box2D::new(P2::new(0.0, 0.0), P2::new(64.0, 64.0))));
  let colors = surface.fills().map(|(_, _, color)| color).collect::<Vec<_>>();
  assert_eq!(colors, [Rgb([0, 0, 0]), Rgb([255, 0, 0]), Rgb([0, 255, 0]), Rgb([255, 255, 0])]);
}

#[test] fn multi_level_jump() {
  let (mut registry, mut surface, sampler) = setup(256.0);
  let request = root_request(&registry, 3);
  split(&mut registry, &mut surface, &sampler, request, 8);

  assert_eq!(registry.len(), 16);
  assert!(registry.iter().all(|(_, c)| c.r == 32.0 && c.level == 3));
  // row major, first row first
  let first_row = registry.iter()
    .take(4)
    .map(|(_, c)| c.center)
    .collect::<Vec<_>>();
  assert_eq!(first_row, [32.0, 96.0, 160.0, 224.0].map(|x| P2::new(x, 32.0)));
}

#[test] fn target_is_clamped() {
  let (mut registry, mut surface, sampler) = setup(256.0);
  let request = root_request(&registry, 12);
  let outcome = split(&mut registry, &mut surface, &sampler, request, 3);
  assert!(matches!(outcome, SplitOutcome::Split { level: 3, .. }));
  assert_eq!(registry.len(), 16);
}

#[test] fn at_target_is_noop() {
  let (mut registry, mut surface, sampler) = setup(256.0);
  let request = root_request(&registry, 1);
  assert_eq!(split(&mut registry, &mut surface, &sampler, request, 8), SplitOutcome::AtTarget);

  // already at the ceiling
  let request = root_request(&registry, 2);
  assert_eq!(split(&mut registry, &mut surface, &sampler, request, 1), SplitOutcome::AtTarget);
  assert_eq!(registry.len(), 1);
  assert!(surface.ops.is_empty());
}

#[test] fn stale_requests_are_dropped() {
  let (mut registry, mut surface, sampler) = setup(256.0);
  let request = root_request(&registry, 2);
  split(&mut registry, &mut surface, &sampler, request, 8);
  let ops = surface.ops.len();

  // index 0 now holds a different circle
  assert_eq!(split(&mut registry, &mut surface, &sampler, request, 8), SplitOutcome::Stale);
  // index out of range
  let mut request = root_request(&registry, 3);
  request.id = CircleId(99);
  assert_eq!(split(&mut registry, &mut surface, &sampler, request, 8), SplitOutcome::Stale);

  assert_eq!(registry.len(), 4);
  assert_eq!(surface.ops.len(), ops);
}

#[test] fn grid_finer_than_surface_is_dropped() {
  let (mut registry, mut surface, sampler) = setup(16.0);
  // 2^5 × 2^5 children on 16 × 16 pixels
  let request = root_request(&registry, 6);
  assert_eq!(split(&mut registry, &mut surface, &sampler, request, 80), SplitOutcome::TooFine);
  // shift wider than the index type
  let request = root_request(&registry, 70);
  assert_eq!(split(&mut registry, &mut surface, &sampler, request, 80), SplitOutcome::TooFine);

  assert_eq!(registry.len(), 1);
  assert!(surface.ops.is_empty());
  assert_eq!(sampler.calls(), 0);
}

proptest! {
  #[test]
  fn children_conserve_area(level in 1u32..6, gap in 1u32..4, side in 64.0f32..2048.0) {
    let r = side / 2.0 / (1u32 << (level - 1)) as f32;
    let parent = Circle { center: P2::new(r, r), r, level, parent: None };
    let mut registry = CircleRegistry::new();
    registry.reset(parent);
    let mut surface = RecordingSurface::new(side as u32);
    let request = SplitRequest::new(CircleId(0), &parent, level + gap);

    split(&mut registry, &mut surface, &Rgb([0, 0, 0]), request, 32);

    let size = 1usize << gap;
    prop_assert_eq!(registry.len(), size * size);
    let area = registry.iter().map(|(_, c)| c.area()).sum::<f32>();
    prop_assert!((area - parent.area()).abs() <= parent.area() * 1e-4);
    // children tile the parent's bounding square
    let bounds = parent.bounding_box();
    for (_, child) in registry.iter() {
      let b = child.bounding_box();
      prop_assert!(b.min.x >= bounds.min.x - 1e-3 && b.max.x <= bounds.max.x + 1e-3);
      prop_assert!(b.min.y >= bounds.min.y - 1e-3 && b.max.y <= bounds.max.y + 1e-3);
      prop_assert_eq!(child.level, level + gap);
    }
  }
}
