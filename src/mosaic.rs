//! The interactive mosaic: configuration, image/color sources, tagging and the render loop.

use {
  crate::{
    config::Config,
    drawing::{self, Surface},
    error::{Error, Result},
    geometry::{Circle, DeviceSpace, P2},
    input::{DevicePoint, EventResponse, InputAdapter, PointerEvent},
    level,
    registry::{CircleId, CircleRegistry},
    sample::{ColorSource, Sample},
    scheduler::{FrameScheduler, FrameStats, SplitQueue},
    split::{self, SplitOutcome, SplitRequest}
  },
  euclid::Size2D,
  image::{DynamicImage, ImageResult, Rgb, RgbaImage},
  std::{
    path::PathBuf,
    sync::mpsc::{self, Receiver, TryRecvError}
  }
};


/// Where a new source image comes from.
#[derive(Debug, Clone)]
pub enum ImageSource {
  /// Already decoded, used immediately.
  Image(DynamicImage),
  /// Decoded on the rayon pool; the base circle appears on the first frame after that.
  Path(PathBuf),
}

impl From<DynamicImage> for ImageSource {
  fn from(image: DynamicImage) -> Self { ImageSource::Image(image) }
}

impl From<PathBuf> for ImageSource {
  fn from(path: PathBuf) -> Self { ImageSource::Path(path) }
}

/// A circular mosaic that splits into quarter circles on request.
///
/// All drawing and all changes to the circles happen inside [`CircleSplit::tick`], except the
/// base circle painted synchronously by [`CircleSplit::set_image`] and
/// [`CircleSplit::set_color`]. Everything else only queues work for the next frame.
#[derive(Debug)]
pub struct CircleSplit<S: Surface = RgbaImage> {
  config: Config,
  surface: S,
  side: u32,
  max_level: u32,
  registry: CircleRegistry,
  queue: SplitQueue,
  scheduler: FrameScheduler,
  input: InputAdapter,
  color_source: Option<ColorSource>,
  pending_image: Option<Receiver<ImageResult<DynamicImage>>>,
  destroyed: bool,
}

impl CircleSplit<RgbaImage> {
  /// Mosaic drawing onto a fresh raster sized for `container` (device pixels).
  pub fn new(config: Config, container: Size2D<f32, DeviceSpace>) -> Result<Self> {
    config.validate()?;
    let side = config.surface_side(container)?;
    Self::with_surface(config, drawing::new_surface(side))
  }
}

/// Split ceiling for a `side` pixel surface: the configured minimum diameter, but never past
/// one pixel.
fn ceiling(side: u32, config: &Config) -> u32 {
  level::max_level(side as f32, config.surface_min_diameter()).min(level::pixel_level(side))
}

impl<S: Surface> CircleSplit<S> {
  /// Mosaic drawing onto `surface`. Only the largest square in its top-left corner is used.
  pub fn with_surface(config: Config, surface: S) -> Result<Self> {
    config.validate()?;
    let size = surface.dimensions();
    let side = size.width.min(size.height);
    if side == 0 {
      return Err(Error::InvalidConfig("surface has no pixels".into()));
    }
    let max_level = ceiling(side, &config);
    let mut scheduler = FrameScheduler::new();
    scheduler.request_frame();
    tracing::debug!(side, max_level, ?config, "created mosaic");

    Ok(CircleSplit {
      input: InputAdapter::new(DevicePoint::origin(), config.pixel_ratio, config.event_enabled),
      config,
      surface,
      side,
      max_level,
      registry: CircleRegistry::new(),
      queue: SplitQueue::default(),
      scheduler,
      color_source: None,
      pending_image: None,
      destroyed: false,
    })
  }

  pub fn config(&self) -> &Config { &self.config }
  pub fn surface(&self) -> &S { &self.surface }
  /// Side of the square surface area in use, in surface pixels.
  pub fn side(&self) -> u32 { self.side }
  pub fn max_level(&self) -> u32 { self.max_level }
  pub fn circles(&self) -> &CircleRegistry { &self.registry }
  pub fn color_source(&self) -> Option<&ColorSource> { self.color_source.as_ref() }
  /// Requests waiting for the next frame.
  pub fn pending(&self) -> usize { self.queue.len() }
  pub fn is_loading(&self) -> bool { self.pending_image.is_some() }
  pub fn is_running(&self) -> bool { self.scheduler.is_running() }

  /// Replaces the source image and starts over from a single circle.
  ///
  /// For [`ImageSource::Path`] the circles stay empty until the image is decoded; a decoding
  /// error is logged and leaves the mosaic empty.
  pub fn set_image(&mut self, source: impl Into<ImageSource>) -> Result<()> {
    self.ensure_alive()?;
    self.clear_state();
    match source.into() {
      ImageSource::Image(image) => self.install_image(&image),
      ImageSource::Path(path) => {
        let (tx, rx) = mpsc::channel();
        tracing::debug!(?path, "loading image");
        rayon::spawn(move || { tx.send(image::open(path)).ok(); });
        self.pending_image = Some(rx);
      }
    }
    Ok(())
  }

  /// Decodes `path` on the calling thread, then behaves like [`ImageSource::Image`].
  pub fn open_image(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
    self.ensure_alive()?;
    let image = image::open(path)?;
    self.set_image(image)
  }

  /// Paints every circle, now and after any split, with `color`.
  pub fn set_color(&mut self, color: Rgb<u8>) -> Result<()> {
    self.ensure_alive()?;
    self.clear_state();
    self.color_source = Some(ColorSource::Constant(color));
    self.reset_circles();
    Ok(())
  }

  /// Changes the smallest diameter circles are split down to.
  ///
  /// Circles already past the new ceiling stay as they are, they just cannot split further.
  pub fn set_min_diameter(&mut self, min_diameter: f32) -> Result<()> {
    self.ensure_alive()?;
    let config = Config { min_diameter, ..self.config };
    config.validate()?;
    self.config = config;
    self.max_level = ceiling(self.side, &config);
    tracing::debug!(min_diameter, max_level = self.max_level, "updated minimum diameter");
    Ok(())
  }

  /// Queues a one level split of every circle that can still split.
  pub fn split_all(&mut self) {
    self.queue.clear();
    self.registry.unmark_all();
    let eligible = self.registry.iter()
      .filter(|(_, circle)| circle.level < self.max_level)
      .map(|(id, circle)| (id, circle.level + 1))
      .collect::<Vec<_>>();
    for (id, target_level) in eligible {
      self.tag(id, target_level);
    }
  }

  /// Starts over from a single circle and queues it straight down to `target_level`.
  pub fn split_to_level(&mut self, target_level: u32) {
    if self.color_source.is_none() {
      return;
    }
    self.queue.clear();
    self.reset_circles();
    self.tag(CircleId(0), target_level);
  }

  /// Queues the circle under `point` (surface pixels) for a split to `target_level`, one level
  /// deeper than it is by default.
  pub fn split_at(&mut self, point: P2, target_level: Option<u32>) {
    if let Some(id) = self.registry.find(point) {
      if let Some(circle) = self.registry.get(id) {
        let target_level = target_level.unwrap_or(circle.level + 1);
        self.tag(id, target_level);
      }
    }
  }

  /// Recombining children into their parent is not implemented.
  pub fn merge(&mut self) -> Result<()> {
    Err(Error::Unsupported("merge"))
  }

  pub fn bind_event(&mut self) {
    if !self.destroyed {
      self.input.bind();
    }
  }

  pub fn unbind_event(&mut self) {
    self.input.unbind();
  }

  /// Position of the mosaic element in the viewport, used to translate touch points.
  pub fn set_element_origin(&mut self, origin: DevicePoint) {
    self.input.set_origin(origin);
  }

  /// Tags at most one circle, the first one under the pointer, for a one level split.
  pub fn on_pointer_move(&mut self, event: PointerEvent) -> EventResponse {
    let point = match self.input.translate(event) {
      Some(point) => point,
      None => return EventResponse::Ignored
    };
    self.split_at(point, None);
    EventResponse::Consumed
  }

  /// Runs one frame: drains every queued split, most recent first, then re-arms the next frame.
  /// Returns `None` once the mosaic has been destroyed.
  pub fn tick(&mut self) -> Option<FrameStats> {
    let frame = self.scheduler.fire()?;
    self.poll_image();
    let mut stats = FrameStats { frame: frame.0, ..FrameStats::default() };

    while let Some(request) = self.queue.pop() {
      stats.drained += 1;
      if request.is_current(&self.registry) {
        self.registry.unmark_queued(request.id);
      }
      let source = match &self.color_source {
        Some(source) => source,
        None => continue
      };
      let outcome = split::split(
        &mut self.registry,
        &mut self.surface,
        source,
        request,
        self.max_level
      );
      if let SplitOutcome::Split { appended, .. } = outcome {
        stats.split += 1;
        stats.created += appended.len();
      }
    }

    self.scheduler.request_frame();
    if stats.drained > 0 {
      tracing::trace!(?stats, circles = self.registry.len(), "frame");
    }
    Some(stats)
  }

  /// Stops the render loop and drops all circles and sources. Terminal.
  pub fn destroy(&mut self) {
    self.scheduler.cancel();
    self.input.unbind();
    self.clear_state();
    self.destroyed = true;
    tracing::debug!("destroyed mosaic");
  }

  fn ensure_alive(&self) -> Result<()> {
    if self.destroyed { Err(Error::Destroyed) } else { Ok(()) }
  }

  fn tag(&mut self, id: CircleId, target_level: u32) -> bool {
    let circle = match self.registry.get(id) {
      Some(circle) => *circle,
      None => return false
    };
    let target_level = target_level.min(self.max_level);
    if target_level <= circle.level || !self.registry.mark_queued(id) {
      return false;
    }
    self.queue.push(SplitRequest::new(id, &circle, target_level));
    true
  }

  fn clear_state(&mut self) {
    self.registry.clear();
    self.queue.clear();
    self.color_source = None;
    self.pending_image = None;
    self.surface.clear();
  }

  fn install_image(&mut self, image: &DynamicImage) {
    let placed = drawing::place_image(image, self.side, self.config.image_center_type);
    self.color_source = Some(ColorSource::Surface(placed));
    self.reset_circles();
  }

  /// Single root circle, painted from the current source.
  fn reset_circles(&mut self) {
    let source = match &self.color_source {
      Some(source) => source,
      None => return
    };
    let root = Circle::root(self.side as f32);
    self.surface.clear();
    self.surface.fill_circle(root.center, root.r, source.sample(root.center));
    self.registry.reset(root);
    tracing::debug!(side = self.side, "reset circles");
  }

  fn poll_image(&mut self) {
    let result = match self.pending_image.as_ref().map(Receiver::try_recv) {
      None | Some(Err(TryRecvError::Empty)) => return,
      Some(result) => result
    };
    self.pending_image = None;
    match result {
      Ok(Ok(image)) => self.install_image(&image),
      Ok(Err(e)) => tracing::warn!(error = %e, "failed to load image"),
      Err(_) => tracing::warn!("image loader exited without a result"),
    }
  }
}
