//! A circular mosaic that splits into quarter circles on demand.
//!
//! The mosaic starts as a single circle covering a square surface, colored after the pixel of a
//! source image under its center (or a flat color). Any circle can be split into a grid of
//! `2^gap × 2^gap` children, each one sampled again from the source at its own center, until the
//! radius would fall below a configured minimum. Splits are requested explicitly, or by moving a
//! pointer across the mosaic, and carried out one frame at a time.
//!
//! # Basic usage
//! ```no_run
//! # use {
//! #   circle_split::{
//! #     error::Result,
//! #     mosaic::CircleSplit,
//! #     config::{Config, Size},
//! #   },
//! #   euclid::Size2D
//! # };
//! # fn main() -> Result<()> {
//! // 512x512 device pixels, oversampled twice: a 1024x1024 surface.
//! let mut mosaic = CircleSplit::new(
//!   Config { size: Size::Fixed(512.0), ..Config::default() },
//!   Size2D::new(512.0, 512.0)
//! )?;
//! mosaic.open_image("photo.jpg")?;
//!
//! // Drive every circle down to level 5 (256 circles) on the next frame.
//! mosaic.split_to_level(5);
//! mosaic.tick();
//!
//! // Then refine the area around a point by one more level.
//! mosaic.split_at([300.0, 420.0].into(), None);
//! mosaic.tick();
//!
//! mosaic.surface().save("out.png")?;
//! #   Ok(())
//! # }
//! ```
//!
//! # Frames
//! [`CircleSplit::tick`](mosaic::CircleSplit::tick) is the frame callback: call it once per
//! display frame. Everything else only queues split requests, which the next tick drains
//! most-recent-first. The loop keeps re-arming itself until
//! [`destroy`](mosaic::CircleSplit::destroy).
//!
//! # Indices
//! Circles live in a dense [`CircleRegistry`](registry::CircleRegistry) and are referred to by
//! [`CircleId`](registry::CircleId). A split overwrites the parent's slot with its top-left child
//! and appends the rest, so an id taken before a split may point at a different circle after it.

pub mod error;
pub mod geometry;
pub mod fit;
pub mod level;
pub mod registry;
pub mod sample;
pub mod split;
pub mod scheduler;
pub mod input;
pub mod config;
pub mod mosaic;
pub mod drawing;
#[cfg(test)] mod testing;

pub use mosaic::{CircleSplit, ImageSource};
