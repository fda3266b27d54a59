//! .
//!
//! Errors surface only for configuration mistakes, image decoding failures and operations the
//! mosaic does not implement. Requests that simply have nothing to do (a miss, an outdated index,
//! a circle already at the requested level) are dropped silently and never reach the caller.

#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// Declared operation without an implementation, e.g. merging children back into a parent.
  #[error("unsupported operation: {0}")]
  Unsupported(&'static str),
  #[error("invalid configuration: {0}")]
  InvalidConfig(String),
  /// The mosaic has been torn down with `destroy()`.
  #[error("mosaic has been destroyed")]
  Destroyed,
  #[error(transparent)]
  Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
