//! Image decode and display.
//!
//! The server hands every completed payload to a `FrameSink`. The
//! production sink decodes JPEG bytes and refreshes an on-screen window;
//! tests substitute recording sinks.

pub use display::JpegViewer;
pub use jpeg::decode_jpeg;
mod display;
mod jpeg;

use crate::AppResult;

/// Consumer of completed frame payloads.
///
/// `submit` attempts to interpret the bytes as an image and display it.
/// A decode failure is returned to the caller and produces no display
/// update; it must not tear down the sink.
pub trait FrameSink {
    fn submit(&mut self, payload: &[u8]) -> AppResult<()>;
}
