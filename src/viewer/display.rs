use minifb::{Window, WindowOptions};
use tracing::debug;

use super::{decode_jpeg, FrameSink};
use crate::AppError;
use crate::AppResult;
use crate::ViewerConfig;

/// Production frame sink: decodes JPEG payloads and renders them to an
/// on-screen window, refreshing on each successful decode.
///
/// The window is opened lazily on the first decoded frame and recreated
/// whenever the image dimensions change. Not `Send`; it lives on the
/// server's single thread for the process lifetime.
pub struct JpegViewer {
    title: String,
    window: Option<Window>,
    dimensions: (usize, usize),
}

impl JpegViewer {
    pub fn new(config: &ViewerConfig) -> JpegViewer {
        JpegViewer {
            title: config.window_title.clone(),
            window: None,
            dimensions: (0, 0),
        }
    }

    fn window_for(&mut self, width: usize, height: usize) -> AppResult<&mut Window> {
        let window = match self.window.take() {
            Some(window) if self.dimensions == (width, height) => window,
            _ => {
                debug!("opening {}x{} display window", width, height);
                self.dimensions = (width, height);
                Window::new(&self.title, width, height, WindowOptions::default())
                    .map_err(|err| AppError::DisplayError(err.to_string()))?
            }
        };
        Ok(self.window.insert(window))
    }
}

impl FrameSink for JpegViewer {
    fn submit(&mut self, payload: &[u8]) -> AppResult<()> {
        let image = decode_jpeg(payload)?;
        let (width, height) = image.dimensions();
        let (width, height) = (width as usize, height as usize);

        // minifb expects packed 0RGB u32 pixels
        let buffer: Vec<u32> = image
            .pixels()
            .map(|pixel| {
                let [r, g, b] = pixel.0;
                ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
            })
            .collect();

        let window = self.window_for(width, height)?;
        window
            .update_with_buffer(&buffer, width, height)
            .map_err(|err| AppError::DisplayError(err.to_string()))?;
        Ok(())
    }
}
