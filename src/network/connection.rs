use bytes::{Buf, Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::network::{ImageFrame, HEADER_SIZE};
use crate::AppError;
use crate::AppResult;
use crate::NetworkConfig;

/// One accepted client connection.
///
/// Wraps the byte stream together with an accumulation buffer. The
/// underlying transport delivers data in arbitrary chunks, so reads go
/// through the buffer until enough bytes are available.
///
/// A `Connection` is created fresh for every accepted socket and dropped
/// (closing the socket) when the single frame has been processed, so no
/// buffered bytes can leak between connections.
#[derive(Debug)]
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    max_frame_size: usize,
}

impl<S: AsyncRead + Unpin> Connection<S> {
    pub fn new(stream: S, config: &NetworkConfig) -> Connection<S> {
        Connection {
            stream,
            buffer: BytesMut::with_capacity(config.read_buffer_size),
            max_frame_size: config.max_frame_size,
        }
    }

    /// Reads exactly `n` bytes from the stream, accumulating across as
    /// many partial reads as it takes.
    ///
    /// Returns `Ok(None)` if the peer closed the stream before any byte
    /// of this read arrived. If the peer closes mid-read, returns
    /// `AppError::IncompleteFrame`; a short buffer is never returned.
    /// `n == 0` yields an empty result without touching the stream.
    pub async fn read_exact(&mut self, n: usize) -> AppResult<Option<Bytes>> {
        while self.buffer.len() < n {
            if 0 == self.stream.read_buf(&mut self.buffer).await? {
                return if self.buffer.is_empty() {
                    // peer closed at a clean boundary
                    Ok(None)
                } else {
                    Err(AppError::IncompleteFrame {
                        expected: n,
                        got: self.buffer.len(),
                    })
                };
            }
        }
        Ok(Some(self.buffer.split_to(n).freeze()))
    }

    /// Reads one `[4-byte BE length][payload]` frame from the connection.
    ///
    /// Returns `Ok(None)` if the peer closed the connection without
    /// sending a length header. A declared length above the configured
    /// limit is rejected before the payload buffer is allocated.
    pub async fn read_frame(&mut self) -> AppResult<Option<ImageFrame>> {
        let mut header = match self.read_exact(HEADER_SIZE).await? {
            Some(header) => header,
            None => return Ok(None),
        };
        let length = header.get_u32() as usize;

        if length > self.max_frame_size {
            return Err(AppError::FrameTooLarge {
                length,
                limit: self.max_frame_size,
            });
        }

        self.buffer.reserve(length.saturating_sub(self.buffer.len()));
        match self.read_exact(length).await? {
            Some(payload) => Ok(Some(ImageFrame::new(payload))),
            // header promised `length` bytes, none arrived
            None => Err(AppError::IncompleteFrame {
                expected: length,
                got: 0,
            }),
        }
    }
}
