use bytes::{BufMut, Bytes, BytesMut};

/// Size of the length prefix preceding every payload on the wire.
pub const HEADER_SIZE: usize = 4;

/// One length-prefixed message as sent by the device firmware:
/// a 4-byte big-endian length followed by that many opaque image bytes.
///
/// The framing layer does not interpret the payload; the viewer decides
/// whether it is a valid JPEG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFrame {
    pub payload: Bytes,
}

impl ImageFrame {
    pub fn new(payload: Bytes) -> ImageFrame {
        ImageFrame { payload }
    }

    /// Encodes a payload into its wire representation. The receiver never
    /// writes response bytes; this exists for the send utility and tests.
    pub fn encode(payload: &[u8]) -> BytesMut {
        let mut buffer = BytesMut::with_capacity(HEADER_SIZE + payload.len());
        buffer.put_u32(payload.len() as u32);
        buffer.put_slice(payload);
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::{ImageFrame, HEADER_SIZE};

    #[test]
    fn test_encode_prepends_big_endian_length() {
        let wire = ImageFrame::encode(b"jpeg bytes");
        assert_eq!(&wire[..HEADER_SIZE], &[0, 0, 0, 10]);
        assert_eq!(&wire[HEADER_SIZE..], b"jpeg bytes");
    }

    #[test]
    fn test_encode_empty_payload() {
        let wire = ImageFrame::encode(&[]);
        assert_eq!(&wire[..], &[0, 0, 0, 0]);
    }
}
