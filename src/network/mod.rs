//! Network layer: length-prefixed framing over TCP.
//!
//! The device firmware opens a connection, writes a 4-byte big-endian
//! length followed by that many JPEG bytes, and closes the connection.
//! `Connection` accumulates partial reads until one complete `ImageFrame`
//! is available; the receiver never writes response bytes.

pub use connection::Connection;
pub use frame::ImageFrame;
pub use frame::HEADER_SIZE;
mod connection;
mod frame;
