mod network;
mod service;
mod viewer;

pub use network::{Connection, ImageFrame, HEADER_SIZE};
pub use service::{
    setup_tracing, AppConfig, AppError, AppResult, NetworkConfig, Server, ViewerConfig,
};
pub use viewer::{decode_jpeg, FrameSink, JpegViewer};
