//! Sends one JPEG file to a running camview receiver using the device
//! wire protocol, standing in for the firmware's `send_jpeg_over_tcp`.

use camview::{AppResult, ImageFrame};
use clap::Parser;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::runtime;

#[derive(Parser)]
#[command(version)]
pub struct CommandLine {
    /// JPEG file to send
    pub file: PathBuf,
    /// receiver address, host:port
    #[arg(short, long, default_value = "127.0.0.1:5050")]
    pub addr: String,
}

fn main() -> AppResult<()> {
    let commandline: CommandLine = CommandLine::parse();

    let payload = std::fs::read(&commandline.file)?;
    let wire = ImageFrame::encode(&payload);

    let rt = runtime::Builder::new_current_thread().enable_all().build()?;
    rt.block_on(async {
        let mut stream = TcpStream::connect(&commandline.addr).await?;
        stream.write_all(&wire).await?;
        stream.shutdown().await?;
        Ok(())
    })
}
