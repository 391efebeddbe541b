use std::net::SocketAddr;

use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tokio::time::{self, Duration};
use tracing::{debug, error, info, warn};

use crate::network::Connection;
use crate::viewer::FrameSink;
use crate::AppError;
use crate::AppResult;
use crate::NetworkConfig;

/// The connection server: accepts one connection at a time, reads a
/// single frame from it, hands the payload to the sink, and closes the
/// connection.
///
/// A second peer connecting while the first is being serviced queues in
/// the OS backlog. Frame and decode failures abandon the current
/// connection only; the accept loop continues. The loop never terminates
/// on its own.
#[derive(Debug)]
pub struct Server<S> {
    listener: TcpListener,
    network_config: NetworkConfig,
    sink: S,
}

impl<S: FrameSink> Server<S> {
    /// Binds the listening socket with the configured backlog and
    /// `SO_REUSEADDR`, matching the device-side expectations.
    ///
    /// Bind or listen failures mean the server cannot function at all and
    /// are returned to the caller as fatal.
    pub async fn bind(network_config: &NetworkConfig, sink: S) -> AppResult<Server<S>> {
        let listen_address = format!("{}:{}", network_config.host, network_config.port);
        let addr: SocketAddr = listen_address
            .parse()
            .map_err(|_| AppError::InvalidValue(format!("listen address: {}", listen_address)))?;

        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()?
        } else {
            TcpSocket::new_v6()?
        };
        socket.set_reuseaddr(true)?;
        socket.bind(addr)?;
        let listener = socket.listen(network_config.backlog)?;

        info!("listening on {}", listener.local_addr()?);

        Ok(Server {
            listener,
            network_config: network_config.clone(),
            sink,
        })
    }

    /// The address the listener is bound to. Useful when the configured
    /// port is 0 and the OS picked one.
    pub fn local_addr(&self) -> AppResult<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts and services connections strictly one after another.
    ///
    /// Exits with an error only if accepting new connections keeps
    /// failing; per-connection failures are logged and the loop proceeds.
    pub async fn run(&mut self) -> AppResult<()> {
        loop {
            let (socket, peer) = self.accept().await?;
            debug!("connection from {}", peer);

            if let Err(err) = self.handle_connection(socket, peer).await {
                error!("connection {} failed: {}", peer, err);
            }
            // the accepted socket is dropped here on every path,
            // closing the connection before the next accept
        }
    }

    /// Services one connection: at most one frame, then done. The
    /// firmware closes the connection after sending a single image, so no
    /// second frame is ever read from the same socket.
    async fn handle_connection(&mut self, socket: TcpStream, peer: SocketAddr) -> AppResult<()> {
        let mut connection = Connection::new(socket, &self.network_config);

        let frame = match connection.read_frame().await? {
            Some(frame) => frame,
            None => {
                info!("{} closed before sending a length header", peer);
                return Ok(());
            }
        };

        match self.sink.submit(&frame.payload) {
            Ok(()) => debug!("displayed {} byte frame from {}", frame.payload.len(), peer),
            Err(err) => warn!("failed to display frame from {}: {}", peer, err),
        }

        Ok(())
    }

    async fn accept(&self) -> AppResult<(TcpStream, SocketAddr)> {
        let mut backoff = 1;

        loop {
            match self.listener.accept().await {
                Ok((socket, peer)) => return Ok((socket, peer)),
                Err(err) => {
                    if backoff > 64 {
                        return Err(AppError::IoError(err));
                    }
                    warn!("accept error: {}, retrying in {}s", err, backoff);
                }
            }

            time::sleep(Duration::from_secs(backoff)).await;
            backoff *= 2;
        }
    }
}

impl<S> Drop for Server<S> {
    fn drop(&mut self) {
        debug!("tcp server dropped");
    }
}
