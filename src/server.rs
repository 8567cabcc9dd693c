use futures::{SinkExt, StreamExt};
use log::{debug, error, info, warn};
use tokio::{
    io::{AsyncRead, AsyncWrite},
    net::TcpListener,
};

use crate::{Result, Session, SessionBuilder, config::SessionConfig};

/// Accepts simulator connections until the listener fails, each one gets its own `Session`.
///
/// # Args
/// * `listener` - A bound listener.
/// * `config` - The configuration every session is built from.
///
/// # Returns
/// An error if accepting a connection or building a session fails.
pub async fn serve(listener: TcpListener, config: SessionConfig) -> Result<()> {
    let mut builder = SessionBuilder::new();

    loop {
        let (stream, addr) = listener.accept().await?;
        let session = builder.build(&config)?;
        let id = session.id();
        info!(session = id; "simulator connected from {addr}");

        tokio::spawn(async move {
            match handle_connection(stream, session).await {
                Ok(()) => info!(session = id; "simulator disconnected"),
                Err(e) => error!(session = id; "connection closed: {e}"),
            }
        });
    }
}

/// Drives a single session over a stream until the peer hangs up.
///
/// Frames that fail to decode are logged and skipped, the stream stays open.
///
/// # Args
/// * `io` - The stream connected to the simulator.
/// * `session` - The session answering this simulator.
///
/// # Returns
/// An error if the stream fails or the session can't apply its tuned gains.
pub async fn handle_connection<T>(io: T, mut session: Session) -> Result<()>
where
    T: AsyncRead + AsyncWrite + Unpin,
{
    let mut channel = comms::channel(io);

    while let Some(frame) = channel.next().await {
        let frame = frame?;

        let msg = match comms::decode(&frame) {
            Ok(msg) => msg,
            Err(e) => {
                warn!(session = session.id(); "skipping malformed frame: {e}");
                continue;
            }
        };

        if let Some(reply) = session.handle(msg)? {
            debug!(session = session.id(); "replying {reply:?}");
            channel.send(comms::encode(&reply)?).await?;
        }
    }

    Ok(())
}
