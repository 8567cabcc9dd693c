mod frame;
pub mod msg;

use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::{Framed, LinesCodec};

pub use frame::{decode, encode};

/// The longest text frame accepted from a peer, in bytes.
pub const MAX_FRAME_LEN: usize = 64 * 1024;

/// A bidirectional stream of newline delimited text frames.
pub type Channel<T> = Framed<T, LinesCodec>;

/// Creates a `Channel` over an async byte stream.
///
/// Each line carries exactly one protocol frame, see `decode` and `encode`.
///
/// # Arguments
/// * `io` - An async readable and writable stream.
///
/// # Returns
/// Both ends of the communication as a single `Stream` + `Sink` of lines.
pub fn channel<T>(io: T) -> Channel<T>
where
    T: AsyncRead + AsyncWrite,
{
    Framed::new(io, LinesCodec::new_with_max_length(MAX_FRAME_LEN))
}
