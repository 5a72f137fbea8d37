//! Link errors

use eddie_protocol::EncodeError;

/// Errors talking to the board
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("serial I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot encode request: {0:?}")]
    Encode(EncodeError),

    #[error("unsupported baud rate {0}")]
    UnsupportedBaud(u32),

    #[error("board closed the link")]
    Closed,

    #[error("link is already in use")]
    Busy,
}

impl From<EncodeError> for LinkError {
    fn from(e: EncodeError) -> Self {
        LinkError::Encode(e)
    }
}
