pub mod message;
pub mod registry;
pub mod writer;

use std::io;
use std::time::SystemTime;

use thiserror::Error;

use crate::wire::message::MessageType;

/// Fixed per-frame overhead: the 4 byte length prefix plus the one byte type tag.
pub const HEADER_SIZE: usize = 5;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No type tag mapped for message {0}")]
    UnmappedMessage(MessageType),
    #[error("Frame with a {0} byte payload does not fit the 4 byte length header")]
    FrameTooLarge(usize),
    #[error("Unable to write message: {0}")]
    Communications(#[from] io::Error),
}

/// Read side of the last-send timestamp, consumed by idle-connection monitors.
pub trait SentTimeHolder {
    fn last_sent(&self) -> Option<SystemTime>;
}
