use std::io::Write;
use std::time::SystemTime;

use crate::wire::message::Message;
use crate::wire::registry::TypeRegistry;
use crate::wire::{Error, SentTimeHolder, HEADER_SIZE};

/// Frames client messages onto the connection's byte sink.
///
/// One writer per connection. `&mut self` keeps a frame's header, tag,
/// payload and flush uninterleaved; callers sharing a writer across
/// threads must hold their own lock around the whole `write` call.
pub struct MessageWriter<W: Write> {
    sink: W,
    registry: &'static TypeRegistry,
    last_sent: Option<SystemTime>,
}

impl<W: Write> MessageWriter<W> {
    pub fn new(sink: W) -> Self {
        Self::with_registry(sink, TypeRegistry::standard())
    }

    pub fn with_registry(sink: W, registry: &'static TypeRegistry) -> Self {
        Self { sink, registry, last_sent: None }
    }

    /// Send one message as a single frame and flush it to the transport.
    ///
    /// A failed write may leave a truncated frame in the sink; the byte
    /// stream is then desynchronized and the connection owner should
    /// abandon it. Nothing is retried at this layer.
    pub fn write<M: Message>(&mut self, message: &M) -> Result<(), Error> {
        let tag = self.registry.tag_for(message.message_type())?;

        let payload_size = message.serialized_size();
        if payload_size >= u32::MAX as usize {
            return Err(Error::FrameTooLarge(payload_size));
        }

        self.sink.write_all(&((1 + payload_size) as u32).to_le_bytes())?;
        self.sink.write_all(&[tag])?;
        message.write_to(&mut self.sink)?;
        self.sink.flush()?;

        self.last_sent = Some(SystemTime::now());
        tracing::trace!("sent {} frame of {} bytes", message.message_type(), HEADER_SIZE + payload_size);
        Ok(())
    }
}

impl<W: Write> SentTimeHolder for MessageWriter<W> {
    fn last_sent(&self) -> Option<SystemTime> {
        self.last_sent
    }
}
