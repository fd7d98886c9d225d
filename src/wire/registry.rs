use std::collections::HashMap;
use std::sync::OnceLock;

use crate::wire::message::{MessageType, TypeTag, STANDARD_TYPE_TAGS};
use crate::wire::Error;

/// Immutable mapping from message variants to their wire type tags.
pub struct TypeRegistry {
    tags: HashMap<MessageType, TypeTag>,
}

impl TypeRegistry {
    pub fn new(entries: impl IntoIterator<Item = (MessageType, TypeTag)>) -> Self {
        Self { tags: entries.into_iter().collect() }
    }

    /// The process-wide registry covering every sendable variant of the protocol.
    pub fn standard() -> &'static TypeRegistry {
        static STANDARD: OnceLock<TypeRegistry> = OnceLock::new();
        STANDARD.get_or_init(|| TypeRegistry::new(STANDARD_TYPE_TAGS.iter().copied()))
    }

    /// A missing entry means the registry was built incompletely; callers
    /// should treat it as non-recoverable for that message.
    pub fn tag_for(&self, message_type: MessageType) -> Result<TypeTag, Error> {
        self.tags
            .get(&message_type)
            .copied()
            .ok_or(Error::UnmappedMessage(message_type))
    }
}
