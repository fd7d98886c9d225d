use std::fmt::{Display, Formatter};
use std::io::{self, Write};

/// Protocol-defined identifier of a message variant, one byte on the wire.
pub type TypeTag = u8;

macro_rules! message_types {
    ($(($variant: ident, $tag: expr, $literal: expr)),*) => {
        /// The closed set of client message variants that can be sent on a connection.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum MessageType {
            $($variant),*
        }

        impl MessageType {
            pub fn all() -> Vec<MessageType> {
                vec![$(MessageType::$variant),*]
            }
        }

        impl Display for MessageType {
            fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(MessageType::$variant => formatter.write_str($literal)),*
                }
            }
        }

        pub(crate) const STANDARD_TYPE_TAGS: &[(MessageType, TypeTag)] = &[
            $((MessageType::$variant, $tag)),*
        ];
    }
}

message_types!(
    (CapabilitiesGet, 1, "Connection.CapabilitiesGet"),
    (CapabilitiesSet, 2, "Connection.CapabilitiesSet"),
    (ConnectionClose, 3, "Connection.Close"),
    (AuthenticateStart, 4, "Session.AuthenticateStart"),
    (AuthenticateContinue, 5, "Session.AuthenticateContinue"),
    (SessionReset, 6, "Session.Reset"),
    (SessionClose, 7, "Session.Close"),
    (StmtExecute, 12, "Sql.StmtExecute"),
    (CrudFind, 17, "Crud.Find"),
    (CrudInsert, 18, "Crud.Insert"),
    (CrudUpdate, 19, "Crud.Update"),
    (CrudDelete, 20, "Crud.Delete"),
    (ExpectOpen, 24, "Expect.Open"),
    (ExpectClose, 25, "Expect.Close")
);

/// An already-encoded protocol message, ready to be framed.
///
/// `write_to` must emit exactly `serialized_size()` bytes; the length
/// header is computed from the reported size, not the streamed bytes.
pub trait Message {
    fn message_type(&self) -> MessageType;
    fn serialized_size(&self) -> usize;
    fn write_to(&self, sink: &mut dyn Write) -> io::Result<()>;
}
