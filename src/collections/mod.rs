pub mod adapter;

pub use adapter::{ContainerCommon, Queue, QueueError, Stack, StackError, StackLike};
#[cfg(feature = "collections_restricted")]
pub use adapter::{AcceptableClass, TypeMismatchError, TypeRestrictedStack};
