pub mod container_common;
pub mod queue;
#[cfg(feature = "collections_restricted")]
pub mod restricted;
pub mod stack;

pub use container_common::ContainerCommon;
pub use queue::{Queue, QueueError};
#[cfg(feature = "collections_restricted")]
pub use restricted::{AcceptableClass, TypeMismatchError, TypeRestrictedStack};
pub use stack::{Stack, StackError, StackLike};
