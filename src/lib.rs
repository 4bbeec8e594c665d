#[cfg(feature = "elements")]
pub mod elements;

#[cfg(feature = "collections")]
pub mod collections;
