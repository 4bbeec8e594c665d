pub mod element;
pub mod number;

pub use element::Element;
pub use number::{Number, NumberError, Real};
