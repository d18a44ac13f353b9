#![warn(clippy::pedantic)]

pub mod document_frame;
pub mod element_type;
pub mod error;
pub mod primitive;
pub mod value_len;

pub use element_type::ElementType;
pub use error::WireError;
pub use primitive::{peek_i32_le, read_cstring, read_i32_le};
pub use value_len::{resolve_value_len, value_len};
