#![warn(clippy::pedantic)]

pub mod document;
pub mod element;
pub mod error;
pub mod reader;
pub mod walk;

pub use bson_wire::{ElementType, WireError};
pub use document::RawDocument;
pub use element::Element;
pub use error::DecodeError;
pub use reader::ElementReader;
pub use walk::{WalkConfig, WalkEvent, WalkStats, validate, walk};
