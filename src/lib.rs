pub mod compression;
pub mod error;

pub use compression::{Compression, Container, FrequencyTable, HuffmanCodec, Milestone};
pub use error::{Error, Result};
