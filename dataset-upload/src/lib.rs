//! Dataset-to-annotation-record conversion toolkit.
//!
//! Reshapes labeled vision and text samples into the wire records of
//! the remote annotation service, one converter per task kind.

mod common;

pub mod chunk;
pub mod dataset;

pub use annotation_proto as proto;
