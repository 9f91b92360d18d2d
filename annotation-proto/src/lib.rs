//! Wire record types accepted by the annotation service upload API.

mod common;

pub use concept::*;
pub mod concept;

pub use input::*;
pub mod input;

pub use region::*;
pub mod region;
