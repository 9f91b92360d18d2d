//! Per-task dataset converters.

mod classification;
mod converter;
mod csv;
mod detection;
mod record;
mod segmentation;
mod text;

pub use self::csv::*;
pub use classification::*;
pub use converter::*;
pub use detection::*;
pub use record::*;
pub use segmentation::*;
pub use text::*;
