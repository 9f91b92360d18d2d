use crate::common::*;
use annotation_proto::Metadata;

/// The one-shot dataset-to-record conversion contract.
///
/// A converter drains its sample source in a single pass and builds
/// wire records in sample order. Conversion consumes the converter, so
/// a finished run cannot be resumed or replayed; start a new converter
/// from a fresh sample source instead.
pub trait DatasetConverter {
    /// The record sequences produced by one conversion run.
    type Output;

    /// Drains the sample source and builds the wire records for every
    /// sample. A failed file read or a malformed sample aborts the run
    /// and discards the records accumulated so far.
    fn convert(self) -> Result<Self::Output>;
}

/// Derives the deterministic input id for the sample at `position`.
///
/// Samples carrying an external id map to `{split}-{id}`; the rest
/// fall back to `{dataset_id}-{split}-{position}` with the zero-based
/// position in iteration order.
pub fn input_id(
    dataset_id: &str,
    split: &str,
    position: usize,
    external_id: Option<&str>,
) -> String {
    match external_id {
        Some(id) => format!("{}-{}", split, id),
        None => format!("{}-{}-{}", dataset_id, split, position),
    }
}

/// Reads the raw image bytes for one sample. Failure is fatal to the
/// whole run.
pub(super) fn read_image(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("fail to read image file '{}'", path.display()))
}

/// Builds the `{"label": ..., "split": ...}` metadata block attached
/// to detection, segmentation and text inputs.
pub(super) fn sample_metadata<T>(labels: &[T], split: &str) -> Metadata
where
    T: Serialize,
{
    let mut metadata = Metadata::new();
    metadata.insert("label".to_owned(), serde_json::json!(labels));
    metadata.insert("split".to_owned(), serde_json::json!(split));
    metadata
}
