use super::{ClassLabel, ClassificationSample, LabelList};
use crate::common::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
struct CsvRow {
    image_file: PathBuf,
    label: String,
}

/// Loads classification samples from a headered `image_file,label`
/// CSV file. Rows sharing an image file are folded into one
/// multi-label sample, preserving first-appearance order.
pub fn load_classification_csv(
    image_dir: impl AsRef<Path>,
    label_file: impl AsRef<Path>,
) -> Result<Vec<ClassificationSample>> {
    let image_dir = image_dir.as_ref();
    let label_file = label_file.as_ref();

    // parse label file
    let rows: Vec<CsvRow> = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .comment(Some(b'#'))
        .from_path(label_file)?
        .deserialize()
        .try_collect()?;

    // group labels by image file
    let mut grouped: IndexMap<PathBuf, Vec<ClassLabel>> = IndexMap::new();
    rows.into_iter().for_each(|row| {
        grouped
            .entry(image_dir.join(row.image_file))
            .or_default()
            .push(ClassLabel::Name(row.label));
    });

    // check existence of image files
    let samples: Vec<_> = grouped
        .into_iter()
        .map(|(image_file, labels)| -> Result<_> {
            ensure!(
                image_file.is_file(),
                "the image file '{}' does not exist",
                image_file.display()
            );
            let label = match labels.len() {
                1 => LabelList::One(labels.into_iter().next().unwrap()),
                _ => LabelList::Many(labels),
            };
            Ok(ClassificationSample {
                image_file,
                id: None,
                label,
            })
        })
        .try_collect()?;

    Ok(samples)
}
