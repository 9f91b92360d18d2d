use super::{input_id, read_image, sample_metadata, DatasetConverter, SegmentationSample};
use crate::common::*;
use annotation_proto::{Annotation, Concept, Data, Image, Input, Point, Polygon, Region};
use getset::Getters;

/// Converts segmentation samples into input and polygon region records.
///
/// Each sample yields one input plus one annotation per labeled
/// polygon. Unlike detection, a polygon without a matching class label
/// is skipped rather than aborting the run, to tolerate partially
/// labeled batches.
#[derive(Getters)]
pub struct SegmentationConverter<I> {
    samples: I,
    #[getset(get = "pub")]
    dataset_id: String,
    #[getset(get = "pub")]
    split: String,
}

impl<I> SegmentationConverter<I>
where
    I: IntoIterator<Item = SegmentationSample>,
{
    pub fn new(samples: I, dataset_id: impl Into<String>, split: impl Into<String>) -> Self {
        Self {
            samples,
            dataset_id: dataset_id.into(),
            split: split.into(),
        }
    }
}

impl<I> DatasetConverter for SegmentationConverter<I>
where
    I: IntoIterator<Item = SegmentationSample>,
{
    type Output = (Vec<Input>, Vec<Annotation>);

    fn convert(self) -> Result<Self::Output> {
        let Self {
            samples,
            dataset_id,
            split,
        } = self;

        let mut inputs = vec![];
        let mut annotations = vec![];
        let mut skipped_polygons = 0;

        for (position, sample) in samples.into_iter().enumerate() {
            let SegmentationSample {
                image_file,
                id,
                classes,
                polygons,
            } = sample;
            let input_id = input_id(&dataset_id, &split, position, id.as_deref());
            let image = read_image(&image_file)?;

            inputs.push(Input {
                id: input_id.clone(),
                dataset_ids: vec![dataset_id.clone()],
                data: Data {
                    image: Some(Image::new(image)),
                    metadata: sample_metadata(&classes, &split),
                    ..Default::default()
                },
            });

            for (index, polygon) in polygons.iter().enumerate() {
                // Polygons past the end of the label list are skipped,
                // not fatal.
                let class = match classes.get(index) {
                    Some(class) => class,
                    None => {
                        skipped_polygons += 1;
                        continue;
                    }
                };

                let points: Vec<_> = polygon.iter().map(|&point| Point::from_xy(point)).collect();
                annotations.push(Annotation {
                    input_id: input_id.clone(),
                    data: Data {
                        regions: vec![Region::from_polygon(
                            Polygon { points },
                            Concept::from_name(class),
                        )],
                        ..Default::default()
                    },
                });
            }
        }

        if skipped_polygons > 0 {
            warn!(
                "skipped {} unlabeled polygons in the data set",
                skipped_polygons
            );
        }

        info!(
            "built {} segmentation inputs and {} mask annotations",
            inputs.len(),
            annotations.len()
        );
        Ok((inputs, annotations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_file(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("images")
            .join(name)
    }

    fn sample(classes: &[&str], polygons: &[&[[f64; 2]]]) -> SegmentationSample {
        SegmentationSample {
            image_file: image_file("field.jpg"),
            id: None,
            classes: classes.iter().map(|&class| class.to_owned()).collect(),
            polygons: polygons
                .iter()
                .map(|polygon| polygon.iter().map(|&[x, y]| [r64(x), r64(y)]).collect())
                .collect(),
        }
    }

    const TRIANGLE: &[[f64; 2]] = &[[0.0, 0.0], [4.0, 0.0], [2.0, 3.0]];
    const SQUARE: &[[f64; 2]] = &[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]];

    #[test]
    fn one_annotation_per_labeled_polygon() {
        let samples = vec![sample(&["grass", "tree"], &[TRIANGLE, SQUARE])];
        let (inputs, annotations) = SegmentationConverter::new(samples, "farm", "train")
            .convert()
            .unwrap();

        assert_eq!(inputs.len(), 1);
        assert_eq!(annotations.len(), 2);
        assert!(inputs[0].data.concepts.is_empty());
        assert_eq!(
            inputs[0].data.metadata["label"],
            serde_json::json!(["grass", "tree"])
        );
    }

    #[test]
    fn unlabeled_polygons_are_skipped_without_error() {
        let samples = vec![sample(&["grass"], &[TRIANGLE, SQUARE, TRIANGLE])];
        let (inputs, annotations) = SegmentationConverter::new(samples, "farm", "train")
            .convert()
            .unwrap();

        assert_eq!(inputs.len(), 1);
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].data.regions[0].data.concepts[0].id, "id-grass");
    }

    #[test]
    fn polygon_points_are_remapped() {
        let samples = vec![sample(&["grass"], &[&[[5.0, 8.0], [6.0, 9.0]]])];
        let (_, annotations) = SegmentationConverter::new(samples, "farm", "train")
            .convert()
            .unwrap();

        let region = &annotations[0].data.regions[0];
        let points = &region.region_info.polygon.as_ref().unwrap().points;
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].row, 8.0);
        assert_eq!(points[0].col, 5.0);
    }
}
