use super::{input_id, read_image, sample_metadata, DatasetConverter, DetectionSample};
use crate::common::*;
use annotation_proto::{Annotation, BoundingBox, Concept, Data, Image, Input, Region};
use getset::Getters;

/// Converts object detection samples into input and region records.
///
/// Each sample yields one input plus one annotation per bounding box.
/// Concepts live on the regions only; the input carries the label list
/// and split name in its metadata.
#[derive(Getters)]
pub struct DetectionConverter<I> {
    samples: I,
    #[getset(get = "pub")]
    dataset_id: String,
    #[getset(get = "pub")]
    split: String,
}

impl<I> DetectionConverter<I>
where
    I: IntoIterator<Item = DetectionSample>,
{
    pub fn new(samples: I, dataset_id: impl Into<String>, split: impl Into<String>) -> Self {
        Self {
            samples,
            dataset_id: dataset_id.into(),
            split: split.into(),
        }
    }
}

impl<I> DatasetConverter for DetectionConverter<I>
where
    I: IntoIterator<Item = DetectionSample>,
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

        for (position, sample) in samples.into_iter().enumerate() {
            let DetectionSample {
                image_file,
                id,
                classes,
                bboxes,
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

            // One sample may carry any number of boxes. A box without a
            // matching class label is malformed upstream data and aborts
            // the run.
            for (index, bbox) in bboxes.iter().enumerate() {
                let class = classes.get(index).ok_or_else(|| {
                    format_err!(
                        "input '{}' has {} boxes but only {} class labels",
                        input_id,
                        bboxes.len(),
                        classes.len()
                    )
                })?;

                annotations.push(Annotation {
                    input_id: input_id.clone(),
                    data: Data {
                        regions: vec![Region::from_bounding_box(
                            BoundingBox::from_xyxy(*bbox),
                            Concept::from_name(class),
                        )],
                        ..Default::default()
                    },
                });
            }
        }

        info!(
            "built {} detection inputs and {} region annotations",
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

    fn sample(classes: &[&str], bboxes: &[[f64; 4]]) -> DetectionSample {
        DetectionSample {
            image_file: image_file("street.jpg"),
            id: None,
            classes: classes.iter().map(|&class| class.to_owned()).collect(),
            bboxes: bboxes
                .iter()
                .map(|&[x_min, y_min, x_max, y_max]| {
                    [r64(x_min), r64(y_min), r64(x_max), r64(y_max)]
                })
                .collect(),
        }
    }

    #[test]
    fn one_annotation_per_box() {
        let samples = vec![sample(
            &["red car", "person"],
            &[[10.0, 20.0, 30.0, 40.0], [1.0, 2.0, 3.0, 4.0]],
        )];
        let (inputs, annotations) = DetectionConverter::new(samples, "city", "train")
            .convert()
            .unwrap();

        assert_eq!(inputs.len(), 1);
        assert_eq!(annotations.len(), 2);
        assert!(inputs[0].data.concepts.is_empty());
        assert_eq!(
            inputs[0].data.metadata["label"],
            serde_json::json!(["red car", "person"])
        );
        assert_eq!(inputs[0].data.metadata["split"], serde_json::json!("train"));
        assert!(annotations
            .iter()
            .all(|annotation| annotation.input_id == inputs[0].id));
    }

    #[test]
    fn box_corners_are_remapped() {
        let samples = vec![sample(&["red car"], &[[10.0, 20.0, 30.0, 40.0]])];
        let (_, annotations) = DetectionConverter::new(samples, "city", "train")
            .convert()
            .unwrap();

        let region = &annotations[0].data.regions[0];
        let bbox = region.region_info.bounding_box.as_ref().unwrap();
        assert_eq!(bbox.top_row, 20.0);
        assert_eq!(bbox.left_col, 10.0);
        assert_eq!(bbox.bottom_row, 40.0);
        assert_eq!(bbox.right_col, 30.0);
        assert_eq!(region.data.concepts[0].id, "id-redcar");
    }

    #[test]
    fn missing_label_for_box_aborts_the_run() {
        let samples = vec![sample(
            &["red car"],
            &[[10.0, 20.0, 30.0, 40.0], [1.0, 2.0, 3.0, 4.0]],
        )];
        let result = DetectionConverter::new(samples, "city", "train").convert();
        assert!(result.is_err());
    }

    #[test]
    fn surplus_labels_are_harmless() {
        let samples = vec![sample(
            &["red car", "person", "bike"],
            &[[10.0, 20.0, 30.0, 40.0]],
        )];
        let (_, annotations) = DetectionConverter::new(samples, "city", "train")
            .convert()
            .unwrap();
        assert_eq!(annotations.len(), 1);
    }
}
