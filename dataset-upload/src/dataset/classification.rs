use super::{input_id, read_image, ClassificationSample, DatasetConverter};
use crate::common::*;
use annotation_proto::{Concept, Data, Image, Input};
use getset::Getters;

/// Converts whole-image classification samples into input records.
///
/// Each sample yields exactly one input carrying its image bytes and
/// all of its concepts inline. No region records are produced.
#[derive(Getters)]
pub struct ClassificationConverter<I> {
    samples: I,
    #[getset(get = "pub")]
    dataset_id: String,
    #[getset(get = "pub")]
    split: String,
}

impl<I> ClassificationConverter<I>
where
    I: IntoIterator<Item = ClassificationSample>,
{
    pub fn new(samples: I, dataset_id: impl Into<String>, split: impl Into<String>) -> Self {
        Self {
            samples,
            dataset_id: dataset_id.into(),
            split: split.into(),
        }
    }
}

impl<I> DatasetConverter for ClassificationConverter<I>
where
    I: IntoIterator<Item = ClassificationSample>,
{
    type Output = Vec<Input>;

    fn convert(self) -> Result<Self::Output> {
        let Self {
            samples,
            dataset_id,
            split,
        } = self;

        let mut inputs = vec![];

        for (position, sample) in samples.into_iter().enumerate() {
            let ClassificationSample {
                image_file,
                id,
                label,
            } = sample;
            let input_id = input_id(&dataset_id, &split, position, id.as_deref());
            let image = read_image(&image_file)?;
            let concepts: Vec<_> = label
                .into_vec()
                .iter()
                .map(|label| Concept::from_name(label.to_string()))
                .collect();

            inputs.push(Input {
                id: input_id,
                dataset_ids: vec![dataset_id.clone()],
                data: Data {
                    image: Some(Image::new(image)),
                    concepts,
                    ..Default::default()
                },
            });
        }

        info!("built {} classification inputs", inputs.len());
        Ok(inputs)
    }
}
