use super::{input_id, sample_metadata, DatasetConverter, TextSample};
use crate::common::*;
use annotation_proto::{Concept, Data, Input, Text};
use getset::Getters;

/// Converts text classification samples into input records.
#[derive(Getters)]
pub struct TextClassificationConverter<I> {
    samples: I,
    #[getset(get = "pub")]
    dataset_id: String,
    #[getset(get = "pub")]
    split: String,
}

impl<I> TextClassificationConverter<I>
where
    I: IntoIterator<Item = TextSample>,
{
    pub fn new(samples: I, dataset_id: impl Into<String>, split: impl Into<String>) -> Self {
        Self {
            samples,
            dataset_id: dataset_id.into(),
            split: split.into(),
        }
    }
}

impl<I> DatasetConverter for TextClassificationConverter<I>
where
    I: IntoIterator<Item = TextSample>,
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
            let TextSample { text, id, labels } = sample;
            let input_id = input_id(&dataset_id, &split, position, id.as_deref());
            let labels = labels.into_vec();
            let concepts: Vec<_> = labels
                .iter()
                .map(|label| Concept::from_name(label.to_string()))
                .collect();

            inputs.push(Input {
                id: input_id,
                dataset_ids: vec![dataset_id.clone()],
                data: Data {
                    text: Some(Text { raw: text }),
                    concepts,
                    metadata: sample_metadata(&labels, &split),
                    ..Default::default()
                },
            });
        }

        info!("built {} text inputs", inputs.len());
        Ok(inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LabelList;

    #[test]
    fn one_input_per_text_sample() {
        let samples = vec![
            TextSample {
                text: "the movie was great".to_owned(),
                id: None,
                labels: LabelList::One("positive".into()),
            },
            TextSample {
                text: "terrible plot".to_owned(),
                id: Some("r2".to_owned()),
                labels: LabelList::Many(vec!["negative".into(), "spoiler free".into()]),
            },
        ];
        let inputs = TextClassificationConverter::new(samples, "reviews", "train")
            .convert()
            .unwrap();

        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].id, "reviews-train-0");
        assert_eq!(inputs[1].id, "train-r2");
        assert_eq!(
            inputs[0].data.text.as_ref().unwrap().raw,
            "the movie was great"
        );
        assert_eq!(inputs[1].data.concepts.len(), 2);
        assert_eq!(inputs[1].data.concepts[1].id, "id-spoilerfree");
        assert_eq!(
            inputs[1].data.metadata["split"],
            serde_json::json!("train")
        );
    }
}
