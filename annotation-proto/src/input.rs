use crate::{common::*, Concept, Region};

/// Free-form per-input metadata, serialized as a JSON object with
/// insertion order preserved.
pub type Metadata = IndexMap<String, serde_json::Value>;

/// Raw image bytes, serialized on the wire as a base64 string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub base64: Vec<u8>,
}

impl Image {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { base64: bytes }
    }
}

impl Serialize for Image {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use base64::{engine::general_purpose::STANDARD, Engine as _};
        #[derive(Serialize)]
        struct Wire<'a> {
            base64: &'a str,
        }
        let encoded = STANDARD.encode(&self.base64);
        Wire { base64: &encoded }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Image {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use base64::{engine::general_purpose::STANDARD, Engine as _};
        #[derive(Deserialize)]
        struct Wire {
            base64: String,
        }
        let wire = Wire::deserialize(deserializer)?;
        let bytes = STANDARD
            .decode(wire.base64.as_bytes())
            .map_err(|err| D::Error::custom(format!("invalid base64 payload: {:?}", err)))?;
        Ok(Self { base64: bytes })
    }
}

/// Raw text payload for text inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub raw: String,
}

/// The data block shared by inputs, annotations and regions. Unset
/// members are omitted from serialized output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Data {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Text>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub concepts: Vec<Concept>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<Region>,
}

/// One whole-image (or whole-text) record submitted to the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    pub id: String,
    pub dataset_ids: Vec<String>,
    pub data: Data,
}

/// One region record, referencing its parent input by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub input_id: String,
    pub data: Data,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_base64_round_trip() {
        let image = Image::new(b"\x89PNG\r\n".to_vec());
        let json = serde_json::to_string(&image).unwrap();
        assert_eq!(json, r#"{"base64":"iVBORw0K"}"#);

        let decoded: Image = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, image);
    }

    #[test]
    fn unset_data_members_are_omitted() {
        let input = Input {
            id: "ds-train-0".into(),
            dataset_ids: vec!["ds".into()],
            data: Data {
                image: Some(Image::new(b"bytes".to_vec())),
                ..Default::default()
            },
        };
        let json = serde_json::to_value(&input).unwrap();
        let data = json.get("data").unwrap().as_object().unwrap();
        assert!(data.contains_key("image"));
        assert!(!data.contains_key("text"));
        assert!(!data.contains_key("concepts"));
        assert!(!data.contains_key("metadata"));
        assert!(!data.contains_key("regions"));
    }
}
