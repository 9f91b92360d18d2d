use crate::common::*;

/// One class label, either display text or a bare class index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassLabel {
    Name(String),
    Index(i64),
}

impl Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => Display::fmt(name, f),
            Self::Index(index) => Display::fmt(index, f),
        }
    }
}

impl From<&str> for ClassLabel {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<i64> for ClassLabel {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

/// One or many whole-input labels. A bare label reads as a
/// one-element list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelList {
    One(ClassLabel),
    Many(Vec<ClassLabel>),
}

impl LabelList {
    /// Normalizes the label field to a sequence.
    pub fn into_vec(self) -> Vec<ClassLabel> {
        match self {
            Self::One(label) => vec![label],
            Self::Many(labels) => labels,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(labels) => labels.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<ClassLabel> for LabelList {
    fn from(label: ClassLabel) -> Self {
        Self::One(label)
    }
}

impl From<Vec<ClassLabel>> for LabelList {
    fn from(labels: Vec<ClassLabel>) -> Self {
        Self::Many(labels)
    }
}

/// A whole-image classification sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationSample {
    pub image_file: PathBuf,
    /// Stable external id; a positional id is derived when absent.
    #[serde(default)]
    pub id: Option<String>,
    pub label: LabelList,
}

/// An object detection sample with one box per labeled region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionSample {
    pub image_file: PathBuf,
    #[serde(default)]
    pub id: Option<String>,
    /// One class label per box, in box order.
    pub classes: Vec<String>,
    /// Boxes in `[x_min, y_min, x_max, y_max]` pixel coordinates.
    pub bboxes: Vec<[R64; 4]>,
}

/// A segmentation sample with one polygon per labeled region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentationSample {
    pub image_file: PathBuf,
    #[serde(default)]
    pub id: Option<String>,
    /// One class label per polygon, in polygon order.
    pub classes: Vec<String>,
    /// One polygon per region, each a list of `[x, y]` points.
    pub polygons: Vec<Vec<[R64; 2]>>,
}

/// A text classification sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSample {
    pub text: String,
    #[serde(default)]
    pub id: Option<String>,
    pub labels: LabelList,
}
