use crate::common::*;

/// The fixed marker prefixed to every derived concept id.
pub const CONCEPT_ID_PREFIX: &str = "id-";

/// A named label attached to a whole input or to one of its regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    pub id: String,
    pub name: String,
    pub value: R64,
}

impl Concept {
    /// Creates a concept whose id is derived from the display text.
    ///
    /// The value is fixed at 1.0: concepts carry a membership signal,
    /// not a confidence score.
    pub fn from_name(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        Self {
            id: concept_id(name),
            name: name.to_owned(),
            value: r64(1.0),
        }
    }
}

/// Derives the deterministic concept id for a display text.
///
/// All whitespace is removed from the text, not just trimmed, so
/// identical display texts always map to the same id.
pub fn concept_id(name: &str) -> String {
    let stripped: String = name.chars().filter(|ch| !ch.is_whitespace()).collect();
    format!("{}{}", CONCEPT_ID_PREFIX, stripped)
}
