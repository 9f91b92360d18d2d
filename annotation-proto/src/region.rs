use crate::{common::*, Concept, Data};

/// Bounding box in top/left/bottom/right pixel coordinates.
///
/// `top_row` must be less than `bottom_row` and `left_col` less than
/// `right_col`; the service rejects inverted boxes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub top_row: R64,
    pub left_col: R64,
    pub bottom_row: R64,
    pub right_col: R64,
}

impl BoundingBox {
    /// Builds a box from `[x_min, y_min, x_max, y_max]` ordering.
    pub fn from_xyxy(xyxy: [R64; 4]) -> Self {
        let [x_min, y_min, x_max, y_max] = xyxy;
        Self {
            top_row: y_min,
            left_col: x_min,
            bottom_row: y_max,
            right_col: x_max,
        }
    }
}

/// A polygon vertex in row/col pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub row: R64,
    pub col: R64,
    pub visibility: Visibility,
}

impl Point {
    /// Builds a visible vertex from an `[x, y]` point.
    pub fn from_xy(xy: [R64; 2]) -> Self {
        let [x, y] = xy;
        Self {
            row: y,
            col: x,
            visibility: Visibility::Visible,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    Visible,
    NotVisible,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
}

/// The geometry of one region, either a box or a polygon.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polygon: Option<Polygon>,
}

/// A sub-area of an image carrying its own concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub region_info: RegionInfo,
    pub data: Data,
}

impl Region {
    pub fn from_bounding_box(bounding_box: BoundingBox, concept: Concept) -> Self {
        Self {
            region_info: RegionInfo {
                bounding_box: Some(bounding_box),
                ..Default::default()
            },
            data: Data {
                concepts: vec![concept],
                ..Default::default()
            },
        }
    }

    pub fn from_polygon(polygon: Polygon, concept: Concept) -> Self {
        Self {
            region_info: RegionInfo {
                polygon: Some(polygon),
                ..Default::default()
            },
            data: Data {
                concepts: vec![concept],
                ..Default::default()
            },
        }
    }
}
