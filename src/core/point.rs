//! Labelled 3-D points and the ordered dataset they live in

use super::error::MalformedDataError;

/// One embedded sample
#[derive(Clone, Debug, PartialEq)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Non-empty; also names the image asset for the point
    pub label: String,
}

impl Point3D {
    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Ordered, read-only list of points
///
/// Index position is the identity of a point: the renderer and the click
/// resolver must see the very same order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    points: Vec<Point3D>,
}

impl Dataset {
    /// Build a dataset, rejecting empty labels
    pub fn new(points: Vec<Point3D>) -> Result<Self, MalformedDataError> {
        if let Some(index) = points.iter().position(|p| p.label.is_empty()) {
            return Err(MalformedDataError::EmptyLabel { index });
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Point3D> {
        self.points.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point3D> {
        self.points.iter()
    }

    pub fn points(&self) -> &[Point3D] {
        &self.points
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Point3D;
    type IntoIter = std::slice::Iter<'a, Point3D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
