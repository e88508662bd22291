//! Click resolution: point index -> detail request
//!
//! The inspector never captures the dataset; callers pass it in with every
//! click so the same resolver works with or without a live surface.

use tracing::{debug, error};

use super::config::DEFAULT_IMAGE_DIR;
use super::error::ClickError;
use super::point::Dataset;

/// What the detail view should show for a clicked point
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRequest {
    pub index: usize,
    pub label: String,
    /// Image reference derived from the label, `<image_dir>/<label>`
    pub asset: String,
}

/// External presentation of a resolved click (popup, side panel, log line)
pub trait DetailView {
    fn show_detail(&mut self, request: &DetailRequest);
}

#[derive(Clone, Debug)]
pub struct ClickInspector {
    image_dir: String,
}

impl Default for ClickInspector {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_DIR)
    }
}

impl ClickInspector {
    pub fn new(image_dir: impl Into<String>) -> Self {
        Self { image_dir: image_dir.into() }
    }

    /// Resolve a raw (possibly negative) click index
    pub fn on_point_clicked(
        &self,
        index: isize,
        dataset: &Dataset,
    ) -> Result<DetailRequest, ClickError> {
        let index = usize::try_from(index).map_err(|_| {
            error!(index, "Negative point index");
            ClickError::NegativeIndex(index)
        })?;
        self.resolve(index, dataset)
    }

    /// Resolve an index reported by a surface
    pub fn resolve(&self, index: usize, dataset: &Dataset) -> Result<DetailRequest, ClickError> {
        let point = dataset.get(index).ok_or_else(|| {
            error!(index, len = dataset.len(), "Point index out of range");
            ClickError::OutOfRange { index, len: dataset.len() }
        })?;

        debug!(index, label = %point.label, "Point clicked");
        Ok(DetailRequest {
            index,
            label: point.label.clone(),
            asset: self.asset_for(&point.label),
        })
    }

    fn asset_for(&self, label: &str) -> String {
        let dir = self.image_dir.trim_end_matches('/');
        if dir.is_empty() {
            label.to_string()
        } else {
            format!("{dir}/{label}")
        }
    }
}
