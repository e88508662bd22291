//! Viewer configuration

use super::plot::{AxisTitles, PlotStyle};

/// Default coordinate file, resolved relative to the page (or cwd for the CLI)
pub const DEFAULT_DATA_URI: &str = "tsne_data.json";

/// Directory holding one image per point, named after the point label
pub const DEFAULT_IMAGE_DIR: &str = "pokemon_images";

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub source_uri: String,
    pub image_dir: String,
    pub style: PlotStyle,
    pub axes: AxisTitles,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            source_uri: DEFAULT_DATA_URI.to_string(),
            image_dir: DEFAULT_IMAGE_DIR.to_string(),
            style: PlotStyle::default(),
            axes: AxisTitles::default(),
        }
    }
}
