//! Platform-agnostic core - shared between the WASM dashboard and the CLI
//!
//! Load a dataset, describe it as a plot, resolve clicks back to points.

pub mod colorscale;
pub mod config;
pub mod error;
pub mod inspect;
pub mod loader;
pub mod plot;
pub mod point;
pub mod render;

pub use colorscale::ColorScale;
pub use config::{ViewerConfig, DEFAULT_DATA_URI, DEFAULT_IMAGE_DIR};
pub use error::{ClickError, LoadError, MalformedDataError, RenderError, TransportError};
pub use inspect::{ClickInspector, DetailRequest, DetailView};
pub use loader::{parse_dataset, PointCloudLoader, Transport};
pub use plot::{build_spec, AxisTitles, MarkerSymbol, PlotSpec, PlotStyle};
pub use point::{Dataset, Point3D};
pub use render::{
    ClickListener, HeadlessSurface, PlotHandle, PlotSurface, PointClick, RenderHandle,
    ScatterRenderer,
};
