//! Renderer-agnostic plot description
//!
//! `PlotSpec` is rebuilt from the dataset on every render and never
//! outlives it. Colors encode depth: the color channel is a copy of z.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use super::colorscale::ColorScale;
use super::point::Dataset;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerSymbol {
    #[default]
    Square,
    Circle,
}

impl MarkerSymbol {
    pub fn name(self) -> &'static str {
        match self {
            MarkerSymbol::Square => "square",
            MarkerSymbol::Circle => "circle",
        }
    }
}

/// Uniform marker styling, applied to every point
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlotStyle {
    pub point_size: f64,
    pub opacity: f64,
    pub color_scale: ColorScale,
    pub symbol: MarkerSymbol,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            point_size: 10.0,
            opacity: 0.8,
            color_scale: ColorScale::Viridis,
            symbol: MarkerSymbol::Square,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisTitles {
    pub x: String,
    pub y: String,
    pub z: String,
}

impl Default for AxisTitles {
    fn default() -> Self {
        Self {
            x: "t-SNE 1".to_string(),
            y: "t-SNE 2".to_string(),
            z: "t-SNE 3".to_string(),
        }
    }
}

/// Parallel arrays, one entry per point, in dataset order
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlotSpec {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub color: Vec<f64>,
    pub labels: Vec<String>,
    pub axes: AxisTitles,
    pub style: PlotStyle,
}

/// Build a spec with the default style and axis titles
pub fn build_spec(dataset: &Dataset) -> PlotSpec {
    PlotSpec::with_style(dataset, PlotStyle::default(), AxisTitles::default())
}

impl PlotSpec {
    pub fn with_style(dataset: &Dataset, style: PlotStyle, axes: AxisTitles) -> Self {
        let n = dataset.len();
        let mut spec = Self {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            z: Vec::with_capacity(n),
            color: Vec::with_capacity(n),
            labels: Vec::with_capacity(n),
            axes,
            style,
        };

        for p in dataset {
            spec.x.push(p.x);
            spec.y.push(p.y);
            spec.z.push(p.z);
            spec.color.push(p.z);
            spec.labels.push(p.label.clone());
        }

        debug!(points = n, "Plot spec built");
        spec
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn position(&self, index: usize) -> Option<[f64; 3]> {
        Some([*self.x.get(index)?, *self.y.get(index)?, *self.z.get(index)?])
    }

    /// Min/max of the color channel, `None` when empty
    pub fn color_range(&self) -> Option<(f64, f64)> {
        min_max(&self.color)
    }

    /// Per-axis `(min, max)`, `None` when empty
    pub fn bounds(&self) -> Option<[(f64, f64); 3]> {
        Some([min_max(&self.x)?, min_max(&self.y)?, min_max(&self.z)?])
    }

    /// RGB for every point, through the configured color scale
    pub fn point_colors(&self) -> Vec<[u8; 3]> {
        let Some(range) = self.color_range() else {
            return Vec::new();
        };
        self.color
            .iter()
            .map(|&c| self.style.color_scale.sample_in(c, range))
            .collect()
    }

    /// Plotly figure (`data` + `layout`) for a `scatter3d` trace
    pub fn to_plotly_figure(&self) -> Value {
        let trace = json!({
            "x": self.x,
            "y": self.y,
            "z": self.z,
            "mode": "markers",
            "type": "scatter3d",
            "text": self.labels,
            "hoverinfo": "text",
            "marker": {
                "size": self.style.point_size,
                "color": self.color,
                "colorscale": self.style.color_scale.name(),
                "symbol": self.style.symbol.name(),
                "opacity": self.style.opacity,
            },
        });

        let layout = json!({
            "scene": {
                "xaxis": { "title": self.axes.x },
                "yaxis": { "title": self.axes.y },
                "zaxis": { "title": self.axes.z },
            },
            "margin": { "l": 0, "r": 0, "b": 0, "t": 0 },
        });

        json!({ "data": [trace], "layout": layout })
    }
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}
