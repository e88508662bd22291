//! Scatter rendering against an abstract plot surface
//!
//! A surface takes a `PlotSpec`, hands back a plot handle and reports clicks
//! on it. `ScatterRenderer` owns the "one plot per surface" rule and gives
//! the caller a `RenderHandle` to tear the plot down again.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use super::error::RenderError;
use super::plot::PlotSpec;

/// Surface-local plot id
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlotHandle(pub u64);

/// A click on a point, by its index in the dataset
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointClick {
    pub index: usize,
}

pub type ClickListener = Box<dyn FnMut(PointClick)>;

/// Anything that can draw a scatter and report point clicks
pub trait PlotSurface {
    /// Stable id, e.g. the DOM element the plot lives in
    fn surface_id(&self) -> &str;

    fn plot(&mut self, spec: &PlotSpec) -> Result<PlotHandle, RenderError>;

    fn on_click(&mut self, plot: PlotHandle, listener: ClickListener) -> Result<(), RenderError>;

    fn clear(&mut self, plot: PlotHandle);
}

/// Proof that a plot is live on a surface
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderHandle {
    pub surface_id: String,
    pub plot: PlotHandle,
}

#[derive(Default)]
pub struct ScatterRenderer {
    occupied: HashSet<String>,
}

impl ScatterRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plot `spec` and register exactly one click listener for it
    pub fn render<S: PlotSurface>(
        &mut self,
        spec: &PlotSpec,
        surface: &mut S,
        listener: impl FnMut(PointClick) + 'static,
    ) -> Result<RenderHandle, RenderError> {
        let surface_id = surface.surface_id().to_string();
        if self.occupied.contains(&surface_id) {
            warn!(surface = %surface_id, "Surface already rendered");
            return Err(RenderError::AlreadyRendered(surface_id));
        }

        let plot = surface.plot(spec)?;
        if let Err(e) = surface.on_click(plot, Box::new(listener)) {
            surface.clear(plot);
            return Err(e);
        }

        info!(surface = %surface_id, points = spec.len(), "Scatter rendered");
        self.occupied.insert(surface_id.clone());
        Ok(RenderHandle { surface_id, plot })
    }

    /// Remove the plot and its listener; the surface may be rendered again
    pub fn teardown<S: PlotSurface>(&mut self, handle: RenderHandle, surface: &mut S) {
        debug!(surface = %handle.surface_id, plot = handle.plot.0, "Tearing down scatter");
        surface.clear(handle.plot);
        self.occupied.remove(&handle.surface_id);
    }

    pub fn is_rendered(&self, surface_id: &str) -> bool {
        self.occupied.contains(surface_id)
    }
}

/// Surface without a display: keeps the spec and lets the caller dispatch
/// clicks by index
pub struct HeadlessSurface {
    id: String,
    next_plot: u64,
    active: Option<(PlotHandle, PlotSpec)>,
    listener: Option<ClickListener>,
}

impl HeadlessSurface {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            next_plot: 0,
            active: None,
            listener: None,
        }
    }

    pub fn spec(&self) -> Option<&PlotSpec> {
        self.active.as_ref().map(|(_, spec)| spec)
    }

    /// Report a click on `index` to the registered listener
    ///
    /// Returns `false` when nothing is listening.
    pub fn click(&mut self, index: usize) -> bool {
        match self.listener.as_mut() {
            Some(listener) => {
                listener(PointClick { index });
                true
            }
            None => false,
        }
    }
}

impl PlotSurface for HeadlessSurface {
    fn surface_id(&self) -> &str {
        &self.id
    }

    fn plot(&mut self, spec: &PlotSpec) -> Result<PlotHandle, RenderError> {
        let handle = PlotHandle(self.next_plot);
        self.next_plot += 1;
        self.active = Some((handle, spec.clone()));
        self.listener = None;
        Ok(handle)
    }

    fn on_click(&mut self, plot: PlotHandle, listener: ClickListener) -> Result<(), RenderError> {
        match &self.active {
            Some((active, _)) if *active == plot => {
                self.listener = Some(listener);
                Ok(())
            }
            _ => Err(RenderError::UnknownPlot { surface: self.id.clone(), plot: plot.0 }),
        }
    }

    fn clear(&mut self, plot: PlotHandle) {
        if matches!(&self.active, Some((active, _)) if *active == plot) {
            self.active = None;
            self.listener = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::plot::build_spec;
    use crate::core::point::{Dataset, Point3D};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn spec() -> PlotSpec {
        let ds = Dataset::new(vec![
            Point3D { x: 1.0, y: 2.0, z: 3.0, label: "a".into() },
            Point3D { x: 4.0, y: 5.0, z: 6.0, label: "b".into() },
        ])
        .unwrap();
        build_spec(&ds)
    }

    #[test]
    fn render_registers_one_listener() {
        let mut renderer = ScatterRenderer::new();
        let mut surface = HeadlessSurface::new("plot");
        let clicks = Rc::new(RefCell::new(Vec::new()));

        let sink = clicks.clone();
        let handle = renderer
            .render(&spec(), &mut surface, move |c| sink.borrow_mut().push(c.index))
            .unwrap();

        assert_eq!(handle.surface_id, "plot");
        assert_eq!(surface.spec(), Some(&spec()));
        assert!(surface.click(1));
        assert!(surface.click(0));
        assert_eq!(*clicks.borrow(), vec![1, 0]);
    }

    #[test]
    fn second_render_on_same_surface_fails() {
        let mut renderer = ScatterRenderer::new();
        let mut surface = HeadlessSurface::new("plot");
        let first = renderer.render(&spec(), &mut surface, |_| {}).unwrap();

        let err = renderer.render(&spec(), &mut surface, |_| {}).unwrap_err();
        assert_eq!(err, RenderError::AlreadyRendered("plot".into()));
        // existing plot untouched
        assert!(surface.click(0));

        renderer.teardown(first, &mut surface);
        assert!(!renderer.is_rendered("plot"));
        assert!(surface.spec().is_none());
        assert!(!surface.click(0));

        let second = renderer.render(&spec(), &mut surface, |_| {}).unwrap();
        assert_eq!(second.plot, PlotHandle(1));
    }

    #[test]
    fn separate_surfaces_render_independently() {
        let mut renderer = ScatterRenderer::new();
        let mut left = HeadlessSurface::new("left");
        let mut right = HeadlessSurface::new("right");

        renderer.render(&spec(), &mut left, |_| {}).unwrap();
        renderer.render(&spec(), &mut right, |_| {}).unwrap();
        assert!(renderer.is_rendered("left"));
        assert!(renderer.is_rendered("right"));
    }

    #[test]
    fn listener_for_unknown_plot_rejected() {
        let mut surface = HeadlessSurface::new("plot");
        let err = surface.on_click(PlotHandle(9), Box::new(|_| {})).unwrap_err();
        assert_eq!(err, RenderError::UnknownPlot { surface: "plot".into(), plot: 9 });
    }
}
