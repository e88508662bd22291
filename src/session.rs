//! A rendered plot bound to the dataset it was built from
//!
//! The session owns the surface, the click queue and the dataset, so a
//! click is always resolved against the same ordered sequence that was
//! handed to the renderer. Both the browser app and `scatter-cli` drive
//! their plot through it.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tracing::{debug, error};

use crate::core::{
    ClickError, ClickInspector, Dataset, DetailRequest, PlotSpec, PlotSurface, PointClick,
    RenderError, RenderHandle, ScatterRenderer, ViewerConfig,
};
use crate::load_state::LoadSlot;

/// Clicks pushed by the surface listener, drained once per frame
pub type ClickQueue = Rc<RefCell<VecDeque<PointClick>>>;

pub struct PlotSession<S> {
    surface: S,
    renderer: ScatterRenderer,
    handle: Option<RenderHandle>,
    dataset: Option<Dataset>,
    clicks: ClickQueue,
}

impl<S: PlotSurface> PlotSession<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            renderer: ScatterRenderer::new(),
            handle: None,
            dataset: None,
            clicks: ClickQueue::default(),
        }
    }

    /// Plot `dataset` and make it the sequence clicks resolve against
    ///
    /// On error the current plot and dataset are left as they were.
    pub fn install(&mut self, dataset: Dataset, config: &ViewerConfig) -> Result<(), RenderError> {
        let spec = PlotSpec::with_style(&dataset, config.style, config.axes.clone());
        let sink = self.clicks.clone();
        let handle = self
            .renderer
            .render(&spec, &mut self.surface, move |click| sink.borrow_mut().push_back(click))?;

        self.handle = Some(handle);
        self.dataset = Some(dataset);
        Ok(())
    }

    /// Install the dataset waiting in `slot`, if any
    ///
    /// A render failure is written back into the slot. Returns `true` when a
    /// new plot went up.
    pub fn poll_load(&mut self, slot: &mut LoadSlot, config: &ViewerConfig) -> bool {
        let Some(dataset) = slot.take_loaded() else {
            return false;
        };

        match self.install(dataset, config) {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "Render failed");
                slot.fail(e.to_string());
                false
            }
        }
    }

    /// Tear the plot down and drop the dataset and any queued clicks
    pub fn clear(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.renderer.teardown(handle, &mut self.surface);
        }
        self.dataset = None;
        self.clicks.borrow_mut().clear();
    }

    /// Resolve every queued click against the plotted dataset
    pub fn drain_clicks(
        &mut self,
        inspector: &ClickInspector,
    ) -> Vec<Result<DetailRequest, ClickError>> {
        let pending: Vec<PointClick> = self.clicks.borrow_mut().drain(..).collect();
        let Some(dataset) = self.dataset.as_ref() else {
            if !pending.is_empty() {
                debug!(dropped = pending.len(), "Clicks with no dataset");
            }
            return Vec::new();
        };

        pending
            .into_iter()
            .map(|click| inspector.resolve(click.index, dataset))
            .collect()
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn is_rendered(&self) -> bool {
        self.handle.is_some()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HeadlessSurface, Point3D};
    use crate::load_state::LoadState;

    fn dataset(labels: &[&str]) -> Dataset {
        let points = labels
            .iter()
            .enumerate()
            .map(|(i, label)| Point3D {
                x: i as f64,
                y: -(i as f64),
                z: i as f64 * 2.0,
                label: label.to_string(),
            })
            .collect();
        Dataset::new(points).unwrap()
    }

    fn plotted_labels(session: &PlotSession<HeadlessSurface>) -> Vec<String> {
        session.surface().spec().map(|s| s.labels.clone()).unwrap_or_default()
    }

    fn clicked_labels(
        session: &mut PlotSession<HeadlessSurface>,
        inspector: &ClickInspector,
    ) -> Vec<String> {
        session
            .drain_clicks(inspector)
            .into_iter()
            .map(|r| r.unwrap().label)
            .collect()
    }

    #[test]
    fn reload_during_fetch_plots_only_latest_dataset() {
        let config = ViewerConfig::default();
        let inspector = ClickInspector::default();
        let mut slot = LoadSlot::default();
        let mut session = PlotSession::new(HeadlessSurface::new("plot"));

        let initial = slot.begin();
        // reload pressed before the first fetch came back
        session.clear();
        let reload = slot.begin();

        assert!(!slot.finish(initial, LoadState::Loaded(dataset(&["bulbasaur", "charmander"]))));
        assert!(!session.poll_load(&mut slot, &config));
        assert!(!session.is_rendered());

        assert!(slot.finish(reload, LoadState::Loaded(dataset(&["squirtle", "pikachu"]))));
        assert!(session.poll_load(&mut slot, &config));
        assert!(slot.state().is_ready());

        assert_eq!(plotted_labels(&session), vec!["squirtle", "pikachu"]);
        assert!(session.surface_mut().click(1));
        assert_eq!(clicked_labels(&mut session, &inspector), vec!["pikachu"]);
    }

    #[test]
    fn failed_render_keeps_plotted_dataset() {
        let config = ViewerConfig::default();
        let inspector = ClickInspector::default();
        let mut slot = LoadSlot::default();
        let mut session = PlotSession::new(HeadlessSurface::new("plot"));

        let first = slot.begin();
        slot.finish(first, LoadState::Loaded(dataset(&["bulbasaur", "charmander"])));
        assert!(session.poll_load(&mut slot, &config));

        // a second dataset arriving without a teardown must not replace the first
        let second = slot.begin();
        slot.finish(second, LoadState::Loaded(dataset(&["squirtle", "pikachu"])));
        assert!(!session.poll_load(&mut slot, &config));
        assert!(matches!(slot.state(), LoadState::Failed(reason) if reason.contains("plot")));

        assert_eq!(plotted_labels(&session), vec!["bulbasaur", "charmander"]);
        assert_eq!(session.dataset().map(|d| d.get(1).unwrap().label.as_str()), Some("charmander"));
        assert!(session.surface_mut().click(1));
        assert_eq!(clicked_labels(&mut session, &inspector), vec!["charmander"]);
    }

    #[test]
    fn clear_drops_plot_and_pending_clicks() {
        let config = ViewerConfig::default();
        let inspector = ClickInspector::default();
        let mut session = PlotSession::new(HeadlessSurface::new("plot"));
        session.install(dataset(&["a", "b"]), &config).unwrap();

        assert!(session.surface_mut().click(0));
        session.clear();

        assert!(!session.is_rendered());
        assert!(session.dataset().is_none());
        assert!(session.surface().spec().is_none());
        assert!(session.drain_clicks(&inspector).is_empty());

        // surface is free again
        session.install(dataset(&["c"]), &config).unwrap();
        assert_eq!(plotted_labels(&session), vec!["c"]);
    }

    #[test]
    fn out_of_range_click_is_reported() {
        let config = ViewerConfig::default();
        let inspector = ClickInspector::default();
        let mut session = PlotSession::new(HeadlessSurface::new("plot"));
        session.install(dataset(&["a", "b"]), &config).unwrap();

        session.surface_mut().click(2);
        let results = session.drain_clicks(&inspector);
        assert_eq!(results, vec![Err(ClickError::OutOfRange { index: 2, len: 2 })]);
    }
}
