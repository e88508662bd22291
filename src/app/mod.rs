//! Scatter viewer app (WASM)
//!
//! Fetches the dataset in the background, renders it once it arrives, and
//! turns point clicks into image popups.

mod header;

use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;
use tracing::{error, info};

use crate::core::{ClickInspector, DetailRequest, DetailView, PointCloudLoader, ViewerConfig};
use crate::detail_wasm::PopupDetailView;
use crate::load_state::{LoadSlot, LoadState};
use crate::scatter::EguiSurface;
use crate::session::PlotSession;
use crate::theme::{colors, viewer_visuals};
use crate::transport_wasm::FetchTransport;
use header::HeaderAction;

/// Surface id, matching the element the plot is mounted in
const PLOT_SURFACE: &str = "plot";

pub struct ViewerApp {
    config: ViewerConfig,
    /// Written by the fetch task, polled every frame
    load: Rc<RefCell<LoadSlot>>,
    session: PlotSession<EguiSurface>,
    inspector: ClickInspector,
    detail_view: PopupDetailView,
    last_detail: Option<DetailRequest>,
}

impl ViewerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ViewerConfig) -> Self {
        cc.egui_ctx.set_visuals(viewer_visuals());

        let load = Rc::new(RefCell::new(LoadSlot::default()));
        let generation = load.borrow_mut().begin();
        spawn_load(&config.source_uri, generation, load.clone(), cc.egui_ctx.clone());

        Self {
            inspector: ClickInspector::new(config.image_dir.clone()),
            config,
            load,
            session: PlotSession::new(EguiSurface::new(PLOT_SURFACE)),
            detail_view: PopupDetailView,
            last_detail: None,
        }
    }

    fn drain_clicks(&mut self) {
        for outcome in self.session.drain_clicks(&self.inspector) {
            match outcome {
                Ok(request) => {
                    self.detail_view.show_detail(&request);
                    self.last_detail = Some(request);
                }
                Err(e) => error!(error = %e, "Click could not be resolved"),
            }
        }
    }

    fn reload(&mut self, ctx: &egui::Context) {
        info!(uri = %self.config.source_uri, "Reloading dataset");
        self.session.clear();
        self.session.surface_mut().reset_view();
        self.last_detail = None;

        let generation = self.load.borrow_mut().begin();
        spawn_load(&self.config.source_uri, generation, self.load.clone(), ctx.clone());
    }
}

/// Fetch in the background; the result only lands if `generation` is still current
fn spawn_load(uri: &str, generation: u64, slot: Rc<RefCell<LoadSlot>>, ctx: egui::Context) {
    let uri = uri.to_string();
    wasm_bindgen_futures::spawn_local(async move {
        let loader = PointCloudLoader::new(FetchTransport);
        let outcome = match loader.load(&uri).await {
            Ok(dataset) => LoadState::Loaded(dataset),
            Err(e) => {
                error!(uri = %uri, error = %e, "Failed to load dataset");
                LoadState::Failed(e.to_string())
            }
        };
        if slot.borrow_mut().finish(generation, outcome) {
            ctx.request_repaint();
        }
    });
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.session.poll_load(&mut self.load.borrow_mut(), &self.config);

        let action = egui::TopBottomPanel::top("header")
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY).inner_margin(6.0))
            .show(ctx, |ui| self.render_header(ui))
            .inner;

        match action {
            Some(HeaderAction::ResetView) => self.session.surface_mut().reset_view(),
            Some(HeaderAction::Reload) => self.reload(ctx),
            None => {}
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY))
            .show(ctx, |ui| self.session.surface_mut().show(ui));

        self.drain_clicks();
    }
}
