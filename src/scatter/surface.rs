//! egui surface for the 3-D scatter
//!
//! Paints points far to near with the painter's algorithm. Drag orbits,
//! scroll zooms, hover shows the label, click reports the point index.

use eframe::egui;

use super::camera::{Camera, SceneBounds};
use super::pick::{pick_nearest, ScreenPoint};
use crate::core::{
    ClickListener, MarkerSymbol, PlotHandle, PlotSpec, PlotSurface, PointClick, RenderError,
};
use crate::theme::colors;

const ORBIT_SPEED: f64 = 0.01;
const ZOOM_SPEED: f64 = 0.002;
/// Fraction of the shorter side the unit cube spans at zoom 1
const FIT: f32 = 0.35;
const MIN_PICK_RADIUS: f32 = 4.0;

struct ActivePlot {
    handle: PlotHandle,
    spec: PlotSpec,
    /// Same order as `spec`, fitted into [-1, 1]^3
    normalized: Vec<[f64; 3]>,
    colors: Vec<egui::Color32>,
    listener: Option<ClickListener>,
}

pub struct EguiSurface {
    id: String,
    camera: Camera,
    next_plot: u64,
    active: Option<ActivePlot>,
}

impl EguiSurface {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            camera: Camera::default(),
            next_plot: 0,
            active: None,
        }
    }

    pub fn reset_view(&mut self) {
        self.camera = Camera::default();
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect;

        if response.dragged() {
            let delta = response.drag_delta();
            self.camera
                .orbit(-delta.x as f64 * ORBIT_SPEED, delta.y as f64 * ORBIT_SPEED);
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.camera.zoom_by((scroll as f64 * ZOOM_SPEED).exp());
            }
        }

        painter.rect_filled(rect, 0.0, colors::PLOT_BG);

        let Some(plot) = self.active.as_mut() else {
            return;
        };

        let camera = self.camera;
        let center = rect.center();
        let scale = rect.width().min(rect.height()) * FIT;
        let to_screen = |p: [f64; 3]| {
            let (x, y) = camera.project(p);
            egui::pos2(center.x + x as f32 * scale, center.y - y as f32 * scale)
        };

        draw_box(&painter, &plot.spec, &to_screen);

        let mut screen: Vec<ScreenPoint> = plot
            .normalized
            .iter()
            .enumerate()
            .map(|(index, &p)| {
                let pos = to_screen(p);
                ScreenPoint { index, x: pos.x, y: pos.y, depth: camera.depth(p) as f32 }
            })
            .collect();
        screen.sort_by(|a, b| b.depth.total_cmp(&a.depth));

        let half = plot.spec.style.point_size as f32 * 0.5;
        for sp in &screen {
            let pos = egui::pos2(sp.x, sp.y);
            let color = plot.colors[sp.index];
            match plot.spec.style.symbol {
                MarkerSymbol::Square => {
                    let square = egui::Rect::from_center_size(pos, egui::vec2(half * 2.0, half * 2.0));
                    painter.rect_filled(square, 0.0, color);
                }
                MarkerSymbol::Circle => {
                    painter.circle_filled(pos, half, color);
                }
            }
        }

        let radius = half.max(MIN_PICK_RADIUS);

        if let Some(pos) = response.hover_pos() {
            if let Some(index) = pick_nearest(&screen, (pos.x, pos.y), radius) {
                painter.text(
                    pos + egui::vec2(10.0, -10.0),
                    egui::Align2::LEFT_BOTTOM,
                    &plot.spec.labels[index],
                    egui::FontId::monospace(12.0),
                    colors::TEXT_PRIMARY,
                );
            }
        }

        if response.clicked() {
            let picked = response
                .interact_pointer_pos()
                .and_then(|pos| pick_nearest(&screen, (pos.x, pos.y), radius));
            if let (Some(index), Some(listener)) = (picked, plot.listener.as_mut()) {
                listener(PointClick { index });
            }
        }
    }
}

/// Bounding cube edges plus one title per axis
fn draw_box(painter: &egui::Painter, spec: &PlotSpec, to_screen: &impl Fn([f64; 3]) -> egui::Pos2) {
    let corners = SceneBounds::unit_corners();
    let stroke = egui::Stroke::new(1.0, colors::BOX_LINE);

    for (i, &a) in corners.iter().enumerate() {
        for axis in 0..3 {
            let j = i | (1 << axis);
            if j != i {
                painter.line_segment([to_screen(a), to_screen(corners[j])], stroke);
            }
        }
    }

    let titles = [&spec.axes.x, &spec.axes.y, &spec.axes.z];
    for (axis, title) in titles.into_iter().enumerate() {
        let mut end = [-1.0; 3];
        end[axis] = 1.15;
        painter.text(
            to_screen(end),
            egui::Align2::CENTER_CENTER,
            title,
            egui::FontId::proportional(11.0),
            colors::TEXT_MUTED,
        );
    }
}

impl PlotSurface for EguiSurface {
    fn surface_id(&self) -> &str {
        &self.id
    }

    fn plot(&mut self, spec: &PlotSpec) -> Result<PlotHandle, RenderError> {
        let handle = PlotHandle(self.next_plot);
        self.next_plot += 1;

        let normalized = match spec.bounds() {
            Some(axes) => {
                let bounds = SceneBounds::from_axes(axes);
                (0..spec.len())
                    .filter_map(|i| spec.position(i))
                    .map(|p| bounds.normalize(p))
                    .collect()
            }
            None => Vec::new(),
        };

        let alpha = (spec.style.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        let colors = spec
            .point_colors()
            .into_iter()
            .map(|[r, g, b]| egui::Color32::from_rgba_unmultiplied(r, g, b, alpha))
            .collect();

        self.active = Some(ActivePlot {
            handle,
            spec: spec.clone(),
            normalized,
            colors,
            listener: None,
        });
        Ok(handle)
    }

    fn on_click(&mut self, plot: PlotHandle, listener: ClickListener) -> Result<(), RenderError> {
        match self.active.as_mut() {
            Some(active) if active.handle == plot => {
                active.listener = Some(listener);
                Ok(())
            }
            _ => Err(RenderError::UnknownPlot { surface: self.id.clone(), plot: plot.0 }),
        }
    }

    fn clear(&mut self, plot: PlotHandle) {
        if self.active.as_ref().is_some_and(|a| a.handle == plot) {
            self.active = None;
        }
    }
}
