//! Contains all application code, including viewer state and drawing logic

mod canvas;

use canvas::Canvas;
use double_slit::simulation::variables::{MILLIMETRE, SCREEN_MAX, SCREEN_MIN};
use double_slit::simulation::{Curve, Parameter, Simulation};

use egui::{Color32, Pos2, Rangef, Rect, Response, RichText, Sense, Style};
use strum::IntoEnumIterator;

const INTENSITY_AXIS: Rangef = Rangef {
    min: -0.05,
    max: 1.1,
};

fn zoom_to(range: &Rangef, zoom: f32, centre: f32) -> Rangef {
    Rangef {
        min: centre - range.span() / (2.0 * zoom),
        max: centre + range.span() / (2.0 * zoom),
    }
}

fn colour_of(curve: Curve) -> Color32 {
    let (r, g, b) = curve.colour();
    Color32::from_rgb(r, g, b)
}

pub struct DoubleSlitApp {
    simulation: Simulation,
    zoom: f32,
    world_centre: f32,
    zoom_centre: Option<f32>,
    dragging: Option<f32>,
}

impl DoubleSlitApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let simulation = Simulation::new();
        let world_centre = Self::world_size(&simulation).center();
        Self {
            simulation,
            zoom: 1.0,
            world_centre,
            zoom_centre: None,
            dragging: None,
        }
    }

    /// Screen extent in millimetres.
    fn world_size(simulation: &Simulation) -> Rangef {
        let (min, max) = simulation.screen().extent().unwrap_or((SCREEN_MIN, SCREEN_MAX));
        Rangef::new((min / MILLIMETRE) as f32, (max / MILLIMETRE) as f32)
    }

    fn reset_view(&mut self) {
        self.zoom = 1.0;
        self.world_centre = Self::world_size(&self.simulation).center();
        self.zoom_centre = None;
        self.dragging = None;
    }

    fn clamp_centre(&self, centre: f32, visible_span: f32) -> f32 {
        let size = Self::world_size(&self.simulation);
        centre
            .min(size.max - visible_span / 2.0)
            .max(size.min + visible_span / 2.0)
    }
}

impl eframe::App for DoubleSlitApp {
    /// Called each time the UI needs repainting
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // draws the parameter sliders at the top of the window
        let settings = egui::TopBottomPanel::top("settings");
        let settings_drawn: Response = settings
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for parameter in Parameter::iter() {
                        let variable = parameter.variable();
                        let mut value = self.simulation.value(parameter);

                        ui.label(parameter.symbol()).on_hover_text(parameter.name());
                        if ui
                            .add(
                                egui::Slider::new(&mut value, variable.range())
                                    .suffix(format!(" {}", variable.unit)),
                            )
                            .changed()
                        {
                            self.simulation.set(parameter, value);
                        }
                        if ui.button("↺").on_hover_text("Reset").clicked() {
                            self.simulation.reset(parameter);
                        }

                        ui.separator();
                    }
                    if ui.button("Reset all").clicked() {
                        self.simulation.reset_all();
                    }
                });
            })
            .response;

        // recompute before drawing so the curves match the sliders this frame
        self.simulation.update();
        let params = self.simulation.parameters();

        // draws curve toggles and view controls at the bottom of the window
        let controls = egui::TopBottomPanel::bottom("controls");
        let controls_drawn: Response = controls
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for curve in Curve::iter() {
                        let mut visible = self.simulation.is_visible(curve);
                        let label = RichText::new(curve.name()).color(colour_of(curve));
                        if ui
                            .checkbox(&mut visible, label)
                            .on_hover_text(curve.properties().description)
                            .changed()
                        {
                            self.simulation.set_visible(curve, visible);
                        }
                    }

                    ui.separator();

                    ui.label("Zoom");
                    ui.add(egui::Slider::new(&mut self.zoom, 1.0..=10.0));
                    if ui.button("↺").on_hover_text("Reset view").clicked() {
                        self.reset_view();
                    }

                    ui.separator();

                    ui.label(format!(
                        "Fringe spacing {:.3} mm",
                        params.fringe_spacing() / MILLIMETRE
                    ))
                    .on_hover_text("λL/d");
                    ui.label(format!(
                        "First envelope null {:.3} mm",
                        params.first_envelope_null() / MILLIMETRE
                    ))
                    .on_hover_text("λL/a");
                    ui.label(format!(
                        "{} fringes in central lobe",
                        params.fringes_in_central_envelope()
                    ));
                });
            })
            .response;

        let canvas_extent = Rect::from_two_pos(
            Pos2::new(ctx.screen_rect().left(), settings_drawn.rect.bottom()),
            Pos2::new(ctx.screen_rect().right(), controls_drawn.rect.top()),
        );

        let world_size = Self::world_size(&self.simulation);
        let pointer_pos = ctx.pointer_latest_pos().unwrap_or(Pos2::new(0.0, 0.0));
        let mut visible_world = zoom_to(&world_size, self.zoom, self.world_centre);
        let pointer_world_pos = ((pointer_pos.x - canvas_extent.left()) * visible_world.span()
            / canvas_extent.width())
            + visible_world.min;

        let scroll_delta = ctx.input(|input| input.smooth_scroll_delta.y);
        if scroll_delta == 0.0 {
            self.zoom_centre = None;
        } else if canvas_extent.contains(pointer_pos) {
            let zoom = (self.zoom + scroll_delta / 100.0).clamp(1.0, 10.0);
            let future_visible_world = zoom_to(&world_size, zoom, self.world_centre);
            let zoom_centre = *self.zoom_centre.get_or_insert(pointer_world_pos);
            self.world_centre = self.clamp_centre(zoom_centre, future_visible_world.span());
            self.zoom = zoom;
        }

        // the zoom slider can widen the view past the screen edges
        let span = zoom_to(&world_size, self.zoom, self.world_centre).span();
        self.world_centre = self.clamp_centre(self.world_centre, span);
        visible_world = zoom_to(&world_size, self.zoom, self.world_centre);

        // draws the pattern in the main panel of the window
        let style = Style::default();
        let _ = egui::CentralPanel::default()
            .frame(egui::Frame::canvas(&style))
            .show(ctx, |ui| {
                let canvas = Canvas::new(ui, canvas_extent, visible_world, INTENSITY_AXIS);

                if ui
                    .interact(canvas_extent, egui::Id::new("canvas-drag"), Sense::drag())
                    .dragged()
                {
                    let start = self.dragging.unwrap_or(pointer_pos.x);
                    let diff = canvas.screen_to_world_x(start)
                        - canvas.screen_to_world_x(pointer_pos.x);
                    self.world_centre =
                        self.clamp_centre(self.world_centre + diff, visible_world.span());
                    self.dragging = Some(pointer_pos.x);
                } else {
                    self.dragging = None;
                }

                let x_step = if self.zoom < 4.0 { 1.0 } else { 0.1 };
                canvas.draw_grid_lines(x_step, 0.1);
                canvas.draw_axes();
                canvas.draw_x_labels(x_step, "mm");

                let pattern = self.simulation.pattern();
                let x_mm = pattern.positions().mapv(|x| x / MILLIMETRE);
                for curve in self.simulation.visible_curves() {
                    canvas.draw_curve(x_mm.view(), pattern.curve(curve), colour_of(curve));
                }
            })
            .response;
    }
}
