//! Helper struct for drawing curves in world space onto the screen.
//! The x axis is screen position in millimetres and the y axis is relative intensity;
//! the two are scaled independently so the curves fill the canvas.

use egui::{Align2, Color32, FontId, Pos2, Rangef, Rect, Stroke, Ui};
use ndarray::ArrayView1;

const GRID_COLOUR: Color32 = Color32::from_rgb(30, 30, 30);
const AXIS_COLOUR: Color32 = Color32::from_rgb(90, 90, 90);
const LABEL_COLOUR: Color32 = Color32::from_rgb(140, 140, 140);

pub struct Canvas<'a> {
    ui: &'a Ui,
    screen_extent: Rect,
    range: Rect,
    x_scale: f32,
    y_scale: f32,
}

impl<'a> Canvas<'a> {
    pub fn new(
        ui: &'a Ui,
        screen_extent: Rect,
        visible_x_axis: Rangef,
        visible_y_axis: Rangef,
    ) -> Self {
        let range = Rect::from_x_y_ranges(visible_x_axis, visible_y_axis);

        Canvas {
            ui,
            screen_extent,
            range,
            x_scale: screen_extent.width() / range.width(),
            y_scale: screen_extent.height() / range.height(),
        }
    }

    fn world_to_screen_x(&self, x: f32) -> f32 {
        self.screen_extent.min.x + self.x_scale * (x - self.range.min.x)
    }

    // screen y grows downwards
    fn world_to_screen_y(&self, y: f32) -> f32 {
        self.screen_extent.max.y - self.y_scale * (y - self.range.min.y)
    }

    fn world_to_screen_pos(&self, x: f32, y: f32) -> Pos2 {
        Pos2::new(self.world_to_screen_x(x), self.world_to_screen_y(y))
    }

    /// Screen x coordinate back to world x, for panning and zooming around the pointer.
    pub fn screen_to_world_x(&self, x: f32) -> f32 {
        self.range.min.x + (x - self.screen_extent.min.x) / self.x_scale
    }

    pub fn draw_grid_lines(&self, x_step: f32, y_step: f32) {
        let stroke = Stroke::new(1.0, GRID_COLOUR);

        let mut y = y_step * (self.range.min.y / y_step).ceil();
        while y <= self.range.max.y {
            self.ui
                .painter()
                .hline(self.screen_extent.x_range(), self.world_to_screen_y(y), stroke);
            y += y_step;
        }
        let mut x = x_step * (self.range.min.x / x_step).ceil();
        while x <= self.range.max.x {
            self.ui
                .painter()
                .vline(self.world_to_screen_x(x), self.screen_extent.y_range(), stroke);
            x += x_step;
        }
    }

    pub fn draw_axes(&self) {
        let stroke = Stroke::new(2.0, AXIS_COLOUR);
        if self.range.x_range().contains(0.0) {
            self.ui
                .painter()
                .vline(self.world_to_screen_x(0.0), self.screen_extent.y_range(), stroke);
        }
        self.ui
            .painter()
            .hline(self.screen_extent.x_range(), self.world_to_screen_y(0.0), stroke);
    }

    /// Writes the x value of every `x_step` gridline just above the x axis.
    pub fn draw_x_labels(&self, x_step: f32, unit: &str) {
        let mut x = x_step * (self.range.min.x / x_step).ceil();
        while x <= self.range.max.x {
            // avoids printing "-0"
            let value = if x.abs() < x_step / 2.0 { 0.0 } else { x };
            self.ui.painter().text(
                self.world_to_screen_pos(x, 0.0) + egui::vec2(3.0, -3.0),
                Align2::LEFT_BOTTOM,
                format!("{value:.1} {unit}"),
                FontId::monospace(11.0),
                LABEL_COLOUR,
            );
            x += x_step;
        }
    }

    pub fn draw_curve(
        &self,
        x_points: ArrayView1<f64>,
        y_points: ArrayView1<f64>,
        colour: Color32,
    ) {
        if (x_points.len() < 2) || (x_points.len() != y_points.len()) {
            log::error!("Arrays passed to draw_curve have invalid sizes");
            return;
        }
        let screen_points: Vec<Pos2> = x_points
            .iter()
            .zip(y_points.iter())
            .filter(|(x, _)| self.range.x_range().contains(**x as f32))
            .map(|(x, y)| self.world_to_screen_pos(*x as f32, *y as f32))
            .collect();
        self.ui.painter().line(screen_points, Stroke::new(2.0, colour));
    }
}
