//! Polygon wave scene
//!
//! Draws one frame of the animation: the polygon with its moving point on the
//! left and the waveform traced so far on the right, joined by a line at the
//! current height.
//!
//! ## Coordinate System
//!
//! Polygon offsets come from the controller with Y pointing up. Screen Y
//! increases downward, so every Y value is negated on the way to the painter.
//! On the graph, phase runs along X scaled by the polygon radius, so one full
//! turn spans `2π * radius` pixels.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};

use crate::animation::AnimationController;

/// Extra axis length beyond the polygon radius
const AXIS_MARGIN: f32 = 20.0;

/// Distance the graph origin sits left of the panel's horizontal center
const GRAPH_INSET: f32 = 50.0;

const POINT_RADIUS: f32 = 5.0;
const WAVE_DOT_RADIUS: f32 = 1.0;

/// Colors and background for the scene
#[derive(Clone)]
pub struct SceneSettings {
    pub background: Color32,
    /// Polygon outline, axes and labels
    pub foreground: Color32,
    pub point: Color32,
    pub radius_line: Color32,
    pub projection: Color32,
    pub wave: Color32,
    /// Line joining the polygon point to the waveform
    pub connector: Color32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            background: Color32::BLACK,
            foreground: Color32::WHITE,
            point: Color32::RED,
            radius_line: Color32::DARK_GRAY,
            projection: Color32::from_rgb(255, 200, 0),
            wave: Color32::from_rgb(0, 178, 0),
            connector: Color32::from_rgb(255, 0, 255),
        }
    }
}

/// Screen placement of the polygon and the graph inside a rect
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneLayout {
    pub polygon_center: Pos2,
    pub graph_origin: Pos2,
    pub radius: f32,
}

impl SceneLayout {
    /// Place the polygon a quarter of the way across and the graph just left
    /// of the middle, both on the vertical center line
    pub fn fit(rect: Rect, radius: f32) -> Self {
        let center_y = rect.center().y;
        Self {
            polygon_center: Pos2::new(rect.left() + rect.width() / 4.0, center_y),
            graph_origin: Pos2::new(rect.left() + rect.width() / 2.0 - GRAPH_INSET, center_y),
            radius,
        }
    }

    /// Screen position of a polygon-local offset
    pub fn polygon_point(&self, offset: (f64, f64)) -> Pos2 {
        Pos2::new(
            self.polygon_center.x + offset.0 as f32,
            self.polygon_center.y - offset.1 as f32,
        )
    }

    /// Screen position of a waveform value at `phase`
    pub fn wave_point(&self, phase: f64, y: f64) -> Pos2 {
        Pos2::new(
            self.graph_origin.x + phase as f32 * self.radius,
            self.graph_origin.y - y as f32,
        )
    }

    /// X coordinate on the graph for a phase angle
    fn graph_x(&self, phase: f32) -> f32 {
        self.graph_origin.x + phase * self.radius
    }
}

/// Widget that renders an [`AnimationController`]
pub struct PolygonWaveView {
    pub settings: SceneSettings,
}

impl Default for PolygonWaveView {
    fn default() -> Self {
        Self::new()
    }
}

impl PolygonWaveView {
    pub fn new() -> Self {
        Self {
            settings: SceneSettings::default(),
        }
    }

    /// Draw the current frame into all available space
    pub fn show(&self, ui: &mut egui::Ui, controller: &AnimationController) -> egui::Response {
        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, self.settings.background);

        let layout = SceneLayout::fit(rect, controller.radius() as f32);

        self.draw_polygon(&painter, &layout, controller);
        self.draw_polygon_axes(&painter, &layout);
        let point = self.draw_moving_point(&painter, &layout, controller);
        self.draw_graph_axes(&painter, &layout);
        self.draw_wave(&painter, &layout, controller, point);

        response
    }

    fn draw_polygon(&self, painter: &egui::Painter, layout: &SceneLayout, controller: &AnimationController) {
        let points: Vec<Pos2> = controller
            .polygon()
            .vertices()
            .into_iter()
            .map(|v| layout.polygon_point(v))
            .collect();

        painter.add(egui::Shape::closed_line(
            points,
            Stroke::new(1.0, self.settings.foreground),
        ));
    }

    fn draw_polygon_axes(&self, painter: &egui::Painter, layout: &SceneLayout) {
        let c = layout.polygon_center;
        let reach = layout.radius + AXIS_MARGIN;
        let stroke = Stroke::new(1.0, self.settings.foreground);

        painter.line_segment([c - Vec2::X * reach, c + Vec2::X * reach], stroke);
        painter.line_segment([c - Vec2::Y * reach, c + Vec2::Y * reach], stroke);

        let r = layout.radius;
        self.label(painter, c + Vec2::new(r + 5.0, 5.0), Align2::LEFT_BOTTOM, "0");
        self.label(painter, c + Vec2::new(0.0, -r - 5.0), Align2::CENTER_BOTTOM, "π/2");
        self.label(painter, c + Vec2::new(-r - 5.0, 5.0), Align2::RIGHT_BOTTOM, "π");
        self.label(painter, c + Vec2::new(0.0, r + 5.0), Align2::CENTER_TOP, "3π/2");
    }

    /// Draw the point with its radius and projection lines
    ///
    /// Returns the point's screen position.
    fn draw_moving_point(
        &self,
        painter: &egui::Painter,
        layout: &SceneLayout,
        controller: &AnimationController,
    ) -> Pos2 {
        let point = layout.polygon_point(controller.current_point());
        let c = layout.polygon_center;

        painter.circle_filled(point, POINT_RADIUS, self.settings.point);
        painter.line_segment([c, point], Stroke::new(1.0, self.settings.radius_line));
        painter.line_segment(
            [point, Pos2::new(point.x, c.y)],
            Stroke::new(1.0, self.settings.projection),
        );

        point
    }

    fn draw_graph_axes(&self, painter: &egui::Painter, layout: &SceneLayout) {
        let o = layout.graph_origin;
        let stroke = Stroke::new(1.0, self.settings.foreground);

        let end_x = layout.graph_x(TAU) + GRAPH_INSET;
        painter.line_segment([o, Pos2::new(end_x, o.y)], stroke);

        let reach = layout.radius + AXIS_MARGIN;
        painter.line_segment([o - Vec2::Y * reach, o + Vec2::Y * reach], stroke);

        self.label(painter, o + Vec2::new(-5.0, 5.0), Align2::RIGHT_BOTTOM, "0");
        for (phase, text) in [
            (FRAC_PI_2, "π/2"),
            (PI, "π"),
            (3.0 * FRAC_PI_2, "3π/2"),
            (TAU, "2π"),
        ] {
            let pos = Pos2::new(layout.graph_x(phase), o.y + 3.0);
            self.label(painter, pos, Align2::CENTER_TOP, text);
        }
    }

    /// Plot the waveform and join it to the polygon point
    fn draw_wave(
        &self,
        painter: &egui::Painter,
        layout: &SceneLayout,
        controller: &AnimationController,
        point: Pos2,
    ) {
        for sample in controller.waveform_trace() {
            let pos = layout.wave_point(sample.phase, sample.y);
            painter.circle_filled(pos, WAVE_DOT_RADIUS, self.settings.wave);
        }

        let (_, y) = controller.current_point();
        let head = layout.wave_point(controller.phase(), y);
        let stroke = Stroke::new(1.0, self.settings.connector);

        painter.line_segment([point, head], stroke);
        painter.line_segment([head, Pos2::new(head.x, layout.graph_origin.y)], stroke);
    }

    fn label(&self, painter: &egui::Painter, pos: Pos2, anchor: Align2, text: &str) {
        painter.text(
            pos,
            anchor,
            text,
            FontId::proportional(12.0),
            self.settings.foreground,
        );
    }
}
