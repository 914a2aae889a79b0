use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use crate::clock::Frame;
use crate::config::AnimationConfig;
use crate::driver::{AnimationDriver, DriverError};
use crate::pulse::PulseState;
use crate::wave::{Point, WaveSampler};

const X_TICK_COUNT: usize = 10;
const Y_TICK_COUNT: usize = 5;
const TICK_LENGTH: f32 = 6.0;
const LABEL_GAP: f32 = 9.0;

pub struct WaveUI {
    driver: AnimationDriver,
    config: AnimationConfig,
    sampler: WaveSampler,
    curve: Vec<Point>,
    x_ticks: Vec<f64>,
    y_ticks: Vec<f64>,
    paused: bool,
}

impl WaveUI {
    pub fn new(driver: AnimationDriver, config: AnimationConfig) -> Self {
        let sampler = WaveSampler::new(&config);
        Self {
            driver,
            config,
            curve: sampler.curve(),
            x_ticks: sampler.x_scale().ticks(X_TICK_COUNT),
            y_ticks: sampler.y_scale().ticks(Y_TICK_COUNT),
            sampler,
            paused: false,
        }
    }

    pub fn update(&mut self, ctx: &egui::Context) {
        let frame = self.driver.frame();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical(|ui| {
                self.draw_header(ui, &frame);
                ui.add_space(10.0);
                self.draw_plot(ui, &frame);
            });
        });

        if !self.paused {
            ctx.request_repaint_after(self.config.timing.tick_period());
        }
    }

    pub fn shutdown(&mut self) -> Result<(), DriverError> {
        self.driver.shutdown()
    }

    fn draw_header(&mut self, ui: &mut egui::Ui, frame: &Frame) {
        ui.horizontal(|ui| {
            ui.heading("Sine Pulse");
            ui.add_space(10.0);
            let label = if self.paused { "Resume" } else { "Pause" };
            if ui.button(label).clicked() {
                let result = if self.paused {
                    self.driver.resume()
                } else {
                    self.driver.pause()
                };
                match result {
                    Ok(()) => self.paused = !self.paused,
                    Err(error) => tracing::warn!(%error, "failed to toggle animation"),
                }
            }
            ui.add_space(10.0);
            ui.label(format!("Position: {:>5.1}", frame.position));
            ui.label(format!("Amplitude: {:>6.3}", frame.amplitude));
            ui.label(match frame.pulse {
                PulseState::Idle => "Marker: idle",
                PulseState::Enlarged => "Marker: pulse",
            });
        });
    }

    fn draw_plot(&self, ui: &mut egui::Ui, frame: &Frame) {
        let layout = &self.config.layout;
        let (rect, _) = ui.allocate_exact_size(
            Vec2::new(layout.width as f32, layout.height as f32),
            Sense::hover(),
        );
        let painter = ui.painter();
        let to_screen = |point: Point| rect.min + Vec2::new(point.x as f32, point.y as f32);

        painter.rect_filled(rect, 0.0, Color32::WHITE);

        let curve: Vec<Pos2> = self.curve.iter().map(|point| to_screen(*point)).collect();
        painter.add(Shape::line(curve, Stroke::new(2.0, Color32::BLACK)));

        self.draw_axes(painter, rect);

        let marker = &self.config.marker;
        painter.circle_filled(
            to_screen(self.sampler.point_with(frame.position, frame.amplitude)),
            marker.point_radius as f32,
            Color32::BLUE,
        );
        painter.circle_filled(
            to_screen(self.sampler.target()),
            frame.marker_radius as f32,
            Color32::RED,
        );
    }

    fn draw_axes(&self, painter: &egui::Painter, rect: Rect) {
        let layout = &self.config.layout;
        let stroke = Stroke::new(1.0, Color32::BLACK);
        let font = FontId::proportional(10.0);
        let offset = |x: f64, y: f64| rect.min + Vec2::new(x as f32, y as f32);

        // X axis
        let axis_y = layout.height - layout.margin.bottom;
        let [x_start, x_end] = self.sampler.x_scale().range();
        painter.line_segment([offset(x_start, axis_y), offset(x_end, axis_y)], stroke);
        for &tick in &self.x_ticks {
            let base = offset(self.sampler.pixel_x(tick), axis_y);
            painter.line_segment([base, base + Vec2::new(0.0, TICK_LENGTH)], stroke);
            painter.text(
                base + Vec2::new(0.0, LABEL_GAP),
                Align2::CENTER_TOP,
                format!("{tick}"),
                font.clone(),
                Color32::BLACK,
            );
        }

        // Y axis
        let axis_x = layout.margin.left;
        let [y_start, y_end] = self.sampler.y_scale().range();
        painter.line_segment([offset(axis_x, y_start), offset(axis_x, y_end)], stroke);
        for &tick in &self.y_ticks {
            let base = offset(axis_x, self.sampler.pixel_y(tick));
            painter.line_segment([base, base - Vec2::new(TICK_LENGTH, 0.0)], stroke);
            painter.text(
                base - Vec2::new(LABEL_GAP, 0.0),
                Align2::RIGHT_CENTER,
                format!("{tick:.1}"),
                font.clone(),
                Color32::BLACK,
            );
        }
    }
}
