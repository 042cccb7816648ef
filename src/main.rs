//! polywave - Polygon Wave Animation
//!
//! A point travels around the boundary of a regular polygon while its
//! height is plotted against phase, giving a sine wave bent into the
//! shape of the polygon.
//!
//! Controls:
//! - Start/Stop the animation
//! - Number of sides (3 to 20)
//! - Tick delay in milliseconds (1 to 200)
//! - Background color
//! - `H` hides or shows the control bar

use std::time::{Duration, Instant};

use eframe::egui;

mod animation;
mod error;
mod geometry;
mod render;
mod settings;

use animation::{
    command_channel, AnimationController, CommandQueue, ControlCommand, ControlHandle, Ticker,
    MAX_SIDES, MAX_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS,
};
use geometry::MIN_SIDES;
use render::PolygonWaveView;
use settings::AppSettings;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting polywave");

    let settings = AppSettings::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 460.0])
            .with_title("Polygon Wave Animation"),
        ..Default::default()
    };

    eframe::run_native(
        "polywave",
        options,
        Box::new(move |_cc| Ok(Box::new(PolywaveApp::new(&settings)))),
    )
}

/// Main application state
pub struct PolywaveApp {
    pub controller: AnimationController,
    pub view: PolygonWaveView,
    pub show_controls: bool,

    ticker: Ticker,
    controls: ControlHandle,
    commands: CommandQueue,

    /// Preferences changed since the last save
    settings_dirty: bool,
}

impl PolywaveApp {
    fn new(settings: &AppSettings) -> Self {
        let (controls, commands) = command_channel();

        let mut app = Self {
            controller: AnimationController::new(),
            view: PolygonWaveView::new(),
            show_controls: true,
            ticker: Ticker::new(),
            controls,
            commands,
            settings_dirty: false,
        };
        settings.apply(&mut app);
        app
    }

    /// Bottom bar with the animation controls
    fn controls_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(self.controller.run_state().toggle_label()).clicked() {
                    self.controls.send(ControlCommand::Toggle);
                }

                ui.separator();

                ui.label("Sides:");
                let mut sides = self.controller.side_count();
                egui::ComboBox::from_id_salt("sides")
                    .selected_text(sides.to_string())
                    .show_ui(ui, |ui| {
                        for n in MIN_SIDES..=MAX_SIDES {
                            ui.selectable_value(&mut sides, n, n.to_string());
                        }
                    });
                if sides != self.controller.side_count() {
                    self.controls.send(ControlCommand::SetSides(sides));
                }

                ui.separator();

                let mut delay = self.controller.tick_interval();
                if ui
                    .add(
                        egui::Slider::new(&mut delay, MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS)
                            .text("Speed (delay ms)"),
                    )
                    .changed()
                {
                    self.controls.send(ControlCommand::SetTickInterval(delay));
                }

                ui.separator();

                ui.label("Background:");
                if ui
                    .color_edit_button_srgba(&mut self.view.settings.background)
                    .changed()
                {
                    self.settings_dirty = true;
                }
            });
        });
    }

    /// Run the ticks that fell due since the last frame
    fn tick(&mut self, ctx: &egui::Context) {
        if !self.controller.is_running() {
            self.ticker.reset();
            return;
        }

        let interval = Duration::from_millis(self.controller.tick_interval() as u64);
        for _ in 0..self.ticker.due_ticks(Instant::now(), interval) {
            self.controller.advance();
        }
        ctx.request_repaint();
    }

    /// Save preferences once the user lets go of the pointer
    fn save_if_dirty(&mut self, ctx: &egui::Context) {
        if self.settings_dirty && !ctx.input(|i| i.pointer.any_down()) {
            AppSettings::from_app(self).save();
            self.settings_dirty = false;
        }
    }
}

impl eframe::App for PolywaveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::H)) {
            self.show_controls = !self.show_controls;
            self.settings_dirty = true;
        }

        if self.show_controls {
            self.controls_panel(ctx);
        }

        let applied = self.commands.drain_into(&mut self.controller);
        if applied.iter().any(ControlCommand::changes_preferences) {
            self.settings_dirty = true;
        }

        self.tick(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.view.show(ui, &self.controller);
            });

        self.save_if_dirty(ctx);
    }
}
