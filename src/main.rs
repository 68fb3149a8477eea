//! Casteljau Viewer.
//!
//! Interaktive Visualisierung des De-Casteljau-Algorithmus mit egui:
//! Kontrollpunkte setzen, ziehen und den Parameter `t` live verändern.

use casteljau_viewer::{
    render, ui, AppController, AppIntent, AppState, RedrawMode, RenderScene, ViewerOptions,
};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Casteljau Viewer v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Casteljau Viewer"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Casteljau Viewer",
            options,
            Box::new(|_cc| Ok(Box::new(ViewerApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    toolbar: ui::ToolbarState,
    scheduler: render::FrameScheduler,
    /// Zuletzt gebaute Szene; wird nur bei neuer Zustands-Revision ersetzt
    scene: RenderScene,
    canvas_rect: egui::Rect,
}

impl ViewerApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ViewerOptions::config_path();
        let viewer_options = ViewerOptions::load_from_file(&config_path);
        let redraw_mode = viewer_options.redraw_mode;
        if redraw_mode == RedrawMode::Continuous {
            log::info!("Kontinuierliches Neuzeichnen aktiv");
        }

        Self {
            state: AppState::with_options(viewer_options),
            controller: AppController::new(),
            input: ui::InputState::new(),
            toolbar: ui::ToolbarState::new(),
            scheduler: render::FrameScheduler::new(redraw_mode),
            scene: RenderScene::default(),
            canvas_rect: egui::Rect::NOTHING,
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);
        self.process_events(events);

        // Zeichnen nach der Event-Verarbeitung: der Frame zeigt den neuen Zustand
        let revision = self.state.curve.revision();
        if self.scheduler.begin_frame(revision) {
            self.scene = self.controller.build_render_scene(&self.state);
        }
        self.paint_canvas(ctx);
        self.scheduler.frame_painted(revision);

        self.maybe_request_repaint(ctx);
    }
}

impl ViewerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state, &mut self.toolbar));
        ui::render_help_panel(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                self.canvas_rect = rect;
                events.extend(self.input.collect_canvas_events(ui, &response));
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// egui zeichnet immediate-mode: die Szene wird jeden Frame erneut
    /// ausgegeben, aber nur bei Zustandsänderung neu berechnet.
    fn paint_canvas(&self, ctx: &egui::Context) {
        let painter = ctx
            .layer_painter(egui::LayerId::background())
            .with_clip_rect(self.canvas_rect);
        let mut surface = render::EguiSurface::new(&painter, self.canvas_rect);
        render::paint_scene(&mut surface, &self.scene);
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context) {
        if self.scheduler.wants_frame() {
            ctx.request_repaint();
        }
    }
}
