#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

use eframe;
use eframe::glow;

mod config;
mod error;
mod house;
mod input;
mod logging;
mod mesh;
mod rendering;
mod scene_widget;
mod triangle;

use config::SceneConfig;
use error::{InitError, INIT_FAILURE_CODE};
use input::KeyState;
use scene_widget::{lock_frame_loop, SharedFrameLoop};

struct AppState {
    frame_loop: Option<SharedFrameLoop>,
}

impl eframe::App for AppState {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let frame_loop = match &self.frame_loop {
            Some(frame_loop) => frame_loop,
            None => return,
        };
        let keys = KeyState::from_input(&ctx.input());
        let size = ctx.input().screen_rect().size() * ctx.pixels_per_point();
        {
            let mut frame_loop = lock_frame_loop(frame_loop);
            frame_loop.resize(size.x.round() as u32, size.y.round() as u32);
            frame_loop.poll_input(keys);
            if frame_loop.close_requested() {
                frame.close();
            }
        }
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                ui.add(scene_widget::scene_view(frame_loop));
            });
        // Redraw continuously rather than only on input
        ctx.request_repaint();
    }

    fn on_close_event(&mut self) -> bool {
        if let Some(frame_loop) = &self.frame_loop {
            lock_frame_loop(frame_loop).request_close();
        }
        return true;
    }

    fn on_exit(&mut self, _gl: Option<&glow::Context>) {
        // Last reference: dropping it deletes every program, buffer and vertex array
        self.frame_loop = None;
    }
}

impl AppState {
    fn new(cc: &eframe::CreationContext<'_>, config: &SceneConfig) -> Result<Self, InitError> {
        let frame_loop = scene_widget::initialize(cc, config)?;
        return Ok(Self {
            frame_loop: Some(Arc::new(Mutex::new(frame_loop)))
        });
    }
}

fn fail(error: &InitError) -> ! {
    log::error!("{}", error);
    std::process::exit(error.exit_code());
}

fn main() {
    logging::init_logging();

    let config = SceneConfig::default();
    let options = config.window.native_options();
    let title = config.window.title.clone();

    // eframe panics when it cannot create the window or context
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        eframe::run_native(
            &title,
            options,
            Box::new(move |cc| {
                let app: Box<dyn eframe::App> = match AppState::new(cc, &config) {
                    Ok(app) => Box::new(app),
                    Err(error) => fail(&error),
                };
                return app;
            })
        );
    }));
    if result.is_err() {
        log::error!("Failed to initialize the window");
        std::process::exit(INIT_FAILURE_CODE);
    }
    log::info!("exited cleanly");
}
