use std::sync::{Arc, Mutex};

use eframe::{egui_glow, glow};

mod frame_loop;
mod scene_state;
pub use frame_loop::{initialize, lock_frame_loop, FrameLoop, WindowSystem};
pub use scene_state::SceneRenderer;

pub type SharedFrameLoop = Arc<Mutex<FrameLoop<glow::Context>>>;

impl WindowSystem for eframe::CreationContext<'_> {
    type Gpu = glow::Context;

    fn gl(&self) -> Option<Arc<glow::Context>> {
        return self.gl.clone();
    }
}

/// Fills the available space with the house.
///
/// The scene is painted through a glow callback, so it renders inside egui's
/// paint pass on the same context and thread.
fn scene_ui(ui: &mut egui::Ui, frame_loop: &SharedFrameLoop) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());

    let frame_loop = frame_loop.clone();
    let cb = egui_glow::CallbackFn::new(move |_info, _painter| {
        lock_frame_loop(&frame_loop).render();
    });

    if ui.is_rect_visible(rect) {
        ui.painter().add(egui::PaintCallback {
            rect,
            callback: Arc::new(cb),
        });
    }
    return response;
}

pub fn scene_view(frame_loop: &SharedFrameLoop) -> impl egui::Widget + '_ {
    move |ui: &mut egui::Ui| scene_ui(ui, frame_loop)
}
