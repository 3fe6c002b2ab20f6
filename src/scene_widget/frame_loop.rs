use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::SceneConfig;
use crate::error::InitError;
use crate::input::{process_input, InputAction, KeyState};
use crate::rendering::{parse_gl_version, Gpu, PolygonMode};

use super::SceneRenderer;

/// Anything that can hand over a current GL context.
pub trait WindowSystem {
    type Gpu: Gpu;

    /// The loaded GL functions, or `None` when no context could be made current
    fn gl(&self) -> Option<Arc<Self::Gpu>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Per-frame state around the renderer.
///
/// The host calls `poll_input` once per frame, then `render` once the frame
/// is being painted. A close request lets the current frame finish; the
/// loop is `Terminated` after that frame's render.
pub struct FrameLoop<G: Gpu> {
    renderer: SceneRenderer<G>,
    polygon_mode: PolygonMode,
    close_requested: bool,
    state: LoopState,
    framebuffer: Option<[u32; 2]>,
    frames: u64,
}

impl<G: Gpu> FrameLoop<G> {
    pub fn new(renderer: SceneRenderer<G>) -> Self {
        return Self {
            renderer,
            polygon_mode: PolygonMode::Fill,
            close_requested: false,
            state: LoopState::Running,
            framebuffer: None,
            frames: 0,
        };
    }

    pub fn poll_input(&mut self, keys: KeyState) -> Option<InputAction> {
        let action = process_input(keys);
        match action {
            Some(InputAction::RequestClose) => self.request_close(),
            Some(InputAction::SetPolygonMode(mode)) => {
                if mode != self.polygon_mode {
                    log::info!("polygon mode: {:?}", mode);
                }
                self.polygon_mode = mode;
            },
            None => {}
        }
        return action;
    }

    /// Also used when the window system asks to close
    pub fn request_close(&mut self) {
        if !self.close_requested {
            log::info!("close requested after {} frames", self.frames);
        }
        self.close_requested = true;
    }

    /// Tracks the framebuffer size in physical pixels
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.framebuffer != Some([width, height]) {
            log::debug!("framebuffer resized to {}x{}", width, height);
            self.framebuffer = Some([width, height]);
        }
    }

    pub fn render(&mut self) {
        if self.state == LoopState::Terminated {
            return;
        }
        self.renderer.draw(self.polygon_mode, self.framebuffer);
        self.frames += 1;
        if self.close_requested {
            self.state = LoopState::Terminated;
        }
    }

    pub fn close_requested(&self) -> bool {
        return self.close_requested;
    }
}

impl<G: Gpu> Drop for FrameLoop<G> {
    fn drop(&mut self) {
        log::info!("releasing scene after {} frames", self.frames);
    }
}

/// Locks the shared loop, recovering the guard if a previous holder panicked
pub fn lock_frame_loop<G: Gpu>(frame_loop: &Mutex<FrameLoop<G>>) -> MutexGuard<'_, FrameLoop<G>> {
    return frame_loop.lock().unwrap_or_else(|poisoned| {
        log::warn!("frame loop lock was poisoned, recovering");
        poisoned.into_inner()
    });
}

/// Checks the context and builds everything the frame loop needs.
///
/// Nothing touches the GPU before a context is available, and only the
/// version query runs before the version is accepted.
pub fn initialize<W: WindowSystem>(window: &W, config: &SceneConfig)
-> Result<FrameLoop<W::Gpu>, InitError> {
    let gl = window.gl().ok_or(InitError::Loader)?;
    let reported = gl.version_string();
    let (required_major, required_minor) = config.window.min_gl_version;
    match parse_gl_version(&reported) {
        Some(version) if version >= (required_major, required_minor) => {
            log::info!("OpenGL {}", reported);
        },
        _ => {
            return Err(InitError::UnsupportedVersion { reported, required_major, required_minor });
        }
    }
    let renderer = SceneRenderer::new(gl, config)?;
    return Ok(FrameLoop::new(renderer));
}
