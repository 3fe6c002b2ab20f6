use std::collections::BTreeMap;

use crate::house::{self, ProgramId};
use crate::rendering::Rgba;

/// Vertex and fragment source for one program
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramSource {
    pub vertex: String,
    pub fragment: String,
}

/// Program id to sources, built once at startup
pub type ShaderTable = BTreeMap<ProgramId, ProgramSource>;

/// What to do with a program that fails to link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderPolicy {
    /// Abort startup
    FailFast,
    /// Report the log and draw with the broken program anyway
    FailOpen,
}

impl Default for ShaderPolicy {
    /// `FailFast`, unless built with the `fail-open-shaders` feature
    fn default() -> Self {
        if cfg!(feature = "fail-open-shaders") {
            return ShaderPolicy::FailOpen;
        }
        return ShaderPolicy::FailFast;
    }
}

#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    /// Oldest acceptable context as (major, minor)
    pub min_gl_version: (u32, u32),
}

impl Default for WindowConfig {
    fn default() -> Self {
        return Self {
            title: String::from("my home 🥺"),
            width: 800.,
            height: 600.,
            min_gl_version: (3, 3),
        };
    }
}

impl WindowConfig {
    pub fn native_options(&self) -> eframe::NativeOptions {
        let mut options = eframe::NativeOptions::default();
        options.initial_window_size = Some(egui::vec2(self.width, self.height));
        return options;
    }
}

#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub window: WindowConfig,
    pub background: Rgba,
    pub shaders: ShaderTable,
    pub shader_policy: ShaderPolicy,
}

impl Default for SceneConfig {
    fn default() -> Self {
        return Self {
            window: WindowConfig::default(),
            background: house::background(),
            shaders: house::shader_table(),
            shader_policy: ShaderPolicy::default(),
        };
    }
}
