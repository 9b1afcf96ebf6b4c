mod app;
mod data;
pub mod ffi;
mod opengl;
mod shader;

pub use app::{App, AppConfig, WindowFlags};
pub use data::{AppEvent, DEFAULT_CLEAR_COLOR, Error, ShaderStage, Strictness};
pub use opengl::GlVersion;
pub use shader::{Program, load_program};

pub use sdl2::keyboard::Keycode;

// callers render through the same loaded function pointers
pub use gl;
