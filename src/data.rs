use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use thiserror::Error as ThisError;

// compatibility default carried over from the original host contract
pub const DEFAULT_CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.4, 0.0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    KeyDown(Keycode),
    Other,
}

impl AppEvent {
    pub fn is_quit(self) -> bool {
        match self {
            AppEvent::Quit => true,
            AppEvent::KeyDown(key) => key == Keycode::Escape,
            AppEvent::Other => false,
        }
    }
}

pub(crate) fn classify(event: Event) -> AppEvent {
    match event {
        Event::Quit { .. } => AppEvent::Quit,
        Event::KeyDown {
            keycode: Some(key), ..
        } => AppEvent::KeyDown(key),
        _ => AppEvent::Other,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub(crate) fn gl_kind(self) -> gl::types::GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strictness {
    // fail fast: a broken compile stops before linking
    #[default]
    Strict,
    // legacy behavior: always link, always hand back the driver's program id
    Permissive,
}

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("sdl error: {0}")]
    Sdl(String),

    #[error("window error: {0}")]
    Window(String),

    #[error("opengl error: {0}")]
    OpenGl(String),

    #[error("{} shader source is not valid text", .stage.name())]
    ShaderSource {
        #[source]
        source: std::ffi::NulError,
        stage: ShaderStage,
    },

    #[error("{} shader failed to compile:\n{log}", .stage.name())]
    Compile { stage: ShaderStage, log: String },

    #[error("shader program failed to link:\n{log}")]
    Link { log: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    fn key_down(key: Keycode) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(key),
            scancode: None,
            keymod: Mod::empty(),
            repeat: false,
        }
    }

    #[test]
    fn quit_event_is_quit() {
        assert_eq!(classify(Event::Quit { timestamp: 0 }), AppEvent::Quit);
        assert!(classify(Event::Quit { timestamp: 0 }).is_quit());
    }

    #[test]
    fn escape_is_quit() {
        let event = classify(key_down(Keycode::Escape));
        assert_eq!(event, AppEvent::KeyDown(Keycode::Escape));
        assert!(event.is_quit());
    }

    #[test]
    fn other_keys_are_not_quit() {
        assert!(!classify(key_down(Keycode::Space)).is_quit());
        assert!(!classify(key_down(Keycode::Q)).is_quit());
    }

    #[test]
    fn mouse_motion_is_not_quit() {
        let event = Event::MouseMotion {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mousestate: sdl2::mouse::MouseState::from_sdl_state(0),
            x: 10,
            y: 10,
            xrel: 1,
            yrel: 1,
        };
        assert_eq!(classify(event), AppEvent::Other);
    }

    #[test]
    fn error_text_carries_the_log() {
        let err = Error::Compile {
            stage: ShaderStage::Vertex,
            log: "0:1(1): error: syntax error".into(),
        };
        let text = err.to_string();
        assert!(text.contains("vertex"));
        assert!(text.contains("syntax error"));
    }
}
