use crate::data::{AppEvent, DEFAULT_CLEAR_COLOR, Error, classify};
use crate::opengl::GlVersion;
use bitflags::bitflags;
use raw_window_handle::{
    DisplayHandle, HandleError, HasDisplayHandle, HasWindowHandle, WindowHandle,
};
use sdl2::EventPump;
use sdl2::video::{GLContext, Window};
use std::ffi::c_void;

bitflags! {
    #[derive(Clone, Copy, Eq, PartialEq, Debug)]
    pub struct WindowFlags: u8 {
        const RESIZABLE = 1 << 0;
        const BORDERLESS = 1 << 1;
        const HIDDEN = 1 << 2;
        const FULLSCREEN = 1 << 3;
    }
}

pub struct AppConfig {
    pub title: String,
    pub size: (u32, u32),
    pub flags: WindowFlags,
    pub gl: GlVersion,
    pub clear_color: [f32; 4],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            size: (640, 480),
            flags: WindowFlags::RESIZABLE,
            gl: GlVersion::default(),
            clear_color: DEFAULT_CLEAR_COLOR,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self
        }
    }

    pub fn with_size(self, width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            ..self
        }
    }

    pub fn with_flags(self, flags: WindowFlags) -> Self {
        Self { flags, ..self }
    }

    pub fn with_gl(self, gl: GlVersion) -> Self {
        Self { gl, ..self }
    }

    pub fn with_clear_color(self, clear_color: [f32; 4]) -> Self {
        Self {
            clear_color,
            ..self
        }
    }

    pub fn open(self) -> Result<App, Error> {
        App::open(self)
    }
}

// window + context pair. field order matters: the context must go
// before the window it was created against.
pub struct App {
    clear_color: [f32; 4],
    _gl_context: GLContext,
    window: Window,
    events: EventPump,
}

impl App {
    pub fn open(config: AppConfig) -> Result<App, Error> {
        let (width, height) = config.size;
        if width == 0 || height == 0 {
            return Err(Error::Window(format!(
                "window size must be nonzero, got {width}x{height}"
            )));
        }

        let sdl = sdl2::init().map_err(Error::Sdl)?;
        let video = sdl.video().map_err(Error::Sdl)?;

        {
            let attr = video.gl_attr();
            let (profile, major, minor) = config.gl.as_sdl();
            attr.set_context_profile(profile);
            attr.set_context_version(major, minor);
        }

        let mut builder = video.window(&config.title, width, height);
        builder.opengl();
        if config.flags.contains(WindowFlags::RESIZABLE) {
            builder.resizable();
        }
        if config.flags.contains(WindowFlags::BORDERLESS) {
            builder.borderless();
        }
        if config.flags.contains(WindowFlags::HIDDEN) {
            builder.hidden();
        }
        if config.flags.contains(WindowFlags::FULLSCREEN) {
            builder.fullscreen();
        }
        let window = builder
            .build()
            .map_err(|e| Error::Window(e.to_string()))?;

        let gl_context = window.gl_create_context().map_err(Error::OpenGl)?;
        gl::load_with(|name| video.gl_get_proc_address(name) as *const c_void);

        let events = sdl.event_pump().map_err(Error::Sdl)?;

        log::debug!("opened {width}x{height} window, {:?} context", config.gl);

        Ok(App {
            clear_color: config.clear_color,
            _gl_context: gl_context,
            window,
            events,
        })
    }

    // sets the clear-color state on this app's own context
    pub fn clear_color(&self) {
        let [r, g, b, a] = self.clear_color;
        unsafe { gl::ClearColor(r, g, b, a) };
    }

    pub fn set_clear_color(&mut self, clear_color: [f32; 4]) {
        self.clear_color = clear_color;
    }

    pub fn swap(&self) {
        self.window.gl_swap_window();
    }

    // consumes at most one pending event; None means the queue was empty
    pub fn poll(&mut self) -> Option<AppEvent> {
        self.events.poll_event().map(classify)
    }

    pub fn drain(&mut self) -> Vec<AppEvent> {
        self.events.poll_iter().map(classify).collect()
    }

    // drains the whole queue so the caller can't fall behind it
    pub fn should_quit(&mut self) -> bool {
        let mut quit = false;
        for event in self.events.poll_iter() {
            quit |= classify(event).is_quit();
        }
        quit
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), Error> {
        self.window
            .set_title(title)
            .map_err(|e| Error::Window(e.to_string()))
    }

    pub fn size(&self) -> (u32, u32) {
        self.window.size()
    }

    pub fn window_handle(&self) -> Result<WindowHandle<'_>, HandleError> {
        self.window.window_handle()
    }

    pub fn display_handle(&self) -> Result<DisplayHandle<'_>, HandleError> {
        self.window.display_handle()
    }

    pub fn close(self) {
        drop(self);
    }
}
