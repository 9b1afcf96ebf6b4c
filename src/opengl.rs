use sdl2::video::GLProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlVersion {
    Core(u8, u8),
    Compat(u8, u8),
    ES(u8, u8),
}

impl Default for GlVersion {
    fn default() -> Self {
        GlVersion::Core(3, 2)
    }
}

impl GlVersion {
    pub(crate) fn as_sdl(self) -> (GLProfile, u8, u8) {
        match self {
            GlVersion::Core(major, minor) => (GLProfile::Core, major, minor),
            GlVersion::Compat(major, minor) => (GLProfile::Compatibility, major, minor),
            GlVersion::ES(major, minor) => (GLProfile::GLES, major, minor),
        }
    }
}
