use crate::data::{Error, ShaderStage, Strictness};
use gl::types::{GLint, GLsizei, GLuint};
use std::ffi::CString;
use std::ptr::null;

// linked program id. the driver owns the object; dropping this does not
// delete it, lifecycle stays with the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Program(GLuint);

impl Program {
    pub fn id(self) -> u32 {
        self.0
    }
}

struct CompiledStage {
    id: GLuint,
    ok: bool,
    log: String,
}

// requires a current gl context with loaded function pointers
pub fn load_program(
    vertex: &str,
    fragment: &str,
    strictness: Strictness,
) -> Result<Program, Error> {
    let vs = compile_stage(ShaderStage::Vertex, vertex)?;
    if strictness == Strictness::Strict && !vs.ok {
        unsafe { gl::DeleteShader(vs.id) };
        return Err(Error::Compile {
            stage: ShaderStage::Vertex,
            log: vs.log,
        });
    }

    let fs = match compile_stage(ShaderStage::Fragment, fragment) {
        Ok(fs) => fs,
        Err(e) => {
            unsafe { gl::DeleteShader(vs.id) };
            return Err(e);
        }
    };
    if strictness == Strictness::Strict && !fs.ok {
        unsafe {
            gl::DeleteShader(vs.id);
            gl::DeleteShader(fs.id);
        }
        return Err(Error::Compile {
            stage: ShaderStage::Fragment,
            log: fs.log,
        });
    }

    let program = unsafe { gl::CreateProgram() };
    unsafe {
        gl::AttachShader(program, vs.id);
        gl::AttachShader(program, fs.id);
        gl::LinkProgram(program);
    }

    let mut status = gl::FALSE as GLint;
    unsafe { gl::GetProgramiv(program, gl::LINK_STATUS, &mut status) };
    let log = program_info_log(program);
    report("program link", &log);

    // the program holds its own reference to the attached shaders
    unsafe {
        gl::DeleteShader(vs.id);
        gl::DeleteShader(fs.id);
    }

    if strictness == Strictness::Strict && status != gl::TRUE as GLint {
        unsafe { gl::DeleteProgram(program) };
        return Err(Error::Link { log });
    }

    Ok(Program(program))
}

fn compile_stage(stage: ShaderStage, source: &str) -> Result<CompiledStage, Error> {
    // reject interior nuls before touching the driver
    let source = CString::new(source).map_err(|source| Error::ShaderSource { source, stage })?;

    let id = unsafe { gl::CreateShader(stage.gl_kind()) };
    unsafe {
        gl::ShaderSource(id, 1, &source.as_ptr(), null());
        gl::CompileShader(id);
    }

    let mut status = gl::FALSE as GLint;
    unsafe { gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut status) };

    let log = shader_info_log(id);
    report(stage.name(), &log);

    Ok(CompiledStage {
        id,
        ok: status == gl::TRUE as GLint,
        log,
    })
}

fn report(what: &str, log: &str) {
    if !log.is_empty() {
        // stdout is the legacy diagnostic surface; keep it
        println!("{log}");
        log::warn!("{what} diagnostics:\n{log}");
    }
}

// info logs go into a buffer sized from the driver's reported length,
// scoped to this call
fn shader_info_log(shader: GLuint) -> String {
    let mut len: GLint = 0;
    unsafe { gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len) };
    if len <= 0 {
        return String::new();
    }

    let mut buf = vec![0u8; len as usize];
    let mut written: GLsizei = 0;
    unsafe { gl::GetShaderInfoLog(shader, len, &mut written, buf.as_mut_ptr().cast()) };
    buf.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&buf).into_owned()
}

fn program_info_log(program: GLuint) -> String {
    let mut len: GLint = 0;
    unsafe { gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len) };
    if len <= 0 {
        return String::new();
    }

    let mut buf = vec![0u8; len as usize];
    let mut written: GLsizei = 0;
    unsafe { gl::GetProgramInfoLog(program, len, &mut written, buf.as_mut_ptr().cast()) };
    buf.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&buf).into_owned()
}
