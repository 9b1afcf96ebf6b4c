use glshell::{AppConfig, Strictness, gl, load_program};
use std::ptr::null;

const VERTEX: &str = "#version 150
in vec2 position;
void main() { gl_Position = vec4(position, 0.0, 1.0); }
";

const FRAGMENT: &str = "#version 150
out vec4 color;
void main() { color = vec4(1.0, 0.5, 0.2, 1.0); }
";

fn main() {
    env_logger::init();

    let mut app = AppConfig::new()
        .with_title("glshell - triangle")
        .with_size(800, 600)
        .open()
        .expect("could not open a window");

    let program = load_program(VERTEX, FRAGMENT, Strictness::Strict)
        .expect("could not build the shader program");

    let vertices: [f32; 6] = [0.0, 0.5, 0.5, -0.5, -0.5, -0.5];
    let mut vao = 0;
    let mut vbo = 0;
    unsafe {
        gl::GenVertexArrays(1, &mut vao);
        gl::BindVertexArray(vao);

        gl::GenBuffers(1, &mut vbo);
        gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
        gl::BufferData(
            gl::ARRAY_BUFFER,
            size_of_val(&vertices) as gl::types::GLsizeiptr,
            vertices.as_ptr().cast(),
            gl::STATIC_DRAW,
        );

        let position = gl::GetAttribLocation(program.id(), c"position".as_ptr()) as u32;
        gl::EnableVertexAttribArray(position);
        gl::VertexAttribPointer(position, 2, gl::FLOAT, gl::FALSE, 0, null());
    }

    // escape or closing the window ends the loop
    while !app.should_quit() {
        app.clear_color();
        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT);
            gl::UseProgram(program.id());
            gl::BindVertexArray(vao);
            gl::DrawArrays(gl::TRIANGLES, 0, 3);
        }
        app.swap();
    }
}
