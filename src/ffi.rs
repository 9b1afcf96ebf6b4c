// flat export surface for managed hosts. handles are boxed App pointers:
// app_init hands one out (null on failure), app_exit consumes it.

use crate::app::{App, AppConfig};
use crate::data::Strictness;
use crate::shader::load_program;
use std::ffi::{CStr, c_char};
use std::ptr::null_mut;

#[unsafe(no_mangle)]
pub unsafe extern "C" fn app_init(title: *const c_char, width: i32, height: i32) -> *mut App {
    if title.is_null() || width <= 0 || height <= 0 {
        log::error!("app_init refused: null title or non-positive size");
        return null_mut();
    }

    let title = unsafe { CStr::from_ptr(title) }.to_string_lossy().into_owned();
    let config = AppConfig::new()
        .with_title(title)
        .with_size(width as u32, height as u32);

    match config.open() {
        Ok(app) => Box::into_raw(Box::new(app)),
        Err(e) => {
            log::error!("app_init failed: {e}");
            null_mut()
        }
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn app_exit(app: *mut App) -> i32 {
    if app.is_null() {
        return -1;
    }
    drop(unsafe { Box::from_raw(app) });
    0
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn app_clear_color(app: *const App) {
    if let Some(app) = unsafe { app.as_ref() } {
        app.clear_color();
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn app_swap(app: *const App) {
    if let Some(app) = unsafe { app.as_ref() } {
        app.swap();
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn app_should_quit(app: *mut App) -> i32 {
    match unsafe { app.as_mut() } {
        Some(app) => app.should_quit() as i32,
        None => 0,
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn shader_load(vertex: *const c_char, fragment: *const c_char) -> u32 {
    unsafe { load(vertex, fragment, Strictness::Strict) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn shader_load_permissive(
    vertex: *const c_char,
    fragment: *const c_char,
) -> u32 {
    unsafe { load(vertex, fragment, Strictness::Permissive) }
}

unsafe fn load(vertex: *const c_char, fragment: *const c_char, strictness: Strictness) -> u32 {
    if vertex.is_null() || fragment.is_null() {
        log::error!("shader_load refused: null source pointer");
        return 0;
    }

    let vertex = unsafe { CStr::from_ptr(vertex) }.to_string_lossy();
    let fragment = unsafe { CStr::from_ptr(fragment) }.to_string_lossy();

    match load_program(&vertex, &fragment, strictness) {
        Ok(program) => program.id(),
        Err(e) => {
            log::error!("shader_load failed: {e}");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::ptr::null;

    #[test]
    fn null_handles_are_refused() {
        unsafe {
            assert_eq!(app_exit(null_mut()), -1);
            assert_eq!(app_should_quit(null_mut()), 0);
            app_clear_color(null());
            app_swap(null());
        }
    }

    #[test]
    fn init_refuses_bad_arguments() {
        let title = CString::new("shell").unwrap();
        unsafe {
            assert!(app_init(null(), 640, 480).is_null());
            assert!(app_init(title.as_ptr(), 0, 480).is_null());
            assert!(app_init(title.as_ptr(), 640, -1).is_null());
        }
    }

    #[test]
    fn shader_load_refuses_null_sources() {
        let src = CString::new("void main() {}").unwrap();
        unsafe {
            assert_eq!(shader_load(null(), src.as_ptr()), 0);
            assert_eq!(shader_load(src.as_ptr(), null()), 0);
            assert_eq!(shader_load_permissive(null(), null()), 0);
        }
    }
}
