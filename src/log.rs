//! Console diagnostics. Browser builds write to `console`, native builds (tests)
//! fall back to stderr.

use std::fmt::Display;

pub fn error(context: &str, err: &dyn Display) {
    emit_error(&format!("{context}: {err}"));
}

pub fn debug(msg: &str) {
    emit_debug(msg);
}

#[cfg(target_arch = "wasm32")]
fn emit_error(line: &str) {
    web_sys::console::error_1(&line.into());
}

#[cfg(target_arch = "wasm32")]
fn emit_debug(line: &str) {
    web_sys::console::debug_1(&line.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn emit_error(line: &str) {
    eprintln!("[games-page] error: {line}");
}

#[cfg(not(target_arch = "wasm32"))]
fn emit_debug(line: &str) {
    eprintln!("[games-page] {line}");
}
