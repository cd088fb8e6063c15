// src/progress.rs

/// Optional progress sink for the GUI status line.
/// Implement in the frontend; methods must return quickly.
pub trait Progress {
    fn begin(&mut self, _total: usize) {}
    fn log(&mut self, _msg: &str) {}
    fn item_done(&mut self, _ident: &str) {}
    fn finish(&mut self) {}
}

/// A no-op progress sink you can pass when you don't care.
pub struct NullProgress;
impl Progress for NullProgress {}
