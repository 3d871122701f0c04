// Utils compartidos

pub mod chart_ffi;
pub mod constants;
pub mod download;
pub mod storage;

pub use constants::*;
