//! Interop with RGBDS build artifacts

pub mod symfile;
