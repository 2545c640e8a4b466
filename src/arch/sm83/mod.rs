//! The Z80 derivative created by SHARP for the Nintendo Game Boy

mod dis;
mod hardware;

pub use dis::{decode, instruction_length};

#[cfg(test)]
mod tests;
