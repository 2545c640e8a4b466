#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate serde_plain;

mod analysis;
mod arch;
mod asm;
mod cart;
mod cli;
mod input;
mod memory;
mod project;

use std::io;

fn main() -> io::Result<()> {
    cli::main()
}
