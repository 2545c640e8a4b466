//! High-level disassembly routine

use crate::analysis::Tracer;
use crate::asm::symfile;
use crate::cart::Cartridge;
use crate::input;
use crate::project::Program;
use std::io;

pub fn dis(prog: &Program, start_spec: &str) -> io::Result<()> {
    let image = prog.image().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "No image specified; pass --image or add one to the project file",
        )
    })?;

    let mut cart = Cartridge::from_file(image).map_err(io::Error::from)?;

    if let Some(mbc) = prog.mbc() {
        cart.set_mbc(mbc);
    }

    let (bank, start) = input::parse_start(start_spec).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "Given analysis address is not a valid hexadecimal location",
        )
    })?;

    let mut tracer = Tracer::new(&cart);
    tracer.set_initial_bank(bank.or_else(|| prog.initial_bank()).unwrap_or(0x01));

    if let Some(hook) = prog.bank_switch_hook() {
        tracer.set_bank_switch_hook(hook);
    }

    let mut text = tracer.run(start).render();

    for path in prog.iter_symbol_files() {
        match symfile::parse_file(path) {
            Ok(symbols) => text = symfile::substitute(&text, &symbols),
            Err(e) => eprintln!("Cannot read symbol file {}: {}", path, e),
        }
    }

    println!(";ROM {}", cart.title());
    println!("{}", text);

    Ok(())
}
