//! Cartridge header inspection

use crate::cart::Cartridge;
use crate::project::Program;
use std::io;

pub fn info(prog: &Program) -> io::Result<()> {
    let image = prog.image().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "No image specified; pass --image or add one to the project file",
        )
    })?;

    let cart = Cartridge::from_file(image).map_err(io::Error::from)?;

    println!("title:    {}", cart.title());
    println!("mapper:   {}", cart.mbc());
    println!(
        "rom size: {} bytes ({} banks)",
        cart.rom_size(),
        cart.rom_banks()
    );
    println!(
        "ram size: {} bytes ({} banks)",
        cart.ram_size(),
        cart.ram_banks()
    );

    Ok(())
}
