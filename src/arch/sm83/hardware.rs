//! Hardware I/O register annotations
//!
//! Direct-addressed accesses into the `$FF00-$FFFF` page are annotated
//! with the name of the register they touch. This is a static lookup;
//! nothing about tracing depends on it.

use std::collections::HashMap;

lazy_static! {
    static ref IO_REGISTERS: HashMap<u16, &'static str> = [
        (0xFF01, "serial transfer data"),
        (0xFF02, "serial I/O control"),
        (0xFF04, "timer divider"),
        (0xFF05, "timer counter"),
        (0xFF06, "timer modulo"),
        (0xFF07, "timer control"),
        (0xFF0F, "interrupt flag"),
        (0xFF10, "NR10 audio sweep"),
        (0xFF11, "NR11 audio channel #1"),
        (0xFF12, "NR12 envelope channel #1"),
        (0xFF13, "NR13 sound frequency #1"),
        (0xFF14, "NR14 sound frequency #1"),
        (0xFF16, "NR21 audio channel #2"),
        (0xFF17, "NR22 envelope channel #2"),
        (0xFF18, "NR23 sound frequency #2"),
        (0xFF19, "NR24 sound frequency #2"),
        (0xFF1A, "NR30 audio channel #3"),
        (0xFF1B, "NR31 sound length #3"),
        (0xFF1C, "NR32 volume #3"),
        (0xFF1D, "NR33 sound frequency #3"),
        (0xFF1E, "NR34 sound frequency #3"),
        (0xFF20, "NR41 sound length #4"),
        (0xFF21, "NR42 envelope channel #4"),
        (0xFF22, "NR43 audio counter"),
        (0xFF23, "NR44 audio control"),
        (0xFF24, "NR50 channel control"),
        (0xFF25, "NR51 sound output"),
        (0xFF26, "NR52 sound on/off"),
        (0xFF3F, "sound sample ram"),
        (0xFF40, "lcd control"),
        (0xFF41, "lcd status"),
        (0xFF42, "scroll screen Y"),
        (0xFF43, "scroll screen X"),
        (0xFF44, "lcdc Y-coord"),
        (0xFF45, "LY compare"),
        (0xFF46, "DMA transfer"),
        (0xFF47, "bg palette data"),
        (0xFF48, "obj palette 0 data"),
        (0xFF49, "obj palette 1 data"),
        (0xFF4A, "window Y pos"),
        (0xFF4B, "window X pos"),
        (0xFF4D, "cpu speed select"),
        (0xFF4F, "vram bank select"),
        (0xFF51, "HBL general DMA 1"),
        (0xFF52, "HBL general DMA 2"),
        (0xFF53, "HBL general DMA 3"),
        (0xFF54, "HBL general DMA 4"),
        (0xFF55, "HBL general DMA 5"),
        (0xFF56, "infrared comms"),
        (0xFF68, "bg color index"),
        (0xFF69, "bg color data"),
        (0xFF6A, "obj color index"),
        (0xFF6B, "obj color data"),
        (0xFF70, "ram bank select"),
        (0xFFFF, "interrupt enable"),
    ]
    .iter()
    .copied()
    .collect();
}

/// Look up the annotation for a direct access to `addr`, if it names a
/// hardware register. The joypad port is the one register whose note
/// depends on access direction.
pub fn io_note(addr: u16, write: bool) -> Option<&'static str> {
    if addr == 0xFF00 {
        return Some(if write {
            "write joypad info"
        } else {
            "read joypad info"
        });
    }

    IO_REGISTERS.get(&addr).copied()
}
