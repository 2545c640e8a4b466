//! SM83 instruction decoding
//!
//! One arm per opcode, deliberately: operand encodings, lengths, and side
//! effects are irregular enough that a computed decoder would obscure the
//! table this is meant to be. `instruction_length` is the parallel length
//! table; the test suite holds the two in correspondence over the whole
//! opcode space.

use crate::analysis::{Disasm, Effect, Flow, Reference};
use crate::arch::sm83::hardware;
use crate::memory::{BankedMemory, LinkerAddress};

fn imm8(mem: &BankedMemory, at: u16) -> u8 {
    mem.read(at.wrapping_add(1))
}

fn imm16(mem: &BankedMemory, at: u16) -> u16 {
    let lo = u16::from(mem.read(at.wrapping_add(1)));
    let hi = u16::from(mem.read(at.wrapping_add(2)));

    (hi << 8) | lo
}

/// Target of a relative branch: the address after the 2-byte instruction
/// plus the signed displacement operand.
fn pcrel(mem: &BankedMemory, at: u16) -> u16 {
    let disp = imm8(mem, at) as i8;

    at.wrapping_add(2).wrapping_add(disp as u16)
}

fn ram_note(dest: u16) -> &'static str {
    if dest > 0x7FFF {
        " ;Warning - RAM-only procedure"
    } else {
        ""
    }
}

fn push_note(text: &mut String, note: Option<&'static str>) {
    if let Some(note) = note {
        text.push_str(" ;");
        text.push_str(note);
    }
}

/// Annotation for an absolute store: the MBC ROM-bank select window, or a
/// hardware register.
fn store_note(dest: u16) -> Option<&'static str> {
    if (0x2000..=0x2FFF).contains(&dest) {
        Some("bank switch")
    } else {
        hardware::io_note(dest, true)
    }
}

fn plain<T: Into<String>>(text: T, length: u16) -> Disasm {
    Disasm::new(text.into(), length, Flow::Continuing, vec![], Effect::None)
}

fn unknown(opcode: u8, length: u16) -> Disasm {
    Disasm::new(
        format!(";unknown opcode {:02X}", opcode),
        length,
        Flow::Illegal,
        vec![],
        Effect::None,
    )
}

fn relative_jump(mem: &BankedMemory, at: u16, cond: Option<&'static str>) -> Disasm {
    let dest = pcrel(mem, at);
    let target = LinkerAddress::new(mem.bank(), dest);
    let text = match cond {
        Some(cc) => format!("jr {}, Label{:X}", cc, target.rom_linear()),
        None => format!("jr Label{:X}", target.rom_linear()),
    };

    Disasm::new(
        text,
        2,
        Flow::Continuing,
        vec![Reference::branch(target, cond.is_some())],
        Effect::None,
    )
}

fn absolute_jump(mem: &BankedMemory, at: u16, cond: Option<&'static str>) -> Disasm {
    let dest = imm16(mem, at);
    let target = LinkerAddress::new(mem.bank(), dest);
    let text = match cond {
        Some(cc) => format!("jp {}, Label{:X}{}", cc, target.rom_linear(), ram_note(dest)),
        None => format!("jp Label{:X}{}", target.rom_linear(), ram_note(dest)),
    };

    Disasm::new(
        text,
        3,
        Flow::Continuing,
        vec![Reference::jump(target, cond.is_some())],
        Effect::None,
    )
}

fn subroutine_call(mem: &BankedMemory, at: u16, cond: Option<&'static str>) -> Disasm {
    let dest = imm16(mem, at);
    let target = LinkerAddress::new(mem.bank(), dest);
    let text = match cond {
        Some(cc) => format!(
            "call {}, Label{:X}{}",
            cc,
            target.rom_linear(),
            ram_note(dest)
        ),
        None => format!("call Label{:X}{}", target.rom_linear(), ram_note(dest)),
    };

    Disasm::new(
        text,
        3,
        Flow::Continuing,
        vec![Reference::call(target, cond.is_some())],
        Effect::None,
    )
}

fn restart(vector: u16) -> Disasm {
    Disasm::new(
        format!("rst Label{:X}", vector),
        1,
        Flow::Continuing,
        vec![Reference::vector(LinkerAddress::new(0, vector))],
        Effect::None,
    )
}

/// Decode the instruction at `at`, reading through the currently paged
/// window of `mem`.
///
/// Decoding never fails: bytes that are not a recognized encoding come
/// back as an `;unknown opcode` comment with `Flow::Illegal`, which the
/// tracer treats as a block end.
pub fn decode(mem: &BankedMemory, at: u16) -> Disasm {
    let opcode = mem.read(at);

    match opcode {
        0x00 => plain("nop", 1),
        0x01 => plain(format!("ld bc, ${:X}", imm16(mem, at)), 3),
        0x02 => plain("ld [bc], a", 1),
        0x03 => plain("inc bc", 1),
        0x04 => plain("inc b", 1),
        0x05 => plain("dec b", 1),
        0x06 => plain(format!("ld b, ${:02X}", imm8(mem, at)), 2),
        0x07 => plain("rlca", 1),
        0x08 => plain(format!("ld [${:X}], sp", imm16(mem, at)), 3),
        0x09 => plain("add hl, bc", 1),
        0x0A => plain("ld a, [bc]", 1),
        0x0B => plain("dec bc", 1),
        0x0C => plain("inc c", 1),
        0x0D => plain("dec c", 1),
        0x0E => plain(format!("ld c, ${:02X}", imm8(mem, at)), 2),
        0x0F => plain("rrca", 1),

        // stop is encoded as a two-byte instruction whose second byte must
        // be zero; anything else is not a valid encoding.
        0x10 => {
            if imm8(mem, at) == 0x00 {
                plain("stop", 2)
            } else {
                unknown(0x10, 2)
            }
        }
        0x11 => plain(format!("ld de, ${:X}", imm16(mem, at)), 3),
        0x12 => plain("ld [de], a", 1),
        0x13 => plain("inc de", 1),
        0x14 => plain("inc d", 1),
        0x15 => plain("dec d", 1),
        0x16 => plain(format!("ld d, ${:02X}", imm8(mem, at)), 2),
        0x17 => plain("rla", 1),
        0x18 => relative_jump(mem, at, None),
        0x19 => plain("add hl, de", 1),
        0x1A => plain("ld a, [de]", 1),
        0x1B => plain("dec de", 1),
        0x1C => plain("inc e", 1),
        0x1D => plain("dec e", 1),
        0x1E => plain(format!("ld e, ${:02X}", imm8(mem, at)), 2),
        0x1F => plain("rra", 1),

        0x20 => relative_jump(mem, at, Some("nz")),
        0x21 => plain(format!("ld hl, ${:X}", imm16(mem, at)), 3),
        0x22 => plain("ld [hli], a", 1),
        0x23 => plain("inc hl", 1),
        0x24 => plain("inc h", 1),
        0x25 => plain("dec h", 1),
        0x26 => plain(format!("ld h, ${:02X}", imm8(mem, at)), 2),
        0x27 => plain("daa", 1),
        0x28 => relative_jump(mem, at, Some("z")),
        0x29 => plain("add hl, hl", 1),
        0x2A => plain("ld a, [hli]", 1),
        0x2B => plain("dec hl", 1),
        0x2C => plain("inc l", 1),
        0x2D => plain("dec l", 1),
        0x2E => plain(format!("ld l, ${:02X}", imm8(mem, at)), 2),
        0x2F => plain("cpl", 1),

        0x30 => relative_jump(mem, at, Some("nc")),
        0x31 => plain(format!("ld sp, ${:X}", imm16(mem, at)), 3),
        0x32 => plain("ldd [hl], a", 1),
        0x33 => plain("inc sp", 1),
        0x34 => plain("inc [hl]", 1),
        0x35 => plain("dec [hl]", 1),
        0x36 => plain(format!("ld [hl], ${:02X}", imm8(mem, at)), 2),
        0x37 => plain("scf", 1),
        0x38 => relative_jump(mem, at, Some("c")),
        0x39 => plain("add hl, sp", 1),
        0x3A => plain("ldd a, [hl]", 1),
        0x3B => plain("dec sp", 1),
        0x3C => plain("inc a", 1),
        0x3D => plain("dec a", 1),

        // The one piece of register state this engine tracks: the
        // immediate is what a following MBC-register store or bank-switch
        // call will page in.
        0x3E => {
            let value = imm8(mem, at);

            Disasm::new(
                format!("ld a, ${:02X}", value),
                2,
                Flow::Continuing,
                vec![],
                Effect::LoadAccum(value),
            )
        }
        0x3F => plain("ccf", 1),

        0x40 => plain("ld b, b", 1),
        0x41 => plain("ld b, c", 1),
        0x42 => plain("ld b, d", 1),
        0x43 => plain("ld b, e", 1),
        0x44 => plain("ld b, h", 1),
        0x45 => plain("ld b, l", 1),
        0x46 => plain("ld b, [hl]", 1),
        0x47 => plain("ld b, a", 1),
        0x48 => plain("ld c, b", 1),
        0x49 => plain("ld c, c", 1),
        0x4A => plain("ld c, d", 1),
        0x4B => plain("ld c, e", 1),
        0x4C => plain("ld c, h", 1),
        0x4D => plain("ld c, l", 1),
        0x4E => plain("ld c, [hl]", 1),
        0x4F => plain("ld c, a", 1),

        0x50 => plain("ld d, b", 1),
        0x51 => plain("ld d, c", 1),
        0x52 => plain("ld d, d", 1),
        0x53 => plain("ld d, e", 1),
        0x54 => plain("ld d, h", 1),
        0x55 => plain("ld d, l", 1),
        0x56 => plain("ld d, [hl]", 1),
        0x57 => plain("ld d, a", 1),
        0x58 => plain("ld e, b", 1),
        0x59 => plain("ld e, c", 1),
        0x5A => plain("ld e, d", 1),
        0x5B => plain("ld e, e", 1),
        0x5C => plain("ld e, h", 1),
        0x5D => plain("ld e, l", 1),
        0x5E => plain("ld e, [hl]", 1),
        0x5F => plain("ld e, a", 1),

        0x60 => plain("ld h, b", 1),
        0x61 => plain("ld h, c", 1),
        0x62 => plain("ld h, d", 1),
        0x63 => plain("ld h, e", 1),
        0x64 => plain("ld h, h", 1),
        0x65 => plain("ld h, l", 1),
        0x66 => plain("ld h, [hl]", 1),
        0x67 => plain("ld h, a", 1),
        0x68 => plain("ld l, b", 1),
        0x69 => plain("ld l, c", 1),
        0x6A => plain("ld l, d", 1),
        0x6B => plain("ld l, e", 1),
        0x6C => plain("ld l, h", 1),
        0x6D => plain("ld l, l", 1),
        0x6E => plain("ld l, [hl]", 1),
        0x6F => plain("ld l, a", 1),

        0x70 => plain("ld [hl], b", 1),
        0x71 => plain("ld [hl], c", 1),
        0x72 => plain("ld [hl], d", 1),
        0x73 => plain("ld [hl], e", 1),
        0x74 => plain("ld [hl], h", 1),
        0x75 => plain("ld [hl], l", 1),
        0x76 => plain("halt", 1), //encoded where ld [hl], [hl] would sit
        0x77 => plain("ld [hl], a", 1),
        0x78 => plain("ld a, b", 1),
        0x79 => plain("ld a, c", 1),
        0x7A => plain("ld a, d", 1),
        0x7B => plain("ld a, e", 1),
        0x7C => plain("ld a, h", 1),
        0x7D => plain("ld a, l", 1),
        0x7E => plain("ld a, [hl]", 1),
        0x7F => plain("ld a, a", 1),

        0x80 => plain("add a, b", 1),
        0x81 => plain("add a, c", 1),
        0x82 => plain("add a, d", 1),
        0x83 => plain("add a, e", 1),
        0x84 => plain("add a, h", 1),
        0x85 => plain("add a, l", 1),
        0x86 => plain("add a, [hl]", 1),
        0x87 => plain("add a", 1),
        0x88 => plain("adc a, b", 1),
        0x89 => plain("adc a, c", 1),
        0x8A => plain("adc a, d", 1),
        0x8B => plain("adc a, e", 1),
        0x8C => plain("adc a, h", 1),
        0x8D => plain("adc a, l", 1),
        0x8E => plain("adc a, [hl]", 1),
        0x8F => plain("adc a", 1),

        0x90 => plain("sub a, b", 1),
        0x91 => plain("sub a, c", 1),
        0x92 => plain("sub a, d", 1),
        0x93 => plain("sub a, e", 1),
        0x94 => plain("sub a, h", 1),
        0x95 => plain("sub a, l", 1),
        0x96 => plain("sub a, [hl]", 1),
        0x97 => plain("sub a", 1),
        0x98 => plain("sbc a, b", 1),
        0x99 => plain("sbc a, c", 1),
        0x9A => plain("sbc a, d", 1),
        0x9B => plain("sbc a, e", 1),
        0x9C => plain("sbc a, h", 1),
        0x9D => plain("sbc a, l", 1),
        0x9E => plain("sbc a, [hl]", 1),
        0x9F => plain("sbc a", 1),

        0xA0 => plain("and a, b", 1),
        0xA1 => plain("and a, c", 1),
        0xA2 => plain("and a, d", 1),
        0xA3 => plain("and a, e", 1),
        0xA4 => plain("and a, h", 1),
        0xA5 => plain("and a, l", 1),
        0xA6 => plain("and a, [hl]", 1),
        0xA7 => plain("and a", 1),
        0xA8 => plain("xor a, b", 1),
        0xA9 => plain("xor a, c", 1),
        0xAA => plain("xor a, d", 1),
        0xAB => plain("xor a, e", 1),
        0xAC => plain("xor a, h", 1),
        0xAD => plain("xor a, l", 1),
        0xAE => plain("xor a, [hl]", 1),
        0xAF => plain("xor a", 1),

        0xB0 => plain("or a, b", 1),
        0xB1 => plain("or a, c", 1),
        0xB2 => plain("or a, d", 1),
        0xB3 => plain("or a, e", 1),
        0xB4 => plain("or a, h", 1),
        0xB5 => plain("or a, l", 1),
        0xB6 => plain("or a, [hl]", 1),
        0xB7 => plain("or a", 1),
        0xB8 => plain("cp a, b", 1),
        0xB9 => plain("cp a, c", 1),
        0xBA => plain("cp a, d", 1),
        0xBB => plain("cp a, e", 1),
        0xBC => plain("cp a, h", 1),
        0xBD => plain("cp a, l", 1),
        0xBE => plain("cp a, [hl]", 1),
        0xBF => plain("cp a", 1),

        0xC0 => plain("ret nz", 1),
        0xC1 => plain("pop bc", 1),
        0xC2 => absolute_jump(mem, at, Some("nz")),
        0xC3 => absolute_jump(mem, at, None),
        0xC4 => subroutine_call(mem, at, Some("nz")),
        0xC5 => plain("push bc", 1),
        0xC6 => plain(format!("add a, ${:02X}", imm8(mem, at)), 2),
        0xC7 => restart(0x00),
        0xC8 => plain("ret z", 1),
        0xC9 => Disasm::new("ret".to_string(), 1, Flow::Returning, vec![], Effect::None),
        0xCA => absolute_jump(mem, at, Some("z")),
        0xCB => plain(cb_mnemonic(imm8(mem, at)), 2),
        0xCC => subroutine_call(mem, at, Some("z")),
        0xCD => subroutine_call(mem, at, None),
        0xCE => plain(format!("adc a, ${:02X}", imm8(mem, at)), 2),
        0xCF => restart(0x08),

        0xD0 => plain("ret nc", 1),
        0xD1 => plain("pop de", 1),
        0xD2 => absolute_jump(mem, at, Some("nc")),
        0xD3 => unknown(0xD3, 1),
        0xD4 => subroutine_call(mem, at, Some("nc")),
        0xD5 => plain("push de", 1),
        0xD6 => plain(format!("sub a, ${:02X}", imm8(mem, at)), 2),
        0xD7 => restart(0x10),
        0xD8 => plain("ret c", 1),
        0xD9 => Disasm::new("reti".to_string(), 1, Flow::Returning, vec![], Effect::None),
        0xDA => absolute_jump(mem, at, Some("c")),
        0xDB => unknown(0xDB, 1),
        0xDC => subroutine_call(mem, at, Some("c")),
        0xDD => unknown(0xDD, 1),
        0xDE => plain(format!("sbc a, ${:02X}", imm8(mem, at)), 2),
        0xDF => restart(0x18),

        0xE0 => {
            let offset = imm8(mem, at);
            let dest = 0xFF00 | u16::from(offset);
            let mut text = format!("ld [$FF{:02X}], a", offset);
            push_note(&mut text, hardware::io_note(dest, true));

            Disasm::new(text, 2, Flow::Continuing, vec![], Effect::StoreAbs(dest))
        }
        0xE1 => plain("pop hl", 1),
        0xE2 => plain("ld [c], a", 1),
        0xE3 => unknown(0xE3, 1),
        0xE4 => unknown(0xE4, 1),
        0xE5 => plain("push hl", 1),
        0xE6 => plain(format!("and a, ${:02X}", imm8(mem, at)), 2),
        0xE7 => restart(0x20),
        0xE8 => plain(format!("add sp, ${:02X}", imm8(mem, at)), 2),

        // No statically known target; nothing to queue.
        0xE9 => plain("jp [hl]", 1),
        0xEA => {
            let dest = imm16(mem, at);
            let mut text = format!("ld [${:X}], a", dest);
            push_note(&mut text, store_note(dest));

            Disasm::new(text, 3, Flow::Continuing, vec![], Effect::StoreAbs(dest))
        }
        0xEB => unknown(0xEB, 1),
        0xEC => unknown(0xEC, 1),
        0xED => unknown(0xED, 1),
        0xEE => plain(format!("xor a, ${:02X}", imm8(mem, at)), 2),
        0xEF => restart(0x28),

        0xF0 => {
            let offset = imm8(mem, at);
            let dest = 0xFF00 | u16::from(offset);
            let mut text = format!("ld a, [$FF{:02X}]", offset);
            push_note(&mut text, hardware::io_note(dest, false));

            Disasm::new(text, 2, Flow::Continuing, vec![], Effect::None)
        }
        0xF1 => plain("pop af", 1),
        0xF2 => plain("ld a, [c]", 1),
        0xF3 => plain("di", 1),
        0xF4 => unknown(0xF4, 1),
        0xF5 => plain("push af", 1),
        0xF6 => plain(format!("or a, ${:02X}", imm8(mem, at)), 2),
        0xF7 => restart(0x30),
        0xF8 => plain(format!("ld hl, sp+${:02X}", imm8(mem, at)), 2),
        0xF9 => plain("ld sp, hl", 1),
        0xFA => plain(format!("ld a, [${:X}]", imm16(mem, at)), 3),
        0xFB => plain("ei", 1),
        0xFC => unknown(0xFC, 1),
        0xFD => unknown(0xFD, 1),
        0xFE => plain(format!("cp a, ${:02X}", imm8(mem, at)), 2),
        0xFF => restart(0x38),
    }
}

/// The `$CB`-prefixed page: rotates, shifts, swap, and single-bit
/// test/reset/set over each of the eight operands. None of these touch
/// control flow.
fn cb_mnemonic(subop: u8) -> &'static str {
    match subop {
        0x00 => "rlc b",
        0x01 => "rlc c",
        0x02 => "rlc d",
        0x03 => "rlc e",
        0x04 => "rlc h",
        0x05 => "rlc l",
        0x06 => "rlc [hl]",
        0x07 => "rlc a",
        0x08 => "rrc b",
        0x09 => "rrc c",
        0x0A => "rrc d",
        0x0B => "rrc e",
        0x0C => "rrc h",
        0x0D => "rrc l",
        0x0E => "rrc [hl]",
        0x0F => "rrc a",

        0x10 => "rl b",
        0x11 => "rl c",
        0x12 => "rl d",
        0x13 => "rl e",
        0x14 => "rl h",
        0x15 => "rl l",
        0x16 => "rl [hl]",
        0x17 => "rl a",
        0x18 => "rr b",
        0x19 => "rr c",
        0x1A => "rr d",
        0x1B => "rr e",
        0x1C => "rr h",
        0x1D => "rr l",
        0x1E => "rr [hl]",
        0x1F => "rr a",

        0x20 => "sla b",
        0x21 => "sla c",
        0x22 => "sla d",
        0x23 => "sla e",
        0x24 => "sla h",
        0x25 => "sla l",
        0x26 => "sla [hl]",
        0x27 => "sla a",
        0x28 => "sra b",
        0x29 => "sra c",
        0x2A => "sra d",
        0x2B => "sra e",
        0x2C => "sra h",
        0x2D => "sra l",
        0x2E => "sra [hl]",
        0x2F => "sra a",

        0x30 => "swap b",
        0x31 => "swap c",
        0x32 => "swap d",
        0x33 => "swap e",
        0x34 => "swap h",
        0x35 => "swap l",
        0x36 => "swap [hl]",
        0x37 => "swap a",
        0x38 => "srl b",
        0x39 => "srl c",
        0x3A => "srl d",
        0x3B => "srl e",
        0x3C => "srl h",
        0x3D => "srl l",
        0x3E => "srl [hl]",
        0x3F => "srl a",

        0x40 => "bit 0, b",
        0x41 => "bit 0, c",
        0x42 => "bit 0, d",
        0x43 => "bit 0, e",
        0x44 => "bit 0, h",
        0x45 => "bit 0, l",
        0x46 => "bit 0, [hl]",
        0x47 => "bit 0, a",
        0x48 => "bit 1, b",
        0x49 => "bit 1, c",
        0x4A => "bit 1, d",
        0x4B => "bit 1, e",
        0x4C => "bit 1, h",
        0x4D => "bit 1, l",
        0x4E => "bit 1, [hl]",
        0x4F => "bit 1, a",

        0x50 => "bit 2, b",
        0x51 => "bit 2, c",
        0x52 => "bit 2, d",
        0x53 => "bit 2, e",
        0x54 => "bit 2, h",
        0x55 => "bit 2, l",
        0x56 => "bit 2, [hl]",
        0x57 => "bit 2, a",
        0x58 => "bit 3, b",
        0x59 => "bit 3, c",
        0x5A => "bit 3, d",
        0x5B => "bit 3, e",
        0x5C => "bit 3, h",
        0x5D => "bit 3, l",
        0x5E => "bit 3, [hl]",
        0x5F => "bit 3, a",

        0x60 => "bit 4, b",
        0x61 => "bit 4, c",
        0x62 => "bit 4, d",
        0x63 => "bit 4, e",
        0x64 => "bit 4, h",
        0x65 => "bit 4, l",
        0x66 => "bit 4, [hl]",
        0x67 => "bit 4, a",
        0x68 => "bit 5, b",
        0x69 => "bit 5, c",
        0x6A => "bit 5, d",
        0x6B => "bit 5, e",
        0x6C => "bit 5, h",
        0x6D => "bit 5, l",
        0x6E => "bit 5, [hl]",
        0x6F => "bit 5, a",

        0x70 => "bit 6, b",
        0x71 => "bit 6, c",
        0x72 => "bit 6, d",
        0x73 => "bit 6, e",
        0x74 => "bit 6, h",
        0x75 => "bit 6, l",
        0x76 => "bit 6, [hl]",
        0x77 => "bit 6, a",
        0x78 => "bit 7, b",
        0x79 => "bit 7, c",
        0x7A => "bit 7, d",
        0x7B => "bit 7, e",
        0x7C => "bit 7, h",
        0x7D => "bit 7, l",
        0x7E => "bit 7, [hl]",
        0x7F => "bit 7, a",

        0x80 => "res 0, b",
        0x81 => "res 0, c",
        0x82 => "res 0, d",
        0x83 => "res 0, e",
        0x84 => "res 0, h",
        0x85 => "res 0, l",
        0x86 => "res 0, [hl]",
        0x87 => "res 0, a",
        0x88 => "res 1, b",
        0x89 => "res 1, c",
        0x8A => "res 1, d",
        0x8B => "res 1, e",
        0x8C => "res 1, h",
        0x8D => "res 1, l",
        0x8E => "res 1, [hl]",
        0x8F => "res 1, a",

        0x90 => "res 2, b",
        0x91 => "res 2, c",
        0x92 => "res 2, d",
        0x93 => "res 2, e",
        0x94 => "res 2, h",
        0x95 => "res 2, l",
        0x96 => "res 2, [hl]",
        0x97 => "res 2, a",
        0x98 => "res 3, b",
        0x99 => "res 3, c",
        0x9A => "res 3, d",
        0x9B => "res 3, e",
        0x9C => "res 3, h",
        0x9D => "res 3, l",
        0x9E => "res 3, [hl]",
        0x9F => "res 3, a",

        0xA0 => "res 4, b",
        0xA1 => "res 4, c",
        0xA2 => "res 4, d",
        0xA3 => "res 4, e",
        0xA4 => "res 4, h",
        0xA5 => "res 4, l",
        0xA6 => "res 4, [hl]",
        0xA7 => "res 4, a",
        0xA8 => "res 5, b",
        0xA9 => "res 5, c",
        0xAA => "res 5, d",
        0xAB => "res 5, e",
        0xAC => "res 5, h",
        0xAD => "res 5, l",
        0xAE => "res 5, [hl]",
        0xAF => "res 5, a",

        0xB0 => "res 6, b",
        0xB1 => "res 6, c",
        0xB2 => "res 6, d",
        0xB3 => "res 6, e",
        0xB4 => "res 6, h",
        0xB5 => "res 6, l",
        0xB6 => "res 6, [hl]",
        0xB7 => "res 6, a",
        0xB8 => "res 7, b",
        0xB9 => "res 7, c",
        0xBA => "res 7, d",
        0xBB => "res 7, e",
        0xBC => "res 7, h",
        0xBD => "res 7, l",
        0xBE => "res 7, [hl]",
        0xBF => "res 7, a",

        0xC0 => "set 0, b",
        0xC1 => "set 0, c",
        0xC2 => "set 0, d",
        0xC3 => "set 0, e",
        0xC4 => "set 0, h",
        0xC5 => "set 0, l",
        0xC6 => "set 0, [hl]",
        0xC7 => "set 0, a",
        0xC8 => "set 1, b",
        0xC9 => "set 1, c",
        0xCA => "set 1, d",
        0xCB => "set 1, e",
        0xCC => "set 1, h",
        0xCD => "set 1, l",
        0xCE => "set 1, [hl]",
        0xCF => "set 1, a",

        0xD0 => "set 2, b",
        0xD1 => "set 2, c",
        0xD2 => "set 2, d",
        0xD3 => "set 2, e",
        0xD4 => "set 2, h",
        0xD5 => "set 2, l",
        0xD6 => "set 2, [hl]",
        0xD7 => "set 2, a",
        0xD8 => "set 3, b",
        0xD9 => "set 3, c",
        0xDA => "set 3, d",
        0xDB => "set 3, e",
        0xDC => "set 3, h",
        0xDD => "set 3, l",
        0xDE => "set 3, [hl]",
        0xDF => "set 3, a",

        0xE0 => "set 4, b",
        0xE1 => "set 4, c",
        0xE2 => "set 4, d",
        0xE3 => "set 4, e",
        0xE4 => "set 4, h",
        0xE5 => "set 4, l",
        0xE6 => "set 4, [hl]",
        0xE7 => "set 4, a",
        0xE8 => "set 5, b",
        0xE9 => "set 5, c",
        0xEA => "set 5, d",
        0xEB => "set 5, e",
        0xEC => "set 5, h",
        0xED => "set 5, l",
        0xEE => "set 5, [hl]",
        0xEF => "set 5, a",

        0xF0 => "set 6, b",
        0xF1 => "set 6, c",
        0xF2 => "set 6, d",
        0xF3 => "set 6, e",
        0xF4 => "set 6, h",
        0xF5 => "set 6, l",
        0xF6 => "set 6, [hl]",
        0xF7 => "set 6, a",
        0xF8 => "set 7, b",
        0xF9 => "set 7, c",
        0xFA => "set 7, d",
        0xFB => "set 7, e",
        0xFC => "set 7, h",
        0xFD => "set 7, l",
        0xFE => "set 7, [hl]",
        0xFF => "set 7, a",
    }
}

/// Encoded length of the instruction starting with `opcode`, in bytes.
///
/// Kept as a table parallel to `decode`; the test suite asserts the two
/// agree for every opcode, so a new arm in one without the other fails
/// loudly instead of desynchronizing the trace.
pub fn instruction_length(opcode: u8) -> u16 {
    match opcode {
        0x01 | 0x08 | 0x11 | 0x21 | 0x31 => 3,
        0xC2 | 0xC3 | 0xC4 | 0xCA | 0xCC | 0xCD => 3,
        0xD2 | 0xD4 | 0xDA | 0xDC => 3,
        0xEA | 0xFA => 3,

        0x06 | 0x0E | 0x10 | 0x16 | 0x18 | 0x1E => 2,
        0x20 | 0x26 | 0x28 | 0x2E | 0x30 | 0x36 | 0x38 | 0x3E => 2,
        0xC6 | 0xCB | 0xCE | 0xD6 | 0xDE => 2,
        0xE0 | 0xE6 | 0xE8 | 0xEE => 2,
        0xF0 | 0xF6 | 0xF8 | 0xFE => 2,

        _ => 1,
    }
}
