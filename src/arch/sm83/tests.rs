//! SM83 decoder test suite

use crate::analysis::{Effect, Flow, Reference, ReferenceKind};
use crate::arch::sm83::{decode, instruction_length};
use crate::cart::Cartridge;
use crate::memory::{BankedMemory, LinkerAddress};

/// Decode `$data` spliced in at `$0150` of a plain 32KB image.
fn dis(data: &[u8]) -> crate::analysis::Disasm {
    let cart = Cartridge::test_cart(0x00, 2, 0x150, data);
    let mem = BankedMemory::new(&cart);

    decode(&mem, 0x150)
}

macro_rules! assert_dis {
    ($data: expr, $text: expr) => {
        assert_eq!(dis(&$data).text(), $text)
    };
}

/// Every one-byte opcode (with a zeroed operand field) must decode to
/// non-empty text whose length agrees with the length table.
#[test]
fn lengths_match_decode_for_every_opcode() {
    for opcode in 0..=0xFFu8 {
        let decoded = dis(&[opcode, 0x00, 0x00]);

        assert!(
            !decoded.text().is_empty(),
            "opcode {:02X} rendered empty text",
            opcode
        );
        assert_eq!(
            decoded.length(),
            instruction_length(opcode),
            "opcode {:02X} length disagrees with the length table",
            opcode
        );
    }
}

/// The `$CB` page is complete: every extension opcode decodes as a 2-byte
/// instruction with non-empty text.
#[test]
fn cb_page_is_complete() {
    for subop in 0..=0xFFu8 {
        let decoded = dis(&[0xCB, subop]);

        assert!(!decoded.text().is_empty());
        assert_eq!(decoded.length(), 2);
        assert_eq!(decoded.flow(), Flow::Continuing);
        assert!(decoded.references().is_empty());
    }
}

#[test]
fn plain_instructions() {
    assert_dis!([0x00], "nop");
    assert_dis!([0x01, 0x34, 0x12], "ld bc, $1234");
    assert_dis!([0x06, 0x0F], "ld b, $0F");
    assert_dis!([0x08, 0x00, 0xC0], "ld [$C000], sp");
    assert_dis!([0x22], "ld [hli], a");
    assert_dis!([0x32], "ldd [hl], a");
    assert_dis!([0x36, 0x05], "ld [hl], $05");
    assert_dis!([0x76], "halt");
    assert_dis!([0x7F], "ld a, a");
    assert_dis!([0xAF], "xor a");
    assert_dis!([0xE2], "ld [c], a");
    assert_dis!([0xE8, 0xFE], "add sp, $FE");
    assert_dis!([0xE9], "jp [hl]");
    assert_dis!([0xF8, 0x02], "ld hl, sp+$02");
    assert_dis!([0xFA, 0x00, 0x80], "ld a, [$8000]");
    assert_dis!([0xFE, 0x90], "cp a, $90");
}

#[test]
fn relative_jumps_name_their_targets() {
    // From $0150, the next instruction is $0152.
    assert_dis!([0x18, 0x03], "jr Label155");
    assert_dis!([0x20, 0xFE], "jr nz, Label150");
    assert_dis!([0x28, 0x00], "jr z, Label152");
    assert_dis!([0x30, 0x10], "jr nc, Label162");
    assert_dis!([0x38, 0x80], "jr c, LabelD2");
}

#[test]
fn absolute_jumps_and_calls() {
    assert_dis!([0xC3, 0x50, 0x01], "jp Label150");
    assert_dis!([0xCD, 0x00, 0x40], "call Label4000");
    assert_dis!([0xDC, 0x23, 0x41], "call c, Label4123");
    assert_dis!(
        [0xC2, 0x00, 0xC0],
        "jp nz, LabelC000 ;Warning - RAM-only procedure"
    );
    assert_dis!(
        [0xCC, 0x00, 0xFF],
        "call z, LabelFF00 ;Warning - RAM-only procedure"
    );
}

#[test]
fn restart_vectors() {
    assert_dis!([0xC7], "rst Label0");
    assert_dis!([0xCF], "rst Label8");
    assert_dis!([0xD7], "rst Label10");
    assert_dis!([0xFF], "rst Label38");
}

#[test]
fn hardware_accesses_are_annotated() {
    assert_dis!([0xE0, 0x44], "ld [$FF44], a ;lcdc Y-coord");
    assert_dis!([0xE0, 0x00], "ld [$FF00], a ;write joypad info");
    assert_dis!([0xF0, 0x00], "ld a, [$FF00] ;read joypad info");
    assert_dis!([0xF0, 0x77], "ld a, [$FF77]");
    assert_dis!([0xEA, 0x00, 0x21], "ld [$2100], a ;bank switch");
    assert_dis!([0xEA, 0xFF, 0xFF], "ld [$FFFF], a ;interrupt enable");
    assert_dis!([0xEA, 0x23, 0xC1], "ld [$C123], a");
}

#[test]
fn unknown_opcodes_render_as_comments() {
    assert_dis!([0xD3], ";unknown opcode D3");
    assert_dis!([0xED], ";unknown opcode ED");
    assert_dis!([0xFD], ";unknown opcode FD");
    assert_dis!([0x10, 0x01], ";unknown opcode 10");
    assert_dis!([0x10, 0x00], "stop");
}

#[test]
fn flow_classification() {
    assert_eq!(dis(&[0xC9]).flow(), Flow::Returning);
    assert_eq!(dis(&[0xD9]).flow(), Flow::Returning);
    assert_eq!(dis(&[0xC0]).flow(), Flow::Continuing); // conditional ret
    assert_eq!(dis(&[0xC3, 0x00, 0x01]).flow(), Flow::Continuing);
    assert_eq!(dis(&[0xCD, 0x00, 0x01]).flow(), Flow::Continuing);
    assert_eq!(dis(&[0xD3]).flow(), Flow::Illegal);

    assert!(dis(&[0xC9]).flow().is_block_end());
    assert!(dis(&[0xD3]).flow().is_block_end());
    assert!(!dis(&[0x00]).flow().is_block_end());
}

#[test]
fn references_carry_kind_and_conditionality() {
    let jr = dis(&[0x18, 0x03]);
    assert_eq!(
        jr.references(),
        &[Reference::branch(LinkerAddress::new(0, 0x155), false)][..]
    );

    let call = dis(&[0xCD, 0x00, 0x40]);
    assert_eq!(
        call.references(),
        &[Reference::call(LinkerAddress::new(1, 0x4000), false)][..]
    );
    assert!(call.references()[0].is_hook_candidate());

    let cond_call = dis(&[0xC4, 0x00, 0x40]);
    assert_eq!(
        cond_call.references()[0].kind(),
        ReferenceKind::Call { conditional: true }
    );
    assert!(!cond_call.references()[0].is_hook_candidate());

    let rst = dis(&[0xEF]);
    assert_eq!(
        rst.references(),
        &[Reference::vector(LinkerAddress::new(0, 0x28))][..]
    );
    assert!(!rst.references()[0].wants_lazy_label());

    assert!(dis(&[0xE9]).references().is_empty()); // jp [hl] is unresolved
    assert!(dis(&[0x00]).references().is_empty());
}

#[test]
fn effects_track_the_bank_switch_idiom() {
    assert_eq!(dis(&[0x3E, 0x12]).effect(), Effect::LoadAccum(0x12));
    assert_eq!(dis(&[0xEA, 0x00, 0x21]).effect(), Effect::StoreAbs(0x2100));
    assert_eq!(dis(&[0xE0, 0x44]).effect(), Effect::StoreAbs(0xFF44));
    assert_eq!(dis(&[0x00]).effect(), Effect::None);
}
