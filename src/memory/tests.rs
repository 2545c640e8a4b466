//! Banked memory test suite

use crate::cart::Cartridge;
use crate::memory::{BankedMemory, LinkerAddress};

/// Build a multi-bank cartridge where every byte of bank N reads as N.
fn numbered_banks(type_byte: u8, banks: u16) -> Cartridge {
    let mut data: Vec<u8> = (0..u32::from(banks) * 0x4000)
        .map(|i| (i / 0x4000) as u8)
        .collect();

    data[0x147] = type_byte;
    data[0x148] = match banks {
        2 => 0x00,
        4 => 0x01,
        8 => 0x02,
        16 => 0x03,
        32 => 0x04,
        _ => 0x05,
    };

    Cartridge::from_bytes(data).unwrap()
}

#[test]
fn fixed_region_is_bank_independent() {
    assert_eq!(LinkerAddress::new(0x05, 0x0123).bank(), 0x00);
    assert_eq!(LinkerAddress::new(0x00, 0x3FFF).bank(), 0x00);
    assert_eq!(LinkerAddress::new(0x02, 0x4000).bank(), 0x02);
    assert_eq!(LinkerAddress::new(0x02, 0x7FFF).bank(), 0x02);
    assert_eq!(LinkerAddress::new(0x03, 0x9000).bank(), 0x00);
}

#[test]
fn rom_linear_offsets() {
    assert_eq!(LinkerAddress::new(0x00, 0x0150).rom_linear(), 0x0150);
    assert_eq!(LinkerAddress::new(0x01, 0x4000).rom_linear(), 0x4000);
    assert_eq!(LinkerAddress::new(0x03, 0x4123).rom_linear(), 0xC123);
    assert_eq!(LinkerAddress::new(0x00, 0xC000).rom_linear(), 0xC000);
}

#[test]
fn linker_addresses_order_by_bank_then_addr() {
    let a = LinkerAddress::new(0x00, 0x3000);
    let b = LinkerAddress::new(0x01, 0x4000);
    let c = LinkerAddress::new(0x02, 0x4000);

    assert!(a < b);
    assert!(b < c);
}

#[test]
fn linker_address_formats_as_bank_colon_addr() {
    assert_eq!(format!("{}", LinkerAddress::new(0x03, 0x4F2A)), "03:4F2A");
}

#[test]
fn paging_loads_the_requested_bank() {
    let cart = numbered_banks(0x19, 8); // MBC5
    let mut mem = BankedMemory::new(&cart);

    assert_eq!(mem.read(0x0000), 0x00);
    assert_eq!(mem.read(0x4000), 0x01);

    assert_eq!(mem.page(0x05), 0x05);
    assert_eq!(mem.read(0x4000), 0x05);
    assert_eq!(mem.read(0x7FFF), 0x05);
    assert_eq!(mem.read(0x3FFF), 0x00);
}

#[test]
fn mbc3_aliases_bank_zero_to_one() {
    let cart = numbered_banks(0x11, 8); // MBC3
    let mut mem = BankedMemory::new(&cart);

    assert_eq!(mem.page(0x00), 0x01);
    assert_eq!(mem.read(0x4000), 0x01);
}

#[test]
fn unsupported_mapper_aliases_bank_zero_to_one() {
    let cart = numbered_banks(0xEA, 8); // unknown type byte
    let mut mem = BankedMemory::new(&cart);

    assert_eq!(mem.page(0x00), 0x01);
    assert_eq!(mem.read(0x4000), 0x01);
}

#[test]
fn mbc1_aliases_the_ram_select_values() {
    let cart = numbered_banks(0x01, 64); // MBC1, 1MB
    let mut mem = BankedMemory::new(&cart);

    assert_eq!(mem.page(0x20), 0x21);
    assert_eq!(mem.read(0x4000), 0x21);

    assert_eq!(mem.page(0x00), 0x01);
    assert_eq!(mem.read(0x4000), 0x01);
}

#[test]
fn mbc2_pages_bank_zero_verbatim() {
    let cart = numbered_banks(0x05, 8); // MBC2
    let mut mem = BankedMemory::new(&cart);

    assert_eq!(mem.page(0x00), 0x00);
    assert_eq!(mem.read(0x4000), 0x00);
}

#[test]
fn out_of_range_bank_requests_are_clamped() {
    let cart = numbered_banks(0x19, 8); // MBC5
    let mut mem = BankedMemory::new(&cart);

    assert_eq!(mem.page(0x40), 0x08);
}

#[test]
fn rom32k_paging_is_a_noop() {
    let cart = numbered_banks(0x00, 2);
    let mut mem = BankedMemory::new(&cart);

    assert_eq!(mem.read(0x4000), 0x01);
    mem.page(0x02);
    assert_eq!(mem.read(0x4000), 0x01);
}
