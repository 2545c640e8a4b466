//! The 64KB CPU-visible window over a cartridge image

use crate::cart::{Cartridge, MbcKind};

/// A 64KB addressable window over a cartridge: a fixed low region
/// (`$0000-$3FFF`, always bank 0) and a switchable high region
/// (`$4000-$7FFF`) repopulated by `page`.
///
/// Every read is implicitly qualified by the currently paged bank; callers
/// must page the correct bank before decoding anything in the switchable
/// window.
pub struct BankedMemory<'a> {
    cart: &'a Cartridge,
    mem: Vec<u8>,
    bank: u16,
}

impl<'a> BankedMemory<'a> {
    /// Load the low 32KB of the image, leaving bank 1 resident in the
    /// switchable window.
    pub fn new(cart: &'a Cartridge) -> Self {
        let mut mem = vec![0u8; 0x10000];

        for (i, cell) in mem.iter_mut().take(0x8000).enumerate() {
            *cell = cart.read_linear(i as u32);
        }

        BankedMemory {
            cart,
            mem,
            bank: 0x01,
        }
    }

    /// The bank number the switchable window is currently attributed to.
    pub fn bank(&self) -> u8 {
        self.bank as u8
    }

    /// Record a bank number without repopulating the window.
    ///
    /// Used when entering the fixed region, where the original hardware
    /// leaves the switchable window untouched.
    pub fn set_bank(&mut self, bank: u16) {
        self.bank = bank;
    }

    /// Page a ROM bank into the switchable window and return the bank that
    /// was actually selected.
    ///
    /// The request is clamped to the cartridge's bank count and then run
    /// through the mapper family's aliasing rules: MBC1 cannot select
    /// `$00`/`$20`/`$40`/`$60` (those writes land in the RAM-select
    /// register instead) and bumps to the next bank; MBC3 and unrecognized
    /// mappers alias bank 0 to bank 1; MBC2 and MBC5 take the value as-is.
    /// On a 32KB image paging is a no-op.
    pub fn page(&mut self, bank: u16) -> u16 {
        let mut bank = bank.min(self.cart.rom_banks());

        match self.cart.mbc() {
            MbcKind::Rom32k => {
                self.bank = bank;
                return bank;
            }
            MbcKind::Mbc1 => {
                if bank == 0x00 || bank == 0x20 || bank == 0x40 || bank == 0x60 {
                    bank += 1;
                }
            }
            MbcKind::Mbc2 | MbcKind::Mbc5 => {}
            MbcKind::Mbc3 | MbcKind::Unsupported => {
                if bank == 0x00 {
                    bank = 0x01;
                }
            }
        }

        self.bank = bank;
        let base = u32::from(bank) * 0x4000;

        for i in 0..0x4000u32 {
            self.mem[0x4000 + i as usize] = self.cart.read_linear(base + i);
        }

        bank
    }

    /// Read a byte from the CPU address space. Always succeeds; the window
    /// is a fixed 64KB.
    pub fn read(&self, addr: u16) -> u8 {
        self.mem[usize::from(addr)]
    }
}
