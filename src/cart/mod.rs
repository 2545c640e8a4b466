//! Cartridge image loading and header parsing

use std::path::Path;
use std::{fmt, fs, io, str};
use thiserror::Error;

/// Error type for cartridge loading.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying cause of error is I/O related
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Image ends before the cartridge header does.
    #[error("image is {0} bytes long, too short to contain a cartridge header")]
    TruncatedHeader(usize),
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        match err {
            Error::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidData, other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Enumeration of the memory bank controller families this engine can
/// model.
///
/// The family determines which bank numbers are legal in the switchable
/// window; everything else about the mappers (RAM banking, timers, rumble)
/// is irrelevant to static tracing and deliberately not modeled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MbcKind {
    /// Plain 32KB image, no mapper; paging is a no-op.
    Rom32k,
    Mbc1,
    Mbc2,
    Mbc3,
    Mbc5,
    /// Unrecognized mapper byte; treated like MBC3 for bank-0 aliasing.
    Unsupported,
}

impl MbcKind {
    /// Map the cartridge-type byte at `$0147` to a mapper family.
    pub fn from_type_byte(ty: u8) -> MbcKind {
        match ty {
            0x00 | 0x08 | 0x09 => MbcKind::Rom32k,
            0x01 | 0x02 | 0x03 | 0xFF => MbcKind::Mbc1,
            0x05 | 0x06 => MbcKind::Mbc2,
            0x0F | 0x10 | 0x11 | 0x12 | 0x13 => MbcKind::Mbc3,
            0x19 | 0x1A | 0x1B | 0x1C | 0x1D | 0x1E => MbcKind::Mbc5,
            _ => MbcKind::Unsupported,
        }
    }
}

impl fmt::Display for MbcKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MbcKind::Rom32k => "ROM32K",
            MbcKind::Mbc1 => "MBC1",
            MbcKind::Mbc2 => "MBC2",
            MbcKind::Mbc3 => "MBC3",
            MbcKind::Mbc5 => "MBC5",
            MbcKind::Unsupported => "Unsupported",
        };

        write!(f, "{}", name)
    }
}

impl str::FromStr for MbcKind {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "rom" | "rom32k" => Ok(MbcKind::Rom32k),
            "mbc1" => Ok(MbcKind::Mbc1),
            "mbc2" => Ok(MbcKind::Mbc2),
            "mbc3" => Ok(MbcKind::Mbc3),
            "mbc5" => Ok(MbcKind::Mbc5),
            "unsupported" => Ok(MbcKind::Unsupported),
            _ => Err(()),
        }
    }
}

derive_deserialize_from_str!(MbcKind, "valid mapper name");
derive_serialize_from_display!(MbcKind);

/// A loaded program ROM image plus the metadata derived from its header.
///
/// The image is immutable for the lifetime of a disassembly session; all
/// reads go through `BankedMemory`, which views it through the Game Boy's
/// fixed-plus-switchable window scheme.
pub struct Cartridge {
    data: Vec<u8>,
    title: String,
    mbc: MbcKind,
    rom_size: u32,
    rom_banks: u16,
    ram_size: u32,
    ram_banks: u16,
}

impl Cartridge {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        if data.len() < 0x150 {
            return Err(Error::TruncatedHeader(data.len()));
        }

        let title = data[0x134..0x143]
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| char::from(b))
            .collect();

        let mbc = MbcKind::from_type_byte(data[0x147]);

        let (rom_size, rom_banks) = match data[0x148] {
            0x00 => (32 * 1024, 2),
            0x01 => (64 * 1024, 4),
            0x02 => (128 * 1024, 8),
            0x03 => (256 * 1024, 16),
            0x04 => (512 * 1024, 32),
            0x05 => (1024 * 1024, 64),
            0x06 => (2048 * 1024, 128),
            0x07 => (4096 * 1024, 256),
            0x52 => (1152 * 1024, 72),
            0x53 => (1280 * 1024, 80),
            0x54 => (1536 * 1024, 96),
            _ => (data.len() as u32, (data.len() / 0x4000).max(2) as u16),
        };

        let (ram_size, ram_banks) = match data[0x149] {
            0x01 => (2 * 1024, 1),
            0x02 => (8 * 1024, 1),
            0x03 => (32 * 1024, 4),
            0x04 => (128 * 1024, 16),
            0x05 => (64 * 1024, 8),
            _ => (0, 0),
        };

        Ok(Cartridge {
            data,
            title,
            mbc,
            rom_size,
            rom_banks,
            ram_size,
            ram_banks,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_bytes(fs::read(path)?)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn mbc(&self) -> MbcKind {
        self.mbc
    }

    /// Force a mapper family, overriding header detection.
    pub fn set_mbc(&mut self, mbc: MbcKind) {
        self.mbc = mbc;
    }

    pub fn rom_size(&self) -> u32 {
        self.rom_size
    }

    pub fn rom_banks(&self) -> u16 {
        self.rom_banks
    }

    pub fn ram_size(&self) -> u32 {
        self.ram_size
    }

    pub fn ram_banks(&self) -> u16 {
        self.ram_banks
    }

    /// Read a byte at an absolute image offset.
    ///
    /// Offsets past the end of the image read as open bus.
    pub fn read_linear(&self, offset: u32) -> u8 {
        self.data.get(offset as usize).copied().unwrap_or(0xFF)
    }

    /// Construct a synthetic cartridge for tests: `banks` 16KB banks of
    /// `0x00`, with the given mapper type byte and `code` spliced in at the
    /// absolute offset `at`.
    #[cfg(test)]
    pub fn test_cart(type_byte: u8, banks: u16, at: u32, code: &[u8]) -> Self {
        let mut data = vec![0u8; usize::from(banks) * 0x4000];
        data[0x147] = type_byte;
        data[0x148] = match banks {
            2 => 0x00,
            4 => 0x01,
            8 => 0x02,
            16 => 0x03,
            32 => 0x04,
            _ => 0x05,
        };
        data[at as usize..at as usize + code.len()].copy_from_slice(code);

        Self::from_bytes(data).expect("test cartridge must parse")
    }
}
