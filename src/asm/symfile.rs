//! RGBDS symbol file import and name substitution
//!
//! A symbol file is a list of `BB:AAAA Name` lines. Applying one to a
//! finished listing is purely textual: every autogenerated `LabelXXXX`
//! whose ROM-linear address matches a symbol, and every literal `$AAAA`
//! operand matching its raw address, is replaced by the symbol's name.

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// One `bank:address -> name` mapping from a symbol file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    bank: u16,
    addr: u16,
    name: String,
}

impl Symbol {
    pub fn new(bank: u16, addr: u16, name: &str) -> Symbol {
        Symbol {
            bank,
            addr,
            name: name.to_string(),
        }
    }

    pub fn bank(&self) -> u16 {
        self.bank
    }

    pub fn addr(&self) -> u16 {
        self.addr
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ROM-linear address this symbol labels, matching how the tracer
    /// derives label names.
    pub fn rom_linear(&self) -> u32 {
        if self.addr > 0x7FFF {
            u32::from(self.addr)
        } else {
            let offset = if self.addr >= 0x4000 {
                self.addr - 0x4000
            } else {
                self.addr
            };

            u32::from(self.bank) * 0x4000 + u32::from(offset)
        }
    }
}

/// Read the symbols from an RGBDS symbol file. Comment lines, blank lines,
/// and anything that does not parse as `BB:AAAA Name` are skipped.
pub fn parse<R: BufRead>(reader: R) -> io::Result<Vec<Symbol>> {
    let mut symbols = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        let mut split = line.split_whitespace();
        let ptr_str = match split.next() {
            Some(s) => s,
            None => continue,
        };
        let name = match split.next() {
            Some(s) => s,
            None => continue,
        };

        let mut ptr_split = ptr_str.split(':');
        let bank = ptr_split
            .next()
            .and_then(|s| u16::from_str_radix(s, 16).ok());
        let addr = ptr_split
            .next()
            .and_then(|s| u16::from_str_radix(s, 16).ok());

        if let (Some(bank), Some(addr)) = (bank, addr) {
            symbols.push(Symbol::new(bank, addr, name));
        }
    }

    Ok(symbols)
}

pub fn parse_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Symbol>> {
    parse(io::BufReader::new(fs::File::open(path)?))
}

/// Replace every occurrence of `needle` in `haystack`, ASCII
/// case-insensitively, where the occurrence is not followed by another
/// alphanumeric character (so `$123` does not eat into `$1234`).
fn replace_symbol(haystack: &str, needle: &str, replacement: &str) -> String {
    let mut out = Vec::with_capacity(haystack.len());
    let hay = haystack.as_bytes();
    let ndl = needle.as_bytes();
    let mut i = 0;

    while i < hay.len() {
        let end = i + ndl.len();
        let matched = end <= hay.len()
            && hay[i..end].eq_ignore_ascii_case(ndl)
            && !hay.get(end).map_or(false, |b| b.is_ascii_alphanumeric());

        if matched {
            out.extend_from_slice(replacement.as_bytes());
            i = end;
        } else {
            out.push(hay[i]);
            i += 1;
        }
    }

    // Matches only ever start and end at ASCII needle bytes, so the result
    // is still valid UTF-8.
    String::from_utf8(out).expect("substitution preserved UTF-8")
}

/// Apply a symbol table to a rendered listing.
pub fn substitute(text: &str, symbols: &[Symbol]) -> String {
    let mut out = text.to_string();

    for symbol in symbols {
        let label = format!("Label{:X}", symbol.rom_linear());
        let operand = format!("${:X}", symbol.addr());

        out = replace_symbol(&out, &label, symbol.name());
        out = replace_symbol(&out, &operand, symbol.name());
    }

    out
}
