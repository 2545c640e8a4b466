//! Per-program configuration

use crate::cart::MbcKind;
use clap::{App, Arg, ArgMatches, ArgSettings};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Everything needed to disassemble one program: the image to load and the
/// knobs the engine exposes (initial bank, bank-switch hook, mapper
/// override, symbol files for the substitution pass).
///
/// A `Program` can come from the project file, from command-line
/// arguments, or from one merged over the other via `apply_override`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    image: Option<String>,

    #[serde(default)]
    symbol_files: Vec<String>,

    #[serde(default)]
    mbc: Option<MbcKind>,

    #[serde(default)]
    bank: Option<u16>,

    /// Hexadecimal address of the game's bank-switch routine, e.g. "08F3".
    #[serde(default)]
    bank_switch_hook: Option<String>,

    #[serde(skip)]
    name: Option<String>,
}

impl Program {
    pub fn configure_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.arg(
            Arg::with_name("image")
                .long("image")
                .value_name("rom.gb")
                .help("The ROM image file to analyze.")
                .takes_value(true)
                .set(ArgSettings::Global),
        )
        .arg(
            Arg::with_name("mbc")
                .long("mbc")
                .value_name("MBC")
                .help("Override mapper detection (rom32k, mbc1, mbc2, mbc3, mbc5).")
                .takes_value(true)
                .set(ArgSettings::Global),
        )
        .arg(
            Arg::with_name("bank")
                .long("bank")
                .value_name("N")
                .help("Bank to page into the switchable window before tracing.")
                .takes_value(true)
                .set(ArgSettings::Global),
        )
        .arg(
            Arg::with_name("hook")
                .long("hook")
                .value_name("ADDR")
                .help("Hexadecimal address of the game's bank-switch routine.")
                .takes_value(true)
                .set(ArgSettings::Global),
        )
        .arg(
            Arg::with_name("symfile")
                .long("symfile")
                .value_name("rom.sym")
                .help("Symbol file(s) whose names replace generated labels.")
                .takes_value(true)
                .multiple(true)
                .set(ArgSettings::Global),
        )
    }

    /// Construct a Program from clap ArgMatches
    pub fn from_arg_matches(args: &ArgMatches) -> Program {
        Program {
            image: args.value_of("image").map(|s| s.to_string()),
            symbol_files: args
                .values_of("symfile")
                .map_or(Vec::new(), |v| v.map(|s| s.to_string()).collect()),
            mbc: args.value_of("mbc").and_then(|s| MbcKind::from_str(s).ok()),
            bank: args.value_of("bank").and_then(|s| s.parse().ok()),
            bank_switch_hook: args.value_of("hook").map(|s| s.to_string()),
            name: None,
        }
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn iter_symbol_files(&self) -> impl Iterator<Item = &str> {
        self.symbol_files.iter().map(|s| s.as_ref())
    }

    pub fn mbc(&self) -> Option<MbcKind> {
        self.mbc
    }

    pub fn initial_bank(&self) -> Option<u16> {
        self.bank
    }

    /// The configured bank-switch routine address, if present and
    /// parseable as hexadecimal.
    pub fn bank_switch_hook(&self) -> Option<u16> {
        self.bank_switch_hook
            .as_ref()
            .and_then(|s| u16::from_str_radix(s.trim_start_matches("0x"), 16).ok())
    }

    pub fn as_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = Some(name.to_string());
    }

    /// Layer `other` (usually command-line arguments) over this program's
    /// settings.
    pub fn apply_override(&self, other: &Program) -> Program {
        Program {
            image: other.image.clone().or_else(|| self.image.clone()),
            symbol_files: match other.symbol_files.len() {
                0 => self.symbol_files.clone(),
                _ => other.symbol_files.clone(),
            },
            mbc: other.mbc.or(self.mbc),
            bank: other.bank.or(self.bank),
            bank_switch_hook: other
                .bank_switch_hook
                .clone()
                .or_else(|| self.bank_switch_hook.clone()),
            name: other.name.clone().or_else(|| self.name.clone()),
        }
    }
}
