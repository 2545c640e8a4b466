//! Project file test suite

use crate::cart::MbcKind;
use crate::project::{Program, Project};

#[test]
fn programs_deserialize_from_json() {
    let json = r#"{
        "programs": {
            "crystal": {
                "image": "crystal.gbc",
                "symbol_files": ["crystal.sym"],
                "mbc": "MBC3",
                "bank": 1,
                "bank_switch_hook": "008C"
            }
        }
    }"#;

    let mut project: Project = serde_json::from_str(json).unwrap();
    let prog = project.program("crystal").unwrap();

    assert_eq!(prog.image(), Some("crystal.gbc"));
    assert_eq!(prog.iter_symbol_files().collect::<Vec<_>>(), vec!["crystal.sym"]);
    assert_eq!(prog.mbc(), Some(MbcKind::Mbc3));
    assert_eq!(prog.initial_bank(), Some(1));
    assert_eq!(prog.bank_switch_hook(), Some(0x008C));
    assert_eq!(prog.as_name(), Some("crystal"));
}

#[test]
fn omitted_fields_default() {
    let json = r#"{ "programs": { "bare": { "image": "bare.gb" } } }"#;
    let mut project: Project = serde_json::from_str(json).unwrap();
    let prog = project.program("bare").unwrap();

    assert_eq!(prog.mbc(), None);
    assert_eq!(prog.initial_bank(), None);
    assert_eq!(prog.bank_switch_hook(), None);
    assert_eq!(prog.iter_symbol_files().count(), 0);
}

#[test]
fn overrides_layer_argument_values_over_file_values() {
    let json = r#"{
        "programs": {
            "base": {
                "image": "base.gb",
                "bank": 2,
                "bank_switch_hook": "0200"
            },
            "args": {
                "bank": 5
            }
        }
    }"#;

    let mut project: Project = serde_json::from_str(json).unwrap();
    let file_prog = project.program("base").unwrap().clone();
    let arg_prog = project.program("args").unwrap().clone();

    let merged = file_prog.apply_override(&arg_prog);
    assert_eq!(merged.image(), Some("base.gb"));
    assert_eq!(merged.initial_bank(), Some(5));
    assert_eq!(merged.bank_switch_hook(), Some(0x0200));

    let untouched = file_prog.apply_override(&Program::default());
    assert_eq!(untouched.initial_bank(), Some(2));
}

#[test]
fn malformed_hook_addresses_parse_to_none() {
    let json = r#"{ "programs": { "p": { "bank_switch_hook": "not hex" } } }"#;
    let mut project: Project = serde_json::from_str(json).unwrap();

    assert_eq!(project.program("p").unwrap().bank_switch_hook(), None);
}
