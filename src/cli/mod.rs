//! CLI commands

mod dis;
mod info;

pub use dis::dis;
pub use info::info;

use crate::project;
use clap::{App, Arg, ArgSettings, SubCommand};
use std::io;

pub fn main() -> io::Result<()> {
    let mut app = App::new("gbdisasm")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tracing disassembler for Game Boy ROM images");

    app = app.arg(
        Arg::with_name("project")
            .long("project")
            .value_name("gbdisasm.json")
            .takes_value(true)
            .help("The project file to load")
            .set(ArgSettings::Global),
    );
    app = app.arg(
        Arg::with_name("program")
            .long("program")
            .value_name("name")
            .takes_value(true)
            .help("Which program in the project file to analyze")
            .set(ArgSettings::Global),
    );
    app = project::Program::configure_app(app);

    app = app
        .subcommand(
            SubCommand::with_name("dis")
                .about("Trace and disassemble starting from an entry address")
                .arg(
                    Arg::with_name("start")
                        .value_name("BB:AAAA")
                        .required(true)
                        .help("Hexadecimal entry address, with an optional bank prefix"),
                ),
        )
        .subcommand(SubCommand::with_name("info").about("Print the parsed cartridge header"));

    let matches = app.get_matches();

    let project_filename = matches.value_of("project").unwrap_or("gbdisasm.json");
    let version = matches.value_of("program");
    let mut prog = project::Program::from_arg_matches(&matches);

    match project::Project::read(project_filename) {
        Ok(mut project) => {
            let file_prog = match version {
                Some(version) => {
                    let found = project.program(version).cloned();

                    if found.is_none() {
                        eprintln!("The specified program {} does not exist. Programs in this project:", version);

                        for (name, _) in project.iter_programs() {
                            eprintln!("  {}", name);
                        }
                    }

                    found
                }
                None => project.default_program().map(|(_, prog)| prog.clone()),
            };

            if let Some(file_prog) = file_prog {
                prog = file_prog.apply_override(&prog);
            }
        }
        // A project file is optional; everything can come from arguments.
        Err(project::Error::Io(ref e)) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => eprintln!("Cannot open project file, got error {}", e),
    }

    match matches.subcommand() {
        ("dis", Some(submatches)) => {
            let start_spec = submatches
                .value_of("start")
                .expect("start is a required argument");

            dis(&prog, start_spec)
        }
        ("info", _) => info(&prog),
        _ => {
            eprintln!("Please enter a command");

            Ok(())
        }
    }
}
