//! Project configuration file representation

use crate::project::error::Result;
use crate::project::program::Program;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::{fs, io};

/// In-memory representation of the current project configuration.
///
/// Typically read from a file named `gbdisasm.json` next to the ROM being
/// worked on; it lists the programs the project knows how to disassemble.
#[derive(Serialize, Deserialize, Debug)]
pub struct Project {
    programs: HashMap<String, Program>,
}

impl Project {
    pub fn read(filename: &str) -> Result<Self> {
        let project_file = fs::File::open(filename)?;
        let mut project: Self = serde_json::from_reader(io::BufReader::new(project_file))?;

        for (name, prog) in project.programs.iter_mut() {
            if prog.as_name().is_none() {
                prog.set_name(name);
            }
        }

        Ok(project)
    }

    /// Get the program with the given name within the project.
    pub fn program(&mut self, name: &str) -> Option<&Program> {
        let prog = self.programs.get_mut(name);

        if let Some(prog) = prog {
            prog.set_name(name);

            return Some(prog);
        }

        None
    }

    /// Get the project's default program.
    pub fn default_program(&self) -> Option<(&String, &Program)> {
        self.programs.iter().next()
    }

    pub fn iter_programs(&self) -> impl Iterator<Item = (&str, &Program)> {
        self.programs.iter().map(|(k, v)| (k.as_str(), v))
    }
}
