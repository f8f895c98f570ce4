//! Task files: plain text documents split into sections by upper-case headers, each section body is JSON.
//!
//! ```text
//! Comment lines before the first header are ignored
//! PARAMETERS
//! { "Db": 0.1, "Dwi": 0.1, ... }
//! INITIAL
//! { "Tg0": 1100.0 }
//! ```
//! PARAMETERS is mandatory and deserializes into `BFBConfig`; INITIAL is optional and deserializes into
//! `InitialConditions` (missing fields take their defaults).
use crate::GasPhase::gas_phase_error::GasPhaseError;
use crate::Setup::bfb_params::{BFBConfig, BFBParams};
use crate::Setup::initial_conditions::InitialConditions;
use log::{error, info, warn};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const PARAMETERS_HEADER: &str = "PARAMETERS";
pub const INITIAL_HEADER: &str = "INITIAL";

fn is_header(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_uppercase() || c == '_')
}

/// JSON body under `header` or None if the document has no such header
pub fn load_section_from_lines(lines: &[String], header: &str) -> Result<Option<Value>, GasPhaseError> {
    let start_index = match lines
        .iter()
        .position(|line| line.trim().to_uppercase() == header)
    {
        Some(i) => i + 1,
        None => return Ok(None),
    };
    // the section ends at the next header or at the end of the document
    let end_index = lines[start_index..]
        .iter()
        .position(|line| is_header(line))
        .map_or(lines.len(), |offset| start_index + offset);

    let section = lines[start_index..end_index].join("\n");
    match serde_json::from_str::<Value>(&section) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            let actual_line = start_index + e.line();
            error!(
                "Error parsing {} section at line {}, column {} (line {} in document): {}",
                header,
                e.line(),
                e.column(),
                actual_line,
                e
            );
            if actual_line >= 1 && actual_line <= lines.len() {
                error!("Problematic line: {}", lines[actual_line - 1]);
            }
            Err(GasPhaseError::Serde(e))
        }
    }
}

pub fn load_section_from_str(content: &str, header: &str) -> Result<Option<Value>, GasPhaseError> {
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    load_section_from_lines(&lines, header)
}

pub fn load_section_from_file(file_name: &str, header: &str) -> Result<Option<Value>, GasPhaseError> {
    let file = File::open(Path::new(file_name))?;
    let reader = BufReader::new(file);
    let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
    load_section_from_lines(&lines, header)
}

/// parameters and start-up fields of one gasifier run
#[derive(Debug, Clone)]
pub struct BFBTask {
    pub params: BFBParams,
    pub initial: InitialConditions,
}

impl BFBTask {
    pub fn from_content(content: &str) -> Result<Self, GasPhaseError> {
        let parameters = load_section_from_str(content, PARAMETERS_HEADER)?;
        let initial = load_section_from_str(content, INITIAL_HEADER)?;
        Self::from_sections(parameters, initial)
    }

    pub fn from_file(file_name: &str) -> Result<Self, GasPhaseError> {
        info!("loading task file '{}'", file_name);
        let parameters = load_section_from_file(file_name, PARAMETERS_HEADER)?;
        let initial = load_section_from_file(file_name, INITIAL_HEADER)?;
        Self::from_sections(parameters, initial)
    }

    fn from_sections(parameters: Option<Value>, initial: Option<Value>) -> Result<Self, GasPhaseError> {
        let parameters = parameters.ok_or_else(|| {
            GasPhaseError::MissingData(format!("no {} section in task", PARAMETERS_HEADER))
        })?;
        let config: BFBConfig = serde_json::from_value(parameters)?;
        let params = BFBParams::new(config)?;
        let initial = match initial {
            Some(value) => serde_json::from_value(value)?,
            None => {
                warn!("no {} section in task, using default start-up fields", INITIAL_HEADER);
                InitialConditions::default()
            }
        };
        info!("task loaded: {} cells, {} in the bed", params.N, params.Np);
        Ok(Self { params, initial })
    }
}
