use log::debug;

pub use error::{AsmError, Field, Result};
pub use normalize::SourceLine;
pub use stages::{Stage, Stages};
pub use symbols::SymbolTable;

pub mod constants;
pub mod encoder;
mod error;
pub mod normalize;
pub mod parser;
pub mod pass_one;
pub mod pass_two;
mod stages;
mod symbols;

/// Assemble a Hack program from text into `.hack` file contents.
///
/// # Errors
///
/// If there's an error in the assembly code
pub fn assemble_program(program_text: &str) -> Result<String> {
    Ok(assemble_with_stages(program_text)?.render(Stage::Binary))
}

/// Raw source lines in, one 16 character binary string per instruction out.
pub fn assemble_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<String>> {
    Ok(run_stages(lines)?.binary)
}

pub fn assemble_with_stages(program_text: &str) -> Result<Stages> {
    let lines = program_text.lines().collect::<Vec<_>>();
    run_stages(&lines)
}

fn run_stages<S: AsRef<str>>(lines: &[S]) -> Result<Stages> {
    let cleaned = normalize::normalize(lines);
    debug!("normalized {} source lines to {}", lines.len(), cleaned.len());

    let first = pass_one::pass_one(&cleaned)?;
    let resolved = pass_two::pass_two(&first)?;
    let instructions = parser::parse_program(&resolved)?;
    let binary = encoder::encode(&instructions);

    Ok(Stages {
        cleaned,
        symbols: first.symbols,
        no_labels: first.lines,
        resolved,
        instructions,
        binary,
    })
}
