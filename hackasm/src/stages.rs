use libhack::{Compute, Dest, Instruction, Jump};

use crate::{normalize::SourceLine, symbols::SymbolTable};

/// Every intermediate stream of one assembly run.
#[derive(Debug, Clone)]
pub struct Stages {
    pub cleaned: Vec<SourceLine>,
    pub symbols: SymbolTable,
    pub no_labels: Vec<SourceLine>,
    pub resolved: Vec<SourceLine>,
    pub instructions: Vec<Instruction>,
    pub binary: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Cleaned,
    Symbols,
    NoLabels,
    Resolved,
    Syntax,
    Binary,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Cleaned,
        Stage::Symbols,
        Stage::NoLabels,
        Stage::Resolved,
        Stage::Syntax,
        Stage::Binary,
    ];

    /// File suffix, appended to the source file stem.
    pub fn suffix(&self) -> &'static str {
        match self {
            Stage::Cleaned => "pre.1",
            Stage::Symbols => "symbol.2",
            Stage::NoLabels => "noLabel.2",
            Stage::Resolved => "nosymbol.3",
            Stage::Syntax => "syntax.4",
            Stage::Binary => "hack",
        }
    }
}

fn lines<T: std::fmt::Display>(items: &[T]) -> String {
    items.iter().map(|item| format!("{}\n", item)).collect()
}

/// `0,value` for address instructions, `1,dest,comp,jump` otherwise. Null fields are left empty.
pub fn syntax_line(instruction: &Instruction) -> String {
    match instruction {
        Instruction::Address(value) => format!("0,{}", value),
        Instruction::Compute(Compute { dest, comp, jump }) => {
            let dest = if *dest == Dest::Null {
                String::new()
            } else {
                dest.to_string()
            };
            let jump = if *jump == Jump::Null {
                String::new()
            } else {
                jump.to_string()
            };
            format!("1,{},{},{}", dest, comp, jump)
        }
    }
}

impl Stages {
    pub fn render(&self, stage: Stage) -> String {
        match stage {
            Stage::Cleaned => lines(&self.cleaned),
            Stage::Symbols => self.symbols.to_string(),
            Stage::NoLabels => lines(&self.no_labels),
            Stage::Resolved => lines(&self.resolved),
            Stage::Syntax => lines(
                &self
                    .instructions
                    .iter()
                    .map(syntax_line)
                    .collect::<Vec<_>>(),
            ),
            Stage::Binary => lines(&self.binary),
        }
    }
}
