use std::fmt::Display;

use thiserror::Error;

/// Which part of a computation instruction a mnemonic came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Dest,
    Comp,
    Jump,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Dest => write!(f, "destination"),
            Field::Comp => write!(f, "computation"),
            Field::Jump => write!(f, "jump"),
        }
    }
}

/// Assembly errors. `line` is always the 1-based line in the original source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    #[error("line {line}: unresolved symbol {symbol}")]
    UnresolvedSymbol { line: usize, symbol: String },
    #[error("line {line}: malformed operand {operand:?}: {reason}")]
    MalformedOperand {
        line: usize,
        operand: String,
        reason: String,
    },
    #[error("line {line}: unrecognized {field} mnemonic {mnemonic:?}")]
    UnrecognizedMnemonic {
        line: usize,
        field: Field,
        mnemonic: String,
    },
    #[error("line {line}: invalid symbol name {symbol:?}")]
    InvalidSymbol { line: usize, symbol: String },
}

impl AsmError {
    pub fn line(&self) -> usize {
        match self {
            AsmError::UnresolvedSymbol { line, .. }
            | AsmError::MalformedOperand { line, .. }
            | AsmError::UnrecognizedMnemonic { line, .. }
            | AsmError::InvalidSymbol { line, .. } => *line,
        }
    }

    pub(crate) fn malformed(line: usize, operand: &str, reason: impl Display) -> Self {
        AsmError::MalformedOperand {
            line,
            operand: operand.to_owned(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AsmError>;
