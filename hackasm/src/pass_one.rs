use libhack::Word;
use log::{debug, warn};

use crate::{
    constants::{address_operand, is_number, is_symbol, label_declaration},
    error::{AsmError, Result},
    normalize::SourceLine,
    symbols::SymbolTable,
};

/// Output of the first pass: the program without label declarations, and
/// every symbol it uses bound to an address.
#[derive(Debug, Clone)]
pub struct PassOne {
    pub lines: Vec<SourceLine>,
    pub symbols: SymbolTable,
}

struct FirstPass {
    instruction: usize,
    symbols: SymbolTable,
    lines: Vec<SourceLine>,
}

impl FirstPass {
    fn new() -> Self {
        Self {
            instruction: 0,
            symbols: SymbolTable::new(),
            lines: Vec::new(),
        }
    }

    fn parse_lines(lines: &[SourceLine]) -> Result<PassOne> {
        let mut pass = Self::new();

        for line in lines {
            pass.handle_label(line)?;
        }
        pass.allocate_variables()?;

        debug!(
            "pass one: {} instructions, {} variables",
            pass.lines.len(),
            pass.symbols.variables()
        );

        Ok(PassOne {
            lines: pass.lines,
            symbols: pass.symbols,
        })
    }

    /// Labels bind to the index of the next instruction and take no slot themselves.
    fn handle_label(&mut self, line: &SourceLine) -> Result<()> {
        let Some(label) = label_declaration(&line.text) else {
            self.lines.push(line.clone());
            self.instruction += 1;
            return Ok(());
        };

        if !is_symbol(label) {
            return Err(AsmError::InvalidSymbol {
                line: line.line_no,
                symbol: label.to_owned(),
            });
        }

        let address = Word::try_from(self.instruction).map_err(|_| {
            AsmError::malformed(line.line_no, label, "label is past the end of addressable ROM")
        })?;

        if self.symbols.bind(label, address) {
            debug!("label {} -> {}", label, address);
        } else {
            warn!(
                "line {}: {} is already bound to {:?}, ignoring redeclaration",
                line.line_no,
                label,
                self.symbols.resolve(label)
            );
        }

        Ok(())
    }

    /// Runs after every label is bound so forward references are never mistaken for variables.
    fn allocate_variables(&mut self) -> Result<()> {
        for line in self.lines.iter() {
            let Some(operand) = address_operand(&line.text) else {
                continue;
            };

            if operand.is_empty() || is_number(operand) || self.symbols.contains(operand) {
                continue;
            }
            if !is_symbol(operand) {
                return Err(AsmError::InvalidSymbol {
                    line: line.line_no,
                    symbol: operand.to_owned(),
                });
            }

            let address = self.symbols.allocate(operand).ok_or_else(|| {
                AsmError::malformed(line.line_no, operand, "out of variable memory")
            })?;
            debug!("variable {} -> {}", operand, address);
        }

        Ok(())
    }
}

pub fn pass_one(lines: &[SourceLine]) -> Result<PassOne> {
    FirstPass::parse_lines(lines)
}
