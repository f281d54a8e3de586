use log::debug;

use crate::{
    constants::{address_operand, is_number, ADDRESS_PREFIX},
    error::{AsmError, Result},
    normalize::SourceLine,
    pass_one::PassOne,
};

/// Replace every symbolic `@` operand with its address from the first pass.
pub fn pass_two(pass_one: &PassOne) -> Result<Vec<SourceLine>> {
    let lines = pass_one
        .lines
        .iter()
        .map(|line| substitute(line, pass_one))
        .collect::<Result<Vec<_>>>()?;

    debug!("pass two: resolved {} lines", lines.len());

    Ok(lines)
}

fn substitute(line: &SourceLine, pass_one: &PassOne) -> Result<SourceLine> {
    let Some(operand) = address_operand(&line.text) else {
        return Ok(line.clone());
    };

    if operand.is_empty() {
        return Err(AsmError::malformed(line.line_no, operand, "missing operand"));
    }
    if is_number(operand) {
        return Ok(line.clone());
    }

    let address = pass_one
        .symbols
        .resolve(operand)
        .ok_or_else(|| AsmError::UnresolvedSymbol {
            line: line.line_no,
            symbol: operand.to_owned(),
        })?;

    Ok(SourceLine::new(
        line.line_no,
        format!("{}{}", ADDRESS_PREFIX, address),
    ))
}
