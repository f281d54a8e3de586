use std::str::FromStr;

use libhack::{Comp, Compute, Dest, Instruction, Jump};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_till},
    combinator::{all_consuming, map, opt, rest},
    sequence::{preceded, terminated, tuple},
    IResult,
};

use crate::{
    error::{AsmError, Field, Result},
    normalize::SourceLine,
};

/// The textual fields of one line, before any table lookup.
#[derive(Debug, PartialEq, Eq)]
enum Fields<'a> {
    Address(&'a str),
    Compute {
        dest: Option<&'a str>,
        comp: &'a str,
        jump: Option<&'a str>,
    },
}

fn address(i: &str) -> IResult<&str, &str> {
    preceded(tag("@"), rest)(i)
}

fn compute(i: &str) -> IResult<&str, (Option<&str>, &str, Option<&str>)> {
    tuple((
        opt(terminated(take_till(|c: char| c == '='), tag("="))),
        take_till(|c: char| c == ';'),
        opt(preceded(tag(";"), rest)),
    ))(i)
}

fn fields(i: &str) -> IResult<&str, Fields<'_>> {
    all_consuming(alt((
        map(address, Fields::Address),
        map(compute, |(dest, comp, jump)| Fields::Compute { dest, comp, jump }),
    )))(i)
}

fn parse_address(line: usize, operand: &str) -> Result<Instruction> {
    let operand = operand.trim();
    if operand.is_empty() {
        return Err(AsmError::malformed(line, operand, "missing operand"));
    }
    if operand.starts_with('-') {
        return Err(AsmError::malformed(line, operand, "address cannot be negative"));
    }

    let value = operand
        .parse::<u32>()
        .map_err(|e| AsmError::malformed(line, operand, e))?;

    Instruction::address(value).map_err(|e| AsmError::malformed(line, operand, e))
}

fn lookup<T: FromStr>(line: usize, field: Field, text: &str) -> Result<T> {
    T::from_str(text).map_err(|_| AsmError::UnrecognizedMnemonic {
        line,
        field,
        mnemonic: text.to_owned(),
    })
}

/// `None` means the separator was absent; text present but empty is an error.
fn optional_field<T: FromStr + Default>(
    line: usize,
    field: Field,
    text: Option<&str>,
) -> Result<T> {
    match text.map(str::trim) {
        None => Ok(T::default()),
        Some("") => Err(AsmError::malformed(line, "", format!("empty {}", field))),
        Some(text) => lookup(line, field, text),
    }
}

fn parse_compute(
    line: usize,
    dest: Option<&str>,
    comp: &str,
    jump: Option<&str>,
) -> Result<Instruction> {
    let dest: Dest = optional_field(line, Field::Dest, dest)?;
    let comp = comp.trim();
    if comp.is_empty() {
        return Err(AsmError::malformed(line, comp, "empty computation"));
    }
    let comp: Comp = lookup(line, Field::Comp, comp)?;
    let jump: Jump = optional_field(line, Field::Jump, jump)?;

    Ok(Instruction::Compute(Compute { dest, comp, jump }))
}

pub fn parse_instruction(line: &SourceLine) -> Result<Instruction> {
    let (_, parsed) =
        fields(&line.text).map_err(|e| AsmError::malformed(line.line_no, &line.text, e))?;

    match parsed {
        Fields::Address(operand) => parse_address(line.line_no, operand),
        Fields::Compute { dest, comp, jump } => parse_compute(line.line_no, dest, comp, jump),
    }
}

pub fn parse_program(lines: &[SourceLine]) -> Result<Vec<Instruction>> {
    lines.iter().map(parse_instruction).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Instruction> {
        parse_instruction(&SourceLine::new(1, text))
    }

    fn compute(dest: Dest, comp: Comp, jump: Jump) -> Instruction {
        Instruction::Compute(Compute { dest, comp, jump })
    }

    #[test]
    fn split_fields() {
        assert_eq!(fields("@12").unwrap().1, Fields::Address("12"));
        assert_eq!(
            fields("AM=M+1;JNE").unwrap().1,
            Fields::Compute {
                dest: Some("AM"),
                comp: "M+1",
                jump: Some("JNE")
            }
        );
        assert_eq!(
            fields("0;JMP").unwrap().1,
            Fields::Compute {
                dest: None,
                comp: "0",
                jump: Some("JMP")
            }
        );
        assert_eq!(
            fields("D").unwrap().1,
            Fields::Compute {
                dest: None,
                comp: "D",
                jump: None
            }
        );
    }

    #[test]
    fn parse_line() -> Result<()> {
        assert_eq!(parse("@0")?, Instruction::Address(0));
        assert_eq!(parse("@32767")?, Instruction::Address(32767));
        assert_eq!(parse("D=D+1;JGT")?, compute(Dest::D, Comp::DPlusOne, Jump::JGT));
        assert_eq!(parse("M=D")?, compute(Dest::M, Comp::D, Jump::Null));
        assert_eq!(parse("D;JLE")?, compute(Dest::Null, Comp::D, Jump::JLE));
        assert_eq!(parse("null=A+D;null")?, compute(Dest::Null, Comp::DPlusA, Jump::Null));
        assert_eq!(parse("AMD = M|D ; JMP")?, compute(Dest::AMD, Comp::DOrM, Jump::JMP));

        Ok(())
    }

    #[test]
    fn address_range() {
        assert!(matches!(
            parse("@32768"),
            Err(AsmError::MalformedOperand { .. })
        ));
        assert!(matches!(
            parse("@-1"),
            Err(AsmError::MalformedOperand { .. })
        ));
        assert!(matches!(
            parse("@99999999999"),
            Err(AsmError::MalformedOperand { .. })
        ));
        assert!(matches!(parse("@"), Err(AsmError::MalformedOperand { .. })));
        assert!(matches!(
            parse("@x"),
            Err(AsmError::MalformedOperand { .. })
        ));
    }

    #[test]
    fn empty_fields() {
        for text in ["D=", ";JMP", "=;JMP", "", "=D", "D;"] {
            assert!(
                matches!(parse(text), Err(AsmError::MalformedOperand { .. })),
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn unrecognized_mnemonics() {
        assert_eq!(
            parse("D=D*A").unwrap_err(),
            AsmError::UnrecognizedMnemonic {
                line: 1,
                field: Field::Comp,
                mnemonic: "D*A".into()
            }
        );
        assert_eq!(
            parse("X=D").unwrap_err(),
            AsmError::UnrecognizedMnemonic {
                line: 1,
                field: Field::Dest,
                mnemonic: "X".into()
            }
        );
        assert_eq!(
            parse("0;JUMP").unwrap_err(),
            AsmError::UnrecognizedMnemonic {
                line: 1,
                field: Field::Jump,
                mnemonic: "JUMP".into()
            }
        );
    }
}
