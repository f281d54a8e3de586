use std::fmt::Display;

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::word::{Word, WordExt, COMPUTE_PREFIX, MAX_ADDRESS};

const COMP_SHIFT: u16 = 6;
const DEST_SHIFT: u16 = 3;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OpError {
    #[error("address {0} does not fit in 15 bits (max {max})", max = MAX_ADDRESS)]
    AddressOutOfRange(u32),
}

/// ALU computation, discriminant is the `a c1..c6` field.
///
/// Operand-swapped spellings of the commutative operations parse to the same
/// variant, so `A+D` and `D+A` share one code.
#[derive(
    FromPrimitive, EnumString, Display, EnumIter, Debug, Clone, Copy, PartialEq, Eq, Hash,
)]
pub enum Comp {
    #[strum(to_string = "0")]
    Zero = 0b0101010,
    #[strum(to_string = "1")]
    One = 0b0111111,
    #[strum(to_string = "-1")]
    NegOne = 0b0111010,
    #[strum(to_string = "D")]
    D = 0b0001100,
    #[strum(to_string = "A")]
    A = 0b0110000,
    #[strum(to_string = "M")]
    M = 0b1110000,
    #[strum(to_string = "!D")]
    NotD = 0b0001101,
    #[strum(to_string = "!A")]
    NotA = 0b0110001,
    #[strum(to_string = "!M")]
    NotM = 0b1110001,
    #[strum(to_string = "-D")]
    NegD = 0b0001111,
    #[strum(to_string = "-A")]
    NegA = 0b0110011,
    #[strum(to_string = "-M")]
    NegM = 0b1110011,
    #[strum(to_string = "D+1", serialize = "1+D")]
    DPlusOne = 0b0011111,
    #[strum(to_string = "A+1", serialize = "1+A")]
    APlusOne = 0b0110111,
    #[strum(to_string = "M+1", serialize = "1+M")]
    MPlusOne = 0b1110111,
    #[strum(to_string = "D-1")]
    DMinusOne = 0b0001110,
    #[strum(to_string = "A-1")]
    AMinusOne = 0b0110010,
    #[strum(to_string = "M-1")]
    MMinusOne = 0b1110010,
    #[strum(to_string = "D+A", serialize = "A+D")]
    DPlusA = 0b0000010,
    #[strum(to_string = "D+M", serialize = "M+D")]
    DPlusM = 0b1000010,
    #[strum(to_string = "D-A")]
    DMinusA = 0b0010011,
    #[strum(to_string = "D-M")]
    DMinusM = 0b1010011,
    #[strum(to_string = "A-D")]
    AMinusD = 0b0000111,
    #[strum(to_string = "M-D")]
    MMinusD = 0b1000111,
    #[strum(to_string = "D&A", serialize = "A&D")]
    DAndA = 0b0000000,
    #[strum(to_string = "D&M", serialize = "M&D")]
    DAndM = 0b1000000,
    #[strum(to_string = "D|A", serialize = "A|D")]
    DOrA = 0b0010101,
    #[strum(to_string = "D|M", serialize = "M|D")]
    DOrM = 0b1010101,
}

#[allow(clippy::upper_case_acronyms)]
#[derive(
    FromPrimitive, EnumString, Display, EnumIter, Debug, Clone, Copy, PartialEq, Eq, Hash, Default,
)]
pub enum Dest {
    #[default]
    #[strum(serialize = "null")]
    Null = 0b000,
    M = 0b001,
    D = 0b010,
    MD = 0b011,
    A = 0b100,
    AM = 0b101,
    AD = 0b110,
    AMD = 0b111,
}

#[allow(clippy::upper_case_acronyms)]
#[derive(
    FromPrimitive, EnumString, Display, EnumIter, Debug, Clone, Copy, PartialEq, Eq, Hash, Default,
)]
pub enum Jump {
    #[default]
    #[strum(serialize = "null")]
    Null = 0b000,
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compute {
    pub dest: Dest,
    pub comp: Comp,
    pub jump: Jump,
}

impl Compute {
    pub fn new(comp: Comp) -> Self {
        Self {
            dest: Dest::Null,
            comp,
            jump: Jump::Null,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Address(Word),
    Compute(Compute),
}

impl Instruction {
    pub fn address(value: u32) -> Result<Self, OpError> {
        if value > MAX_ADDRESS as u32 {
            return Err(OpError::AddressOutOfRange(value));
        }
        Ok(Self::Address(value as Word))
    }

    /// Only the low 15 bits of an `Address` are encoded. Build addresses with
    /// [`Instruction::address`] to have larger values rejected instead.
    pub fn to_word(&self) -> Word {
        match self {
            Instruction::Address(value) => value & MAX_ADDRESS,
            Instruction::Compute(Compute { dest, comp, jump }) => {
                COMPUTE_PREFIX
                    | (*comp as Word) << COMP_SHIFT
                    | (*dest as Word) << DEST_SHIFT
                    | *jump as Word
            }
        }
    }

    /// Decode a machine word. Words with the compute bit set but without the
    /// `111` prefix, or with a computation field outside the table, give `None`.
    pub fn from_word(word: Word) -> Option<Self> {
        if word & 0x80_00 == 0 {
            return Some(Self::Address(word));
        }
        if !word.is_compute() {
            return None;
        }

        Some(Self::Compute(Compute {
            dest: Dest::from_u16((word >> DEST_SHIFT) & 0b111)?,
            comp: Comp::from_u16((word >> COMP_SHIFT) & 0b111_1111)?,
            jump: Jump::from_u16(word & 0b111)?,
        }))
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Address(value) => write!(f, "@{}", value),
            Instruction::Compute(Compute { dest, comp, jump }) => {
                if *dest != Dest::Null {
                    write!(f, "{}=", dest)?;
                }
                write!(f, "{}", comp)?;
                if *jump != Jump::Null {
                    write!(f, ";{}", jump)?;
                }
                Ok(())
            }
        }
    }
}
