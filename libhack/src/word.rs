pub type Word = u16;

/// Highest value an address instruction can load; the top bit is the opcode.
pub const MAX_ADDRESS: Word = 0x7F_FF;

pub const WORD_BITS: usize = 16;

pub(crate) const COMPUTE_PREFIX: Word = 0b111 << 13;

pub trait WordExt {
    fn as_binary(&self) -> String;
    fn is_compute(&self) -> bool;
}

impl WordExt for Word {
    fn as_binary(&self) -> String {
        format!("{:0>16b}", self)
    }

    fn is_compute(&self) -> bool {
        self & COMPUTE_PREFIX == COMPUTE_PREFIX
    }
}

/// Parse a line of a `.hack` file. Only exact 16 character `0`/`1` strings are accepted.
pub fn binary_to_word(line: &str) -> Option<Word> {
    if line.len() != WORD_BITS || !line.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    Word::from_str_radix(line, 2).ok()
}
