pub use op::{Comp, Compute, Dest, Instruction, Jump, OpError};
pub use word::{binary_to_word, Word, WordExt, MAX_ADDRESS};

pub mod op;
pub mod word;
