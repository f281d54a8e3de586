use libhack::{Instruction, WordExt};

pub fn encode_instruction(instruction: &Instruction) -> String {
    instruction.to_word().as_binary()
}

pub fn encode(instructions: &[Instruction]) -> Vec<String> {
    instructions.iter().map(encode_instruction).collect()
}
