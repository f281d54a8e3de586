use hackasm::{assemble_program, assemble_with_stages};
use libhack::{binary_to_word, Instruction};

fn assert_assembles(source: &str, expected: &str) {
    let assembled = assemble_program(source).unwrap();
    assert_eq!(assembled, expected);
}

#[test]
fn test_add() {
    assert_assembles(
        include_str!("../programs/Add.asm"),
        include_str!("../programs/Add.hack"),
    );
}

#[test]
fn test_max() {
    assert_assembles(
        include_str!("../programs/Max.asm"),
        include_str!("../programs/Max.hack"),
    );
}

#[test]
fn test_rect() {
    assert_assembles(
        include_str!("../programs/Rect.asm"),
        include_str!("../programs/Rect.hack"),
    );
}

#[test]
fn test_crlf_source() {
    let source = include_str!("../programs/Max.asm").replace('\n', "\r\n");
    assert_assembles(&source, include_str!("../programs/Max.hack"));
}

#[test]
fn test_binary_decodes_to_parsed_instructions() {
    let stages = assemble_with_stages(include_str!("../programs/Rect.asm")).unwrap();

    let decoded = stages
        .binary
        .iter()
        .map(|line| binary_to_word(line).and_then(Instruction::from_word))
        .collect::<Option<Vec<_>>>()
        .expect("every line decodes");

    assert_eq!(decoded, stages.instructions);
}
