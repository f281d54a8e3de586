use hackasm::{assemble_with_stages, Stage};

#[test]
fn test_max_resolved() {
    let stages = assemble_with_stages(include_str!("../programs/Max.asm")).unwrap();

    insta::assert_snapshot!(stages.render(Stage::Resolved).trim_end(), @r###"
    @0
    D=M
    @1
    D=D-M
    @10
    D;JGT
    @1
    D=M
    @12
    0;JMP
    @0
    D=M
    @2
    M=D
    @14
    0;JMP
    "###);
}

#[test]
fn test_max_syntax() {
    let stages = assemble_with_stages(include_str!("../programs/Max.asm")).unwrap();

    insta::assert_snapshot!(stages.render(Stage::Syntax).trim_end(), @r###"
    0,0
    1,D,M,
    0,1
    1,D,D-M,
    0,10
    1,,D,JGT
    0,1
    1,D,M,
    0,12
    1,,0,JMP
    0,0
    1,D,M,
    0,2
    1,M,D,
    0,14
    1,,0,JMP
    "###);
}

#[test]
fn test_rect_user_symbols() {
    let stages = assemble_with_stages(include_str!("../programs/Rect.asm")).unwrap();

    let user_symbols = stages
        .render(Stage::Symbols)
        .lines()
        .skip(23)
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(user_symbols, @r###"
    LOOP:10
    INFINITE_LOOP:23
    counter:16
    address:17
    "###);
}

#[test]
fn test_cleaned_source() {
    let source = "// header\n\n   @R0 // load\n(END)\n   @END\n   0;JMP   \n";
    let stages = assemble_with_stages(source).unwrap();

    insta::assert_snapshot!(stages.render(Stage::Cleaned).trim_end(), @r###"
    @R0
    (END)
    @END
    0;JMP
    "###);
    insta::assert_snapshot!(stages.render(Stage::NoLabels).trim_end(), @r###"
    @R0
    @END
    0;JMP
    "###);
}
