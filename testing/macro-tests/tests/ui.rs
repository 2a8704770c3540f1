#[test]
fn message_expansions_compile_and_run() {
    let t = trybuild::TestCases::new();
    t.pass("tests/pass/*.rs");
}

#[test]
fn element_borrows_block_further_mutation() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/fail/*.rs");
}
