use super::*;

#[test]
fn calls_and_returns() {
    // 0: CALL 6; 5: HALT; 6: RET
    let code = program![(CALL 6), (HALT), (RET)];

    let machine = machine_halts!(code, []);
    assert_eq!(machine.pc(), 5);
}

#[test]
fn nested_calls() {
    // 0: CALL 6; 5: HALT; 6: CALL 12; 11: RET; 12: RET
    let code = program![(CALL 6), (HALT), (CALL 12), (RET), (RET)];

    machine_halts!(code, []);
}

#[test]
fn invalid_target() {
    machine_faults!(program![(CALL 99), (HALT)], InvalidJumpTarget);
}

#[test]
fn overflow_at_max_depth() {
    // CALL 0 keeps re-entering itself until the return stack is full.
    machine_faults!(program![(CALL 0)], ReturnStackOverflow);
}
