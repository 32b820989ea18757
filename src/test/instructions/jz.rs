use super::*;

#[test]
fn taken_on_zero() {
    // PUSH 0; JZ end; PUSH 99; end: HALT
    let code = program![(PUSH 0), (JZ 15), (PUSH 99), (HALT)];

    machine_halts!(code, []);
}

#[test]
fn not_taken_on_nonzero() {
    let code = program![(PUSH 1), (JZ 15), (PUSH 99), (HALT)];

    machine_halts!(code, [99]);
}

#[test]
fn consumes_condition() {
    machine_halts!(program![(PUSH 0), (JZ 10), (HALT)], []);
}

#[test]
fn target_checked_only_when_taken() {
    machine_halts!(program![(PUSH 1), (JZ 99), (HALT)], []);
}

#[test]
fn invalid_target() {
    machine_faults!(program![(PUSH 0), (JZ 99), (HALT)], InvalidJumpTarget);
}

#[test]
fn underflow() {
    machine_faults!(program![(JZ 0), (HALT)], StackUnderflow);
}
