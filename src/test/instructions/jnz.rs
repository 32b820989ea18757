use super::*;

#[test]
fn taken_on_nonzero() {
    // PUSH 1; JNZ end; PUSH 99; end: HALT
    let code = program![(PUSH 1), (JNZ 15), (PUSH 99), (HALT)];

    machine_halts!(code, []);
}

#[test]
fn not_taken_on_zero() {
    let code = program![(PUSH 0), (JNZ 15), (PUSH 99), (HALT)];

    machine_halts!(code, [99]);
}

#[test]
fn target_checked_only_when_taken() {
    machine_halts!(program![(PUSH 0), (JNZ 99), (HALT)], []);
}

#[test]
fn invalid_target() {
    machine_faults!(program![(PUSH 1), (JNZ -3), (HALT)], InvalidJumpTarget);
}

#[test]
fn underflow() {
    machine_faults!(program![(JNZ 0), (HALT)], StackUnderflow);
}
