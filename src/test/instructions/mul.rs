use super::*;

#[test]
fn positive() {
    machine_halts!(program![(PUSH 6), (PUSH 7), (MUL), (HALT)], [42]);
}

#[test]
fn negative() {
    machine_halts!(program![(PUSH -6), (PUSH 7), (MUL), (HALT)], [-42]);
}

#[test]
fn wraps() {
    machine_halts!(
        program![(PUSH 0x4000_0000), (PUSH 4), (MUL), (HALT)],
        [0]
    );
}

#[test]
fn underflow() {
    machine_faults!(program![(PUSH 1), (MUL), (HALT)], StackUnderflow);
}
