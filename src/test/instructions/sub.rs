use super::*;

#[test]
fn operand_order() {
    machine_halts!(program![(PUSH 10), (PUSH 4), (SUB), (HALT)], [6]);
}

#[test]
fn negative_result() {
    machine_halts!(program![(PUSH 4), (PUSH 10), (SUB), (HALT)], [-6]);
}

#[test]
fn wraps() {
    machine_halts!(program![(PUSH i32::MIN), (PUSH 1), (SUB), (HALT)], [i32::MAX]);
}

#[test]
fn underflow() {
    machine_faults!(program![(PUSH 1), (SUB), (HALT)], StackUnderflow);
}
