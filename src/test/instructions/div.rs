use super::*;

#[test]
fn exact() {
    machine_halts!(program![(PUSH 56), (PUSH 8), (DIV), (HALT)], [7]);
}

#[test]
fn truncates_toward_zero() {
    machine_halts!(program![(PUSH 7), (PUSH 2), (DIV), (HALT)], [3]);
}

#[test]
fn truncates_toward_zero_negative() {
    machine_halts!(program![(PUSH -7), (PUSH 2), (DIV), (HALT)], [-3]);
}

#[test]
fn min_by_minus_one_wraps() {
    machine_halts!(
        program![(PUSH i32::MIN), (PUSH -1), (DIV), (HALT)],
        [i32::MIN]
    );
}

#[test]
fn by_zero_leaves_operands() {
    let machine = machine_faults!(program![(PUSH 7), (PUSH 0), (DIV), (HALT)], DivisionByZero);
    assert_eq!(machine.stack(), &[7, 0][..]);
}

#[test]
fn underflow() {
    machine_faults!(program![(PUSH 1), (DIV), (HALT)], StackUnderflow);
}
