use super::*;

#[test]
fn discards_top() {
    machine_halts!(program![(PUSH 1), (PUSH 2), (POP), (HALT)], [1]);
}

#[test]
fn underflow() {
    let machine = machine_faults!(program![(POP), (HALT)], StackUnderflow);
    assert_eq!(machine.stack(), &[] as &[Word]);
}
