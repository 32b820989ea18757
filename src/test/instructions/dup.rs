use super::*;

#[test]
fn duplicates_top() {
    machine_halts!(program![(PUSH 1), (PUSH 2), (DUP), (HALT)], [1, 2, 2]);
}

#[test]
fn underflow() {
    machine_faults!(program![(DUP), (HALT)], StackUnderflow);
}

#[test]
fn overflow() {
    let mut machine = Machine::with_sizes(2, constants::RET_STACK_SIZE, constants::MEM_SIZE);
    let code = program![(PUSH 1), (PUSH 2), (DUP), (HALT)];

    assert_eq!(machine.run(&code), ExitCode::StackOverflow);
    assert_eq!(machine.stack(), &[1, 2][..]);
}
