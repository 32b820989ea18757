use super::*;

#[test]
fn value() {
    machine_halts!(program![(PUSH 42), (HALT)], [42]);
}

#[test]
fn negative_value() {
    machine_halts!(program![(PUSH -42), (HALT)], [-42]);
}

#[test]
fn extreme_values() {
    machine_halts!(
        program![(PUSH i32::MIN), (PUSH i32::MAX), (HALT)],
        [i32::MIN, i32::MAX]
    );
}

#[test]
fn overflow() {
    let mut machine = Machine::with_sizes(2, constants::RET_STACK_SIZE, constants::MEM_SIZE);
    let code = program![(PUSH 1), (PUSH 2), (PUSH 3), (HALT)];

    assert_eq!(machine.run(&code), ExitCode::StackOverflow);
    assert_eq!(machine.stack(), &[1, 2][..]);
}

#[test]
fn truncated_operand() {
    let code = [Opcode::PUSH.to_byte(), 0x01, 0x02, 0x03];

    machine_faults!(code, TruncatedOperand);
}
