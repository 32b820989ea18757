use super::*;

#[test]
fn fresh_memory_is_zero() {
    machine_halts!(program![(LOAD 0), (HALT)], [0]);
}

#[test]
fn reads_stored_value() {
    machine_halts!(program![(PUSH 23), (STORE 5), (LOAD 5), (HALT)], [23]);
}

#[test]
fn negative_index() {
    machine_faults!(program![(LOAD -1), (HALT)], InvalidMemoryIndex);
}

#[test]
fn index_past_end() {
    let code = program![(LOAD (constants::MEM_SIZE)), (HALT)];

    machine_faults!(code, InvalidMemoryIndex);
}

#[test]
fn overflow() {
    let mut machine = Machine::with_sizes(1, constants::RET_STACK_SIZE, constants::MEM_SIZE);
    let code = program![(LOAD 0), (LOAD 0), (HALT)];

    assert_eq!(machine.run(&code), ExitCode::StackOverflow);
}
