use super::*;

#[test]
fn forward_and_backward() {
    // 0: JMP 6; 5: HALT; 6: JMP 5
    let code = program![(JMP 6), (HALT), (JMP 5)];

    let machine = machine_halts!(code, []);
    assert_eq!(machine.pc(), 5);
}

#[test]
fn negative_target() {
    machine_faults!(program![(JMP -1), (HALT)], InvalidJumpTarget);
}

#[test]
fn target_past_end() {
    machine_faults!(program![(JMP 99), (HALT)], InvalidJumpTarget);
}

#[test]
fn target_at_end() {
    // The image is 6 bytes, so offset 6 is already out of bounds.
    machine_faults!(program![(JMP 6), (HALT)], InvalidJumpTarget);
}
