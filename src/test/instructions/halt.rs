use super::*;

#[test]
fn stops_execution() {
    machine_halts!(program![(PUSH 1), (HALT), (PUSH 2)], [1]);
}

#[test]
fn reports_halt_site() {
    let machine = machine_halts!(program![(HALT), (HALT)], []);
    assert_eq!(machine.pc(), 0);
}
