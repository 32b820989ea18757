#[macro_use]
extern crate clap;

use clap::{Arg, ArgGroup};
use std::process;
use svm::ExitCode;

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("PROGRAM")
                .help("Sets the bytecode file to run")
                .index(1),
        )
        .arg(
            Arg::with_name("assembly")
                .short("a")
                .long("assembly")
                .takes_value(true)
                .value_name("ASSEMBLY")
                .help("Sets the assembly file to assemble and run"),
        )
        .arg(
            Arg::with_name("memory")
                .short("m")
                .long("memory")
                .takes_value(true)
                .value_name("MEMORY")
                .default_value("1024")
                .required(false)
                .help("Sets the number of data memory cells"),
        )
        .group(
            ArgGroup::with_name("input")
                .args(&["PROGRAM", "assembly"])
                .required(true),
        )
        .get_matches();

    let mem_size = value_t_or_exit!(matches.value_of("memory"), usize);

    let result = match matches.value_of("PROGRAM") {
        Some(program) => sbc::run_file(program, mem_size),

        None => {
            let asm = matches.value_of("assembly").unwrap();
            sbc::run_asm(asm, mem_size)
        }
    };

    let (machine, exit_code) = match result {
        Ok(run) => run,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    if let Some(top) = machine.stack().last() {
        println!("Top of stack: {}", top);
    }

    if exit_code != ExitCode::Halted {
        eprintln!("Runtime error: {} (pc={})", exit_code, machine.pc());
        process::exit(2);
    }
}
