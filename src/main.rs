use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;
use std::time::Instant;

use tern::arena::Arena;
use tern::engine::apply;
use tern::ternary::{of_ternary, to_ternary};
use tern::values::{of_nat, to_bool, to_nat, to_string};

#[derive(Clone, Copy)]
enum Output {
    Nat,
    Bool,
    Str,
    Ternary,
}

fn usage() -> ! {
    eprintln!("usage: tern [--nat|--bool|--string|--ternary] [--stats] <program.t3|-> [n]");
    eprintln!();
    eprintln!("Decodes a ternary-encoded tree-calculus program. With a natural");
    eprintln!("number argument, applies the program to it and prints the result");
    eprintln!("(decoded as a natural number unless told otherwise); without one,");
    eprintln!("prints the program back in ternary.");
    process::exit(2);
}

fn main() {
    let mut output: Option<Output> = None;
    let mut stats = false;
    let mut positional: Vec<String> = Vec::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--nat" => output = Some(Output::Nat),
            "--bool" => output = Some(Output::Bool),
            "--string" => output = Some(Output::Str),
            "--ternary" => output = Some(Output::Ternary),
            "--stats" => stats = true,
            "--help" | "-h" => usage(),
            _ if arg.starts_with('-') && arg != "-" => usage(),
            _ => positional.push(arg),
        }
    }
    if positional.is_empty() || positional.len() > 2 {
        usage();
    }

    let source = if positional[0] == "-" {
        let mut buf = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut buf) {
            eprintln!("tern: reading stdin: {err}");
            process::exit(1);
        }
        buf
    } else {
        match fs::read_to_string(&positional[0]) {
            Ok(buf) => buf,
            Err(err) => {
                eprintln!("tern: {}: {err}", positional[0]);
                process::exit(1);
            }
        }
    };

    let mut g = Arena::new();
    let start = Instant::now();
    let program = match of_ternary(&mut g, source.trim()) {
        Ok(id) => id,
        Err(err) => {
            eprintln!("tern: {}: {err}", positional[0]);
            process::exit(1);
        }
    };

    let result = match positional.get(1) {
        Some(raw) => {
            let n: u64 = match raw.parse() {
                Ok(n) => n,
                Err(_) => {
                    eprintln!("tern: argument {raw:?} is not a natural number");
                    process::exit(2);
                }
            };
            let arg = of_nat(&mut g, n);
            match apply(&mut g, program, arg) {
                Ok(id) => id,
                Err(err) => {
                    eprintln!("tern: {err}");
                    process::exit(1);
                }
            }
        }
        None => program,
    };

    // A bare program is printed back in ternary; an applied one is a value.
    let output = output.unwrap_or(if positional.len() == 2 {
        Output::Nat
    } else {
        Output::Ternary
    });
    let rendered = match output {
        Output::Nat => to_nat(&g, result).map(|n| n.to_string()),
        Output::Bool => to_bool(&g, result).map(|b| b.to_string()),
        Output::Str => to_string(&g, result),
        Output::Ternary => to_ternary(&g, result),
    };
    match rendered {
        Ok(text) => println!("{text}"),
        Err(err) => {
            eprintln!("tern: {err}");
            process::exit(1);
        }
    }
    if stats {
        eprintln!("nodes={} elapsed_ms={}", g.size(), start.elapsed().as_millis());
    }
}
