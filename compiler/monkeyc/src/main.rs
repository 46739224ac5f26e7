//! Monkey interpreter CLI.

use monkeyc::commands::{eval_source, lex_file, parse_file, repl, run_file};

fn main() {
    monkeyc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: monkey run <file.mk>");
                std::process::exit(1);
            }
            run_file(&args[2]);
        }
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: monkey eval \"<source>\"");
                std::process::exit(1);
            }
            eval_source(&args[2..].join(" "));
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: monkey lex <file.mk>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: monkey parse <file.mk>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "repl" => repl(),
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Monkey {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a source file, run it
            if std::path::Path::new(command).extension().is_some_and(|ext| {
                ext.eq_ignore_ascii_case("mk") || ext.eq_ignore_ascii_case("monkey")
            }) {
                run_file(command);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Monkey interpreter");
    println!();
    println!("Usage: monkey <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.mk>        Evaluate a Monkey program");
    println!("  eval \"<source>\"      Evaluate source given on the command line");
    println!("  repl                 Start an interactive session");
    println!("  parse <file.mk>      Parse and print the canonical AST rendering");
    println!("  lex <file.mk>        Tokenize and print the token stream");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Builtins: {}", monkey_eval::builtins::names().collect::<Vec<_>>().join(", "));
    println!();
    println!("Environment:");
    println!("  RUST_LOG=<filter>    Enable logging (e.g. monkey_parse=trace)");
    println!("  MONKEY_LOG_TREE=1    Print logs as an indented span tree");
    println!();
    println!("Examples:");
    println!("  monkey run fib.mk");
    println!("  monkey fib.mk");
    println!("  monkey eval \"let add = fn(a, b) {{ a + b }}; add(1, 2)\"");
    println!("  monkey repl");
}
