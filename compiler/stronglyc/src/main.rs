//! Strongly CLI
//!
//! Generates strongly-typed ID wrappers from a declaration manifest.

use stronglyc::commands::{explain_code, generate_manifest, list_kinds, GenerateOptions};

fn main() {
    stronglyc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "generate" | "gen" => match GenerateOptions::parse(&args[2..]) {
            Ok(options) => generate_manifest(&options),
            Err(message) => {
                eprintln!("error: {message}");
                eprintln!("Usage: strongly generate <manifest.json> [-o <dir>] [--jobs] [--json]");
                std::process::exit(1);
            }
        },
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: strongly explain <CODE>");
                eprintln!("Example: strongly explain STG3");
                std::process::exit(1);
            }
            explain_code(&args[2]);
        }
        "kinds" => list_kinds(),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("strongly {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Strongly - strongly-typed ID generator");
    println!();
    println!("Usage: strongly <command> [options]");
    println!();
    println!("Commands:");
    println!("  generate <manifest.json>  Generate one .g.cs file per declaration");
    println!("  explain <code>            Explain a diagnostic code (e.g., STG3)");
    println!("  kinds                     List backing kinds and their attribute codes");
    println!("  help                      Show this help message");
    println!("  version                   Show version information");
    println!();
    println!("Generate options:");
    println!("  -o, --output <dir>  Write files into <dir> (default: print to stdout)");
    println!("  -j, --jobs          Generate declarations in parallel");
    println!("  --json              Print diagnostics as JSON");
    println!();
    println!("Exit status is 1 when any error diagnostic is reported.");
    println!("Set RUST_LOG (e.g. RUST_LOG=strongly_codegen=debug) for trace output.");
    println!();
    println!("Examples:");
    println!("  strongly generate ids.json -o Generated/");
    println!("  strongly generate ids.json --json 2> diagnostics.json");
    println!("  strongly explain STI2");
}
