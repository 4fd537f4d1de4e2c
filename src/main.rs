use clap::Parser;
use numfmt_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {error}");
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Number-Format Processor - European to English CSV Converter");
    println!("===========================================================");
    println!();
    println!("Detect CSV columns written in European numeric convention (1.234,56)");
    println!("and rewrite them into English convention (1,234.56).");
    println!();
    println!("USAGE:");
    println!("    numfmt-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    detect      Report per-column numeric/European verdicts for a CSV file");
    println!("    convert     Convert European-formatted columns and write a new CSV");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Inspect a file and see the suggested conversion columns:");
    println!("    numfmt-processor detect prices.csv");
    println!();
    println!("    # Convert the auto-detected columns:");
    println!("    numfmt-processor convert prices.csv -o prices_english.csv");
    println!();
    println!("    # Convert specific columns with a preview:");
    println!("    numfmt-processor convert prices.csv -o out.csv --columns price,total --preview 5");
    println!();
    println!("For detailed help on any command, use:");
    println!("    numfmt-processor <COMMAND> --help");
}
