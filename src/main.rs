use std::{
    collections::HashSet,
    io::{self, BufWriter},
    process::ExitCode,
    time::Instant,
};

use clap::{command, Parser, ValueEnum};
use colored::Colorize;

use brainfold::{
    compiler::compiler::compile,
    interpreter::{executor::Executor, Runtime},
};

/// Brainf**k run-length compiler & interpreter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The file to operate on
    #[arg()]
    file: String,

    /// Stages to output/run; defaults to execute when empty
    #[arg(value_enum)]
    commands: Vec<Commands>,
}

#[derive(ValueEnum, Debug, Clone, Hash, PartialEq, Eq)]
enum Commands {
    /// Output the compiled instructions and jump maps
    Instructions,
    /// Execute the compiled program against stdin/stdout
    Execute,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let mut commands: HashSet<Commands> = HashSet::from_iter(args.commands.into_iter());
    if commands.is_empty() {
        commands.insert(Commands::Execute);
    }

    let source = match std::fs::read(&args.file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{0:}: {1:}: {2:}", "Error".red(), args.file, e);
            return ExitCode::FAILURE;
        }
    };

    println!("{} {}", "Compiling".blue(), args.file);
    let now = Instant::now();
    let program = match compile(&source) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{0:}: {1:}", "Error".red(), e);
            return ExitCode::FAILURE;
        }
    };
    println!(
        "{} {} instructions in {:.2?}",
        "Compiled".green(),
        program.instructions.len(),
        now.elapsed()
    );

    if commands.contains(&Commands::Instructions) {
        for (index, instruction) in program.instructions.iter().enumerate() {
            println!("{index:4}: {instruction:?}");
        }
        println!("start -> end: {:?}", program.start_to_end);
        println!("end -> start: {:?}", program.end_to_start);
    }

    if commands.contains(&Commands::Execute) {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut in_stream = stdin.lock();
        let mut out_stream = BufWriter::new(stdout.lock());

        println!("{}", "Starting executor".blue());
        let now = Instant::now();
        let mut runtime = Runtime::new(&mut in_stream, &mut out_stream);
        if let Err(e) = Executor::new().run(&mut runtime, &program) {
            eprintln!("{0:}: {1:}", "Error".red(), e);
            return ExitCode::FAILURE;
        }
        println!();
        println!("{} {:.2?}", "Finished executor in".green(), now.elapsed());
    }

    ExitCode::SUCCESS
}
