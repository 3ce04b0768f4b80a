use std::{fs, process::ExitCode};

use clap::{Parser, Subcommand, ValueEnum};
use num_bigint::BigInt;
use strictnum::{
    I64, Value, coerce_f64, coerce_i8, coerce_i16, coerce_i32, coerce_i64, coerce_u8, coerce_u16,
    coerce_u32, coerce_u64, util::num::render_f64,
};
use tracing_subscriber::EnvFilter;

/// strictnum converts numeric literals into fixed-width types without silent
/// loss, and evaluates wrapping 64-bit integer expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluates an arithmetic template such as "1024 << 10".
    Eval {
        /// Tells strictnum to read templates from a file, one per line.
        #[arg(short, long)]
        file: bool,

        /// The template, or the path of the file with `--file`.
        #[arg(allow_hyphen_values = true)]
        contents: String,
    },
    /// Evaluates a comparison template such as "-1 < 0".
    Test {
        /// The comparison template.
        #[arg(allow_hyphen_values = true)]
        template: String,
    },
    /// Coerces a literal into a fixed-width type.
    Coerce {
        /// The target type.
        #[arg(long, value_enum)]
        to: TargetType,

        /// How to read the literal before coercing it.
        #[arg(long = "as", value_enum, default_value_t = InputKind::String)]
        input: InputKind,

        /// The literal to coerce.
        #[arg(allow_hyphen_values = true)]
        literal: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TargetType {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F64,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum InputKind {
    /// Pass the literal as a string.
    String,
    /// Parse the literal as a float first.
    Number,
    /// Parse the literal as an arbitrary-precision integer first.
    Bigint,
}

fn read_input(literal: &str, kind: InputKind) -> Result<Value, String> {
    match kind {
        InputKind::String => Ok(Value::from(literal)),
        InputKind::Number => literal.parse::<f64>()
                                    .map(Value::from)
                                    .map_err(|_| format!("'{literal}' is not a number")),
        InputKind::Bigint => literal.parse::<BigInt>()
                                    .map(Value::from)
                                    .map_err(|_| format!("'{literal}' is not an integer")),
    }
}

fn coerce(to: TargetType, value: Value) -> Result<String, Box<dyn std::error::Error>> {
    let rendered = match to {
        TargetType::I8 => coerce_i8(value)?.to_string(),
        TargetType::U8 => coerce_u8(value)?.to_string(),
        TargetType::I16 => coerce_i16(value)?.to_string(),
        TargetType::U16 => coerce_u16(value)?.to_string(),
        TargetType::I32 => coerce_i32(value)?.to_string(),
        TargetType::U32 => coerce_u32(value)?.to_string(),
        TargetType::I64 => coerce_i64(value)?.to_string(),
        TargetType::U64 => coerce_u64(value)?.to_string(),
        TargetType::F64 => render_f64(coerce_f64(value)?),
    };
    Ok(rendered)
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Eval { file: true, contents } => {
            let script = fs::read_to_string(&contents).map_err(|_| {
                             format!("Failed to read the input file '{contents}'. Perhaps this file does not exist?")
                         })?;
            for line in script.lines().filter(|l| !l.trim().is_empty()) {
                println!("{}", I64::eval(line)?);
            }
        },
        Command::Eval { file: false, contents } => println!("{}", I64::eval(&contents)?),
        Command::Test { template } => println!("{}", I64::test(&template)?),
        Command::Coerce { to, input, literal } => {
            let value = read_input(&literal, input)?;
            println!("{}", coerce(to, value)?);
        },
    }
    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    if let Err(e) = run(args.command) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
