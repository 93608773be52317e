//! Thin driver around the inspect → match → emit pipeline.
//!
//! Argument handling, output-directory creation and filename derivation
//! live here, outside the core contract.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use heck::ToSnakeCase;

use rowfill_codegen::emit::{self, Target};
use rowfill_codegen::source::SourceSet;

struct Args {
    output: PathBuf,
    dest: Target,
    src: Target,
    sources: Vec<PathBuf>,
}

const USAGE: &str = "usage: rowfill-gen -d <module::DestType> -s <module::SrcType> \
                     [-o <output-dir>] <source.rs>...";

fn parse_args() -> Result<Args, String> {
    let mut output = PathBuf::from("generated");
    let mut dest = None;
    let mut src = None;
    let mut sources = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                output = PathBuf::from(args.next().ok_or("missing value for --output")?);
            }
            "-d" | "--destination" => {
                let value = args.next().ok_or("missing value for --destination")?;
                dest = Some(value.parse::<Target>().map_err(|e| e.to_string())?);
            }
            "-s" | "--source" => {
                let value = args.next().ok_or("missing value for --source")?;
                src = Some(value.parse::<Target>().map_err(|e| e.to_string())?);
            }
            "-h" | "--help" => return Err(USAGE.to_owned()),
            _ => sources.push(PathBuf::from(arg)),
        }
    }

    let dest = dest.ok_or("missing --destination")?;
    let src = src.ok_or("missing --source")?;
    if sources.is_empty() {
        return Err("no source files given".to_owned());
    }
    Ok(Args {
        output,
        dest,
        src,
        sources,
    })
}

fn run(args: &Args) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut sources = SourceSet::new();
    for path in &args.sources {
        sources.add_path(path)?;
    }
    let pairs = rowfill_codegen::inspect_pairs(&sources, args.dest.name(), args.src.name())?;

    fs::create_dir_all(&args.output)?;
    let filename = format!("{}.rs", args.dest.name().to_snake_case());
    let path = args.output.join(filename);
    let mut out = fs::File::create(&path)?;

    let imports = [args.dest.clone(), args.src.clone()];
    emit::generate(&mut out, &args.dest, &args.src, &imports, &pairs)?;
    Ok(path)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };
    match run(&args) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("rowfill-gen: {err}");
            ExitCode::FAILURE
        }
    }
}
