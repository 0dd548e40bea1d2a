/*!
## Command line front end

Reads one source file, compiles it and writes the C file.

*/

pub mod logger;

use crate::emit::FileSink;
use crate::lang::Error;
use clap::Parser;
use log::info;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tinybasic", about = "Tiny BASIC to C compiler")]
pub struct Args {
    /// Tiny BASIC source file.
    pub source: PathBuf,

    /// Where to write the generated C.
    #[arg(short, long, default_value = "out.c")]
    pub output: PathBuf,

    /// Turn on verbose logging.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run(args: &Args) -> Result<(), Error> {
    println!("Tiny BASIC Compiler");

    info!("Reading {}", args.source.display());
    let source = fs::read_to_string(&args.source).map_err(|e| {
        crate::error!(DiskIoError; "{}: {}", args.source.display(), e)
    })?;

    crate::compile_to(&source, &mut FileSink::new(&args.output))?;

    println!("Compiling completed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["tinybasic", "hello.bas"]).unwrap();
        assert_eq!(args.source, PathBuf::from("hello.bas"));
        assert_eq!(args.output, PathBuf::from("out.c"));
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_args_require_exactly_one_source() {
        assert!(Args::try_parse_from(["tinybasic"]).is_err());
        assert!(Args::try_parse_from(["tinybasic", "a.bas", "b.bas"]).is_err());
    }

    #[test]
    fn test_args_output_and_verbosity() {
        let args = Args::try_parse_from(["tinybasic", "-vv", "-o", "build/x.c", "x.bas"]).unwrap();
        assert_eq!(args.output, PathBuf::from("build/x.c"));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_run_missing_source_is_disk_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args {
            source: dir.path().join("missing.bas"),
            output: dir.path().join("out.c"),
            verbose: 0,
        };
        let e = run(&args).unwrap_err();
        assert_eq!(e.code(), crate::lang::ErrorCode::DiskIoError);
        assert!(!args.output.exists());
    }
}
