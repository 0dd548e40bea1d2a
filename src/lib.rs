//! # Tiny BASIC
//!
//! A small BASIC compiled straight to C in a single pass.
//!
//! The compiler reads a program one token at a time and writes C as each
//! grammar rule is recognized. There is no syntax tree. The result is one
//! translation unit with a `main` function that any C compiler can build.
//!
//! ```
//! let c = tinybasic::compile("LET a = 5\nPRINT a\n").unwrap();
//! assert!(c.starts_with("#include <stdio.h>\nint main(void){\nfloat a = 0;\n"));
//! assert!(c.ends_with("return 0;\n}\n"));
//! ```
//!
//! Errors abort compilation at the first problem found.
//!
//! ```
//! use tinybasic::lang::ErrorCode;
//! let error = tinybasic::compile("PRINT x\n").unwrap_err();
//! assert_eq!(error.code(), ErrorCode::UndefinedVariable);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod cli;
pub mod emit;
pub mod lang;

use emit::{Emitter, Sink};
use lang::{parse::compile_program, Error, Lexer};

/// Compiles `source` and returns the generated C.
pub fn compile(source: &str) -> Result<String, Error> {
    let mut output = String::new();
    compile_to(source, &mut output)?;
    Ok(output)
}

/// Compiles `source` and hands the generated C to `sink`.
///
/// The sink is only written when the whole program compiled.
pub fn compile_to<S: Sink + ?Sized>(source: &str, sink: &mut S) -> Result<(), Error> {
    let mut emitter = Emitter::new();
    compile_program(Lexer::new(source), &mut emitter)?;
    emitter.finish(sink)
}
