#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use tempfile::TempDir;

/// A generated program built with the system C compiler.
pub struct Built {
    _dir: TempDir,
    exe: PathBuf,
}

impl Built {
    pub fn command(&self) -> Command {
        Command::new(&self.exe)
    }
}

/// Compiles BASIC to C, then C to an executable. Returns `None` when no
/// C compiler is installed so the calling test can be skipped.
pub fn build(basic: &str) -> Option<Built> {
    let c = tinybasic::compile(basic).unwrap_or_else(|e| panic!("{}", e));
    let dir = tempfile::tempdir().unwrap();
    let c_path = dir.path().join("out.c");
    std::fs::write(&c_path, &c).unwrap();
    let exe = dir.path().join("out");
    let output = match Command::new(c_compiler()).arg(&c_path).arg("-o").arg(&exe).output() {
        Ok(output) => output,
        Err(_) => {
            eprintln!("no C compiler found, skipping");
            return None;
        }
    };
    assert!(
        output.status.success(),
        "C compile failed:\n{}\n{}",
        String::from_utf8_lossy(&output.stderr),
        c
    );
    Some(Built { _dir: dir, exe })
}

fn c_compiler() -> PathBuf {
    std::env::var_os("CC")
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new("cc").to_path_buf())
}

/// Runs a program to completion with `stdin` and returns what it printed.
pub fn run(basic: &str, stdin: &str) -> Option<String> {
    let built = build(basic)?;
    let mut child = built
        .command()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    Some(String::from_utf8(output.stdout).unwrap())
}

/// Reads the first `n` lines a program prints, then kills it.
pub fn first_lines(basic: &str, n: usize) -> Option<Vec<String>> {
    let built = build(basic)?;
    let mut child: Child = built
        .command()
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    let stdout = child.stdout.take().unwrap();
    let lines = BufReader::new(stdout)
        .lines()
        .take(n)
        .map(|l| l.unwrap())
        .collect();
    let _ = child.kill();
    child.wait().unwrap();
    Some(lines)
}
