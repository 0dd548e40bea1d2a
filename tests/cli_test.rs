use assert_cmd::cargo;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

fn source_file(dir: &tempfile::TempDir, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn compile_when_valid_file_then_writes_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let source = source_file(&dir, "hello.bas", "PRINT \"hello\"\n");
    let output = dir.path().join("build").join("hello.c");

    let mut cmd = Command::new(cargo::cargo_bin!("tinybasic"));
    cmd.arg(&source).arg("-o").arg(&output);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Tiny BASIC Compiler"))
        .stdout(predicate::str::contains("Compiling completed."));

    let c = fs::read_to_string(&output)?;
    assert!(c.contains("printf(\"hello\\n\");"));
    Ok(())
}

#[test]
fn compile_when_no_output_flag_then_writes_out_c() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let source = source_file(&dir, "a.bas", "LET a = 1\n");

    let mut cmd = Command::new(cargo::cargo_bin!("tinybasic"));
    cmd.current_dir(dir.path()).arg(&source);
    cmd.assert().success();

    assert!(dir.path().join("out.c").exists());
    Ok(())
}

#[test]
fn compile_when_no_arguments_then_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo::cargo_bin!("tinybasic"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn compile_when_two_sources_then_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo::cargo_bin!("tinybasic"));
    cmd.arg("a.bas").arg("b.bas");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Tiny BASIC Compiler").not());
    Ok(())
}

#[test]
fn compile_when_not_a_file_then_err() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = Command::new(cargo::cargo_bin!("tinybasic"));
    cmd.arg(dir.path().join("missing.bas"))
        .arg("-o")
        .arg(dir.path().join("out.c"));
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("DISK I/O ERROR"));
    Ok(())
}

#[test]
fn compile_when_undeclared_variable_then_err_and_no_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let source = source_file(&dir, "bad.bas", "PRINT x\n");
    let output = dir.path().join("bad.c");

    let mut cmd = Command::new(cargo::cargo_bin!("tinybasic"));
    cmd.arg(&source).arg("-o").arg(&output);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("REFERENCING VARIABLE BEFORE ASSIGNMENT: x"))
        .stdout(predicate::str::contains("Compiling completed.").not());

    assert!(!output.exists());
    Ok(())
}

#[test]
fn compile_when_duplicate_label_then_err() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let source = source_file(&dir, "dup.bas", "LABEL a\nLABEL a\n");

    let mut cmd = Command::new(cargo::cargo_bin!("tinybasic"));
    cmd.arg(&source).arg("-o").arg(dir.path().join("dup.c"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DUPLICATE LABEL"));
    Ok(())
}

#[test]
fn compile_when_too_verbose_then_err() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let source = source_file(&dir, "a.bas", "LET a = 1\n");

    let mut cmd = Command::new(cargo::cargo_bin!("tinybasic"));
    cmd.arg("-vvvvv").arg(&source);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("verbose"));
    Ok(())
}

#[test]
fn compile_when_reserved_name_then_err_and_no_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let source = source_file(&dir, "int.bas", "LET int = 1\n");
    let output = dir.path().join("int.c");

    let mut cmd = Command::new(cargo::cargo_bin!("tinybasic"));
    cmd.arg(&source).arg("-o").arg(&output);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("RESERVED NAME: int"));

    assert!(!output.exists());
    Ok(())
}
