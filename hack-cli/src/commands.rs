//! CLI command implementations.

use std::fs;
use std::path::{Path, PathBuf};

use hack_assembler::Assembler;
use hack_common::Program;
use hack_vm::CycleBudget;
use log::debug;
use serde::Serialize;

/// Assemble a .asm file to .hack binary text.
pub fn assemble(input: &Path, output: Option<&Path>) -> Result<(), i32> {
    check_extension(input, &["asm"])?;
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| input.with_extension("hack"));

    let lines = read_lines(input)?;
    let mut assembler = Assembler::new();
    let program = assembler.assemble(&lines).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;
    debug!("{} symbols bound", assembler.symbols().len());

    fs::write(&output, program.encode()).map_err(|e| {
        eprintln!("error: cannot write '{}': {e}", output.display());
        1
    })?;

    eprintln!(
        "assembled {} instructions -> {}",
        program.len(),
        output.display()
    );
    Ok(())
}

/// Disassemble a .hack file to assembly text.
pub fn disassemble(input: &Path, output: Option<&Path>) -> Result<(), i32> {
    check_extension(input, &["hack"])?;
    let lines = read_lines(input)?;
    let program = Program::decode(&lines).map_err(|e| {
        eprintln!("error: invalid binary: {e}");
        1
    })?;
    let text = hack_assembler::disassemble(&program);

    match output {
        Some(path) => fs::write(path, &text).map_err(|e| {
            eprintln!("error: cannot write '{}': {e}", path.display());
            1
        }),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}

/// Execute a .hack or .asm file and write the memory image next to it.
pub fn execute(input: &Path, cycles: i64) -> Result<(), i32> {
    let extension = check_extension(input, &["hack", "asm"])?;
    let is_source = extension == "asm";

    let budget = CycleBudget::try_from(cycles).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    let lines = read_lines(input)?;
    let image = hack_vm::execute(&lines, budget, is_source).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    let output = image_path(input);
    let json = to_pretty_json(&image).map_err(|e| {
        eprintln!("error: cannot serialize memory image: {e}");
        1
    })?;
    fs::write(&output, json).map_err(|e| {
        eprintln!("error: cannot write '{}': {e}", output.display());
        1
    })?;

    eprintln!(
        "wrote {} memory cells -> {}",
        image.len(),
        output.display()
    );
    Ok(())
}

// --- Helpers ---

/// Check the input's extension (case-insensitive) against `allowed` and
/// return it lowercased.
fn check_extension(path: &Path, allowed: &[&str]) -> Result<String, i32> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if allowed.contains(&extension.as_str()) {
        return Ok(extension);
    }

    let expected: Vec<String> = allowed.iter().map(|e| format!(".{e}")).collect();
    eprintln!(
        "error: '{}' must have extension {}",
        path.display(),
        expected.join(" or ")
    );
    Err(1)
}

fn read_lines(path: &Path) -> Result<Vec<String>, i32> {
    let text = fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read '{}': {e}", path.display());
        1
    })?;
    Ok(text.lines().map(str::to_string).collect())
}

/// The memory image sidecar: same path, `.json` extension.
fn image_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

/// Serialize with 4-space indentation and a trailing newline.
fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}
