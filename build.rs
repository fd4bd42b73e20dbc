//! Build script to generate embedded alphabets
//!
//! Reads every `data/alphabets/*.tsv` file and generates a Rust table of its
//! case pairs, keyed by file stem.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const ALPHABET_DIR: &str = "data/alphabets";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("alphabets.rs");

    let mut sources: Vec<PathBuf> = fs::read_dir(ALPHABET_DIR)
        .unwrap_or_else(|e| panic!("Failed to read {ALPHABET_DIR}: {e}"))
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "tsv"))
        .collect();
    sources.sort();

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated alphabet table").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Built-in alphabets as `(name, [(lower, upper)])`, sorted by name").unwrap();
    writeln!(output, "pub const BUILTIN_ALPHABETS: &[(&str, &[(&str, &str)])] = &[").unwrap();

    for path in &sources {
        let name = path.file_stem().unwrap().to_string_lossy();
        writeln!(output, "    ({name:?}, &[").unwrap();
        for (lower, upper) in read_pairs(path) {
            writeln!(output, "        ({lower:?}, {upper:?}),").unwrap();
        }
        writeln!(output, "    ]),").unwrap();
    }

    writeln!(output, "];").unwrap();

    println!("cargo:rerun-if-changed={ALPHABET_DIR}");
    for path in &sources {
        println!("cargo:rerun-if-changed={}", path.display());
    }
}

fn read_pairs(path: &Path) -> Vec<(String, String)> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));

    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.is_empty())
        .map(|(number, line)| match line.split_once('\t') {
            Some((lower, upper)) if !upper.contains('\t') => (lower.to_string(), upper.to_string()),
            _ => panic!("{}:{number}: expected exactly one tab", path.display()),
        })
        .collect()
}
