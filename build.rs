//! Build script to generate the embedded fallback word list
//!
//! Reads the word list file, validates every entry and generates Rust source
//! code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Shortest word length the game supports
const MIN_LENGTH: usize = 4;
/// Longest word length the game supports
const MAX_LENGTH: usize = 14;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/fallback_words.txt",
        &Path::new(&out_dir).join("fallback.rs"),
        "FALLBACK_WORDS",
        "Offline words used when the remote word service is unavailable",
    );

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed=data/fallback_words.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    for word in &words {
        assert!(
            word.chars().all(|c| c.is_ascii_lowercase()),
            "{input_path}: '{word}' must be lowercase ASCII"
        );
        assert!(
            (MIN_LENGTH..=MAX_LENGTH).contains(&word.len()),
            "{input_path}: '{word}' is outside the supported {MIN_LENGTH}-{MAX_LENGTH} letter range"
        );
    }

    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
