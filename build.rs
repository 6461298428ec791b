//! Build script to embed the default word lists
//!
//! Embeds the word list files as byte constants and records their word
//! counts, so the binary runs without any files next to it.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();

    // Valid guesses (superset of the solutions)
    embed_word_list(
        &Path::new(&manifest_dir).join("data/words.txt"),
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "Every word accepted as a guess",
    );

    // Solution candidates
    embed_word_list(
        &Path::new(&manifest_dir).join("data/solutions.txt"),
        &Path::new(&out_dir).join("solutions.rs"),
        "SOLUTIONS",
        "Words a solution is drawn from",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/words.txt");
    println!("cargo:rerun-if-changed=data/solutions.txt");
}

fn embed_word_list(input_path: &Path, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", input_path.display()));

    let count = content.lines().filter(|line| !line.is_empty()).count();

    for line in content.lines().filter(|line| !line.is_empty()) {
        if line.len() != 5 || !line.bytes().all(|b| b.is_ascii_lowercase()) {
            println!(
                "cargo:warning={} holds '{line}', which is not five lowercase letters",
                input_path.display()
            );
        }
    }

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} (newline-delimited)").unwrap();
    writeln!(
        output,
        "pub const {const_name}: &[u8] = include_bytes!({:?});",
        input_path.display().to_string()
    )
    .unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
