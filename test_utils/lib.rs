pub mod constants;

use constants::{
    DOCUMENT_A_FILE_NAME, DOCUMENT_B_FILE_NAME, EXPECTED_FILE_NAME, TEST_FILES_DIRECTORY,
};
use std::fs;
use std::path::PathBuf;

/// Directory holding the `document_a.txt` / `document_b.txt` / `expected.txt` trio of a
/// fixture.
pub fn fixture_directory(fixture_name: &str) -> PathBuf {
    TEST_FILES_DIRECTORY.join(fixture_name)
}

/// Loads both documents of a fixture, with line breaks converted to spaces.
pub fn load_document_pair(fixture_name: &str) -> (String, String) {
    let directory = fixture_directory(fixture_name);

    let read = |file_name: &str| {
        let path = directory.join(file_name);
        fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("Failed to read {}: {}", path.display(), err))
            .replace(['\n', '\r'], " ")
    };

    (read(DOCUMENT_A_FILE_NAME), read(DOCUMENT_B_FILE_NAME))
}

// Helper function to get the expected similarities from a fixture's `expected.txt`
//
// Lines look like `EXPECTED: 16`; `EXPECTED: NONE` means no similar passages.
pub fn get_expected_similarities(fixture_name: &str) -> Vec<usize> {
    let path = fixture_directory(fixture_name).join(EXPECTED_FILE_NAME);
    let content = fs::read_to_string(&path).expect("Failed to read expected file");

    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            line.strip_prefix("EXPECTED:").map(str::trim)
        })
        .filter(|value| *value != "NONE")
        .map(|value| {
            value
                .parse::<usize>()
                .unwrap_or_else(|_| panic!("Invalid expected similarity: {}", value))
        })
        .collect()
}

/// Generates `count` distinct words such as `word0 word1 ...`.
pub fn numbered_words(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{}{}", prefix, i)).collect()
}

pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}
