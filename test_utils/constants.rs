#![allow(unused)] // Ignore due to all constants not being utilized across all environemnts

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static DOCUMENT_A_FILE_NAME: &str = "document_a.txt";

pub static DOCUMENT_B_FILE_NAME: &str = "document_b.txt";

pub static EXPECTED_FILE_NAME: &str = "expected.txt";
