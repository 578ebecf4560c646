//! Renders similar passages as plain text, JSON or CSV reports.

use crate::SimilarPassage;
use serde::Serialize;
use std::io::{self, Write};

pub const NO_SIMILARITIES_MESSAGE: &str = "No similarities found between file 1 and file 2.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
}

#[derive(Serialize)]
struct CsvRow<'a> {
    similarity: usize,
    text_a: &'a str,
    text_b: &'a str,
    span_a_start: usize,
    span_a_end: usize,
    span_b_start: usize,
    span_b_end: usize,
}

impl<'a> From<&'a SimilarPassage> for CsvRow<'a> {
    fn from(passage: &'a SimilarPassage) -> Self {
        Self {
            similarity: passage.similarity,
            text_a: &passage.text_a,
            text_b: &passage.text_b,
            span_a_start: passage.span_a.start,
            span_a_end: passage.span_a.end,
            span_b_start: passage.span_b.start,
            span_b_end: passage.span_b.end,
        }
    }
}

/// Writes the report in the requested format.
pub fn write_report<W: Write>(
    writer: W,
    passages: &[SimilarPassage],
    format: ReportFormat,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => write_text_report(writer, passages),
        ReportFormat::Json => write_json_report(writer, passages).map_err(io::Error::from),
        ReportFormat::Csv => write_csv_report(writer, passages).map_err(io::Error::from),
    }
}

/// One block per passage pair, most similar first.
pub fn write_text_report<W: Write>(mut writer: W, passages: &[SimilarPassage]) -> io::Result<()> {
    if passages.is_empty() {
        writeln!(writer, "{}", NO_SIMILARITIES_MESSAGE)?;
        return Ok(());
    }

    for passage in passages {
        writeln!(
            writer,
            "There are {} similar words between the following:",
            passage.similarity
        )?;
        writeln!(writer, "    '{}'", passage.text_a)?;
        writeln!(writer, "    '{}'", passage.text_b)?;
        writeln!(writer)?;
    }

    Ok(())
}

/// A JSON array; empty when there are no similarities.
pub fn write_json_report<W: Write>(
    mut writer: W,
    passages: &[SimilarPassage],
) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut writer, passages)?;
    writeln!(writer).map_err(serde_json::Error::io)
}

/// A header row followed by one row per passage pair.
pub fn write_csv_report<W: Write>(writer: W, passages: &[SimilarPassage]) -> csv::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record([
        "similarity",
        "text_a",
        "text_b",
        "span_a_start",
        "span_a_end",
        "span_b_start",
        "span_b_end",
    ])?;

    for passage in passages {
        csv_writer.serialize(CsvRow::from(passage))?;
    }

    csv_writer.flush()?;

    Ok(())
}
