//! Machine-readable output: one array of findings, each with the identifier,
//! title and category a build host needs to register the descriptor.

use std::io::{self, Write};

use serde::Serialize;

use crate::{Diagnostic, Hint};

use super::DiagnosticEmitter;

#[derive(Serialize)]
struct Record {
    code: &'static str,
    title: &'static str,
    category: &'static str,
    severity: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<Location>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    hints: Vec<HintRecord>,
}

#[derive(Serialize)]
struct Location {
    start: u32,
    end: u32,
    detail: String,
}

#[derive(Serialize)]
struct HintRecord {
    kind: &'static str,
    text: String,
}

impl From<&Diagnostic> for Record {
    fn from(diagnostic: &Diagnostic) -> Self {
        Record {
            code: diagnostic.code.as_str(),
            title: diagnostic.code.title(),
            category: diagnostic.code.category(),
            severity: diagnostic.severity.as_str(),
            message: diagnostic.message.clone(),
            location: diagnostic.location.map(|span| Location {
                start: span.start,
                end: span.end,
                detail: diagnostic.detail.clone(),
            }),
            hints: diagnostic.hints.iter().map(HintRecord::from).collect(),
        }
    }
}

impl From<&Hint> for HintRecord {
    fn from(hint: &Hint) -> Self {
        HintRecord {
            kind: hint.kind(),
            text: hint.text().to_owned(),
        }
    }
}

/// Buffers every finding and writes the array on [`finish`](DiagnosticEmitter::finish).
pub struct JsonEmitter<W: Write> {
    writer: W,
    records: Vec<Record>,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.records.push(Record::from(diagnostic));
    }

    fn finish(&mut self) -> io::Result<()> {
        let records = std::mem::take(&mut self.records);
        serde_json::to_writer_pretty(&mut self.writer, &records)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}
