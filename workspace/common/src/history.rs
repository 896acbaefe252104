use crate::format::{format_amount, CURRENCY_SYMBOL};
use crate::prediction::SpendInputs;
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;
use tracing::debug;

/// Name of the downloaded export file.
pub const EXPORT_FILE_NAME: &str = "prediction_history.csv";

/// MIME type of the downloaded export file.
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// Header row of the CSV export.
pub const CSV_HEADER: [&str; 5] = [
    "timestamp",
    "rd_spend",
    "administration",
    "marketing_spend",
    "prediction",
];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("No history to export")]
    EmptyHistory,
    #[error("Failed to write CSV: {0}")]
    Write(String),
}

/// One successful prediction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub input: SpendInputs,
    pub prediction: f64,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// ISO-8601 UTC timestamp with millisecond precision, e.g. `2024-05-01T10:00:00.000Z`.
    pub fn iso_timestamp(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Line shown in the history list, with the timestamp rendered in `tz`.
    pub fn display_line<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let local = self.timestamp.with_timezone(tz);
        format!(
            "{} — {sym}{} + {sym}{} + {sym}{} → {sym} {}",
            local.format("%-m/%-d/%Y, %-I:%M:%S %p"),
            self.input.rd_spend,
            self.input.administration,
            self.input.marketing_spend,
            format_amount(self.prediction),
            sym = CURRENCY_SYMBOL,
        )
    }

    fn csv_cells(&self) -> [String; 5] {
        [
            self.iso_timestamp(),
            self.input.rd_spend.to_string(),
            self.input.administration.to_string(),
            self.input.marketing_spend.to_string(),
            self.prediction.to_string(),
        ]
    }
}

/// Append-only, in-memory record of the predictions made during this page session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionHistory {
    entries: Vec<HistoryEntry>,
}

impl PredictionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a prediction after all existing entries and return the new entry.
    pub fn record(
        &mut self,
        input: SpendInputs,
        prediction: f64,
        timestamp: DateTime<Utc>,
    ) -> &HistoryEntry {
        self.entries.push(HistoryEntry {
            input,
            prediction,
            timestamp,
        });
        debug!("History now holds {} entries", self.entries.len());
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the whole history as CSV: a header row followed by one row per entry.
    pub fn to_csv(&self) -> Result<String, ExportError> {
        if self.entries.is_empty() {
            return Err(ExportError::EmptyHistory);
        }

        let header = CSV_HEADER.map(String::from);
        let rows = self.entries.iter().map(HistoryEntry::csv_cells);
        csv_text(std::iter::once(header).chain(rows))
    }
}

/// Every cell quoted, rows joined by `\n` with no trailing newline.
fn csv_text<I, R>(rows: I) -> Result<String, ExportError>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| ExportError::Write(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Write(e.to_string()))?;
    let mut text = String::from_utf8(bytes).map_err(|e| ExportError::Write(e.to_string()))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn inputs(rd: f64, admin: f64, market: f64) -> SpendInputs {
        SpendInputs {
            rd_spend: rd,
            administration: admin,
            marketing_spend: market,
        }
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn record_appends_in_insertion_order() {
        let mut history = PredictionHistory::new();
        history.record(inputs(1.0, 2.0, 3.0), 10.0, at(10));
        history.record(inputs(4.0, 5.0, 6.0), 20.0, at(9));

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].prediction, 10.0);
        assert_eq!(history.entries()[1].prediction, 20.0);
    }

    #[test]
    fn empty_history_refuses_export() {
        let history = PredictionHistory::new();
        assert_eq!(history.to_csv(), Err(ExportError::EmptyHistory));
        assert_eq!(ExportError::EmptyHistory.to_string(), "No history to export");
    }

    #[test]
    fn csv_has_header_plus_one_row_per_entry() {
        let mut history = PredictionHistory::new();
        history.record(inputs(165349.2, 136897.8, 471784.1), 191792.06, at(10));
        history.record(inputs(1000.0, 0.0, 250.5), 4242.0, at(11));
        history.record(inputs(1.0, 1.0, 1.0), -3.5, at(12));

        let csv = history.to_csv().unwrap();
        let lines: Vec<&str> = csv.split('\n').collect();

        assert_eq!(lines.len(), history.len() + 1);
        assert_eq!(
            lines[0],
            r#""timestamp","rd_spend","administration","marketing_spend","prediction""#
        );
        assert_eq!(
            lines[1],
            r#""2024-05-01T10:00:00.000Z","165349.2","136897.8","471784.1","191792.06""#
        );
        assert_eq!(
            lines[2],
            r#""2024-05-01T11:00:00.000Z","1000","0","250.5","4242""#
        );
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let text = csv_text([["a\"b", "c"], ["d", "e,f"]]).unwrap();
        assert_eq!(text, "\"a\"\"b\",\"c\"\n\"d\",\"e,f\"");
    }

    #[test]
    fn display_line_formats_inputs_and_prediction() {
        let mut history = PredictionHistory::new();
        let entry = history.record(inputs(1000.0, 2000.5, 300.0), 123456.789, at(14));

        assert_eq!(
            entry.display_line(&Utc),
            "5/1/2024, 2:00:00 PM — ₹1000 + ₹2000.5 + ₹300 → ₹ 123,456.79"
        );
    }
}
