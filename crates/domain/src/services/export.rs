//! Inquiry spreadsheet export.
//!
//! Produces RFC 4180 CSV that opens cleanly in Excel: UTF-8 with a byte order
//! mark, CRLF record terminators and Korean column headers.

use std::collections::{HashMap, HashSet};

use chrono::FixedOffset;
use csv::{Terminator, WriterBuilder};
use shared::phone::format_phone_number;
use thiserror::Error;

use crate::models::Inquiry;

/// UTF-8 byte order mark.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Column headers, in output order.
pub const INQUIRY_EXPORT_HEADERS: [&str; 7] = [
    "문의유형",
    "회사명",
    "담당자",
    "연락처",
    "이메일",
    "문의내용",
    "접수일시",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to finish CSV output: {0}")]
    Flush(String),
}

/// Result of matching a selection of ids against loaded inquiries.
#[derive(Debug, Default)]
pub struct ArrangedSelection {
    /// Inquiries in selection order, each at most once.
    pub inquiries: Vec<Inquiry>,
    /// Selected ids with no matching inquiry.
    pub missing: Vec<i64>,
}

/// Orders loaded inquiries by the operator's selection.
///
/// Duplicate ids keep their first position.
pub fn arrange_by_selection(ids: &[i64], inquiries: Vec<Inquiry>) -> ArrangedSelection {
    let mut by_id: HashMap<i64, Inquiry> = inquiries.into_iter().map(|i| (i.id, i)).collect();
    let mut seen = HashSet::with_capacity(ids.len());
    let mut arranged = ArrangedSelection::default();

    for &id in ids {
        if !seen.insert(id) {
            continue;
        }
        match by_id.remove(&id) {
            Some(inquiry) => arranged.inquiries.push(inquiry),
            None => arranged.missing.push(id),
        }
    }

    arranged
}

/// Renders inquiries as CSV, timestamps shown at `offset`.
pub fn export_inquiries_csv(
    inquiries: &[Inquiry],
    offset: FixedOffset,
) -> Result<Vec<u8>, ExportError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(UTF8_BOM.to_vec());

    writer.write_record(INQUIRY_EXPORT_HEADERS)?;

    for inquiry in inquiries {
        let phone = format_phone_number(&inquiry.phone);
        let created_at = inquiry
            .created_at
            .with_timezone(&offset)
            .format(TIMESTAMP_FORMAT)
            .to_string();

        writer.write_record([
            inquiry.category.label(),
            inquiry.company.as_str(),
            inquiry.name.as_str(),
            phone.as_str(),
            inquiry.email.as_str(),
            inquiry.message.as_str(),
            created_at.as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.error().to_string()))
}
