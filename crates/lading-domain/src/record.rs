//! Record module - extraction output per chunk

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Document types the pipeline can classify.
///
/// The set is fixed; anything the model answers outside of it maps to
/// `Unknown`. Each type carries a fixed field schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Commercial invoice
    Invoice,
    /// Bill of lading
    BillOfLading,
    /// Certificate (of origin, quality, quantity, ...)
    Certificate,
    /// Unclassifiable
    Unknown,
}

impl DocumentType {
    /// Get the type name as a string (also the output-file label)
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Invoice => "invoice",
            DocumentType::BillOfLading => "bill_of_lading",
            DocumentType::Certificate => "certificate",
            DocumentType::Unknown => "unknown",
        }
    }

    /// Parse an exact type label
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "invoice" => Some(DocumentType::Invoice),
            "bill_of_lading" => Some(DocumentType::BillOfLading),
            "certificate" => Some(DocumentType::Certificate),
            "unknown" => Some(DocumentType::Unknown),
            _ => None,
        }
    }

    /// Classify a free-form model answer onto the fixed set.
    ///
    /// Tolerates case, surrounding whitespace, and wordier labels such as
    /// "Commercial Invoice" or "Certificate of Origin". Anything
    /// unrecognized is `Unknown`.
    pub fn classify(raw: &str) -> Self {
        let normalized = raw
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");

        if normalized.contains("bill_of_lading") || normalized == "bol" {
            DocumentType::BillOfLading
        } else if normalized.contains("invoice") {
            DocumentType::Invoice
        } else if normalized.contains("certificate") {
            DocumentType::Certificate
        } else {
            DocumentType::Unknown
        }
    }

    /// The fixed field schema for this document type
    pub fn field_schema(&self) -> &'static [&'static str] {
        match self {
            DocumentType::Invoice => &[
                "invoice_number",
                "issue_date",
                "due_date",
                "buyer",
                "seller",
                "total_amount_usd",
            ],
            DocumentType::BillOfLading => &[
                "vessel_name",
                "bbl_quantity",
                "bl_date",
                "port_of_loading",
                "port_of_discharge",
            ],
            DocumentType::Certificate => &["vessel_name", "issue_date", "port_of_loading"],
            DocumentType::Unknown => &[],
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one chunk's extraction attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    /// Model answered and the response parsed (fields may still be partial)
    Ok,
    /// Model answered but the response was structurally unparseable
    ParseFailed,
    /// The model call itself failed or timed out
    ModelError,
}

impl RecordStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Ok => "ok",
            RecordStatus::ParseFailed => "parse_failed",
            RecordStatus::ModelError => "model_error",
        }
    }
}

/// Structured extraction output for one chunk.
///
/// Exactly one record exists per chunk attempted; failed chunks get a
/// record with a non-`Ok` status rather than vanishing. Never mutated
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    /// The chunk this record belongs to
    pub chunk_id: usize,

    /// Classified document type
    pub document_type: DocumentType,

    /// Extracted field values, keyed by schema field name.
    /// Missing fields are simply absent; empty on failure.
    pub fields: BTreeMap<String, String>,

    /// Outcome of the extraction attempt
    pub status: RecordStatus,
}

impl ExtractedRecord {
    /// A successful record
    pub fn ok(chunk_id: usize, document_type: DocumentType, fields: BTreeMap<String, String>) -> Self {
        Self {
            chunk_id,
            document_type,
            fields,
            status: RecordStatus::Ok,
        }
    }

    /// A record for a chunk whose model response was unparseable
    pub fn parse_failed(chunk_id: usize) -> Self {
        Self {
            chunk_id,
            document_type: DocumentType::Unknown,
            fields: BTreeMap::new(),
            status: RecordStatus::ParseFailed,
        }
    }

    /// A record for a chunk whose model call failed
    pub fn model_error(chunk_id: usize) -> Self {
        Self {
            chunk_id,
            document_type: DocumentType::Unknown,
            fields: BTreeMap::new(),
            status: RecordStatus::ModelError,
        }
    }

    /// Whether extraction succeeded for this chunk
    pub fn is_ok(&self) -> bool {
        self.status == RecordStatus::Ok
    }
}
