//! Prompt engineering for document classification and field extraction

use lading_domain::{Chunk, Page};

/// Builds the fixed extraction prompt for one chunk
pub struct PromptBuilder<'a> {
    pages: &'a [Page],
}

impl<'a> PromptBuilder<'a> {
    /// Build a prompt over the chunk's page range
    pub fn for_chunk(pages: &'a [Page], chunk: &Chunk) -> Self {
        Self {
            pages: pages.get(chunk.start..=chunk.end).unwrap_or(&[]),
        }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        prompt.push_str("Document text:\n");
        for page in self.pages {
            prompt.push_str(&format!("--- page {} ---\n", page.index));
            prompt.push_str(page.text.trim());
            prompt.push('\n');
        }
        prompt.push_str("--- end of document ---\n\n");

        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

const EXTRACTION_INSTRUCTIONS: &str = r#"You are a document parser for oil trading paperwork.

Analyze the document text below. Classify the document and extract the listed fields into this JSON shape:

{
  "document_type": "Invoice | Bill of Lading | Certificate",
  "invoice_number": "",
  "issue_date": "",
  "due_date": "",
  "buyer": "",
  "seller": "",
  "total_amount_usd": "",
  "vessel_name": "",
  "bbl_quantity": "",
  "bl_date": "",
  "port_of_loading": "",
  "port_of_discharge": ""
}

Rules:
- Copy values exactly as they appear in the text
- Leave a field as an empty string when the document does not carry it
- Pages are delimited by "--- page N ---" markers; the document may span several pages"#;

const OUTPUT_FORMAT_REMINDER: &str =
    "Respond ONLY with the JSON object, no markdown code blocks, no explanations.";
