//! Integration tests for the extraction pipeline

#[cfg(test)]
mod tests {
    use crate::{chunk_pages, ExtractorConfig, FieldExtractor, KeywordBoundary};
    use lading_domain::traits::LanguageModel;
    use lading_domain::{DocumentType, Page, RecordStatus};
    use lading_llm::MockModel;

    fn bundle() -> Vec<Page> {
        vec![
            Page::new(0, "COMMERCIAL INVOICE\nInvoice No. 123\nSeller: Brent Trading Ltd.\nTotal Amount (USD): 500"),
            Page::new(1, "cont'd: payment due within 30 days of the bill of lading date stated above"),
            Page::new(2, "CERTIFICATE OF ORIGIN\nVessel: MT AURORA\nPort of Loading: Ras Tanura"),
        ]
    }

    #[tokio::test]
    async fn test_one_record_per_chunk() {
        let pages = bundle();
        let chunks = chunk_pages(&pages, &KeywordBoundary::default());
        assert_eq!(chunks.len(), 2);

        let model = MockModel::new(r#"{"document_type": "Invoice", "invoice_number": "123"}"#);
        let extractor = FieldExtractor::new(model, ExtractorConfig::default());

        let records = extractor.extract_all(&pages, &chunks).await;
        assert_eq!(records.len(), chunks.len());
        for (record, chunk) in records.iter().zip(&chunks) {
            assert_eq!(record.chunk_id, chunk.id);
        }
    }

    #[tokio::test]
    async fn test_well_formed_response_yields_ok_record() {
        let pages = bundle();
        let chunks = chunk_pages(&pages, &KeywordBoundary::default());

        let model = MockModel::new(
            r#"{"document_type": "Invoice", "invoice_number": "123", "total_amount_usd": "500"}"#,
        );
        let extractor = FieldExtractor::new(model, ExtractorConfig::default());

        let record = extractor.extract_chunk(&pages, &chunks[0]).await;
        assert_eq!(record.status, RecordStatus::Ok);
        assert_eq!(record.document_type, DocumentType::Invoice);
        assert_eq!(record.fields.get("invoice_number").unwrap(), "123");
        assert_eq!(record.fields.get("total_amount_usd").unwrap(), "500");
    }

    #[tokio::test]
    async fn test_unparseable_response_yields_parse_failed() {
        let pages = bundle();
        let chunks = chunk_pages(&pages, &KeywordBoundary::default());

        let model = MockModel::new("I am sorry, I cannot help with that.");
        let extractor = FieldExtractor::new(model, ExtractorConfig::default());

        let records = extractor.extract_all(&pages, &chunks).await;
        for record in &records {
            assert_eq!(record.status, RecordStatus::ParseFailed);
            assert_eq!(record.document_type, DocumentType::Unknown);
            assert!(record.fields.is_empty());
        }
    }

    #[tokio::test]
    async fn test_failed_call_yields_model_error_and_isolates_chunks() {
        let pages = bundle();
        let chunks = chunk_pages(&pages, &KeywordBoundary::default());

        // Fail only the second chunk's call; key the error by its exact prompt.
        let failing_prompt =
            crate::prompt::PromptBuilder::for_chunk(&pages, &chunks[1]).build();
        let mut model =
            MockModel::new(r#"{"document_type": "Invoice", "invoice_number": "123"}"#);
        model.add_error(failing_prompt);

        let extractor = FieldExtractor::new(model, ExtractorConfig::default());
        let records = extractor.extract_all(&pages, &chunks).await;

        assert_eq!(records[0].status, RecordStatus::Ok);
        assert_eq!(records[1].status, RecordStatus::ModelError);
        assert_eq!(records[1].document_type, DocumentType::Unknown);
        assert!(records[1].fields.is_empty());
    }

    #[tokio::test]
    async fn test_timed_out_call_yields_model_error() {
        struct StalledModel;

        impl LanguageModel for StalledModel {
            type Error = std::convert::Infallible;

            fn complete(&self, _prompt: &str) -> Result<String, Self::Error> {
                std::thread::sleep(std::time::Duration::from_secs(3));
                Ok("too late".to_string())
            }
        }

        let pages = bundle();
        let chunks = chunk_pages(&pages, &KeywordBoundary::default());

        let mut config = ExtractorConfig::default();
        config.call_timeout_secs = 1;
        let extractor = FieldExtractor::new(StalledModel, config);

        let record = extractor.extract_chunk(&pages, &chunks[1]).await;
        assert_eq!(record.status, RecordStatus::ModelError);
        assert_eq!(record.document_type, DocumentType::Unknown);
        assert!(record.fields.is_empty());
    }

    #[tokio::test]
    async fn test_extraction_is_idempotent_with_deterministic_model() {
        let pages = bundle();
        let chunks = chunk_pages(&pages, &KeywordBoundary::default());

        let model = MockModel::new(
            r#"{"document_type": "Certificate", "issue_date": "2024-06-12", "vessel_name": "MT AURORA"}"#,
        );
        let extractor = FieldExtractor::new(model, ExtractorConfig::default());

        let first = extractor.extract_all(&pages, &chunks).await;
        let second = extractor.extract_all(&pages, &chunks).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_one_model_call_per_chunk() {
        let pages = bundle();
        let chunks = chunk_pages(&pages, &KeywordBoundary::default());

        let model = MockModel::new(r#"{"document_type": "Invoice"}"#);
        let counter = model.clone();
        let extractor = FieldExtractor::new(model, ExtractorConfig::default());

        extractor.extract_all(&pages, &chunks).await;
        assert_eq!(counter.call_count(), chunks.len());
    }
}
