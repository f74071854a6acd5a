// End-to-end index building scenarios
//
// Drives IndexBuilder over a fake document reader and checks the
// persisted index structure, chunk ordering, and failure isolation.

use std::fs;

use crate::common::{FakeReader, TestCorpus};
use pulp::core::error::PulpError;
use pulp::{IndexBuilder, SearchIndex};

#[test]
fn test_two_document_scenario() {
    // Doc A: two small paragraphs packed into one chunk.
    // Doc B: one 2500-char paragraph, hard-split with the default
    // 1100/120 parameters into 3 overlapping windows.
    let corpus = TestCorpus::with_documents(&["a.pdf", "b.pdf"]);
    let big_para = "x".repeat(2500);
    let reader = FakeReader::new()
        .document("a.pdf", &["Para one.\n\nPara two."])
        .document("b.pdf", &[&big_para]);

    let builder = IndexBuilder::new(&corpus.config(), reader).unwrap();
    let stats = builder.run().unwrap();

    assert_eq!(stats.documents_indexed, 2);
    assert_eq!(stats.documents_skipped, 0);
    assert_eq!(stats.chunks_created, 4);

    let written = fs::read_to_string(builder.output_path()).unwrap();
    let index: SearchIndex = serde_json::from_str(&written).unwrap();

    assert_eq!(index.version, 1);
    assert_eq!(index.pdf_meta.len(), 2);
    assert_eq!(index.pdf_meta[0].pdf, "a.pdf");
    assert_eq!(index.pdf_meta[1].pdf, "b.pdf");

    // Order: [A-chunk1, B-chunk1, B-chunk2, B-chunk3]
    let order: Vec<&str> = index.chunks.iter().map(|c| c.pdf.as_str()).collect();
    assert_eq!(order, vec!["a.pdf", "b.pdf", "b.pdf", "b.pdf"]);

    assert_eq!(index.chunks[0].text, "Para one.\n\nPara two.");
    assert_eq!(index.chunks[1].text.len(), 1100);
    assert_eq!(index.chunks[2].text.len(), 1100);
    assert_eq!(index.chunks[3].text.len(), 540);

    // Consecutive hard-split windows share exactly 120 characters.
    assert_eq!(index.chunks[1].text[980..], index.chunks[2].text[..120]);
}

#[test]
fn test_empty_page_contributes_no_chunks() {
    let corpus = TestCorpus::with_documents(&["doc.pdf"]);
    let reader = FakeReader::new().document("doc.pdf", &["", "   \n\n\t ", "actual content"]);

    let builder = IndexBuilder::new(&corpus.config(), reader).unwrap();
    let (index, _) = builder.build().unwrap();

    assert_eq!(index.pdf_meta[0].pages, 3);
    assert_eq!(index.chunks.len(), 1);
    assert_eq!(index.chunks[0].page, 3);
    assert_eq!(index.chunks[0].text, "actual content");
}

#[test]
fn test_empty_input_dir_reports_no_documents() {
    let corpus = TestCorpus::empty();
    let builder = IndexBuilder::new(&corpus.config(), FakeReader::new()).unwrap();

    let err = builder.run().unwrap_err();
    assert!(matches!(err, PulpError::NoDocumentsFound(_)));

    // No output file is written on a fatal error.
    assert!(!builder.output_path().exists());
}

#[test]
fn test_missing_input_dir_reports_missing() {
    let corpus = TestCorpus::empty();
    let mut config = corpus.config();
    config.paths.input_dir = corpus.path().join("does-not-exist");

    let builder = IndexBuilder::new(&config, FakeReader::new()).unwrap();
    let err = builder.run().unwrap_err();
    assert!(matches!(err, PulpError::InputDirMissing(_)));
}

#[test]
fn test_unreadable_document_skipped_run_continues() {
    let corpus = TestCorpus::with_documents(&["broken.pdf", "fine.pdf"]);
    let reader = FakeReader::new()
        .failing_document("broken.pdf")
        .document("fine.pdf", &["a page of text"]);

    let builder = IndexBuilder::new(&corpus.config(), reader).unwrap();
    let stats = builder.run().unwrap();

    assert_eq!(stats.documents_indexed, 1);
    assert_eq!(stats.documents_skipped, 1);

    let written = fs::read_to_string(builder.output_path()).unwrap();
    let index: SearchIndex = serde_json::from_str(&written).unwrap();
    assert_eq!(index.pdf_meta.len(), 1);
    assert_eq!(index.pdf_meta[0].pdf, "fine.pdf");
}

#[test]
fn test_zero_chunk_document_still_in_metadata() {
    // A successfully opened document whose pages are all empty keeps
    // its metadata entry; that is valid per the index invariant.
    let corpus = TestCorpus::with_documents(&["scanned.pdf", "text.pdf"]);
    let reader = FakeReader::new()
        .document("scanned.pdf", &["", ""])
        .document("text.pdf", &["words here"]);

    let builder = IndexBuilder::new(&corpus.config(), reader).unwrap();
    let (index, _) = builder.build().unwrap();

    assert_eq!(index.pdf_meta.len(), 2);
    assert_eq!(index.pdf_meta[0].pdf, "scanned.pdf");
    assert_eq!(index.pdf_meta[0].pages, 2);
    assert!(index.chunks.iter().all(|c| c.pdf == "text.pdf"));
}

#[test]
fn test_every_chunk_document_appears_in_metadata() {
    let corpus = TestCorpus::with_documents(&["one.pdf", "two.pdf", "three.pdf"]);
    let reader = FakeReader::new()
        .document("one.pdf", &["first doc"])
        .document("two.pdf", &["second doc", "more text"])
        .document("three.pdf", &["third doc"]);

    let builder = IndexBuilder::new(&corpus.config(), reader).unwrap();
    let (index, _) = builder.build().unwrap();

    for chunk in &index.chunks {
        assert!(
            index.pdf_meta.iter().any(|m| m.pdf == chunk.pdf),
            "chunk from {} has no metadata entry",
            chunk.pdf
        );
    }
}

#[test]
fn test_output_replaces_prior_file() {
    let corpus = TestCorpus::with_documents(&["doc.pdf"]);
    let config = corpus.config();
    fs::create_dir_all(config.paths.output_path.parent().unwrap()).unwrap();
    fs::write(&config.paths.output_path, "stale contents").unwrap();

    let reader = FakeReader::new().document("doc.pdf", &["fresh text"]);
    let builder = IndexBuilder::new(&config, reader).unwrap();
    builder.run().unwrap();

    let written = fs::read_to_string(&config.paths.output_path).unwrap();
    let index: SearchIndex = serde_json::from_str(&written).unwrap();
    assert_eq!(index.chunks[0].text, "fresh text");
}

#[test]
fn test_non_pdf_files_ignored() {
    let corpus = TestCorpus::with_documents(&["doc.pdf"]);
    fs::write(corpus.path().join("readme.txt"), "ignore me").unwrap();
    fs::write(corpus.path().join("image.png"), [0u8; 8]).unwrap();

    let reader = FakeReader::new().document("doc.pdf", &["page text"]);
    let builder = IndexBuilder::new(&corpus.config(), reader).unwrap();
    let (index, stats) = builder.build().unwrap();

    assert_eq!(stats.documents_indexed, 1);
    assert_eq!(index.pdf_meta.len(), 1);
}

#[test]
fn test_uppercase_extension_matches() {
    let corpus = TestCorpus::with_documents(&["REPORT.PDF"]);
    let reader = FakeReader::new().document("REPORT.PDF", &["shouting text"]);

    let builder = IndexBuilder::new(&corpus.config(), reader).unwrap();
    let (index, _) = builder.build().unwrap();
    assert_eq!(index.pdf_meta[0].pdf, "REPORT.PDF");
}
