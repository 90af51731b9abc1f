//! End-to-end conversion over in-memory documents: export parsing, span
//! alignment and corpus assembly, without any file I/O.

use doc2conll_core::{align, assemble_corpus, document, parse_export, TaggedToken};

fn tag_document(text: &str, labels: &[doc2conll_core::LabelSpan]) -> Vec<TaggedToken> {
    let tokens = document::tokenize_text(text);
    let lengths = document::token_lengths(&tokens);
    let tags = align(&lengths, labels).unwrap();
    tokens
        .iter()
        .zip(tags)
        .map(|(token, tag)| TaggedToken {
            text: token.to_string(),
            tag,
        })
        .collect()
}

#[test]
fn export_to_corpus_round_trip() {
    let export = concat!(
        "{\"text\":\"太郎 は 東京 へ 行った\",\"labels\":[[0,2,\"PER\"],[5,7,\"LOC\"]]}\n",
        "{\"text\":\"AB C DEF\",\"labels\":[[0,4,\"PER\"]]}\n",
        "{\"text\":\"X | Y\"}\n",
    );
    let records = parse_export(export).unwrap();
    assert_eq!(records.len(), 3);

    let documents: Vec<Vec<TaggedToken>> = records
        .iter()
        .map(|record| tag_document(&record.text, &record.labels))
        .collect();

    // Tag-stripped tokens joined by spaces reproduce each source text.
    for (record, tagged) in records.iter().zip(&documents) {
        let tokens: Vec<&str> = tagged.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(document::reconstruct_text(&tokens), record.text);
    }

    let corpus = assemble_corpus(&documents);
    let expected = "\
-DOCSTART- O
太郎 B-PER
は O
東京 B-LOC
へ O
行った O
-DOCSTART- O
AB B-PER
C I-PER
DEF O
-DOCSTART- O
X O

Y O";
    assert_eq!(corpus, expected);
}

#[test]
fn unlabeled_document_is_all_outside() {
    let records = parse_export("{\"text\":\"a b c\"}\n").unwrap();
    let tagged = tag_document(&records[0].text, &records[0].labels);
    assert_eq!(tagged.len(), 3);
    assert!(tagged.iter().all(|t| t.tag.is_outside()));
}
