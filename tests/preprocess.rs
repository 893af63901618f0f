use gene_miner::data::{
    documents::{load_text_files, Document},
    preprocess::{clean_text, process_documents, split_sentences},
};

#[test]
fn splits_on_terminal_punctuation_and_blank_lines() {
    let text = "BRCA1 is a tumour suppressor. Is TP53 involved?\n\nYes!  Trailing fragment";
    assert_eq!(
        split_sentences(text),
        vec![
            "BRCA1 is a tumour suppressor.",
            "Is TP53 involved?",
            "Yes!",
            "Trailing fragment",
        ]
    );
    assert!(split_sentences("   ").is_empty());
}

#[test]
fn cleaning_lowercases_and_strips_punctuation() {
    assert_eq!(
        clean_text("  HLA-B*5801 (allele)\tlinked to   Stevens-Johnson syndrome. "),
        "hla-b 5801 allele linked to stevens-johnson syndrome"
    );
}

#[test]
fn documents_become_cleaned_sentences_in_order() {
    let docs = vec![
        Document {
            file_name: "a.txt".into(),
            text: "CFTR causes Cystic Fibrosis. ...".into(),
        },
        Document {
            file_name: "b.txt".into(),
            text: "HTT repeats drive Huntington's disease.".into(),
        },
    ];
    let rows = process_documents(&docs);
    let flat: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.file_name.as_str(), r.sentence.as_str()))
        .collect();
    assert_eq!(
        flat,
        vec![
            ("a.txt", "cftr causes cystic fibrosis"),
            ("b.txt", "htt repeats drive huntington s disease"),
        ]
    );
    assert!(rows.iter().all(|r| r.processed));
}

#[test]
fn loads_only_top_level_text_files_sorted() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("b.txt"), "second").unwrap();
    std::fs::write(dir.path().join("a.txt"), "first").unwrap();
    std::fs::write(dir.path().join("notes.md"), "ignored").unwrap();
    std::fs::create_dir(dir.path().join("nested")).unwrap();
    std::fs::write(dir.path().join("nested/c.txt"), "ignored").unwrap();

    let docs = load_text_files(dir.path()).unwrap();
    let names: Vec<&str> = docs.iter().map(|d| d.file_name.as_str()).collect();
    assert_eq!(names, vec!["a.txt", "b.txt"]);
    assert_eq!(docs[0].text, "first");
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_text_files(&dir.path().join("absent")).is_err());
}
