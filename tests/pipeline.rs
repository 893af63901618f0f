use std::{path::Path, sync::Arc};

use gene_miner::{
    config::{Accelerator, Settings},
    mining::{CollisionPolicy, EntityKind, RecognizerFailurePolicy},
    nlp::ner::DictionaryRecognizer,
    pipeline::{LiteratureMining, RunOutcome},
};

fn settings(root: &Path) -> Settings {
    let settings = Settings {
        raw_dir: root.join("raw"),
        processed_dir: root.join("processed"),
        generated_dir: root.join("generated"),
        reports_dir: root.join("reports"),
        log_dir: root.join("logs"),
        accelerator: Accelerator::None,
        llm_base_url: "http://localhost:11434".to_string(),
        llm_model: "biomistral".to_string(),
        lexicon_path: None,
        pubmed_email: "research@example.com".to_string(),
        pubmed_tool: "gene_miner".to_string(),
        max_pubmed_results: 5,
    };
    for dir in [
        &settings.raw_dir,
        &settings.processed_dir,
        &settings.generated_dir,
        &settings.reports_dir,
    ] {
        std::fs::create_dir_all(dir).unwrap();
    }
    settings
}

#[test]
fn run_fills_the_graph_and_writes_reports() {
    let root = tempfile::tempdir().unwrap();
    let settings = settings(root.path());
    std::fs::write(
        settings.raw_dir.join("abstract.txt"),
        "BRCA1 mutations cause breast cancer. TP53 is linked to breast cancer and ovarian cancer.",
    )
    .unwrap();

    let mut pipeline = LiteratureMining::new(
        settings.clone(),
        None,
        Arc::new(DictionaryRecognizer::builtin()),
        RecognizerFailurePolicy::Abort,
        CollisionPolicy::Separate,
    );
    let outcome = pipeline.run().unwrap();
    let RunOutcome::Completed {
        sentences,
        associations,
        analysis,
        outputs,
    } = outcome
    else {
        panic!("expected a completed run");
    };
    assert_eq!(sentences, 2);
    assert_eq!(associations, 3);
    assert_eq!(pipeline.graph().analysis(), analysis);
    assert_eq!(analysis.unique_genes, 2);
    assert_eq!(analysis.unique_diseases, 2);
    assert!(pipeline.graph().contains(EntityKind::Gene, "TP53"));
    assert_eq!(pipeline.graph().edge_count_between("BRCA1", "breast cancer"), 1);

    assert!(outputs.report_csv.as_deref().is_some_and(Path::exists));
    assert!(outputs.network_html.is_some());
    assert!(settings.join_processed("processed_documents.csv").exists());
}

#[test]
fn empty_input_dir_is_no_documents() {
    let root = tempfile::tempdir().unwrap();
    let mut pipeline = LiteratureMining::new(
        settings(root.path()),
        None,
        Arc::new(DictionaryRecognizer::builtin()),
        RecognizerFailurePolicy::Abort,
        CollisionPolicy::Separate,
    );
    assert!(matches!(pipeline.run().unwrap(), RunOutcome::NoDocuments));
    assert_eq!(pipeline.graph().analysis().total_associations, 0);
}
