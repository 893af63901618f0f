use std::path::Path;

use assert_cmd::Command;

fn miner(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gene-miner").expect("binary exists");
    cmd.current_dir(root)
        .env_remove("RUST_LOG")
        .env_remove("RAW_DATA_DIR")
        .env_remove("PROCESSED_DATA_DIR")
        .env_remove("GENERATED_DATA_DIR")
        .env_remove("LEXICON_PATH")
        .env("DATA_DIR", root.join("data"))
        .env("REPORTS_DIR", root.join("reports"))
        .env("LOG_DIR", root.join("logs"));
    cmd
}

#[test]
fn cli_help_runs() {
    let mut cmd = Command::cargo_bin("gene-miner").expect("binary exists");
    cmd.arg("--help").assert().success();
}

#[test]
fn mine_writes_reports() {
    let root = tempfile::tempdir().unwrap();
    let raw = root.path().join("data/raw");
    std::fs::create_dir_all(&raw).unwrap();
    std::fs::write(
        raw.join("abstract.txt"),
        "BRCA1 mutations cause breast cancer. TP53 is linked to breast cancer and ovarian cancer.",
    )
    .unwrap();

    let output = miner(root.path()).arg("mine").output().unwrap();
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("total_associations: 3"));

    let reports = root.path().join("reports");
    assert_eq!(
        std::fs::read_to_string(reports.join("network_analysis.txt")).unwrap(),
        "total_associations: 3\nunique_genes: 2\nunique_diseases: 2\ntype_conflicts: 0\n"
    );
    let report = gene_miner::report::read_report(&reports.join("association_report.csv")).unwrap();
    assert_eq!(report.len(), 3);
    assert!(root
        .path()
        .join("data/generated/association_network.html")
        .exists());
    assert!(root
        .path()
        .join("data/processed/processed_documents.csv")
        .exists());
    assert!(std::fs::read_dir(root.path().join("logs")).unwrap().count() >= 1);
}

#[test]
fn mine_without_documents_fails() {
    let root = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(root.path().join("data/raw")).unwrap();
    miner(root.path()).arg("mine").assert().failure();
}

#[test]
fn mine_without_associations_succeeds_quietly() {
    let root = tempfile::tempdir().unwrap();
    let raw = root.path().join("data/raw");
    std::fs::create_dir_all(&raw).unwrap();
    std::fs::write(raw.join("plain.txt"), "Nothing biomedical happens here.").unwrap();

    miner(root.path()).arg("mine").assert().success();
    assert!(!root.path().join("reports/association_report.csv").exists());
}
