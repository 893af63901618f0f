use gene_miner::{
    mining::{Association, AssociationGraph},
    report::{self, read_report, render_network, write_analysis, write_report, ReportPaths},
};

fn sample() -> Vec<Association> {
    vec![
        Association::new("BRCA1", "breast cancer", "brca1, \"quoted\" and breast cancer", 0.5).unwrap(),
        Association::new("TP53", "lung cancer", "tp53 in lung cancer", 0.25).unwrap(),
        Association::new("BRCA1", "breast cancer", "again brca1", 1.0).unwrap(),
    ]
}

#[test]
fn report_round_trips_through_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports/association_report.csv");
    let associations = sample();
    write_report(&associations, &path).unwrap();

    let header = std::fs::read_to_string(&path).unwrap();
    assert!(header.starts_with("gene,disease,sentence,confidence\n"));

    let parsed = read_report(&path).unwrap();
    assert_eq!(parsed, associations);
}

#[test]
fn analysis_is_written_as_key_value_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("network_analysis.txt");
    let mut graph = AssociationGraph::default();
    graph.add_associations(&sample()).unwrap();
    write_analysis(&graph.analysis(), &path).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "total_associations: 3\nunique_genes: 2\nunique_diseases: 2\ntype_conflicts: 0\n"
    );
}

#[test]
fn network_lists_every_entity_once() {
    let html = render_network(&sample()).unwrap().expect("diagram");
    assert!(html.contains("Gene-Disease Association Network"));
    assert_eq!(html.matches(">BRCA1</text>").count(), 1);
    assert_eq!(html.matches(">breast cancer</text>").count(), 1);
    assert_eq!(html.matches("<line class=\"link\"").count(), 2);
    assert!(html.contains("2 mention(s), total confidence 1.50"));
}

#[test]
fn empty_results_skip_the_diagram() {
    assert!(render_network(&[]).unwrap().is_none());

    let dir = tempfile::tempdir().unwrap();
    let paths = ReportPaths {
        report_csv: dir.path().join("association_report.csv"),
        network_html: dir.path().join("association_network.html"),
        analysis_txt: dir.path().join("network_analysis.txt"),
    };
    let outputs = report::render(&[], &paths).unwrap();
    assert!(outputs.network_html.is_none());
    assert!(!paths.network_html.exists());
    assert!(read_report(&paths.report_csv).unwrap().is_empty());
}

#[test]
fn network_handles_thousands_of_entities() {
    let associations: Vec<Association> = (0..12_000)
        .map(|i| Association::new(format!("G{i}"), "d", "s", 0.5).unwrap())
        .collect();
    let html = render_network(&associations).unwrap().expect("diagram");
    assert_eq!(html.matches("<g class=\"node\">").count(), 12_001);
    assert!(html.contains("G11999"));
}
