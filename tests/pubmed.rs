use gene_miner::data::pubmed::{parse_article_set, persist_abstracts, Abstract};

const EFETCH_XML: &str = r#"<?xml version="1.0" ?>
<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation Status="MEDLINE" Owner="NLM">
      <PMID Version="1">123456</PMID>
      <Article PubModel="Print">
        <ArticleTitle>BRCA1 and breast cancer risk</ArticleTitle>
        <Abstract>
          <AbstractText>BRCA1 carriers face elevated breast cancer risk.</AbstractText>
          <AbstractText>Ovarian cancer risk is also raised.</AbstractText>
        </Abstract>
        <AuthorList>
          <Author><LastName>Curie</LastName><ForeName>Marie</ForeName></Author>
          <Author><CollectiveName>Consortium</CollectiveName></Author>
        </AuthorList>
      </Article>
      <ArticleDate DateType="Electronic"><Year>2021</Year></ArticleDate>
    </MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>"#;

#[test]
fn efetch_articles_are_decoded() {
    let abstracts = parse_article_set(EFETCH_XML).unwrap();
    assert_eq!(abstracts.len(), 1);
    let article = &abstracts[0];
    assert_eq!(article.pmid, "123456");
    assert_eq!(article.title, "BRCA1 and breast cancer risk");
    assert_eq!(
        article.text,
        "BRCA1 carriers face elevated breast cancer risk.\nOvarian cancer risk is also raised."
    );
    assert_eq!(article.authors, vec!["Curie"]);
    assert_eq!(article.year, Some(2021));
}

#[test]
fn abstracts_are_persisted_as_text_documents() {
    let dir = tempfile::tempdir().unwrap();
    let abstracts = vec![Abstract {
        pmid: "42".into(),
        title: "TP53 in lung cancer".into(),
        text: "TP53 mutations are frequent.".into(),
        authors: vec![],
        year: None,
    }];
    let written = persist_abstracts(&abstracts, &dir.path().join("raw")).unwrap();
    assert_eq!(written, vec![dir.path().join("raw/42.txt")]);
    assert_eq!(
        std::fs::read_to_string(&written[0]).unwrap(),
        "TP53 in lung cancer\n\nTP53 mutations are frequent.\n"
    );
}
