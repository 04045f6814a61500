use linkpage_core::{
    build_page, discover_sources, load_source, load_sources, PageConfig, SourceError,
    TaxonomyError, DEFAULT_SOURCE_PATTERN,
};
use std::fs;
use std::path::Path;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn discovery_matches_pattern_and_sorts_paths() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "links_zeta.yml", "A: {}\n");
    write(dir.path(), "links_alpha.yml", "A: {}\n");
    write(dir.path(), "params.yml", "sftpHostName: x\n");
    write(dir.path(), "links_notes.txt", "ignored\n");
    fs::create_dir(dir.path().join("links_dir.yml")).unwrap();

    let paths = discover_sources(dir.path(), DEFAULT_SOURCE_PATTERN).unwrap();
    let names = paths
        .iter()
        .map(|path| path.file_name().unwrap().to_str().unwrap().to_string())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["links_alpha.yml", "links_zeta.yml"]);
}

#[test]
fn discovery_rejects_invalid_pattern() {
    let dir = tempfile::tempdir().unwrap();
    let err = discover_sources(dir.path(), "links_[.yml").unwrap_err();
    assert!(matches!(err, SourceError::Pattern { .. }));
}

#[test]
fn discovery_reports_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let err = discover_sources(&dir.path().join("missing"), DEFAULT_SOURCE_PATTERN).unwrap_err();
    assert!(matches!(err, SourceError::Io { .. }));
}

#[test]
fn bad_sources_are_skipped_and_good_ones_kept() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "links_good.yml",
        "AI - Papers:\n  Causal Inference: http://x\nGeneral item:\n  a: http://a\n",
    );
    write(dir.path(), "links_broken.yml", "AI - Papers:\n  a: [oops\n");
    write(dir.path(), "links_shape.yml", "- just\n- a list\n");

    let paths = discover_sources(dir.path(), DEFAULT_SOURCE_PATTERN).unwrap();
    let outcome = load_sources(&paths);

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].origin, "links_good.yml");
    assert_eq!(outcome.skipped.len(), 2);
    assert!(matches!(
        outcome.skipped[0].error,
        SourceError::Yaml { .. }
    ));
    assert!(matches!(
        outcome.skipped[1].error,
        SourceError::InvalidShape { .. }
    ));

    let page = build_page(&outcome.records, &PageConfig::default()).unwrap();
    assert!(page.html.contains("<h2>General - General item</h2>"));
    assert!(page.html.contains("<h2>AI - Papers</h2>"));
}

#[test]
fn repeated_description_in_one_file_aborts_the_build() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "links_a.yml",
        "AI - Papers:\n  Causal Inference: http://x\n  Causal Inference: http://y\nAWS - Docs:\n  d: http://d\n",
    );
    write(dir.path(), "links_b.yml", "General item:\n  a: http://a\n");

    let paths = discover_sources(dir.path(), DEFAULT_SOURCE_PATTERN).unwrap();
    let outcome = load_sources(&paths);
    assert_eq!(outcome.records.len(), 2);
    assert!(outcome.skipped.is_empty());

    let err = build_page(&outcome.records, &PageConfig::default()).unwrap_err();
    assert_eq!(
        err,
        TaxonomyError::DuplicateDescription {
            description: "Causal Inference".to_string(),
            area: "AI".to_string(),
            subarea: "Papers".to_string(),
            origin: "links_a.yml".to_string(),
        }
    );
}

#[test]
fn repeated_header_in_one_file_merges_into_one_subarea() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "links_a.yml",
        "AI - Papers:\n  Causal Inference: http://x\nAI - Papers:\n  Bandits: http://b\n",
    );

    let outcome = load_sources(&[dir.path().join("links_a.yml")]);
    assert!(outcome.skipped.is_empty());

    let page = build_page(&outcome.records, &PageConfig::default()).unwrap();
    let papers = page.taxonomy.area("AI").unwrap().subarea("Papers").unwrap();
    assert_eq!(papers.entries().len(), 2);
    assert_eq!(page.html.matches("<h2>AI - Papers</h2>").count(), 1);
}

#[test]
fn yaml_error_diagnostic_points_at_location() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "links_broken.yml", "AI:\n  a: http://a\n  b: [oops\n");

    let err = load_source(&dir.path().join("links_broken.yml")).unwrap_err();
    let diagnostic = err.diagnostic();
    assert!(diagnostic.contains("links_broken.yml"));
    assert!(diagnostic.contains("File links_broken.yml, line "));
    assert!(diagnostic.contains('^'));
}

#[test]
fn unreadable_source_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_source(&dir.path().join("links_missing.yml")).unwrap_err();
    assert!(matches!(err, SourceError::Io { .. }));
}
