use std::fs;
use std::path::Path;

use rstest::rstest;
use score_core::{Corpus, CorpusLoader, MatchMode, Query, ScoreError, WalkerConfig, rank};
use tempfile::TempDir;

fn write_files(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    dir
}

fn load(dir: &Path, config: WalkerConfig) -> Corpus {
    CorpusLoader::new(config).load(dir).unwrap()
}

fn score_of(corpus: &Corpus, words: &[&str], file: &str) -> f64 {
    let result = rank(corpus, &Query::from_words(words), MatchMode::Token).unwrap();
    result
        .iter()
        .find(|e| e.file_id == file)
        .map(|e| e.score)
        .unwrap()
}

#[rstest]
#[case("The cat sat", &["cat"], 100.0)]
#[case("The cat sat", &["dog"], 0.0)]
fn test_whole_and_no_match(#[case] content: &str, #[case] words: &[&str], #[case] expected: f64) {
    let dir = write_files(&[("a.txt", content)]);
    let corpus = load(dir.path(), WalkerConfig::default());
    assert_eq!(score_of(&corpus, words, "a.txt"), expected);
}

#[test]
fn test_two_of_three_words() {
    let dir = write_files(&[("a.txt", "cat dog")]);
    let corpus = load(dir.path(), WalkerConfig::default());
    let score = score_of(&corpus, &["cat", "dog", "bird"], "a.txt");
    assert_eq!(format!("{score:.2}"), "66.67");
}

#[test]
fn test_empty_directory() {
    let dir = write_files(&[]);
    let corpus = load(dir.path(), WalkerConfig::default());
    let result = rank(&corpus, &Query::from_words(["cat"]), MatchMode::Token).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_empty_file_scores_zero() {
    let dir = write_files(&[("empty.txt", ""), ("full.txt", "cat")]);
    let corpus = load(dir.path(), WalkerConfig::default());
    assert_eq!(score_of(&corpus, &["cat"], "empty.txt"), 0.0);
    assert_eq!(score_of(&corpus, &["cat"], "full.txt"), 100.0);
}

#[test]
fn test_missing_directory() {
    let dir = write_files(&[]);
    let missing = dir.path().join("nope");
    let result = CorpusLoader::default().load(&missing);
    assert!(matches!(result, Err(ScoreError::DirectoryNotFound(p)) if p == missing));
}

#[test]
fn test_file_is_not_a_directory() {
    let dir = write_files(&[("a.txt", "cat")]);
    let result = CorpusLoader::default().load(&dir.path().join("a.txt"));
    assert!(matches!(result, Err(ScoreError::DirectoryUnreadable { .. })));
}

#[test]
fn test_extension_filter() {
    let dir = write_files(&[("a.txt", "cat"), ("b.md", "cat"), ("c", "cat")]);
    let config = WalkerConfig {
        extensions: vec!["txt".to_string()],
        ..WalkerConfig::default()
    };
    let corpus = load(dir.path(), config);
    let ids: Vec<_> = corpus.iter().map(|f| f.id()).collect();
    assert_eq!(ids, vec!["a.txt"]);
}

#[test]
fn test_default_reads_direct_children_only() {
    let dir = write_files(&[("a.txt", "cat"), ("sub/b.txt", "cat")]);
    let corpus = load(dir.path(), WalkerConfig::default());
    assert_eq!(corpus.len(), 1);
    assert!(corpus.get("a.txt").is_some());
}

#[test]
fn test_unlimited_depth_uses_relative_ids() {
    let dir = write_files(&[("a.txt", "cat"), ("sub/b.txt", "cat")]);
    let config = WalkerConfig {
        max_depth: 0,
        ..WalkerConfig::default()
    };
    let corpus = load(dir.path(), config);
    let ids: Vec<_> = corpus.iter().map(|f| f.id()).collect();
    assert_eq!(ids, vec!["a.txt", "sub/b.txt"]);
}

#[test]
fn test_hidden_files_are_read_by_default() {
    let dir = write_files(&[(".notes.txt", "cat"), ("a.txt", "cat")]);
    let corpus = load(dir.path(), WalkerConfig::default());
    let ids: Vec<_> = corpus.iter().map(|f| f.id()).collect();
    assert_eq!(ids, vec![".notes.txt", "a.txt"]);

    let config = WalkerConfig {
        skip_hidden: true,
        ..WalkerConfig::default()
    };
    assert_eq!(load(dir.path(), config).len(), 1);
}

#[cfg(unix)]
#[test]
fn test_symlinked_file_is_read_by_default() {
    let dir = write_files(&[("a.txt", "cat"), (".notes.txt", "dog")]);
    let target = write_files(&[("real.txt", "cat dog")]);
    std::os::unix::fs::symlink(target.path().join("real.txt"), dir.path().join("link.txt")).unwrap();

    let corpus = load(dir.path(), WalkerConfig::default());
    let ids: Vec<_> = corpus.iter().map(|f| f.id()).collect();
    assert_eq!(ids, vec![".notes.txt", "a.txt", "link.txt"]);
    assert_eq!(score_of(&corpus, &["cat", "dog"], "link.txt"), 100.0);
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_is_not_descended_by_default() {
    let dir = write_files(&[("a.txt", "cat")]);
    let target = write_files(&[("inner.txt", "cat")]);
    std::os::unix::fs::symlink(target.path(), dir.path().join("linked")).unwrap();

    let config = WalkerConfig {
        max_depth: 0,
        ..WalkerConfig::default()
    };
    let corpus = load(dir.path(), config);
    assert_eq!(corpus.len(), 1);
    assert!(corpus.get("a.txt").is_some());
}

#[test]
fn test_ignore_patterns() {
    let dir = write_files(&[("a.txt", "cat"), ("debug.log", "cat")]);
    let config = WalkerConfig {
        ignore_patterns: vec!["*.log".to_string()],
        ..WalkerConfig::default()
    };
    let corpus = load(dir.path(), config);
    assert!(corpus.get("debug.log").is_none());
    assert_eq!(corpus.len(), 1);
}

#[test]
fn test_ties_resolve_by_file_name() {
    let dir = write_files(&[("zeta.txt", "cat"), ("alpha.txt", "cat"), ("mid.txt", "cat dog")]);
    let corpus = load(dir.path(), WalkerConfig::default());
    let result = rank(&corpus, &Query::from_words(["cat", "dog"]), MatchMode::Token).unwrap();
    let ids: Vec<_> = result.iter().map(|e| e.file_id.as_str()).collect();
    assert_eq!(ids, vec!["mid.txt", "alpha.txt", "zeta.txt"]);
}

#[rstest]
#[case(MatchMode::Token, 0.0)]
#[case(MatchMode::Substring, 100.0)]
fn test_category_boundary(#[case] mode: MatchMode, #[case] expected: f64) {
    let dir = write_files(&[("a.txt", "Category theory")]);
    let corpus = load(dir.path(), WalkerConfig::default());
    let result = rank(&corpus, &Query::from_words(["cat"]), mode).unwrap();
    assert_eq!(result.entries()[0].score, expected);
}

#[test]
fn test_case_insensitive_content() {
    let dir = write_files(&[("a.txt", "THE CAT SAT")]);
    let corpus = load(dir.path(), WalkerConfig::default());
    assert_eq!(score_of(&corpus, &["Cat", "sat"], "a.txt"), 100.0);
}
