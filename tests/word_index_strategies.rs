use std::fs;
use std::sync::Arc;
use std::thread;

use tempfile::TempDir;

use word_index::config::IndexStrategy;
use word_index::word::{index_documents, new_index, MatrixIndex, SyncIndex, WordIndex};
use word_index::Tokenizer;

const DOCUMENTS: [&str; 6] = [
    "Пушкин родился в Москве",
    "Container terminals move thousands of boxes",
    "the ship contained grain and timber",
    "A site test ran overnight",
    "site tests and site tested builds",
    "nothing to see here",
];

fn build(strategy: IndexStrategy) -> Box<dyn WordIndex> {
    let mut index = new_index(strategy);
    index.add(&DOCUMENTS);
    index
}

#[test]
fn test_every_strategy_answers_the_same() {
    let cases: [(&str, &[usize]); 10] = [
        ("container", &[1]),
        ("contai*", &[1, 2]),
        ("contai(ner)", &[1]),
        ("contai(ner|ned)", &[1, 2]),
        ("contai", &[]),
        ("site", &[3, 4]),
        ("test(s|ed)", &[4]),
        ("москве", &[0]),
        ("пуш*", &[0]),
        ("timber boxes", &[1, 2]),
    ];

    for strategy in IndexStrategy::ALL {
        let index = build(strategy);
        for (query, expected) in cases {
            assert_eq!(index.find_all(query), expected, "{} on {:?}", strategy, query);
            assert_eq!(index.find(query), expected.first().copied(), "{} on {:?}", strategy, query);
            for position in 0..DOCUMENTS.len() {
                assert_eq!(
                    index.find_at(position, query),
                    expected.contains(&position),
                    "{} find_at({}) on {:?}",
                    strategy,
                    position,
                    query
                );
            }
        }
    }
}

#[test]
fn test_find_next_walk() {
    for strategy in IndexStrategy::ALL {
        let index = build(strategy);
        let mut seen = Vec::new();
        let mut from = 0;
        while let Some(hit) = index.find_off("site*", from) {
            seen.push(hit);
            from = hit + 1;
        }
        assert_eq!(seen, vec![3, 4], "{}", strategy);
        assert_eq!(index.document_at(3), Some(DOCUMENTS[3]));
        assert_eq!(index.document_at(DOCUMENTS.len()), None);
    }
}

#[test]
fn test_matrix_and_or() {
    let mut index = MatrixIndex::new();
    index.fit(&DOCUMENTS);

    assert_eq!(index.query_and_or("site test*", false), vec![3, 4]);
    assert_eq!(index.query_and_or("site tested", true), vec![4]);
    assert_eq!(index.query_and_or("site grain", true), Vec::<usize>::new());
    assert!(index.vocabulary_len() > 20);
}

#[test]
fn test_tokenizer_feeds_word_index() {
    let tokenizer = Tokenizer::default();
    let normalized: Vec<String> = ["Hello, world!", "Wide-world: travel."]
        .iter()
        .map(|text| tokenizer.normalize_text(text))
        .collect();
    let texts: Vec<&str> = normalized.iter().map(String::as_str).collect();

    let mut index = new_index(IndexStrategy::InterpolationSearch);
    index.add(&texts);

    assert_eq!(index.find_all("world"), vec![0]);
    assert_eq!(index.find_all("wide-world"), vec![1]);
    assert_eq!(index.find_all("w*"), vec![0, 1]);
}

#[test]
fn test_multi_line_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("a.txt"),
        "Container ships dock here.\nCranes unload them\r\nall night long\n",
    )
    .unwrap();
    fs::write(tmp.path().join("b.txt"), "quiet\tharbour\n\nno ships today").unwrap();

    let mut paths: Vec<_> = fs::read_dir(tmp.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    paths.sort();
    let documents: Vec<String> = paths
        .iter()
        .map(|path| fs::read_to_string(path).unwrap())
        .collect();

    let tokenizer = Tokenizer::default();
    for strategy in IndexStrategy::ALL {
        let index = index_documents(strategy, &documents, &tokenizer);
        assert_eq!(index.find_all("here"), vec![0], "{}", strategy);
        assert_eq!(index.find_all("cranes"), vec![0], "{}", strategy);
        assert_eq!(index.find_all("long"), vec![0], "{}", strategy);
        assert_eq!(index.find_all("harbour today"), vec![1], "{}", strategy);
        assert_eq!(index.find_all("ship*"), vec![0, 1], "{}", strategy);
    }
}

#[test]
fn test_shared_index_across_threads() {
    let index = Arc::new(SyncIndex::new(new_index(IndexStrategy::BinarySearch)));
    index.add(&DOCUMENTS[..3]);

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let index = Arc::clone(&index);
            thread::spawn(move || index.find("contai*"))
        })
        .collect();
    let writer = {
        let index = Arc::clone(&index);
        thread::spawn(move || index.add(&DOCUMENTS[3..]))
    };

    for reader in readers {
        assert_eq!(reader.join().unwrap(), Some(1));
    }
    writer.join().unwrap();

    assert_eq!(index.len(), DOCUMENTS.len());
    assert_eq!(index.find_all("site"), vec![3, 4]);
}
