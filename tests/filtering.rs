use word_index::models::{Item, ItemId};
use word_index::query::Filter;
use word_index::{InvertedIndex, Tokenizer};

fn fixture() -> InvertedIndex {
    let mut index = InvertedIndex::new();
    index.add(&[
        Item::new(
            1001,
            ["march", "student", "assassinated", "leading", "politician", "main", "architect", "genocide"],
        ),
        Item::new(
            2001,
            ["politician", "architect", "genocide", "million", "genocide", "including", "most"],
        ),
        Item::new(
            3001,
            ["family", "joined", "about", "berlin", "clandestine", "assassination", "trial"],
        ),
        Item::new(4001, ["seeking", "campaign", "revenge", "trial", "held", "strategy", "defense"]),
        Item::new(5001, ["was", "june", "genocide"]),
    ]);
    index
}

#[test]
fn test_filter_table() {
    let index = fixture();
    let cases: Vec<(&str, Filter, Vec<ItemId>)> = vec![
        ("in genocide", Filter::features_in(["genocide"]), vec![1001, 2001, 5001]),
        ("in march", Filter::features_in(["march"]), vec![1001]),
        ("in march,was", Filter::features_in(["march", "was"]), vec![1001, 5001]),
        (
            "march and leading",
            Filter::features_in(["march"]).and(Filter::features_in(["leading"])),
            vec![1001],
        ),
        (
            "march or trial",
            Filter::features_in(["march"]).or(Filter::features_in(["trial"])),
            vec![1001, 3001, 4001],
        ),
        (
            "march or (trial and held)",
            Filter::features_in(["march"])
                .or(Filter::features_in(["trial"]).and(Filter::features_in(["held"]))),
            vec![1001, 4001],
        ),
        (
            "trial and (assassination or held)",
            Filter::features_in(["trial"])
                .and(Filter::features_in(["assassination"]).or(Filter::features_in(["held"]))),
            vec![3001, 4001],
        ),
        ("prefix assassin*", Filter::features_in(["assassin*"]), vec![1001, 3001]),
        ("bare wildcard", Filter::features_in(["*"]), vec![]),
        ("missing", Filter::features_in(["absent"]), vec![]),
    ];

    for (name, filter, expected) in cases {
        assert_eq!(filter.evaluate(&index), expected, "{}", name);
    }
}

#[test]
fn test_boolean_algebra() {
    let index = fixture();
    let a = Filter::features_in(["genocide"]);
    let b = Filter::features_in(["politician"]);

    let and = a.clone().and(b.clone()).evaluate(&index);
    let or = a.clone().or(b.clone()).evaluate(&index);
    assert!(and.iter().all(|id| or.contains(id)));

    assert_eq!(a.clone().or(a.clone()).evaluate(&index), a.evaluate(&index));
    assert_eq!(a.clone().and(a.clone()).evaluate(&index), a.evaluate(&index));
    assert_eq!(
        a.clone().and(b.clone()).evaluate(&index),
        b.clone().and(a.clone()).evaluate(&index)
    );
}

#[test]
fn test_filter_over_tokenized_documents() {
    let documents = [
        "The container ship left port.",
        "Containers were stacked; the port was busy!",
        "A quiet harbour, no ships today.",
    ];
    let index = InvertedIndex::from_documents(&documents, &Tokenizer::default());

    let filter = Filter::all_of(vec![
        Filter::features_in(["contain*"]),
        Filter::features_in(["port"]),
    ])
    .unwrap();
    assert_eq!(filter.evaluate(&index), vec![1, 2]);

    let filter = Filter::any_of(vec![
        Filter::features_in(["harbour"]),
        Filter::features_in(["ship"]),
    ])
    .unwrap();
    assert_eq!(filter.evaluate(&index), vec![1, 3]);
}
