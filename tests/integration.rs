//! End-to-end pipeline tests: raw records in, ranked recommendations out.

use recomendar::catalog::RawRecord;
use recomendar::error::RecomendarError;
use recomendar::recommend::{Recommender, Snapshot, SnapshotConfig};

fn record(id: u64, title: &str, overview: &str) -> RawRecord {
    RawRecord {
        id,
        title: title.to_string(),
        overview: Some(overview.to_string()),
        genres: "[]".to_string(),
        keywords: "[]".to_string(),
        cast: "[]".to_string(),
        crew: "[]".to_string(),
    }
}

fn full_record(id: u64, title: &str) -> RawRecord {
    RawRecord {
        id,
        title: title.to_string(),
        overview: Some("A marine is dispatched to a distant moon".to_string()),
        genres: r#"[{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}]"#
            .to_string(),
        keywords: r#"[{"id": 1463, "name": "culture clash"}]"#.to_string(),
        cast: r#"[{"name": "Sam Worthington"}, {"name": "Zoe Saldana"}, {"name": "Sigourney Weaver"}, {"name": "Stephen Lang"}]"#
            .to_string(),
        crew: r#"[{"name": "James Cameron", "job": "Director"}, {"name": "Jon Landau", "job": "Producer"}]"#
            .to_string(),
    }
}

fn abc_corpus() -> Vec<RawRecord> {
    vec![
        record(1, "A", "space war alien"),
        record(2, "B", "space battle alien"),
        record(3, "C", "romance drama wedding"),
    ]
}

#[test]
fn overlapping_profiles_rank_above_disjoint_ones() {
    let snapshot = Snapshot::build(abc_corpus(), &SnapshotConfig::default()).expect("build");

    let sim_ab = snapshot.similarity().get(0, 1);
    let sim_ac = snapshot.similarity().get(0, 2);
    assert!(sim_ab > sim_ac);

    let hits = snapshot.recommend("A").expect("title exists");
    assert_eq!(hits[0].title, "B");
    assert_eq!(hits[1].title, "C");
}

#[test]
fn similarity_matrix_is_symmetric_with_unit_diagonal() {
    let snapshot = Snapshot::build(abc_corpus(), &SnapshotConfig::default()).expect("build");
    let sims = snapshot.similarity();
    for i in 0..3 {
        assert!((sims.get(i, i) - 1.0).abs() < 1e-12);
        for j in 0..3 {
            assert_eq!(sims.get(i, j), sims.get(j, i));
        }
    }
}

#[test]
fn single_feature_space_degenerates_without_division_by_zero() {
    // "alien" is the most frequent token; a one-feature vocabulary reduces
    // every similarity to 0 or 1
    let records = vec![
        record(1, "A", "alien alien war"),
        record(2, "B", "alien battle"),
        record(3, "C", "romance drama"),
    ];
    let config = SnapshotConfig::default().with_max_features(1);
    let snapshot = Snapshot::build(records, &config).expect("build");

    assert_eq!(snapshot.vocabulary().len(), 1);
    assert!(snapshot.vocabulary().contains_key("alien"));

    let sims = snapshot.similarity();
    assert_eq!(sims.get(0, 1), 1.0);
    assert_eq!(sims.get(0, 2), 0.0);
    // C has no vocabulary token at all: zero against everything, itself included
    assert_eq!(sims.get(2, 2), 0.0);

    for i in 0..3 {
        for j in 0..3 {
            let s = sims.get(i, j);
            assert!(s.is_finite());
            assert!(s == 0.0 || s == 1.0);
        }
    }
}

#[test]
fn all_stop_word_profile_yields_zero_row() {
    let records = vec![
        record(1, "Meaningful", "alien war fleet"),
        record(2, "Hollow", "the and or of"),
        record(3, "Also Meaningful", "alien fleet battle"),
    ];
    let snapshot = Snapshot::build(records, &SnapshotConfig::default()).expect("build");
    let sims = snapshot.similarity();

    assert_eq!(sims.get(1, 1), 0.0);
    for j in 0..3 {
        assert_eq!(sims.get(1, j), 0.0);
    }
}

#[test]
fn duplicate_titles_resolve_to_first_occurrence_consistently() {
    let records = vec![
        record(1, "Mirror", "alien war fleet"),
        record(2, "Neighbor", "alien war armada"),
        record(3, "Mirror", "romance drama wedding"),
        record(4, "Ballroom", "romance drama dance"),
    ];
    let snapshot = Snapshot::build(records, &SnapshotConfig::default()).expect("build");

    let first = snapshot.recommend("Mirror").expect("title exists");
    let second = snapshot.recommend("Mirror").expect("title exists");
    assert_eq!(first, second);

    // neighbors of the FIRST "Mirror" (the space one), not the romance one
    assert_eq!(first[0].title, "Neighbor");
}

#[test]
fn unknown_title_is_a_result_state_not_a_panic() {
    let snapshot = Snapshot::build(abc_corpus(), &SnapshotConfig::default()).expect("build");
    let err = snapshot.recommend("Z").expect_err("absent title");
    assert!(matches!(err, RecomendarError::TitleNotFound { .. }));
    assert!(err.to_string().contains("Z"));
}

#[test]
fn result_count_is_min_of_five_and_corpus_size_minus_one() {
    let small = Snapshot::build(abc_corpus(), &SnapshotConfig::default()).expect("build");
    assert_eq!(small.recommend("A").expect("title exists").len(), 2);

    let records: Vec<RawRecord> = (0..8)
        .map(|i| record(i, &format!("Film {i}"), "alien fleet battle war"))
        .collect();
    let large = Snapshot::build(records, &SnapshotConfig::default()).expect("build");
    assert_eq!(large.recommend("Film 0").expect("title exists").len(), 5);
}

#[test]
fn structured_attributes_flow_into_the_feature_space() {
    // two items sharing only cast/director/genre tokens, one unrelated
    let mut a = full_record(1, "Avatar");
    a.overview = Some("A marine explores".to_string());
    let mut b = full_record(2, "Avatar Two");
    b.overview = Some("The return journey begins".to_string());
    let c = record(3, "Unrelated", "quiet meadow sunrise");

    let snapshot = Snapshot::build(vec![a, b, c], &SnapshotConfig::default()).expect("build");

    // collapsed multi-word entities are single features
    assert!(snapshot.vocabulary().contains_key("samworthington"));
    assert!(snapshot.vocabulary().contains_key("jamescameron"));
    // non-director crew never reaches the vocabulary
    assert!(!snapshot.vocabulary().contains_key("jonlandau"));

    let hits = snapshot.recommend("Avatar").expect("title exists");
    assert_eq!(hits[0].title, "Avatar Two");
}

#[test]
fn malformed_records_are_dropped_not_fatal() {
    let mut broken = full_record(2, "Broken");
    broken.genres = "{not valid json".to_string();
    let records = vec![full_record(1, "Whole"), broken, full_record(3, "Intact")];

    let snapshot = Snapshot::build(records, &SnapshotConfig::default()).expect("build");
    assert_eq!(snapshot.corpus().len(), 2);
    assert_eq!(snapshot.corpus().position_of_title("Broken"), None);
}

#[test]
fn all_records_malformed_is_empty_corpus() {
    let mut broken = full_record(1, "Broken");
    broken.cast = "???".to_string();
    let err = Snapshot::build(vec![broken], &SnapshotConfig::default()).expect_err("must fail");
    assert!(matches!(err, RecomendarError::EmptyCorpus));
}

#[test]
fn pipeline_is_deterministic_across_rebuilds() {
    let first = Snapshot::build(abc_corpus(), &SnapshotConfig::default()).expect("build");
    let second = Snapshot::build(abc_corpus(), &SnapshotConfig::default()).expect("build");

    assert_eq!(first.vocabulary(), second.vocabulary());
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(first.similarity().get(i, j), second.similarity().get(i, j));
        }
    }
    assert_eq!(
        first.recommend("A").expect("title exists"),
        second.recommend("A").expect("title exists")
    );
}

#[test]
fn recommender_serves_queries_after_atomic_rebuild() {
    let recommender =
        Recommender::from_records(abc_corpus(), &SnapshotConfig::default()).expect("build");
    assert_eq!(recommender.recommend("A").expect("title exists").len(), 2);

    let next = vec![
        record(10, "North", "frozen tundra trek"),
        record(11, "South", "frozen tundra expedition"),
        record(12, "East", "desert caravan"),
    ];
    recommender
        .rebuild(next, &SnapshotConfig::default())
        .expect("rebuild");

    let err = recommender.recommend("A").expect_err("old title gone");
    assert!(matches!(err, RecomendarError::TitleNotFound { .. }));
    let hits = recommender.recommend("North").expect("new title");
    assert_eq!(hits[0].title, "South");
}
