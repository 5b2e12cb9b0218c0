use flashmind_core::{
    filter, filter_cards, seed, summarize, CardStore, Difficulty, FilterCriteria, Flashcard, ALL,
};

fn sample() -> Vec<Flashcard> {
    vec![
        Flashcard::with_id("1", "Mitochondria function", "Produces ATP", "Biology", Difficulty::Medium),
        Flashcard::with_id("2", "Big O notation", "Upper bound on growth", "Computer Science", Difficulty::Hard),
        Flashcard::with_id("3", "End of WWII", "1945", "History", Difficulty::Easy),
        Flashcard::with_id("4", "Cell membrane", "Lipid bilayer", "biology", Difficulty::Easy),
    ]
}

#[test]
fn search_matches_question_or_answer() {
    let cards = vec![Flashcard::with_id(
        "1",
        "Mitochondria function",
        "",
        "Biology",
        Difficulty::Medium,
    )];
    let hit = filter(&cards, "mito", ALL, ALL);
    assert_eq!(hit.len(), 1);
    assert_eq!(hit[0].id, "1");
    assert!(filter(&cards, "xyz", ALL, ALL).is_empty());

    let v = sample();
    let by_answer = filter(&v, "LIPID", ALL, ALL);
    assert_eq!(by_answer.len(), 1);
    assert_eq!(by_answer[0].id, "4");
}

#[test]
fn unconstrained_filter_is_identity() {
    let v = sample();
    assert_eq!(filter_cards(&v, &FilterCriteria::default()), v);
    assert!(FilterCriteria::default().is_unconstrained());
}

#[test]
fn filter_is_idempotent_and_keeps_order() {
    let v = sample();
    let criteria = [
        FilterCriteria::new("", "biology", ALL),
        FilterCriteria::new("e", ALL, "easy"),
        FilterCriteria::new("o", "history", "hard"),
        FilterCriteria::new("", ALL, "medium"),
    ];
    for c in &criteria {
        let once = filter_cards(&v, c);
        let twice = filter_cards(&once, c);
        assert_eq!(once, twice);

        let positions: Vec<usize> = once
            .iter()
            .map(|x| v.iter().position(|y| y.id == x.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn criteria_combine_with_and() {
    let v = sample();
    let ids: Vec<String> = filter(&v, "", "Biology", "easy")
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec!["4".to_string()]);
}

#[test]
fn deleted_cards_never_reappear() {
    let mut store = CardStore::from_cards(sample()).unwrap();
    store.delete("2");
    assert!(store
        .filtered(&FilterCriteria::default())
        .iter()
        .all(|c| c.id != "2"));
    assert!(store
        .filtered(&FilterCriteria::new("big", ALL, ALL))
        .is_empty());
}

#[test]
fn toggling_favorite_twice_restores_it() {
    let mut store = CardStore::from_cards(sample()).unwrap();
    let before = store.get("3").unwrap().is_favorite;
    store.toggle_favorite("3");
    assert_eq!(store.get("3").unwrap().is_favorite, !before);
    store.toggle_favorite("3");
    assert_eq!(store.get("3").unwrap().is_favorite, before);
}

#[test]
fn rating_leaves_stored_cards_untouched() {
    let store = CardStore::from_cards(seed::mock_flashcards()).unwrap();
    let before = store.cards().to_vec();

    let ev = store.rate("2", Difficulty::Easy).unwrap();
    assert_eq!(ev.card_id, "2");
    assert_eq!(ev.rating, Difficulty::Easy);
    assert_eq!(store.cards(), &before[..]);
}

#[test]
fn mock_deck_stats() {
    let cards = seed::mock_flashcards();
    let s = summarize(&cards);
    assert_eq!(s.total, 3);
    assert_eq!(s.favorites, 1);
    let avg = s.average_accuracy.unwrap();
    assert!((avg - 84.0).abs() < 0.01);
    assert_eq!(s.per_difficulty.easy, 1);
    assert_eq!(s.per_difficulty.medium, 1);
    assert_eq!(s.per_difficulty.hard, 1);
    assert_eq!(s.per_category[0], ("Biology".to_string(), 1));

    assert_eq!(summarize(&[]).average_accuracy, None);
}
