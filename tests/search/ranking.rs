//! Group ranking over the fixture site.
//!
//! Scores are 50 per title hit, 20 per heading, 10 per custom field value and
//! 1 per paragraph. Equal scores keep the order pages appear in the index.

use super::common::{fixture_index, make_groups, scores, titles};
use docsift::{build_groups, group_score, kind_weight, MatchKind};

#[test]
fn test_install_ranking() {
    let index = fixture_index("/");
    let groups = build_groups("install", &index);
    assert_eq!(
        titles(&groups),
        vec![
            "Guide > Installation",
            "Home > FAQ",
            "Home > Guide",
            "Guide > Configuration",
        ]
    );
    assert_eq!(scores(&groups), vec![73, 20, 1, 1]);
}

#[test]
fn test_guide_ranking() {
    let index = fixture_index("/");
    let groups = build_groups("guide", &index);
    assert_eq!(
        titles(&groups),
        vec!["Home > Guide", "Guide > Configuration", "Guide > Installation"]
    );
    assert_eq!(scores(&groups), vec![60, 11, 10]);
}

#[test]
fn test_query_case_does_not_change_ranking() {
    let index = fixture_index("/");
    assert_eq!(build_groups("INSTALL", &index), build_groups("install", &index));
}

#[test]
fn test_ranking_is_deterministic() {
    let index = fixture_index("/");
    let first = build_groups("install", &index);
    for _ in 0..10 {
        assert_eq!(build_groups("install", &index), first);
    }
}

#[test]
fn test_scores_are_sum_of_kind_weights() {
    let index = fixture_index("/");
    for group in build_groups("install", &index) {
        let sum: u32 = group.contents.iter().map(|item| kind_weight(item.kind)).sum();
        assert_eq!(group.score(), sum);
        assert_eq!(group_score(&group.contents), sum);
    }
}

#[test]
fn test_weights_order() {
    assert!(kind_weight(MatchKind::Title) > kind_weight(MatchKind::Heading));
    assert!(kind_weight(MatchKind::Heading) > kind_weight(MatchKind::Custom));
    assert!(kind_weight(MatchKind::Custom) > kind_weight(MatchKind::Content));
}

#[test]
fn test_helper_groups_score_by_size() {
    let groups = make_groups(&[2, 1, 3]);
    assert_eq!(scores(&groups), vec![2, 1, 3]);
}

#[test]
fn test_no_match_is_empty() {
    let index = fixture_index("/");
    assert!(build_groups("kubernetes", &index).is_empty());
    assert!(build_groups("", &index).is_empty());
}
