//! Breadcrumb grouping over the fixture site.

use super::common::{fixture_index, titles};
use docsift::{build_groups, MatchKind, UNTITLED_GROUP};

#[test]
fn test_child_pages_group_under_parent_breadcrumb() {
    let index = fixture_index("/");
    let groups = build_groups("install", &index);
    let mut all = titles(&groups);
    all.sort_unstable();
    assert_eq!(
        all,
        vec![
            "Guide > Configuration",
            "Guide > Installation",
            "Home > FAQ",
            "Home > Guide",
        ]
    );
}

#[test]
fn test_items_follow_page_order() {
    let index = fixture_index("/");
    let groups = build_groups("install", &index);
    let install = groups
        .iter()
        .find(|g| g.title == "Guide > Installation")
        .expect("installation group");

    let hits: Vec<_> = install
        .contents
        .iter()
        .map(|item| (item.kind, item.path.as_str()))
        .collect();
    assert_eq!(
        hits,
        vec![
            (MatchKind::Title, "/guide/install.html"),
            (MatchKind::Content, "/guide/install.html#requirements"),
            (MatchKind::Content, "/guide/install.html#requirements"),
            (MatchKind::Heading, "/guide/install.html#install-with-npm"),
            (MatchKind::Content, "/guide/install.html#install-with-npm"),
        ]
    );
}

#[test]
fn test_content_hits_carry_section_header() {
    let index = fixture_index("/");
    let groups = build_groups("install", &index);
    let headers: Vec<_> = groups
        .iter()
        .flat_map(|g| &g.contents)
        .filter(|item| item.kind == MatchKind::Content)
        .map(|item| item.header.as_deref())
        .collect();
    assert!(headers.iter().all(Option::is_some));
    assert!(headers.contains(&Some("Requirements")));
    assert!(headers.contains(&Some("Getting Started")));
}

#[test]
fn test_custom_field_hits_record_field_index() {
    let index = fixture_index("/");
    let groups = build_groups("cli", &index);
    let custom: Vec<_> = groups
        .iter()
        .flat_map(|g| &g.contents)
        .filter(|item| item.kind == MatchKind::Custom)
        .collect();
    assert_eq!(custom.len(), 1);
    assert_eq!(custom[0].index, Some(1));
    assert_eq!(custom[0].path, "/guide/install.html");
}

#[test]
fn test_root_page_breadcrumb_is_its_title() {
    let index = fixture_index("/");
    let groups = build_groups("welcome", &index);
    assert_eq!(titles(&groups), vec!["Home"]);
    // Section without a slug links to the page itself.
    assert_eq!(groups[0].contents[0].path, "/");
}

#[test]
fn test_other_locale_is_searched_independently() {
    let zh = fixture_index("/zh/");
    let groups = build_groups("安装", &zh);
    assert_eq!(titles(&groups), vec!["首页 > 指南"]);
    assert_eq!(groups[0].contents[0].kind, MatchKind::Heading);
    assert_eq!(groups[0].contents[0].path, "/zh/guide/#install");

    let root = fixture_index("/");
    assert!(build_groups("安装", &root).is_empty());
}

#[test]
fn test_untitled_group_label() {
    let index: docsift::Index = serde_json::from_str(
        r#"{"/notes/": {"contents": [{"header": "", "contents": ["scratch notes"]}]}}"#,
    )
    .unwrap();
    let groups = build_groups("scratch", &index);
    assert_eq!(groups[0].display_title(), UNTITLED_GROUP);
}
