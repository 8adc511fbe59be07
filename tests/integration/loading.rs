//! Catalog and config loading from disk.

use super::common::{fixture_catalog, fixture_json};
use docsift::{Catalog, Error, LocaleStats, SearchConfig};
use std::fs;
use std::time::Duration;

// ============================================================================
// CATALOGS
// ============================================================================

#[test]
fn test_fixture_locales() {
    let catalog = fixture_catalog();
    let locales: Vec<_> = catalog.locales().collect();
    assert_eq!(locales, vec!["/", "/zh/"]);
}

#[test]
fn test_fixture_stats() {
    let stats = fixture_catalog().stats();
    assert_eq!(
        stats,
        vec![
            LocaleStats {
                locale: "/".to_string(),
                pages: 5,
                sections: 6,
                paragraphs: 7,
                custom_values: 6,
            },
            LocaleStats {
                locale: "/zh/".to_string(),
                pages: 2,
                sections: 1,
                paragraphs: 1,
                custom_values: 1,
            },
        ]
    );
}

#[test]
fn test_blob_file_loads_same_catalog_as_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("catalog.json");
    let blob_path = dir.path().join("catalog.b64");

    fs::write(&json_path, fixture_json()).unwrap();
    let blob = Catalog::from_path(&json_path).unwrap().to_blob().unwrap();
    fs::write(&blob_path, format!("{}\n", blob)).unwrap();

    let from_json = Catalog::from_path(&json_path).unwrap();
    let from_blob = Catalog::from_path(&blob_path).unwrap();
    for locale in ["/", "/zh/"] {
        assert_eq!(from_json.index(locale), from_blob.index(locale));
    }
    // Page order survives the round trip.
    let paths: Vec<_> = from_blob
        .require("/")
        .unwrap()
        .iter()
        .map(|(path, _)| path.to_string())
        .collect();
    assert_eq!(
        paths,
        vec!["/", "/guide/", "/guide/install.html", "/guide/config.html", "/faq/"]
    );
}

#[test]
fn test_blob_is_smaller_than_json() {
    let catalog = fixture_catalog();
    let json = catalog.to_json().unwrap();
    let blob = catalog.to_blob().unwrap();
    assert!(blob.len() < json.len(), "blob {} vs json {}", blob.len(), json.len());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let err = Catalog::from_path(&missing).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn test_corrupt_blob_is_rejected() {
    assert!(matches!(Catalog::from_blob("not base64!!"), Err(Error::Base64(_))));
    // Valid base64, not brotli.
    assert!(Catalog::from_blob("aGVsbG8gd29ybGQ=").is_err());
}

#[test]
fn test_unknown_locale_lists_available() {
    let err = fixture_catalog().require("/fr/").unwrap_err();
    assert!(matches!(err, Error::UnknownLocale { .. }));
    assert_eq!(
        err.to_string(),
        "no index for locale '/fr/' (available: /, /zh/)"
    );
}

#[test]
fn test_locale_for_route() {
    let catalog = fixture_catalog();
    assert_eq!(catalog.locale_for_route("/zh/guide/"), Some("/zh/"));
    assert_eq!(catalog.locale_for_route("/guide/install.html"), Some("/"));
    assert_eq!(catalog.locale_for_route("/zhong/"), Some("/"));
}

// ============================================================================
// CONFIG
// ============================================================================

#[test]
fn test_config_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("docsift.json");
    fs::write(
        &path,
        r#"{
            "debounceMs": 50,
            "locales": {"/": {"emptyResult": "Nothing here"}},
            "customFields": {"1": "Tagged $content"}
        }"#,
    )
    .unwrap();

    let config = SearchConfig::from_path(&path).unwrap();
    assert_eq!(config.debounce(), Duration::from_millis(50));
    assert_eq!(config.locales.get("/").empty_result, "Nothing here");
    // untouched locales keep their built-in strings
    assert_eq!(config.locales.get("/zh/").empty_result, "没有找到结果");
    assert_eq!(config.custom_fields.template(1, "/"), "Tagged $content");
    assert_eq!(config.custom_fields.template(0, "/"), "$content");
}

#[test]
fn test_invalid_config_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{"debounceMs": "soon"}"#).unwrap();

    let err = SearchConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("broken.json"));
}
