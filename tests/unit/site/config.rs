use super::*;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/site.toml")
}

#[test]
fn loads_fixture_and_resolves_content_dir() {
    let cfg = SiteConfig::from_path(&fixture_path()).unwrap();
    assert_eq!(cfg.title, "Mind of a Developer");
    assert_eq!(cfg.books.len(), 3);
    assert_eq!(cfg.books[0].amazon_link.as_deref(), Some("https://example.com/pragmatic"));
    assert_eq!(cfg.books[1].amazon_link, None);
    assert_eq!(cfg.playlists.len(), 3);
    assert_eq!(cfg.intro_lines[0], vec!["Ada", "B.", "Lovelace"]);
    assert!(cfg.content_dir.ends_with("tests/data/content"));
    assert!(cfg.content_dir.is_absolute());
    // Absent tables fall back to defaults.
    assert!(cfg.featured_posts.is_empty());
    assert_eq!(cfg.links.len(), 4);
}

#[test]
fn empty_config_is_all_defaults() {
    let cfg = SiteConfig::from_toml_str("").unwrap();
    assert_eq!(cfg, SiteConfig::default());
    assert_eq!(cfg.links[0].href, "/blog");
}

#[test]
fn rejects_out_of_range_rating() {
    let src = r#"
[[books]]
id = "x"
title = "T"
author = "A"
description = "D"
cover_image = "/c.jpg"
category = "C"
rating = 6
"#;
    let err = SiteConfig::from_toml_str(src).unwrap_err();
    assert!(matches!(err, FolioError::Config(_)));
    assert!(err.to_string().contains("rating 6"));
}

#[test]
fn rejects_duplicate_ids() {
    let src = r#"
[[playlists]]
id = "1"
title = "A"
spotify_id = "abc"

[[playlists]]
id = "1"
title = "B"
spotify_id = "def"
"#;
    let err = SiteConfig::from_toml_str(src).unwrap_err();
    assert!(err.to_string().contains("duplicate playlist id '1'"));
}

#[test]
fn syntax_errors_are_config_errors() {
    assert!(matches!(
        SiteConfig::from_toml_str("title = "),
        Err(FolioError::Config(_))
    ));
}

#[test]
fn missing_file_is_reported() {
    let err = SiteConfig::from_path(Path::new("/definitely/not/here.toml")).unwrap_err();
    assert!(matches!(err, FolioError::Other(_)));
}

#[test]
fn playlist_embed_url() {
    let p = Playlist {
        id: "1".into(),
        title: "T".into(),
        description: String::new(),
        mood: String::new(),
        spotify_id: "abc".into(),
    };
    assert_eq!(p.embed_url(), "https://open.spotify.com/embed/playlist/abc");
}
