use super::*;

fn fixtures() -> ContentStore {
    ContentStore::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/content"))
}

fn fm(slug: &str, date: Option<&str>) -> Frontmatter {
    Frontmatter {
        slug: slug.to_owned(),
        date: date.map(str::to_owned),
        ..Frontmatter::default()
    }
}

#[test]
fn slugs_ignore_non_content_files() {
    let slugs = fixtures().slugs("cheatsheets").unwrap();
    assert_eq!(slugs, vec!["awk", "docker", "git", "grep"]);
}

#[test]
fn list_sorts_dated_entries_newest_first() {
    let items = fixtures().list_content("blog").unwrap();
    let slugs: Vec<&str> = items.iter().map(|f| f.slug.as_str()).collect();
    assert_eq!(
        slugs,
        vec!["notes", "broken", "ownership", "async-intro", "undated"]
    );
    assert_eq!(items[1].title, PLACEHOLDER_TITLE);
    assert_eq!(items[0].category.as_deref(), Some("Meta"));
}

#[test]
fn missing_category_lists_nothing() {
    assert!(fixtures().list_content("podcasts").unwrap().is_empty());
}

#[test]
fn get_renders_body_and_headings() {
    let entry = fixtures().get_content_by_slug("blog", "ownership");
    assert!(!entry.is_placeholder());
    assert_eq!(entry.frontmatter.slug, "ownership");
    assert_eq!(entry.frontmatter.title, "Ownership, explained");
    assert_eq!(entry.frontmatter.tags(), vec!["rust", "memory"]);
    let ids: Vec<&str> = entry.headings.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, vec!["ownership", "borrowing", "borrowing-1"]);
    let html = entry.html.unwrap();
    assert!(html.contains(r#"<code class="language-rust">"#));
    assert_eq!(entry.reading_minutes, 1);
}

#[test]
fn markdown_extension_and_toml_front_matter() {
    let entry = fixtures().try_get_content_by_slug("blog", "notes").unwrap();
    assert_eq!(entry.frontmatter.date.as_deref(), Some("2025-05-01"));
    assert!(entry.html.unwrap().contains("<table>"));
}

#[test]
fn failures_fall_back_to_placeholder() {
    let store = fixtures();
    for slug in ["does-not-exist", "broken"] {
        let entry = store.get_content_by_slug("blog", slug);
        assert!(entry.is_placeholder());
        assert_eq!(entry.frontmatter.slug, slug);
        assert_eq!(entry.frontmatter.title, "Content Not Found");
        assert_eq!(
            entry.frontmatter.description,
            "The requested content could not be loaded."
        );
    }
}

#[test]
fn try_get_reports_error_kinds() {
    let store = fixtures();
    assert!(matches!(
        store.try_get_content_by_slug("blog", "does-not-exist"),
        Err(FolioError::NotFound(_))
    ));
    assert!(matches!(
        store.try_get_content_by_slug("blog", "broken"),
        Err(FolioError::Content(_))
    ));
    assert!(matches!(
        store.try_get_content_by_slug("blog", "../secrets"),
        Err(FolioError::Validation(_))
    ));
}

#[test]
fn slug_validation() {
    assert!(validate_slug("hello-world").is_ok());
    assert!(validate_slug("").is_err());
    assert!(validate_slug("a/b").is_err());
    assert!(validate_slug("a\\b").is_err());
    assert!(validate_slug("..").is_err());
    assert!(validate_slug(".hidden").is_err());
}

#[test]
fn sorting_leaves_undated_entries_in_place() {
    let mut items = vec![
        fm("a", Some("2024-01-01")),
        fm("x", None),
        fm("b", Some("2025-01-01")),
        fm("y", Some("garbage")),
        fm("c", Some("2024-06-01")),
    ];
    sort_by_date_desc(&mut items);
    let slugs: Vec<&str> = items.iter().map(|f| f.slug.as_str()).collect();
    assert_eq!(slugs, vec!["b", "x", "c", "y", "a"]);
}

#[test]
fn equal_dates_keep_input_order() {
    let mut items = vec![fm("first", Some("2025-01-01")), fm("second", Some("January 1, 2025"))];
    sort_by_date_desc(&mut items);
    assert_eq!(items[0].slug, "first");
}

fn scratch_store(name: &str, files: &[(&str, &str)]) -> ContentStore {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join("folio-tests")
        .join(name);
    let _ = std::fs::remove_dir_all(&root);
    std::fs::create_dir_all(root.join("blog")).unwrap();
    for (file, body) in files {
        std::fs::write(root.join("blog").join(file), body).unwrap();
    }
    ContentStore::new(root)
}

#[test]
fn full_yaml_front_matter_loads() {
    let store = scratch_store(
        "yaml-front-matter",
        &[
            ("orwell.mdx", "---\ntitle: 1984\ndate: 2024-1-5\n---\nBig Brother.\n"),
            (
                "folded.mdx",
                "---\ntitle: Folded\ndescription: >\n  First line\n  second line.\nseo:\n  image: /og.png\n---\nBody\n",
            ),
        ],
    );

    let orwell = store.try_get_content_by_slug("blog", "orwell").unwrap();
    assert_eq!(orwell.frontmatter.title, "1984");

    let folded = store.try_get_content_by_slug("blog", "folded").unwrap();
    assert_eq!(folded.frontmatter.description, "First line second line.\n");
    assert_eq!(folded.frontmatter.extra["seo"]["image"], "/og.png");

    let titles: Vec<String> = store
        .list_content("blog")
        .unwrap()
        .into_iter()
        .map(|f| f.title)
        .collect();
    assert_eq!(titles, vec!["Folded", "1984"]);
}

#[test]
fn loose_date_formats_take_part_in_sorting() {
    let mut items = vec![
        fm("padded", Some("2024-01-04")),
        fm("unpadded", Some("2024-1-5")),
        fm("slashes", Some("2024/01/06")),
        fm("short", Some("Jan 7 2024")),
    ];
    sort_by_date_desc(&mut items);
    let slugs: Vec<&str> = items.iter().map(|f| f.slug.as_str()).collect();
    assert_eq!(slugs, vec!["short", "slashes", "unpadded", "padded"]);
}
