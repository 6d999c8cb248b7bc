use folio_section::builtin;
use folio_studio::{Action, Studio, StudioConfig};
use folio_test_utils::sample_site;
use pretty_assertions::assert_eq;
use serde_json::Value;

fn config(dir: &tempfile::TempDir) -> StudioConfig {
    let site_path = dir.path().join("site.json");
    std::fs::write(&site_path, serde_json::to_vec(&sample_site()).unwrap()).unwrap();

    StudioConfig::new()
        .with_layout_path(dir.path().join("layout.json"))
        .with_site_data_path(site_path)
}

async fn run(config: &StudioConfig, action: Action) -> String {
    let mut studio = Studio::open(config, builtin::registry()).await.unwrap();
    studio.run(action).await.unwrap()
}

#[tokio::test]
async fn edits_persist_across_invocations() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);

    for type_id in [builtin::HEADER, builtin::HERO_CENTERED, builtin::RECENT_PROJECTS] {
        run(&config, Action::Add { type_id: type_id.into() }).await;
    }
    run(
        &config,
        Action::Set {
            index: 1,
            field: "headline".into(),
            value: "Hello from the studio".into(),
        },
    )
    .await;
    run(
        &config,
        Action::Move {
            index: 1,
            direction: "up".parse().unwrap(),
        },
    )
    .await;

    let shown = run(&config, Action::Show).await;
    let first_lines: Vec<&str> = shown.lines().filter(|l| !l.starts_with("       ")).collect();
    assert_eq!(first_lines.len(), 3);
    assert!(first_lines[0].contains("Hero"));
    assert!(shown.contains("Headline: Hello from the studio"));

    let available = run(&config, Action::Available).await;
    assert!(!available.lines().any(|l| l == builtin::HEADER));
    assert!(available.lines().any(|l| l == builtin::FOOTER_LINKS));
}

#[tokio::test]
async fn render_uses_site_data_for_static_sections() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);
    run(&config, Action::Add { type_id: builtin::HEADER.into() }).await;
    run(&config, Action::Add { type_id: builtin::RECENT_PROJECTS.into() }).await;

    let text = run(&config, Action::Render { json: false }).await;
    assert!(text.starts_with("[header]\n"));
    assert!(text.contains("name: Ada Lovelace"));
    assert!(text.contains("Bernoulli Table"));
    assert!(!text.contains("Draft"));

    let json: Value = serde_json::from_str(&run(&config, Action::Render { json: true }).await).unwrap();
    let types: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["type_id"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec![builtin::HEADER, builtin::RECENT_PROJECTS]);
}

#[tokio::test]
async fn missing_site_data_renders_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let config = StudioConfig::new().with_layout_path(dir.path().join("layout.json"));
    run(&config, Action::Add { type_id: builtin::BLOG.into() }).await;

    let text = run(&config, Action::Render { json: false }).await;
    assert!(text.contains("No blog posts to display yet."));
}

#[tokio::test]
async fn unreadable_site_data_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let config = StudioConfig::new()
        .with_layout_path(dir.path().join("layout.json"))
        .with_site_data_path(dir.path().join("missing.json"));

    let err = Studio::open(&config, builtin::registry()).await.unwrap_err();
    assert!(format!("{err:#}").contains("missing.json"));
}
