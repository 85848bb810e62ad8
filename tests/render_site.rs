//! End-to-end test: site.toml + content.json on disk → dist/index.html.
//!
//! Exercises the public library surface the CLI uses (`generate`, `compose`,
//! the output formatters) against a realistic landing page.
//!
//! Run with: cargo test --test render_site

use showcase::carousel::{ClickOutcome, HeroCarousel, SlotPosition};
use showcase::config::{self, ConfigError};
use showcase::content::{Catalog, ContentType};
use showcase::generate::{self, GenerateError};
use showcase::layout::LayoutInstruction;
use showcase::output;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tempfile::TempDir;

const SITE: &str = r##"
title = "Frontier"

[carousel]
autoplay_ms = 6000

[colors.dark]
accent = "#00ffaa"

[[sections]]
id = "hero"

[[sections.sources]]
type = "maps"
display_mode = "carousel"
card_style = "hero"
fetch_all = true

[[sections]]
id = "news"
title = "Latest news"
intro = "Straight from the **studio**."
background = "#101218"

[[sections.sources]]
type = "news"
display_mode = "spotlight"
fetch_all = true

[[sections]]
id = "arsenal"
title = "Arsenal"

[[sections.sources]]
type = "weapons"
display_mode = "carousel"
card_style = "detailed"
selection = ["w3", "w1"]

[[sections]]
id = "roadmap"
title = "Roadmap"

[[sections.sources]]
type = "roadmap"
display_mode = "list"
category = "q3"

[[sections.sources]]
type = "vehicles"
display_mode = "grid"

[[sections]]
id = "faq"
title = "FAQ"

[[sections.sources]]
type = "faq"
display_mode = "accordion"
"##;

const CONTENT: &str = r#"{
  "news": [
    { "id": "n1", "title": "Season 3", "tag": "Update", "date": "2024-05-01" },
    { "id": "n2", "title": "Patch 3.1" },
    { "id": "n3", "title": "Dev diary" },
    { "id": "n4", "title": "Esports finals" },
    { "id": "n5", "title": "Community spotlight" },
    { "id": "n6", "title": "Holiday event" },
    { "id": "n7", "title": "Server maintenance" }
  ],
  "maps": [
    { "id": "m1", "name": "Canyon", "image": "/maps/canyon.webp", "size": "large" },
    { "id": "m2", "name": "Atoll" },
    { "id": "m3", "name": "Bastion" },
    { "id": "m4", "name": "Quarry" },
    { "id": "m5", "name": "Harbor" },
    { "id": "m6", "name": "Summit" }
  ],
  "weapons": [
    { "id": "w1", "name": "Longbow", "damage": 80, "fire_rate": 20 },
    { "id": "w2", "name": "Crossbow", "damage": 95 },
    { "id": "w3", "name": "Sling", "damage": 15, "fire_rate": 90 }
  ],
  "roadmap": [
    { "id": "r1", "title": "Ranked", "category": "q2", "status": "shipped" },
    { "id": "r2", "title": "Clans", "category": "q3", "status": "in progress" },
    { "id": "r3", "title": "Replays", "category": "q3" }
  ],
  "faq": [
    { "id": "q1", "question": "Is it free to play?", "answer": "Yes." },
    { "id": "q2", "question": "Is there cross-play?", "answer": "On all platforms." }
  ]
}"#;

fn setup() -> (TempDir, PathBuf, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("site.toml");
    let content_path = tmp.path().join("content.json");
    fs::write(&config_path, SITE).unwrap();
    fs::write(&content_path, CONTENT).unwrap();
    (tmp, config_path, content_path)
}

fn render(tmp: &TempDir, config_path: &Path, content_path: &Path) -> (generate::GenerateSummary, String) {
    let out = tmp.path().join("dist");
    let summary = generate::generate(config_path, content_path, &out).unwrap();
    let html = fs::read_to_string(out.join("index.html")).unwrap();
    (summary, html)
}

#[test]
fn renders_every_section_in_order() {
    let (tmp, config_path, content_path) = setup();
    let (summary, html) = render(&tmp, &config_path, &content_path);

    let ids: Vec<&str> = summary.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["hero", "news", "arsenal", "roadmap", "faq"]);

    let positions: Vec<usize> = ids
        .iter()
        .map(|id| html.find(&format!(r#"id="{id}""#)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    assert!(html.contains("<title>Frontier</title>"));
    assert!(html.contains("--color-accent: #00ffaa"));
    assert!(html.contains("<strong>studio</strong>"));
    assert!(html.contains("background: #101218"));
}

#[test]
fn summary_counts_match_selection_rules() {
    let (tmp, config_path, content_path) = setup();
    let (summary, _) = render(&tmp, &config_path, &content_path);

    let layouts: Vec<(&str, &str, usize)> = summary
        .sections
        .iter()
        .flat_map(|s| s.sources.iter())
        .map(|s| (s.source_type.as_str(), s.layout, s.items))
        .collect();
    assert_eq!(
        layouts,
        vec![
            ("maps", "hero carousel", 6),
            ("news", "spotlight", 5),
            ("weapons", "carousel", 2),
            ("roadmap", "list", 2),
            ("vehicles", "empty", 0),
            ("faq", "accordion", 2),
        ]
    );
    assert!(summary.sections[1].sources[0].view_all);
    assert_eq!(summary.item_count(), 17);
}

#[test]
fn hero_markup_carries_autoplay_and_window() {
    let (tmp, config_path, content_path) = setup();
    let (_, html) = render(&tmp, &config_path, &content_path);

    assert!(html.contains(r#"data-autoplay-ms="6000""#));
    assert!(html.contains(r#"data-index="0" data-position="center" data-action="view""#));
    assert!(html.contains(r#"data-index="5" data-position="left" data-action="prev""#));
    assert!(html.contains(r#"data-index="4" data-position="far-left" data-action="prev""#));
    assert!(html.contains(r#"data-index="3" hidden"#));
}

#[test]
fn explicit_ids_render_in_collection_order() {
    let (tmp, config_path, content_path) = setup();
    let (_, html) = render(&tmp, &config_path, &content_path);

    let longbow = html.find("Longbow").unwrap();
    let sling = html.find("Sling").unwrap();
    assert!(longbow < sling);
    assert!(!html.contains("Crossbow"));
}

#[test]
fn check_output_matches_render() {
    let (_tmp, config_path, content_path) = setup();
    let site = config::load_config(&config_path).unwrap();
    let catalog = Catalog::load(&content_path).unwrap();
    let composed = generate::compose(&site, &catalog);

    let lines = output::format_check_output(&composed);
    assert!(lines.contains(&"    roadmap [list] \u{2192} list".to_string()));
    assert!(lines.contains(&"        001 Clans".to_string()));
    assert!(lines.contains(&"    news [spotlight] \u{2192} spotlight + view all".to_string()));
    assert_eq!(lines.last().unwrap(), "5 sections, 17 items");
}

#[test]
fn hero_state_machine_over_resolved_items() {
    let (_tmp, config_path, content_path) = setup();
    let site = config::load_config(&config_path).unwrap();
    let catalog = Catalog::load(&content_path).unwrap();
    let composed = generate::compose(&site, &catalog);

    let LayoutInstruction::HeroCarousel { cards } = &composed[0].sources[0].layout else {
        panic!("expected hero carousel");
    };
    assert!(cards.iter().all(|c| c.item.content_type() == ContentType::Maps));

    let t0 = Instant::now();
    let mut hero = HeroCarousel::new(cards.len(), site.carousel.autoplay_interval(), t0);
    assert!(hero.poll(t0 + Duration::from_millis(6000)));
    assert_eq!(hero.current_index(), Some(1));

    let mut viewed = None;
    let outcome = hero.click_with(
        SlotPosition::Center,
        t0 + Duration::from_millis(6100),
        cards.as_slice(),
        |card| viewed = Some(card.item.id().to_string()),
    );
    assert_eq!(outcome, ClickOutcome::View(1));
    assert_eq!(viewed.as_deref(), Some("m2"));
}

#[test]
fn invalid_config_is_reported() {
    let (tmp, config_path, content_path) = setup();
    fs::write(&config_path, "[layout]\ngrid_columns = 7\n").unwrap();
    let result = generate::generate(&config_path, &content_path, &tmp.path().join("dist"));
    assert!(matches!(
        result,
        Err(GenerateError::Config(ConfigError::Validation(_)))
    ));
    assert!(!tmp.path().join("dist").exists());
}

#[test]
fn stock_config_renders_empty_page() {
    let (tmp, config_path, content_path) = setup();
    fs::write(&config_path, config::stock_config_toml()).unwrap();
    let (summary, html) = render(&tmp, &config_path, &content_path);
    assert!(summary.sections.is_empty());
    assert!(html.contains("<title>Showcase</title>"));
    assert!(html.contains(r#"<main class="showcase"></main>"#));
}
