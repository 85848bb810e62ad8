//! Shared test utilities for the showcase test suite.
//!
//! Provides item builders and small in-memory catalogs so module tests do not
//! each hand-assemble structs with a dozen `None` fields.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let store = catalog_with_news(6);
//! let set = crate::source::resolve(&SourceDescriptor::new("news"), &store);
//! assert_eq!(set.ids(), vec!["n1", "n2", "n3"]);
//!
//! let faq = faq_item("q1", "Is it free?", "Yes.");
//! assert_eq!(faq.label(), "Is it free?");
//! ```

use crate::content::*;

// =========================================================================
// Item builders
// =========================================================================

fn news(id: &str, title: &str) -> NewsItem {
    NewsItem {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        image: None,
        date: None,
        tag: None,
    }
}

fn roadmap(id: &str, title: &str, category: &str) -> RoadmapItem {
    RoadmapItem {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        category: Some(category.to_string()),
        status: None,
        quarter: None,
    }
}

fn faq(id: &str, question: &str, answer: &str) -> FaqItem {
    FaqItem {
        id: id.to_string(),
        question: question.to_string(),
        answer: Some(answer.to_string()),
    }
}

fn weapon(id: &str, name: &str) -> WeaponItem {
    WeaponItem {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        image: None,
        category: None,
        damage: None,
        fire_rate: None,
    }
}

fn class(id: &str, name: &str) -> ClassItem {
    ClassItem {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        image: None,
        role: None,
        stats: vec![
            Stat {
                label: "Health".to_string(),
                value: 60,
            },
            Stat {
                label: "Mobility".to_string(),
                value: 85,
            },
        ],
    }
}

pub fn news_item(id: &str, title: &str) -> ContentItem {
    ContentItem::News(news(id, title))
}

pub fn weapon_item(id: &str, name: &str) -> ContentItem {
    ContentItem::Weapon(weapon(id, name))
}

pub fn faq_item(id: &str, question: &str, answer: &str) -> ContentItem {
    ContentItem::Faq(faq(id, question, answer))
}

pub fn roadmap_item(id: &str, title: &str, category: &str) -> ContentItem {
    ContentItem::Roadmap(roadmap(id, title, category))
}

/// A class carrying "Health" and "Mobility" stats.
pub fn class_item(id: &str, name: &str) -> ContentItem {
    ContentItem::Class(class(id, name))
}

// =========================================================================
// Catalogs
// =========================================================================

/// A catalog with `n` news items `n1..=nN` titled "News 1".."News N".
pub fn catalog_with_news(n: usize) -> Catalog {
    Catalog {
        news: (1..=n)
            .map(|i| news(&format!("n{i}"), &format!("News {i}")))
            .collect(),
        ..Catalog::default()
    }
}

/// A small catalog with at least one item in every collection.
///
/// Roadmap entries `r1`/`r3` sit in category `q1`, `r2` in `q2`.
pub fn sample_catalog() -> Catalog {
    Catalog {
        news: vec![news("n1", "Season 3"), news("n2", "Patch 3.1")],
        classes: vec![class("c1", "Ranger"), class("c2", "Warden")],
        features: vec![FeatureItem {
            id: "f1".to_string(),
            title: "Destructible maps".to_string(),
            description: Some("Bring the house down.".to_string()),
            image: None,
            icon: Some("hammer".to_string()),
        }],
        media: vec![MediaItem {
            id: "m1".to_string(),
            title: Some("Launch trailer".to_string()),
            src: Some("/media/trailer.mp4".to_string()),
            kind: MediaKind::Video,
            description: None,
        }],
        weapons: vec![weapon("w1", "Longbow"), weapon("w2", "Crossbow")],
        devices: vec![DeviceItem {
            id: "d1".to_string(),
            name: "Grapple".to_string(),
            description: None,
            image: None,
            kind: Some("mobility".to_string()),
        }],
        maps: vec![MapItem {
            id: "map1".to_string(),
            name: "Canyon".to_string(),
            description: None,
            image: Some("/maps/canyon.webp".to_string()),
            size: Some("large".to_string()),
        }],
        faq: vec![
            faq("q1", "Is it free to play?", "Yes."),
            faq("q2", "Is there cross-play?", "On all platforms."),
        ],
        game_modes: vec![GameModeItem {
            id: "g1".to_string(),
            name: "Duel".to_string(),
            description: None,
            image: None,
            players: Some("1v1".to_string()),
        }],
        roadmap: vec![
            roadmap("r1", "Ranked", "q1"),
            roadmap("r2", "Clans", "q2"),
            roadmap("r3", "Replays", "q1"),
        ],
    }
}
