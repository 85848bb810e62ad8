//! Content collections and the item model.
//!
//! Every collection holds one kind of item. The ten kinds share a loose shape
//! (an id, a label, an optional description and picture) but each carries its
//! own metadata, so they are modelled as separate structs wrapped by the
//! [`ContentItem`] enum.
//!
//! ## Label and Description
//!
//! Some kinds call their label `title`, others `name`; FAQ entries use
//! `question`/`answer`. Consumers never probe fields directly. They go through
//! the capability accessors on [`ContentItem`]:
//!
//! | Accessor | Resolution order |
//! |----------|------------------|
//! | [`ContentItem::label`] | `title` → `name` (FAQ: `question`) |
//! | [`ContentItem::description`] | `description` → `answer` |
//! | [`ContentItem::image`] | `image` → `src` |
//!
//! ## Storage
//!
//! The engine never owns content. It reads it through the [`ContentStore`]
//! trait. [`Catalog`] is the store used by the CLI: a JSON document with one
//! array per collection, kept in file order.
//!
//! ```json
//! {
//!   "news": [{ "id": "n1", "title": "Season 3", "date": "2024-05-01" }],
//!   "faq":  [{ "id": "q1", "question": "Is it free?", "answer": "Yes." }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The ten content collections a section can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    News,
    Classes,
    Features,
    Media,
    Weapons,
    Devices,
    Maps,
    Faq,
    GameModes,
    Roadmap,
}

impl ContentType {
    pub const ALL: [ContentType; 10] = [
        ContentType::News,
        ContentType::Classes,
        ContentType::Features,
        ContentType::Media,
        ContentType::Weapons,
        ContentType::Devices,
        ContentType::Maps,
        ContentType::Faq,
        ContentType::GameModes,
        ContentType::Roadmap,
    ];

    /// Parse a persisted collection key. Unknown keys yield `None`.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Collection key as it appears in config and content files.
    pub fn key(self) -> &'static str {
        match self {
            ContentType::News => "news",
            ContentType::Classes => "classes",
            ContentType::Features => "features",
            ContentType::Media => "media",
            ContentType::Weapons => "weapons",
            ContentType::Devices => "devices",
            ContentType::Maps => "maps",
            ContentType::Faq => "faq",
            ContentType::GameModes => "game-modes",
            ContentType::Roadmap => "roadmap",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ============================================================================
// Item kinds
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// A named numeric stat shown on class and weapon cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: u32,
}

/// A playable class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

/// A screenshot or trailer. Media carries its asset in `src` rather than `image`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default)]
    pub kind: MediaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fire_rate: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameModeItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<String>,
}

/// A roadmap milestone. The only kind with a `category` used for filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quarter: Option<String>,
}

// ============================================================================
// ContentItem
// ============================================================================

/// One item from any collection.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentItem {
    News(NewsItem),
    Class(ClassItem),
    Media(MediaItem),
    Feature(FeatureItem),
    Weapon(WeaponItem),
    Map(MapItem),
    Device(DeviceItem),
    Faq(FaqItem),
    GameMode(GameModeItem),
    Roadmap(RoadmapItem),
}

impl ContentItem {
    /// Collection this item belongs to.
    pub fn content_type(&self) -> ContentType {
        match self {
            ContentItem::News(_) => ContentType::News,
            ContentItem::Class(_) => ContentType::Classes,
            ContentItem::Media(_) => ContentType::Media,
            ContentItem::Feature(_) => ContentType::Features,
            ContentItem::Weapon(_) => ContentType::Weapons,
            ContentItem::Map(_) => ContentType::Maps,
            ContentItem::Device(_) => ContentType::Devices,
            ContentItem::Faq(_) => ContentType::Faq,
            ContentItem::GameMode(_) => ContentType::GameModes,
            ContentItem::Roadmap(_) => ContentType::Roadmap,
        }
    }

    /// Id, unique within the item's collection only.
    pub fn id(&self) -> &str {
        match self {
            ContentItem::News(i) => &i.id,
            ContentItem::Class(i) => &i.id,
            ContentItem::Media(i) => &i.id,
            ContentItem::Feature(i) => &i.id,
            ContentItem::Weapon(i) => &i.id,
            ContentItem::Map(i) => &i.id,
            ContentItem::Device(i) => &i.id,
            ContentItem::Faq(i) => &i.id,
            ContentItem::GameMode(i) => &i.id,
            ContentItem::Roadmap(i) => &i.id,
        }
    }

    /// The `title` field if the kind has one.
    pub fn title(&self) -> Option<&str> {
        match self {
            ContentItem::News(i) => Some(&i.title),
            ContentItem::Media(i) => i.title.as_deref(),
            ContentItem::Feature(i) => Some(&i.title),
            ContentItem::Roadmap(i) => Some(&i.title),
            _ => None,
        }
    }

    /// The `name` field if the kind has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            ContentItem::Class(i) => Some(&i.name),
            ContentItem::Weapon(i) => Some(&i.name),
            ContentItem::Map(i) => Some(&i.name),
            ContentItem::Device(i) => Some(&i.name),
            ContentItem::GameMode(i) => Some(&i.name),
            _ => None,
        }
    }

    /// The `question` field (FAQ only).
    pub fn question(&self) -> Option<&str> {
        match self {
            ContentItem::Faq(i) => Some(&i.question),
            _ => None,
        }
    }

    /// The `answer` field (FAQ only).
    pub fn answer(&self) -> Option<&str> {
        match self {
            ContentItem::Faq(i) => i.answer.as_deref(),
            _ => None,
        }
    }

    /// Title-like label: `title`, then `name`, then `question`.
    ///
    /// Empty for untitled media, never absent.
    pub fn label(&self) -> &str {
        self.title()
            .or_else(|| self.name())
            .or_else(|| self.question())
            .unwrap_or_default()
    }

    /// Description-like text: `description`, then `answer`.
    pub fn description(&self) -> Option<&str> {
        let own = match self {
            ContentItem::News(i) => i.description.as_deref(),
            ContentItem::Class(i) => i.description.as_deref(),
            ContentItem::Media(i) => i.description.as_deref(),
            ContentItem::Feature(i) => i.description.as_deref(),
            ContentItem::Weapon(i) => i.description.as_deref(),
            ContentItem::Map(i) => i.description.as_deref(),
            ContentItem::Device(i) => i.description.as_deref(),
            ContentItem::GameMode(i) => i.description.as_deref(),
            ContentItem::Roadmap(i) => i.description.as_deref(),
            ContentItem::Faq(_) => None,
        };
        own.or_else(|| self.answer())
    }

    /// Visual asset: `image`, then `src`.
    pub fn image(&self) -> Option<&str> {
        match self {
            ContentItem::News(i) => i.image.as_deref(),
            ContentItem::Class(i) => i.image.as_deref(),
            ContentItem::Media(i) => i.src.as_deref(),
            ContentItem::Feature(i) => i.image.as_deref(),
            ContentItem::Weapon(i) => i.image.as_deref(),
            ContentItem::Map(i) => i.image.as_deref(),
            ContentItem::Device(i) => i.image.as_deref(),
            ContentItem::GameMode(i) => i.image.as_deref(),
            ContentItem::Faq(_) | ContentItem::Roadmap(_) => None,
        }
    }

    /// Roadmap category; `None` for every other kind.
    pub fn category(&self) -> Option<&str> {
        match self {
            ContentItem::Roadmap(i) => i.category.as_deref(),
            _ => None,
        }
    }

    /// Short secondary line shown under the label (date, role, status...).
    pub fn meta(&self) -> Option<String> {
        match self {
            ContentItem::News(i) => match (&i.tag, &i.date) {
                (Some(tag), Some(date)) => Some(format!("{tag} · {date}")),
                (Some(s), None) | (None, Some(s)) => Some(s.clone()),
                (None, None) => None,
            },
            ContentItem::Class(i) => i.role.clone(),
            ContentItem::Weapon(i) => i.category.clone(),
            ContentItem::Map(i) => i.size.clone(),
            ContentItem::Device(i) => i.kind.clone(),
            ContentItem::GameMode(i) => i.players.clone(),
            ContentItem::Roadmap(i) => match (&i.quarter, &i.status) {
                (Some(q), Some(s)) => Some(format!("{q} · {s}")),
                (Some(s), None) | (None, Some(s)) => Some(s.clone()),
                (None, None) => None,
            },
            ContentItem::Media(_) | ContentItem::Feature(_) | ContentItem::Faq(_) => None,
        }
    }

    /// Numeric stats for stat-bearing kinds (classes, weapons).
    pub fn stats(&self) -> Vec<Stat> {
        match self {
            ContentItem::Class(i) => i.stats.clone(),
            ContentItem::Weapon(i) => [("Damage", i.damage), ("Fire rate", i.fire_rate)]
                .into_iter()
                .filter_map(|(label, value)| {
                    value.map(|value| Stat {
                        label: label.to_string(),
                        value,
                    })
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

// ============================================================================
// Stores
// ============================================================================

/// Read access to named collections.
///
/// Implementations must return items in the same relative order on every
/// call within a session. The engine never reorders a collection itself.
pub trait ContentStore {
    fn collection(&self, kind: ContentType) -> Vec<ContentItem>;
}

/// In-memory store loaded from a `content.json` document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Catalog {
    pub news: Vec<NewsItem>,
    pub classes: Vec<ClassItem>,
    pub features: Vec<FeatureItem>,
    pub media: Vec<MediaItem>,
    pub weapons: Vec<WeaponItem>,
    pub devices: Vec<DeviceItem>,
    pub maps: Vec<MapItem>,
    pub faq: Vec<FaqItem>,
    pub game_modes: Vec<GameModeItem>,
    pub roadmap: Vec<RoadmapItem>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Number of items in one collection.
    pub fn len_of(&self, kind: ContentType) -> usize {
        match kind {
            ContentType::News => self.news.len(),
            ContentType::Classes => self.classes.len(),
            ContentType::Features => self.features.len(),
            ContentType::Media => self.media.len(),
            ContentType::Weapons => self.weapons.len(),
            ContentType::Devices => self.devices.len(),
            ContentType::Maps => self.maps.len(),
            ContentType::Faq => self.faq.len(),
            ContentType::GameModes => self.game_modes.len(),
            ContentType::Roadmap => self.roadmap.len(),
        }
    }
}

fn wrap<T: Clone>(items: &[T], variant: fn(T) -> ContentItem) -> Vec<ContentItem> {
    items.iter().cloned().map(variant).collect()
}

impl ContentStore for Catalog {
    fn collection(&self, kind: ContentType) -> Vec<ContentItem> {
        match kind {
            ContentType::News => wrap(&self.news, ContentItem::News),
            ContentType::Classes => wrap(&self.classes, ContentItem::Class),
            ContentType::Features => wrap(&self.features, ContentItem::Feature),
            ContentType::Media => wrap(&self.media, ContentItem::Media),
            ContentType::Weapons => wrap(&self.weapons, ContentItem::Weapon),
            ContentType::Devices => wrap(&self.devices, ContentItem::Device),
            ContentType::Maps => wrap(&self.maps, ContentItem::Map),
            ContentType::Faq => wrap(&self.faq, ContentItem::Faq),
            ContentType::GameModes => wrap(&self.game_modes, ContentItem::GameMode),
            ContentType::Roadmap => wrap(&self.roadmap, ContentItem::Roadmap),
        }
    }
}
