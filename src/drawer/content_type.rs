//! Content-type tags.
//!
//! Every drawer is addressed by a tag from a closed set. Tags travel as
//! plain strings (`"feat"`, `"class-feature"`, ...) so they can be stored
//! and exchanged; an unrecognized tag is kept verbatim in
//! [`ContentType::Unknown`] and simply renders nothing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Discriminator selecting which renderer pair handles a drawer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContentType {
    Generic,
    Feat,
    Action,
    Spell,
    Item,
    Class,
    ClassFeature,
    Ancestry,
    Background,
    Language,
    Heritage,
    Sense,
    PhysicalFeature,
    Trait,
    Character,
    StatProfile,
    StatAttribute,
    StatHealth,
    StatResistWeak,
    AddItem,
    AddSpell,
    InventoryItem,
    /// A tag this build does not know about.
    Unknown(String),
}

impl ContentType {
    /// Every known variant, in registry order.
    pub const KNOWN: [ContentType; 22] = [
        ContentType::Generic,
        ContentType::Feat,
        ContentType::Action,
        ContentType::Spell,
        ContentType::Item,
        ContentType::Class,
        ContentType::ClassFeature,
        ContentType::Ancestry,
        ContentType::Background,
        ContentType::Language,
        ContentType::Heritage,
        ContentType::Sense,
        ContentType::PhysicalFeature,
        ContentType::Trait,
        ContentType::Character,
        ContentType::StatProfile,
        ContentType::StatAttribute,
        ContentType::StatHealth,
        ContentType::StatResistWeak,
        ContentType::AddItem,
        ContentType::AddSpell,
        ContentType::InventoryItem,
    ];

    /// Parse a tag. Never fails; unknown tags are preserved.
    ///
    /// The short legacy spellings (`stat-prof`, `stat-attr`, `stat-hp`,
    /// `inv-item`) map onto the same variants as the long ones.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "generic" => ContentType::Generic,
            "feat" => ContentType::Feat,
            "action" => ContentType::Action,
            "spell" => ContentType::Spell,
            "item" => ContentType::Item,
            "class" => ContentType::Class,
            "class-feature" => ContentType::ClassFeature,
            "ancestry" => ContentType::Ancestry,
            "background" => ContentType::Background,
            "language" => ContentType::Language,
            "heritage" => ContentType::Heritage,
            "sense" => ContentType::Sense,
            "physical-feature" => ContentType::PhysicalFeature,
            "trait" => ContentType::Trait,
            "character" => ContentType::Character,
            "stat-profile" | "stat-prof" => ContentType::StatProfile,
            "stat-attribute" | "stat-attr" => ContentType::StatAttribute,
            "stat-health" | "stat-hp" => ContentType::StatHealth,
            "stat-resist-weak" => ContentType::StatResistWeak,
            "add-item" => ContentType::AddItem,
            "add-spell" => ContentType::AddSpell,
            "inventory-item" | "inv-item" => ContentType::InventoryItem,
            other => ContentType::Unknown(other.to_string()),
        }
    }

    /// The canonical tag string.
    pub fn tag(&self) -> &str {
        match self {
            ContentType::Generic => "generic",
            ContentType::Feat => "feat",
            ContentType::Action => "action",
            ContentType::Spell => "spell",
            ContentType::Item => "item",
            ContentType::Class => "class",
            ContentType::ClassFeature => "class-feature",
            ContentType::Ancestry => "ancestry",
            ContentType::Background => "background",
            ContentType::Language => "language",
            ContentType::Heritage => "heritage",
            ContentType::Sense => "sense",
            ContentType::PhysicalFeature => "physical-feature",
            ContentType::Trait => "trait",
            ContentType::Character => "character",
            ContentType::StatProfile => "stat-profile",
            ContentType::StatAttribute => "stat-attribute",
            ContentType::StatHealth => "stat-health",
            ContentType::StatResistWeak => "stat-resist-weak",
            ContentType::AddItem => "add-item",
            ContentType::AddSpell => "add-spell",
            ContentType::InventoryItem => "inventory-item",
            ContentType::Unknown(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ContentType::Unknown(_))
    }

    /// Whether the drawer shows user-authored data rather than canonical
    /// rules content. Such drawers get no "report a problem" affordance.
    pub fn is_user_authored(&self) -> bool {
        matches!(
            self,
            ContentType::Character
                | ContentType::StatProfile
                | ContentType::StatAttribute
                | ContentType::StatHealth
                | ContentType::StatResistWeak
                | ContentType::AddItem
                | ContentType::AddSpell
                | ContentType::InventoryItem
        )
    }

    /// Coarse content family used when filing content feedback.
    ///
    /// Feats, actions and their relatives are all stored as ability
    /// blocks; everything else reports under its own tag.
    pub fn content_family(&self) -> &str {
        match self {
            ContentType::Feat
            | ContentType::Action
            | ContentType::ClassFeature
            | ContentType::Heritage
            | ContentType::Sense
            | ContentType::PhysicalFeature => "ability-block",
            other => other.tag(),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<&str> for ContentType {
    fn from(tag: &str) -> Self {
        ContentType::from_tag(tag)
    }
}

impl Serialize for ContentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for ContentType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(ContentType::from_tag(&tag))
    }
}
