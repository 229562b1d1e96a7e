//! The bundled rules catalog.
//!
//! A small JSON catalog compiled into the binary. Feats, actions and the
//! other ability blocks share one id space, so every lookup goes through
//! the content family of the requested type.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::drawer::{ContentType, PanelRequest};
use crate::error::DrawerResult;

const BUNDLED_CATALOG: &str = include_str!("catalog.json");

/// An expandable part of an entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSection {
    pub key: String,
    pub id: String,
    pub heading: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "type")]
    pub kind: ContentType,
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub traits: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub sections: Vec<CatalogSection>,
}

impl CatalogEntry {
    /// A fresh drawer request for this entry.
    pub fn request(&self) -> PanelRequest {
        PanelRequest::new(self.kind.clone(), json!({ "id": self.id }))
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    entries: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn from_json(json: &str) -> DrawerResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self {
            entries: file.entries,
        })
    }

    /// The catalog shipped with the binary.
    pub fn bundled() -> DrawerResult<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, kind: &ContentType, id: u64) -> Option<&CatalogEntry> {
        let family = kind.content_family();
        self.entries
            .iter()
            .find(|e| e.id == id && e.kind.content_family() == family)
    }

    /// Resolve a drawer payload of the form `{"id": n}`.
    pub fn lookup(&self, kind: &ContentType, data: &Value) -> Option<&CatalogEntry> {
        let id = data.get("id")?.as_u64()?;
        self.get(kind, id)
    }
}
