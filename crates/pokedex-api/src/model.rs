//! Records, index entries and the catalog

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// One entry of the resource index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRef {
    pub name: String,
    pub endpoint: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sprites {
    pub front: Option<String>,
    pub back: Option<String>,
}

/// Full detail payload for one Pokémon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: u32,
    pub name: String,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub sprites: Sprites,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
}

impl Record {
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }
}

// Wire shapes. Unknown fields are ignored.

#[derive(Debug, Deserialize)]
pub(crate) struct IndexPage {
    results: Vec<NamedResource>,
}

impl IndexPage {
    pub(crate) fn into_refs(self) -> Vec<ResourceRef> {
        self.results
            .into_iter()
            .map(|r| ResourceRef {
                name: r.name,
                endpoint: r.url,
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct NameOnly {
    name: String,
}

#[derive(Debug, Deserialize)]
struct SpritesPayload {
    #[serde(default)]
    front_default: Option<String>,
    #[serde(default)]
    back_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    kind: NameOnly,
}

#[derive(Debug, Deserialize)]
struct AbilitySlot {
    ability: NameOnly,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecordPayload {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
    sprites: SpritesPayload,
    types: Vec<TypeSlot>,
    abilities: Vec<AbilitySlot>,
}

impl From<RecordPayload> for Record {
    fn from(p: RecordPayload) -> Self {
        Record {
            id: p.id,
            name: p.name,
            height: p.height,
            weight: p.weight,
            sprites: Sprites {
                front: p.sprites.front_default,
                back: p.sprites.back_default,
            },
            types: p.types.into_iter().map(|t| t.kind.name).collect(),
            abilities: p.abilities.into_iter().map(|a| a.ability.name).collect(),
        }
    }
}

/// Ordered, immutable set of records with unique ids.
///
/// Cloning is cheap; a catalog is only ever replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Arc<[Record]>,
}

impl Catalog {
    pub fn new(records: Vec<Record>) -> Result<Self, ApiError> {
        let mut seen: HashMap<u32, usize> = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            if let Some(&prev) = seen.get(&record.id) {
                return Err(ApiError::DuplicateRecord {
                    id: record.id,
                    first: records[prev].name.clone(),
                    second: record.name.clone(),
                });
            }
            seen.insert(record.id, idx);
        }
        Ok(Self {
            records: records.into(),
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn by_id(&self, id: u32) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
