//! Candidate items and the validated candidate universe.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChipError, Result};

/// An item eligible for selection, identified by its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateItem {
    pub label: String,
    pub value: String,
    /// Avatar location; carried through but never resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CandidateItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// The full candidate universe, with labels guaranteed unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    items: Vec<CandidateItem>,
}

impl Candidates {
    pub fn new(items: Vec<CandidateItem>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.label.as_str()) {
                return Err(ChipError::DuplicateLabel(item.label.clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[CandidateItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Load a JSON array of `{label, value, image?}` objects.
pub fn load_candidates(path: &Path) -> Result<Candidates> {
    let contents = std::fs::read_to_string(path)?;
    let items: Vec<CandidateItem> =
        serde_json::from_str(&contents).map_err(|source| ChipError::CandidateParse {
            path: path.to_path_buf(),
            source,
        })?;
    Candidates::new(items)
}

/// Built-in list used when no candidate file is given.
pub fn demo_candidates() -> Candidates {
    let names = [
        "Alice Johnson",
        "Bob Smith",
        "Carol Williams",
        "David Brown",
        "Eve Davis",
        "Frank Miller",
        "Grace Wilson",
        "Heidi Moore",
        "Ivan Taylor",
        "Judy Anderson",
        "Mallory Thomas",
        "Niaj Jackson",
        "Olivia White",
        "Peggy Harris",
        "Rupert Martin",
        "Sybil Thompson",
        "Trent Garcia",
        "Victor Martinez",
        "Walter Robinson",
    ];
    let items = names
        .iter()
        .map(|name| {
            let handle = name.to_lowercase().replace(' ', ".");
            CandidateItem::new(*name, format!("{}@example.com", handle))
                .with_image(format!("https://avatars.example.com/{}.png", handle))
        })
        .collect();
    Candidates { items }
}
