//! Challenge definitions - static reference data.
//!
//! A `ChallengeDefinition` holds the immutable shape of one challenge
//! variant: its item roster and how many selections count as a win.
//! Live per-run data (remaining time, current selection) is stored
//! separately in `ChallengeSession`.

use serde::{Deserialize, Serialize};

use crate::core::DefenderType;

/// Identifier of a selectable item within a challenge.
///
/// Ids are dense per definition (0..item_count) and only meaningful
/// relative to that definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Create a new item ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

/// One selectable item in a challenge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeItem {
    /// Identifier within the owning definition.
    pub id: ItemId,

    /// Display label ("Satellite 3", "GPS Tractors").
    pub label: String,

    /// Extra display text: the hazard a route matches, a vulnerability
    /// note. `None` for plain items.
    pub detail: Option<String>,
}

impl ChallengeItem {
    /// Create a plain item.
    #[must_use]
    pub fn new(id: ItemId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            detail: None,
        }
    }

    /// Attach detail text (builder pattern).
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Static definition of one challenge variant.
///
/// Read-only reference data; never mutated at runtime.
///
/// ## Example
///
/// ```
/// use solar_defense::challenge::ChallengeDefinition;
/// use solar_defense::core::DefenderType;
///
/// let def = ChallengeDefinition::new(DefenderType::Pilot, "Alert Pilots", "Match routes", 2)
///     .with_item("Polar Route")
///     .with_detailed_item("Arctic Flight", "Navigation Error");
///
/// assert_eq!(def.item_count(), 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChallengeDefinition {
    /// The defender role this challenge belongs to.
    pub defender: DefenderType,

    /// Challenge title.
    pub title: String,

    /// Short instruction text.
    pub description: String,

    /// Ordered roster of selectable items (4-8 per variant).
    pub items: Vec<ChallengeItem>,

    /// Selections needed to succeed.
    pub target_count: usize,
}

impl ChallengeDefinition {
    /// Create a definition with an empty item roster.
    #[must_use]
    pub fn new(
        defender: DefenderType,
        title: impl Into<String>,
        description: impl Into<String>,
        target_count: usize,
    ) -> Self {
        Self {
            defender,
            title: title.into(),
            description: description.into(),
            items: Vec::new(),
            target_count,
        }
    }

    /// Append a plain item with the next dense ID (builder pattern).
    #[must_use]
    pub fn with_item(mut self, label: impl Into<String>) -> Self {
        let id = ItemId::new(self.items.len() as u32);
        self.items.push(ChallengeItem::new(id, label));
        self
    }

    /// Append an item carrying detail text (builder pattern).
    #[must_use]
    pub fn with_detailed_item(
        mut self,
        label: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        let id = ItemId::new(self.items.len() as u32);
        self.items.push(ChallengeItem::new(id, label).with_detail(detail));
        self
    }

    /// Check whether an item ID belongs to this challenge.
    #[must_use]
    pub fn contains(&self, item: ItemId) -> bool {
        (item.raw() as usize) < self.items.len()
    }

    /// Look up an item by ID.
    #[must_use]
    pub fn item(&self, item: ItemId) -> Option<&ChallengeItem> {
        self.items.get(item.raw() as usize)
    }

    /// Number of items in the roster.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id() {
        let id = ItemId::new(3);
        assert_eq!(id.raw(), 3);
        assert_eq!(format!("{}", id), "Item(3)");
    }

    #[test]
    fn test_builder_assigns_dense_ids() {
        let def = ChallengeDefinition::new(DefenderType::Farmer, "Farm", "Pick gear", 2)
            .with_item("GPS Tractors")
            .with_detailed_item("Irrigation System", "vulnerable")
            .with_item("Manual Tools");

        assert_eq!(def.item_count(), 3);
        assert_eq!(def.items[0].id, ItemId::new(0));
        assert_eq!(def.items[2].id, ItemId::new(2));
        assert_eq!(def.items[1].detail.as_deref(), Some("vulnerable"));
    }

    #[test]
    fn test_contains_and_lookup() {
        let def = ChallengeDefinition::new(DefenderType::Satellite, "Shields", "Protect", 1)
            .with_item("Satellite 1")
            .with_item("Satellite 2");

        assert!(def.contains(ItemId::new(0)));
        assert!(def.contains(ItemId::new(1)));
        assert!(!def.contains(ItemId::new(2)));

        assert_eq!(def.item(ItemId::new(1)).unwrap().label, "Satellite 2");
        assert!(def.item(ItemId::new(9)).is_none());
    }

    #[test]
    fn test_serialization() {
        let def = ChallengeDefinition::new(DefenderType::Pilot, "Alert Pilots", "Match", 1)
            .with_detailed_item("Polar Route", "Radio Blackout");

        let json = serde_json::to_string(&def).unwrap();
        let back: ChallengeDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(back.defender, DefenderType::Pilot);
        assert_eq!(back.items[0].detail.as_deref(), Some("Radio Blackout"));
    }
}
