//! Challenge registry for definition lookup.
//!
//! The registry stores one `ChallengeDefinition` per defender role.
//! `ChallengeRegistry::builtin` provides the four stock variants.

use rustc_hash::FxHashMap;

use super::definition::ChallengeDefinition;
use crate::core::DefenderType;

/// Registry of challenge definitions keyed by defender role.
#[derive(Clone, Debug, Default)]
pub struct ChallengeRegistry {
    challenges: FxHashMap<DefenderType, ChallengeDefinition>,
}

impl ChallengeRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the four stock challenges.
    ///
    /// Rosters and target counts match the shipped game: 8 satellites
    /// (shield 5), 4 flight routes (match all 4), 6 pieces of farm
    /// equipment (protect the 4 vulnerable ones), 6 grid sectors
    /// (balance 5).
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        let mut satellite = ChallengeDefinition::new(
            DefenderType::Satellite,
            "Activate Satellite Shields",
            "Shield 5 satellites before time runs out",
            5,
        );
        for i in 1..=8 {
            satellite = satellite.with_item(format!("Satellite {i}"));
        }
        registry.register(satellite);

        registry.register(
            ChallengeDefinition::new(
                DefenderType::Pilot,
                "Alert Pilots",
                "Match alert types to affected flight routes",
                4,
            )
            .with_detailed_item("Polar Route", "Radio Blackout")
            .with_detailed_item("Trans-Atlantic", "GPS Drift")
            .with_detailed_item("Pacific Cross", "Communication Loss")
            .with_detailed_item("Arctic Flight", "Navigation Error"),
        );

        registry.register(
            ChallengeDefinition::new(
                DefenderType::Farmer,
                "Farm Equipment Protection",
                "Select equipment that needs immediate protection",
                4,
            )
            .with_detailed_item("GPS Tractors", "vulnerable")
            .with_detailed_item("Irrigation System", "vulnerable")
            .with_item("Manual Tools")
            .with_detailed_item("Weather Sensors", "vulnerable")
            .with_item("Storage Barn")
            .with_detailed_item("Communication Radio", "vulnerable"),
        );

        let mut grid = ChallengeDefinition::new(
            DefenderType::PowerGrid,
            "Power Grid Management",
            "Balance load across grid sectors to prevent outages",
            5,
        );
        for i in 1..=6 {
            grid = grid.with_item(format!("Sector {i}"));
        }
        registry.register(grid);

        registry
    }

    /// Register a challenge definition.
    ///
    /// Panics if the defender role is already registered, if the roster is
    /// empty, or if `target_count` exceeds the roster size.
    pub fn register(&mut self, challenge: ChallengeDefinition) {
        assert!(
            challenge.target_count >= 1 && challenge.target_count <= challenge.item_count(),
            "target_count {} out of range for {} items",
            challenge.target_count,
            challenge.item_count()
        );
        if self.challenges.contains_key(&challenge.defender) {
            panic!("Challenge for {} already registered", challenge.defender);
        }
        self.challenges.insert(challenge.defender, challenge);
    }

    /// Get the definition for a defender role.
    #[must_use]
    pub fn get(&self, defender: DefenderType) -> Option<&ChallengeDefinition> {
        self.challenges.get(&defender)
    }

    /// Check if a defender role is registered.
    #[must_use]
    pub fn contains(&self, defender: DefenderType) -> bool {
        self.challenges.contains_key(&defender)
    }

    /// Number of registered challenges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }

    /// Iterate over all challenge definitions.
    pub fn iter(&self) -> impl Iterator<Item = &ChallengeDefinition> {
        self.challenges.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::ItemId;

    #[test]
    fn test_builtin_covers_all_roles() {
        let registry = ChallengeRegistry::builtin();

        assert_eq!(registry.len(), DefenderType::COUNT);
        for defender in DefenderType::all() {
            assert!(registry.contains(defender));
        }
    }

    #[test]
    fn test_builtin_rosters() {
        let registry = ChallengeRegistry::builtin();

        let satellite = registry.get(DefenderType::Satellite).unwrap();
        assert_eq!(satellite.item_count(), 8);
        assert_eq!(satellite.target_count, 5);

        let pilot = registry.get(DefenderType::Pilot).unwrap();
        assert_eq!(pilot.item_count(), 4);
        assert_eq!(pilot.target_count, 4);
        assert_eq!(
            pilot.item(ItemId::new(0)).unwrap().detail.as_deref(),
            Some("Radio Blackout")
        );

        let farmer = registry.get(DefenderType::Farmer).unwrap();
        assert_eq!(farmer.item_count(), 6);
        assert_eq!(farmer.target_count, 4);

        let grid = registry.get(DefenderType::PowerGrid).unwrap();
        assert_eq!(grid.item_count(), 6);
        assert_eq!(grid.target_count, 5);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_role_panics() {
        let mut registry = ChallengeRegistry::new();

        let a = ChallengeDefinition::new(DefenderType::Pilot, "A", "a", 1).with_item("x");
        let b = ChallengeDefinition::new(DefenderType::Pilot, "B", "b", 1).with_item("y");

        registry.register(a);
        registry.register(b); // Should panic
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_target_beyond_roster_panics() {
        let mut registry = ChallengeRegistry::new();
        let def = ChallengeDefinition::new(DefenderType::Farmer, "F", "f", 3).with_item("x");
        registry.register(def);
    }
}
