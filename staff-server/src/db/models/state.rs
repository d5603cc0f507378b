//! Entity lifecycle state
//!
//! Every entity moves through the same one-way lifecycle:
//! `Active -> Inactive` (deactivate) and `Active | Inactive -> Removed`
//! (hard delete, terminal). There is no reactivation path.

/// Lifecycle state of a stored entity
///
/// `Active` and `Inactive` are projections of the persisted `is_active`
/// flag; `Removed` is the absence of the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityState {
    Active,
    Inactive,
    Removed,
}

impl EntityState {
    pub fn from_flag(is_active: bool) -> Self {
        if is_active {
            EntityState::Active
        } else {
            EntityState::Inactive
        }
    }

    /// Whether the one-way transition `self -> next` is permitted.
    ///
    /// Re-deactivating an inactive entity is a permitted no-op (the flag
    /// already ends at false); nothing leaves `Removed`.
    pub fn can_transition(self, next: EntityState) -> bool {
        match (self, next) {
            (EntityState::Removed, _) => false,
            (_, EntityState::Active) => false,
            (EntityState::Active, EntityState::Inactive) => true,
            (EntityState::Inactive, EntityState::Inactive) => true,
            (_, EntityState::Removed) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deactivation_is_one_way() {
        assert!(EntityState::Active.can_transition(EntityState::Inactive));
        assert!(EntityState::Inactive.can_transition(EntityState::Inactive));
        assert!(!EntityState::Inactive.can_transition(EntityState::Active));
        assert!(!EntityState::Active.can_transition(EntityState::Active));
    }

    #[test]
    fn removal_is_terminal() {
        assert!(EntityState::Active.can_transition(EntityState::Removed));
        assert!(EntityState::Inactive.can_transition(EntityState::Removed));
        assert!(!EntityState::Removed.can_transition(EntityState::Active));
        assert!(!EntityState::Removed.can_transition(EntityState::Inactive));
        assert!(!EntityState::Removed.can_transition(EntityState::Removed));
    }

    #[test]
    fn flag_projection() {
        assert_eq!(EntityState::from_flag(true), EntityState::Active);
        assert_eq!(EntityState::from_flag(false), EntityState::Inactive);
    }
}
