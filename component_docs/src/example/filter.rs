//! Field filters selecting which fields an example view shows.

use crate::spec::FieldSpec;

/// Strategy deciding whether a field belongs in an example view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldFilter {
    /// Fields that are neither advanced nor deprecated.
    Common,
    /// Every field that is not deprecated.
    Advanced,
}

impl FieldFilter {
    /// Applies the filter to the field's own flags.
    #[must_use]
    pub const fn accepts(self, field: &FieldSpec) -> bool {
        match self {
            Self::Common => !field.is_advanced && !field.is_deprecated,
            Self::Advanced => !field.is_deprecated,
        }
    }

    /// Decides whether `field` appears in the view.
    ///
    /// A rejected field still appears when one of its descendants does, so
    /// that common children of an advanced object stay reachable. Deprecated
    /// fields never appear.
    #[must_use]
    pub fn admits(self, field: &FieldSpec) -> bool {
        if field.is_deprecated {
            return false;
        }
        self.accepts(field) || field.children.iter().any(|child| self.admits(child))
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Advanced => "advanced",
        }
    }
}
