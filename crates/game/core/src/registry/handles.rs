//! Typed indices into the registries.
//!
//! Every cross-reference in the linked world is one of these handles. They are
//! produced only by [`super::Registry::insert`], so a handle always points at
//! an existing entry of the registry that issued it.

/// Common behavior of registry handles.
pub trait Handle: Copy + Eq + core::fmt::Debug {
    fn from_index(index: usize) -> Self;
    fn index(self) -> usize;
}

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub(crate) u32);

        impl Handle for $name {
            #[inline]
            fn from_index(index: usize) -> Self {
                Self(index as u32)
            }

            #[inline]
            fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

define_handle!(
    /// Handle into the trait registry.
    TraitId,
    "trait"
);
define_handle!(
    /// Handle into the resource ledger.
    ResourceId,
    "resource"
);
define_handle!(
    /// Handle into the event registry.
    EventId,
    "event"
);
define_handle!(
    /// Handle into the item registry.
    ItemId,
    "item"
);
define_handle!(
    /// Handle into the objective registry.
    ObjectiveId,
    "objective"
);
define_handle!(
    /// Handle into the character roster.
    CharacterId,
    "character"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_round_trip_their_index() {
        assert_eq!(TraitId::from_index(3).index(), 3);
        assert_eq!(ResourceId::from_index(0).to_string(), "resource#0");
        assert_eq!(CharacterId::from_index(12).to_string(), "character#12");
    }
}
