//! Item model: identity keys, categories, and per-category capabilities.
//!
//! Items split into a static definition (catalog data shared by every copy of
//! a kind) and a physical instance carrying the mutable `equipped`/`carried`
//! flags. Category behavior that the rules consult (multi-equip exemption,
//! discard protection) lives in a capability table on [`ItemType`] rather
//! than in per-type code paths.

/// Stable key identifying an item's kind (shared across all instances).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DefinitionId(pub u32);

impl core::fmt::Display for DefinitionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique key identifying one physical item instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceId(pub u32);

impl core::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Item category. Declaration order is the canonical type ordering used by
/// the listing sort.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemType {
    /// Light source (lantern, torch)
    Light,
    /// Eyewear
    Shades,
    /// Weapon
    Weapon,
    /// Clothing / armor
    Clothing,
    /// Companion; exempt from single-equip exclusivity
    Follower,
    /// Carry bag; the strongest held bag is always retained
    Bag,
    /// One-of-a-kind equipment; never discardable down to the last copy
    UniqueEquipment,
}

/// How the discard policy treats a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiscardRule {
    /// Discardable without restriction.
    Free,
    /// The single strongest item of the category must be retained.
    KeepStrongest,
    /// Never discardable down to the last copy.
    Never,
}

/// Per-category capabilities consulted by the equip and discard rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeCaps {
    /// Multiple simultaneous equips allowed within the category.
    pub multi_equippable: bool,
    /// Discard protection applied to the category.
    pub discard_rule: DiscardRule,
}

impl ItemType {
    /// Returns the capability row for this category.
    pub const fn caps(&self) -> TypeCaps {
        match self {
            Self::Follower => TypeCaps {
                multi_equippable: true,
                discard_rule: DiscardRule::Free,
            },
            Self::Bag => TypeCaps {
                multi_equippable: false,
                discard_rule: DiscardRule::KeepStrongest,
            },
            Self::UniqueEquipment => TypeCaps {
                multi_equippable: false,
                discard_rule: DiscardRule::Never,
            },
            _ => TypeCaps {
                multi_equippable: false,
                discard_rule: DiscardRule::Free,
            },
        }
    }

    /// Index of this category's bucket in the inventory storage array.
    pub const fn bucket_index(&self) -> usize {
        *self as usize
    }
}

/// Static catalog entry for an item kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: DefinitionId,
    pub kind: ItemType,
    pub name: String,
    pub equippable: bool,
    pub bonus: u32,
}

impl ItemDefinition {
    pub fn new(
        id: DefinitionId,
        kind: ItemType,
        name: impl Into<String>,
        equippable: bool,
        bonus: u32,
    ) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            equippable,
            bonus,
        }
    }

    /// Creates a fresh physical instance of this kind. The instance starts
    /// unequipped and not carried; the store sets both when it takes the item.
    pub fn instantiate(&self, instance: InstanceId) -> Item {
        Item {
            definition: self.id,
            instance,
            kind: self.kind,
            name: self.name.clone(),
            equippable: self.equippable,
            bonus: self.bonus,
            equipped: false,
            carried: false,
        }
    }
}

/// One physical item instance held by the actor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    /// Kind key into the external catalog.
    pub definition: DefinitionId,
    /// Unique per physical copy.
    pub instance: InstanceId,
    pub kind: ItemType,
    /// Display and containment-check key.
    pub name: String,
    pub equippable: bool,
    /// Strength value arbitrating equip conflicts and rankings.
    pub bonus: u32,
    /// In active use, subject to per-category exclusivity.
    pub equipped: bool,
    /// On the actor, as opposed to stored away.
    pub carried: bool,
}

impl Item {
    pub fn new(
        definition: DefinitionId,
        instance: InstanceId,
        kind: ItemType,
        name: impl Into<String>,
        equippable: bool,
        bonus: u32,
    ) -> Self {
        Self {
            definition,
            instance,
            kind,
            name: name.into(),
            equippable,
            bonus,
            equipped: false,
            carried: false,
        }
    }

    /// Capability row for this item's category.
    pub const fn caps(&self) -> TypeCaps {
        self.kind.caps()
    }

    pub const fn is_multi_equippable(&self) -> bool {
        self.caps().multi_equippable
    }
}
