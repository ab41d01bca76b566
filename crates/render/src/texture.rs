use sandbox_common::EntityKind;
use std::collections::BTreeMap;

/// Backend-owned texture slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

/// Which texture each entity kind is drawn with.
#[derive(Debug, Clone)]
pub struct TextureTable {
    fallback: TextureId,
    entries: BTreeMap<EntityKind, TextureId>,
}

impl TextureTable {
    /// Empty table; every kind resolves to `fallback`.
    pub fn new(fallback: TextureId) -> Self {
        Self {
            fallback,
            entries: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, kind: EntityKind, texture: TextureId) {
        self.entries.insert(kind, texture);
    }

    pub fn with(mut self, kind: EntityKind, texture: TextureId) -> Self {
        self.insert(kind, texture);
        self
    }

    pub fn fallback(&self) -> TextureId {
        self.fallback
    }

    pub fn resolve(&self, kind: EntityKind) -> TextureId {
        self.entries.get(&kind).copied().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_kinds_use_fallback() {
        let table = TextureTable::new(TextureId(0)).with(EntityKind::Player, TextureId(1));
        assert_eq!(table.resolve(EntityKind::Player), TextureId(1));
        assert_eq!(table.resolve(EntityKind::Terrain), TextureId(0));
        assert_eq!(table.resolve(EntityKind::Slime), TextureId(0));
    }

    #[test]
    fn insert_replaces() {
        let mut table = TextureTable::new(TextureId(0));
        table.insert(EntityKind::Slime, TextureId(3));
        table.insert(EntityKind::Slime, TextureId(4));
        assert_eq!(table.resolve(EntityKind::Slime), TextureId(4));
        assert_eq!(table.fallback(), TextureId(0));
    }
}
