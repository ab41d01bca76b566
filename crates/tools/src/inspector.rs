use sandbox_common::EntityKind;
use sandbox_kernel::{Entity, EntityList};
use std::fmt;

/// Read-only summary of the entity list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSummary {
    pub entity_count: usize,
    /// Count per kind, in `EntityKind::ALL` order.
    pub per_kind: [usize; 3],
}

impl ListSummary {
    pub fn of(list: &EntityList) -> Self {
        let mut per_kind = [0; 3];
        for entity in list {
            let slot = EntityKind::ALL
                .iter()
                .position(|k| *k == entity.kind)
                .unwrap_or_default();
            per_kind[slot] += 1;
        }
        Self {
            entity_count: list.len(),
            per_kind,
        }
    }
}

impl fmt::Display for ListSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entities: {}", self.entity_count)?;
        for (kind, count) in EntityKind::ALL.iter().zip(self.per_kind) {
            if count > 0 {
                write!(f, " {}={}", kind.label(), count)?;
            }
        }
        Ok(())
    }
}

/// One entity, formatted for display.
#[derive(Debug, Clone, Copy)]
pub struct EntityInfo {
    pub index: usize,
    pub entity: Entity,
}

impl fmt::Display for EntityInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Entity {
            kind,
            scale,
            position,
        } = self.entity;
        write!(
            f,
            "[{}] {} pos=({:.1}, {:.1}) scale=({:.1}, {:.1})",
            self.index,
            kind.label(),
            position.x,
            position.y,
            scale.x,
            scale.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use sandbox_common::Extent;

    #[test]
    fn summary_of_startup_list() {
        let list = EntityList::with_player(Extent::new(800, 600));
        let summary = ListSummary::of(&list);
        assert_eq!(summary.entity_count, 1);
        assert_eq!(summary.per_kind, [1, 0, 0]);
        assert_eq!(summary.to_string(), "Entities: 1 Player=1");
    }

    #[test]
    fn summary_counts_each_kind() {
        let mut list = EntityList::new();
        list.push(Entity::new(EntityKind::Slime, Vec2::ONE, Vec2::ZERO));
        list.push(Entity::new(EntityKind::Slime, Vec2::ONE, Vec2::ZERO));
        list.push(Entity::new(EntityKind::Terrain, Vec2::ONE, Vec2::ZERO));
        assert_eq!(ListSummary::of(&list).per_kind, [0, 1, 2]);
    }

    #[test]
    fn empty_summary() {
        let summary = ListSummary::of(&EntityList::new());
        assert_eq!(summary.to_string(), "Entities: 0");
    }

    #[test]
    fn entity_info_display() {
        let info = EntityInfo {
            index: 0,
            entity: Entity::new(
                EntityKind::Player,
                Vec2::new(128.0, 128.0),
                Vec2::new(400.0, 300.0),
            ),
        };
        assert_eq!(
            info.to_string(),
            "[0] Player pos=(400.0, 300.0) scale=(128.0, 128.0)"
        );
    }
}
