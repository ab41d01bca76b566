use glam::Vec2;
use sandbox_common::{EntityKind, Extent};

/// Side length, in pixels, of the player sprite at startup.
pub const PLAYER_SCALE: f32 = 128.0;

/// One drawable object: a kind plus a pixel-space scale and center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub kind: EntityKind,
    pub scale: Vec2,
    pub position: Vec2,
}

impl Entity {
    pub fn new(kind: EntityKind, scale: Vec2, position: Vec2) -> Self {
        Self {
            kind,
            scale,
            position,
        }
    }
}

/// Append-only, insertion-ordered list of entities.
#[derive(Debug, Clone, Default)]
pub struct EntityList {
    entities: Vec<Entity>,
}

impl EntityList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The startup list: a single player centered in `extent`.
    pub fn with_player(extent: Extent) -> Self {
        let mut list = Self::new();
        list.push(Entity::new(
            EntityKind::Player,
            Vec2::splat(PLAYER_SCALE),
            extent.center(),
        ));
        list
    }

    pub fn push(&mut self, entity: Entity) {
        tracing::debug!(
            kind = entity.kind.label(),
            x = entity.position.x,
            y = entity.position.y,
            "entity added"
        );
        self.entities.push(entity);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    /// The entity edited by the debug UI.
    pub fn first_mut(&mut self) -> Option<&mut Entity> {
        self.entities.first_mut()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }
}

impl<'a> IntoIterator for &'a EntityList {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
