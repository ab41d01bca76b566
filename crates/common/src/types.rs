use glam::Vec2;

/// What an entity represents. Drives texture selection in the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Player,
    Terrain,
    Slime,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [Self::Player, Self::Terrain, Self::Slime];

    pub fn label(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Terrain => "Terrain",
            Self::Slime => "Slime",
        }
    }
}

/// Pixel size of a drawable area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size as floats, in pixels.
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Pixel-space center of the area.
    pub fn center(self) -> Vec2 {
        self.size() * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_center_is_half_size() {
        let extent = Extent::new(800, 600);
        assert_eq!(extent.center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn kinds_are_ordered_and_labelled() {
        assert!(EntityKind::Player < EntityKind::Slime);
        let labels: Vec<_> = EntityKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels, ["Player", "Terrain", "Slime"]);
    }
}
