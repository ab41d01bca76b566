/// The uniforms the quad shader declares. Backends cache one location per
/// variant at link time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Uniform {
    Projection,
    Scale,
    Position,
}

impl Uniform {
    pub const COUNT: usize = 3;
    pub const ALL: [Uniform; Self::COUNT] = [Self::Projection, Self::Scale, Self::Position];

    /// Name of the uniform in shader source.
    pub fn name(self) -> &'static str {
        match self {
            Self::Projection => "projection",
            Self::Scale => "scale",
            Self::Position => "position",
        }
    }

    /// Dense index, for location tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense() {
        for (i, u) in Uniform::ALL.iter().enumerate() {
            assert_eq!(u.index(), i);
        }
    }

    #[test]
    fn names() {
        assert_eq!(Uniform::Projection.name(), "projection");
        assert_eq!(Uniform::Scale.name(), "scale");
        assert_eq!(Uniform::Position.name(), "position");
    }
}
