use super::*;

/// A deterministic die that replays a fixed sequence of faces.
///
/// Once the sequence is exhausted it starts over from the first face,
/// so a rigged die never runs dry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rigged {
    faces: Vec<Face>,
    cursor: usize,
}

impl Rigged {
    pub fn new(faces: impl Into<Vec<Face>>) -> Self {
        let faces = faces.into();
        assert!(!faces.is_empty(), "rigged dice need at least one face");
        assert!(faces.iter().all(|f| *f > 0), "die faces must be positive");
        Self { faces, cursor: 0 }
    }
}

impl Dice for Rigged {
    fn roll(&mut self) -> Face {
        let face = self.faces[self.cursor];
        self.cursor = (self.cursor + 1) % self.faces.len();
        face
    }
}
