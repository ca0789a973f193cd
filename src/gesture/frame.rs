//! Hand-landmark frame types.
//!
//! One frame per detection cycle: 21 normalized points in [0, 1] with the
//! standard hand-landmark indexing. Only three points matter here: the palm
//! base for the horizontal cursor, and the index/thumb tips for the pinch.

pub const LANDMARK_COUNT: usize = 21;

/// Landmark indices (standard hand-landmark numbering).
pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
/// Middle-finger knuckle; a steadier palm anchor than the wrist.
pub const PALM_BASE: usize = 9;

/// Normalized 2D point in [0, 1] image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormPoint {
    pub x: f32,
    pub y: f32,
}

impl NormPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &NormPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One detected hand's landmarks for a single frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HandFrame {
    points: [NormPoint; LANDMARK_COUNT],
}

impl HandFrame {
    pub fn new(points: [NormPoint; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Build from wire-format landmark pairs. Returns None when fewer than
    /// the required 21 points arrive; extra points are ignored.
    pub fn from_landmarks(landmarks: &[[f32; 2]]) -> Option<Self> {
        if landmarks.len() < LANDMARK_COUNT {
            return None;
        }
        let mut points = [NormPoint::default(); LANDMARK_COUNT];
        for (point, lm) in points.iter_mut().zip(landmarks) {
            *point = NormPoint::new(lm[0], lm[1]);
        }
        Some(Self { points })
    }

    pub fn point(&self, index: usize) -> NormPoint {
        self.points[index]
    }

    pub fn palm_base(&self) -> NormPoint {
        self.points[PALM_BASE]
    }

    pub fn index_tip(&self) -> NormPoint {
        self.points[INDEX_TIP]
    }

    pub fn thumb_tip(&self) -> NormPoint {
        self.points[THUMB_TIP]
    }

    /// Horizontal cursor position as a mirrored percentage: the camera image
    /// is a mirror, so a hand on the player's left reads near 100%.
    pub fn cursor_percent(&self) -> f32 {
        (1.0 - self.palm_base().x) * 100.0
    }

    /// Euclidean distance between index tip and thumb tip.
    pub fn pinch_distance(&self) -> f32 {
        self.index_tip().distance_to(&self.thumb_tip())
    }
}
