use std::fmt;

use glam::Vec2;

use crate::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap on all four edges; touching boxes do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        other.max.x > self.min.x
            && other.min.x < self.max.x
            && other.max.y > self.min.y
            && other.min.y < self.max.y
    }
}

/// Canvas dimensions rejected by [`Layout::new`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutError {
    NonPositiveSize { width: f32, height: f32 },
    NonFiniteSize { width: f32, height: f32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSize { width, height } => {
                write!(f, "canvas size must be positive, got {width}x{height}")
            }
            Self::NonFiniteSize { width, height } => {
                write!(f, "canvas size must be finite, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Fixed geometry derived from the canvas size
///
/// Recomputed on every resize; nothing in here depends on who owns which
/// paddle slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub ball_size: f32,
    pub border_width: f32,
    pub wall_height: f32,
    pub play_area_width: f32,
    pub paddle_area_width: f32,
    pub slot_x: [f32; Params::TOTAL_PADDLES],
}

impl Layout {
    pub fn new(width: f32, height: f32) -> Result<Self, LayoutError> {
        if !width.is_finite() || !height.is_finite() {
            return Err(LayoutError::NonFiniteSize { width, height });
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(LayoutError::NonPositiveSize { width, height });
        }

        let short_side = width.min(height);
        let border_width = short_side * Params::BORDER_RATIO;
        let play_area_width = width - 2.0 * border_width;
        let paddle_area_width = play_area_width * Params::PADDLE_AREA_RATIO;

        // Slots are spread evenly across the paddle area, which is centered
        // inside the play area.
        let area_start = border_width + (play_area_width - paddle_area_width) / 2.0;
        let spacing = paddle_area_width / (Params::TOTAL_PADDLES - 1) as f32;
        let slot_x = std::array::from_fn(|i| area_start + i as f32 * spacing);

        Ok(Self {
            width,
            height,
            paddle_width: width * Params::PADDLE_WIDTH_RATIO,
            ball_size: short_side * Params::BALL_SIZE_RATIO,
            border_width,
            wall_height: height * Params::WALL_HEIGHT_RATIO,
            play_area_width,
            paddle_area_width,
            slot_x,
        })
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Speed the ball is renormalized to after any wall bounce
    pub fn target_ball_speed(&self) -> f32 {
        Vec2::new(self.width, self.height).length() * Params::BALL_SPEED_DIAGONAL_RATIO
    }

    /// Paddle height is proportional to the owner's score
    pub fn paddle_height_for(&self, score: u8) -> f32 {
        self.height * (score as f32 / Params::TOTAL_PADDLES as f32) / Params::PADDLE_HEIGHT_DIVISOR
    }

    /// Keep a paddle center inside the top and bottom borders
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        let min_y = self.border_width + paddle_height / 2.0;
        let max_y = self.height - self.border_width - paddle_height / 2.0;
        y.min(max_y).max(min_y)
    }

    pub fn paddle_rect(&self, slot: usize, center_y: f32, paddle_height: f32) -> Aabb {
        Aabb::from_center_size(
            Vec2::new(self.slot_x[slot], center_y),
            Vec2::new(self.paddle_width, paddle_height),
        )
    }

    /// True when a vertical span reaches into the solid side-wall caps
    pub fn in_wall_cap_band(&self, top: f32, bottom: f32) -> bool {
        top < self.wall_height || bottom > self.height - self.wall_height
    }

    /// Top bar, bottom bar, then the four side caps
    pub fn border_rects(&self) -> [Aabb; 6] {
        let (w, h, b, wall) = (self.width, self.height, self.border_width, self.wall_height);
        [
            Aabb::new(Vec2::ZERO, Vec2::new(w, b)),
            Aabb::new(Vec2::new(0.0, h - b), Vec2::new(w, h)),
            Aabb::new(Vec2::ZERO, Vec2::new(b, wall)),
            Aabb::new(Vec2::new(0.0, h - wall), Vec2::new(b, h)),
            Aabb::new(Vec2::new(w - b, 0.0), Vec2::new(w, wall)),
            Aabb::new(Vec2::new(w - b, h - wall), Vec2::new(w, h)),
        ]
    }

    pub fn scoreboard_font_size(&self) -> f32 {
        self.width.min(self.height) * Params::SCOREBOARD_FONT_RATIO
    }

    pub fn prompt_font_size(&self) -> f32 {
        self.width.min(self.height) * Params::PROMPT_FONT_RATIO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_layout_dimensions() {
        let layout = Layout::new(1000.0, 600.0).unwrap();
        assert!((layout.paddle_width - 10.0).abs() < EPS);
        assert!((layout.ball_size - 12.0).abs() < EPS);
        assert!((layout.border_width - 6.0).abs() < EPS);
        assert!((layout.wall_height - 150.0).abs() < EPS);
        assert!((layout.play_area_width - 988.0).abs() < EPS);
        assert!((layout.paddle_area_width - 592.8).abs() < EPS);
    }

    #[test]
    fn test_slots_are_evenly_spaced_and_centered() {
        let layout = Layout::new(1000.0, 600.0).unwrap();
        let first = layout.slot_x[0];
        let last = layout.slot_x[Params::TOTAL_PADDLES - 1];
        assert!((last - first - layout.paddle_area_width).abs() < EPS);
        assert!(((first + last) / 2.0 - layout.width / 2.0).abs() < EPS);

        let spacing = layout.slot_x[1] - layout.slot_x[0];
        for pair in layout.slot_x.windows(2) {
            assert!((pair[1] - pair[0] - spacing).abs() < EPS);
        }
    }

    #[test]
    fn test_rejects_non_positive_size() {
        assert_eq!(
            Layout::new(0.0, 600.0),
            Err(LayoutError::NonPositiveSize {
                width: 0.0,
                height: 600.0
            })
        );
        assert!(Layout::new(800.0, -1.0).is_err());
    }

    #[test]
    fn test_rejects_non_finite_size() {
        assert!(matches!(
            Layout::new(f32::NAN, 600.0),
            Err(LayoutError::NonFiniteSize { .. })
        ));
        assert!(Layout::new(800.0, f32::INFINITY).is_err());
    }

    #[test]
    fn test_paddle_height_tracks_score() {
        let layout = Layout::new(900.0, 600.0).unwrap();
        assert!((layout.paddle_height_for(5) - 100.0).abs() < EPS);
        assert!((layout.paddle_height_for(10) - 200.0).abs() < EPS);
        assert_eq!(layout.paddle_height_for(0), 0.0);
    }

    #[test]
    fn test_clamp_paddle_y() {
        let layout = Layout::new(900.0, 600.0).unwrap();
        let h = 100.0;
        let min_y = layout.border_width + h / 2.0;
        let max_y = layout.height - layout.border_width - h / 2.0;
        assert_eq!(layout.clamp_paddle_y(-50.0, h), min_y);
        assert_eq!(layout.clamp_paddle_y(10_000.0, h), max_y);
        assert_eq!(layout.clamp_paddle_y(300.0, h), 300.0);
    }

    #[test]
    fn test_wall_cap_band() {
        let layout = Layout::new(800.0, 400.0).unwrap();
        assert!(layout.in_wall_cap_band(50.0, 60.0));
        assert!(layout.in_wall_cap_band(340.0, 350.0));
        assert!(!layout.in_wall_cap_band(190.0, 210.0));
    }

    #[test]
    fn test_aabb_overlap_is_strict() {
        let a = Aabb::from_center_size(Vec2::ZERO, Vec2::new(2.0, 2.0));
        let touching = Aabb::from_center_size(Vec2::new(2.0, 0.0), Vec2::new(2.0, 2.0));
        let inside = Aabb::from_center_size(Vec2::new(1.5, 0.5), Vec2::new(2.0, 2.0));
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
    }

    #[test]
    fn test_border_rects_cover_caps() {
        let layout = Layout::new(800.0, 400.0).unwrap();
        let rects = layout.border_rects();
        assert_eq!(rects[0].size(), Vec2::new(800.0, layout.border_width));
        assert_eq!(rects[2].size(), Vec2::new(layout.border_width, 100.0));
        assert_eq!(rects[5].max, Vec2::new(800.0, 400.0));
    }
}
