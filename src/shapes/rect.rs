use crate::math::vec2::Vec2;
use crate::shapes::Line;

/// A corner of a [`Rect`], named in the rect's local (unrotated) frame.
/// "Top" is the smaller y coordinate (screen convention).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];
}

/// A side of a [`Rect`], named in the rect's local (unrotated) frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

/// A box in 2D space, possibly rotated about its center.
///
/// The rotated geometry is cached: four unit diagonal directions (one per
/// corner) sharing one half-diagonal length, and the two rotated face
/// normals. The cache is center-relative, so moving the rect is free;
/// size and rotation mutations recompute it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    center: Vec2,
    width: f64,
    height: f64,
    rotation: f64,
    diagonals: [Vec2; 4],
    diagonal_length: f64,
    face_normals: [Vec2; 2],
}

impl Rect {
    /// Creates a rect from its center, size and rotation (degrees).
    pub fn new(center: Vec2, width: f64, height: f64, rotation: f64) -> Self {
        let mut rect = Self {
            center,
            width,
            height,
            rotation,
            diagonals: [Vec2::ZERO; 4],
            diagonal_length: 0.0,
            face_normals: [Vec2::ZERO; 2],
        };
        rect.recalculate();
        rect
    }

    /// Creates an axis-aligned rect spanning the two given corners.
    pub fn from_corners(top_left: Vec2, bottom_right: Vec2) -> Self {
        let width = bottom_right.x - top_left.x;
        let height = bottom_right.y - top_left.y;
        let center = Vec2::new(top_left.x + width * 0.5, top_left.y + height * 0.5);
        Self::new(center, width, height, 0.0)
    }

    /// Creates a rect from the unrotated top-left position and its size;
    /// the rotation is then applied about the resulting center.
    pub fn from_top_left(x: f64, y: f64, width: f64, height: f64, rotation: f64) -> Self {
        let center = Vec2::new(x + width * 0.5, y + height * 0.5);
        Self::new(center, width, height, rotation)
    }

    /// Recomputes the cached diagonals, shared diagonal length and face
    /// normals from width/height/rotation.
    fn recalculate(&mut self) {
        let top_left = Vec2::new(-self.width * 0.5, -self.height * 0.5);
        let top_right = Vec2::new(self.width * 0.5, -self.height * 0.5);

        self.diagonal_length = top_left.length();
        let mut tl = top_left.normalize();
        let mut tr = top_right.normalize();
        let mut normals = [Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];

        if self.rotation != 0.0 {
            let radians = self.rotation.to_radians();
            tl = tl.rotate(radians).normalize();
            tr = tr.rotate(radians).normalize();
            normals[0] = normals[0].rotate(radians).normalize();
            normals[1] = normals[1].rotate(radians).normalize();
        }

        // The remaining corners by point symmetry.
        self.diagonals = [tl, tr, -tr, -tl];
        self.face_normals = normals;
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn half_width(&self) -> f64 {
        self.width * 0.5
    }

    pub fn half_height(&self) -> f64 {
        self.height * 0.5
    }

    /// The rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Shared distance from the center to every corner.
    pub fn diagonal_length(&self) -> f64 {
        self.diagonal_length
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
        self.recalculate();
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height;
        self.recalculate();
    }

    /// Sets the rotation (degrees) and recomputes the cached geometry.
    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
        self.recalculate();
    }

    /// Moves the center by the given offsets. The cached geometry is
    /// center-relative and stays valid.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.center.translate(dx, dy);
    }

    /// The given corner in world space:
    /// `center + diagonal(corner) * diagonal_length`.
    pub fn corner(&self, corner: Corner) -> Vec2 {
        self.center + self.diagonals[corner as usize] * self.diagonal_length
    }

    /// All four corners, in [`Corner::ALL`] order.
    pub fn corners(&self) -> [Vec2; 4] {
        Corner::ALL.map(|c| self.corner(c))
    }

    /// The rotated unit diagonal direction towards the given corner.
    pub fn diagonal(&self, corner: Corner) -> Vec2 {
        self.diagonals[corner as usize]
    }

    /// The rotated unit face normal: index 0 is the local +x axis,
    /// index 1 the local +y axis.
    pub fn face_normal(&self, index: usize) -> Vec2 {
        self.face_normals[index]
    }

    /// The line along the given side, with fixed winding: Top runs
    /// TL→TR, Bottom BR→BL, Left BL→TL, Right TR→BR.
    pub fn edge(&self, side: Side) -> Line {
        match side {
            Side::Top => Line::new(self.corner(Corner::TopLeft), self.corner(Corner::TopRight)),
            Side::Bottom => Line::new(
                self.corner(Corner::BottomRight),
                self.corner(Corner::BottomLeft),
            ),
            Side::Left => Line::new(
                self.corner(Corner::BottomLeft),
                self.corner(Corner::TopLeft),
            ),
            Side::Right => Line::new(
                self.corner(Corner::TopRight),
                self.corner(Corner::BottomRight),
            ),
        }
    }

    /// The x coordinate of the left edge's midpoint in the unrotated
    /// frame. Ignores rotation by design: these four accessors serve
    /// axis-aligned bounding queries, not the rotated silhouette.
    pub fn left(&self) -> f64 {
        self.center.x - self.half_width()
    }

    /// The x coordinate of the right edge's midpoint in the unrotated
    /// frame. Ignores rotation by design; see [`Rect::left`].
    pub fn right(&self) -> f64 {
        self.center.x + self.half_width()
    }

    /// The y coordinate of the top edge's midpoint in the unrotated
    /// frame. Ignores rotation by design; see [`Rect::left`].
    pub fn top(&self) -> f64 {
        self.center.y - self.half_height()
    }

    /// The y coordinate of the bottom edge's midpoint in the unrotated
    /// frame. Ignores rotation by design; see [`Rect::left`].
    pub fn bottom(&self) -> f64 {
        self.center.y + self.half_height()
    }
}
