//! Nine-slice decomposition of resizable textures
//!
//! ```text
//!   0   left        right   width
//!   v    v             v    v
//!   +----+-------------+----+ < 0
//!   | TL |     Top     | TR |
//!   +----+-------------+----+ < top
//!   |    |             |    |
//!   |Left|   Center    |Rght|
//!   |    |             |    |
//!   +----+-------------+----+ < bottom
//!   | BL |   Bottom    | BR |
//!   +----+-------------+----+ < height
//! ```
//!
//! Corners keep their size, Top/Bottom stretch horizontally, Left/Right
//! stretch vertically and Center stretches both ways.

use glam::IVec2;

use super::texture::ResizableTexture;
use crate::app::geometry::{Bounds2, Rect};

/// Which cell of the 3x3 grid a segment comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Left,
    Right,
    Bottom,
    Center,
}

/// One source/destination pair of a nine-slice draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub source: Rect,
    pub dest: Rect,
}

impl Segment {
    /// Zero or negative extents on either side draw nothing
    pub fn is_visible(&self) -> bool {
        self.source.is_visible() && self.dest.is_visible()
    }
}

/// Size the texture is actually stretched to
///
/// Never smaller than the fixed borders combined, so the center can't go
/// negative.
pub fn stretched_size(texture: &ResizableTexture, bounds: Bounds2) -> IVec2 {
    let tex = texture.texture();
    let min_width = tex.width - texture.right() + texture.left();
    let min_height = tex.height - texture.bottom() + texture.top();
    IVec2::new(
        (bounds.size.x as i32).max(min_width),
        (bounds.size.y as i32).max(min_height),
    )
}

/// All nine segments in draw order, including invisible ones
pub fn segments(texture: &ResizableTexture, bounds: Bounds2) -> [Segment; 9] {
    let tex = texture.texture();
    let (left, right, top, bottom) = (
        texture.left(),
        texture.right(),
        texture.top(),
        texture.bottom(),
    );
    let (px, py) = (bounds.position.x as i32, bounds.position.y as i32);
    let size = stretched_size(texture, bounds);

    // Fixed border extents on the far sides
    let right_width = tex.width - right;
    let bottom_height = tex.height - bottom;

    // Source extents of the stretchable middle
    let middle_width = right - left;
    let middle_height = bottom - top;

    // Destination extents of the stretched middle
    let fill_width = size.x - left - right_width;
    let fill_height = size.y - top - bottom_height;

    let far_x = px + size.x - right_width;
    let far_y = py + size.y - bottom_height;

    let segment = |kind, source, dest| Segment { kind, source, dest };

    [
        segment(
            SegmentKind::TopLeft,
            Rect::new(0, 0, left, top),
            Rect::new(px, py, left, top),
        ),
        segment(
            SegmentKind::TopRight,
            Rect::new(right, 0, right_width, top),
            Rect::new(far_x, py, right_width, top),
        ),
        segment(
            SegmentKind::BottomLeft,
            Rect::new(0, bottom, left, bottom_height),
            Rect::new(px, far_y, left, bottom_height),
        ),
        segment(
            SegmentKind::BottomRight,
            Rect::new(right, bottom, right_width, bottom_height),
            Rect::new(far_x, far_y, right_width, bottom_height),
        ),
        segment(
            SegmentKind::Top,
            Rect::new(left, 0, middle_width, top),
            Rect::new(px + left, py, fill_width, top),
        ),
        segment(
            SegmentKind::Left,
            Rect::new(0, top, left, middle_height),
            Rect::new(px, py + top, left, fill_height),
        ),
        segment(
            SegmentKind::Right,
            Rect::new(right, top, right_width, middle_height),
            Rect::new(far_x, py + top, right_width, fill_height),
        ),
        segment(
            SegmentKind::Bottom,
            Rect::new(left, bottom, middle_width, bottom_height),
            Rect::new(px + left, far_y, fill_width, bottom_height),
        ),
        segment(
            SegmentKind::Center,
            Rect::new(left, top, middle_width, middle_height),
            Rect::new(px + left, py + top, fill_width, fill_height),
        ),
    ]
}

/// Segments that actually need drawing
pub fn decompose(texture: &ResizableTexture, bounds: Bounds2) -> Vec<Segment> {
    segments(texture, bounds)
        .into_iter()
        .filter(Segment::is_visible)
        .collect()
}
