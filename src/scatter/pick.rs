//! Screen-space point picking

/// A point after projection, still carrying its dataset index
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub index: usize,
    pub x: f32,
    pub y: f32,
    pub depth: f32,
}

/// Dataset index of the point closest to `cursor` within `radius` pixels
///
/// Ties go to the point nearest the viewer. Slice order (paint order) does
/// not affect the result.
pub fn pick_nearest(points: &[ScreenPoint], cursor: (f32, f32), radius: f32) -> Option<usize> {
    let radius_sq = radius * radius;
    points
        .iter()
        .filter_map(|p| {
            let dx = p.x - cursor.0;
            let dy = p.y - cursor.1;
            let dist_sq = dx * dx + dy * dy;
            (dist_sq <= radius_sq).then_some((dist_sq, p.depth, p.index))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)))
        .map(|(_, _, index)| index)
}
