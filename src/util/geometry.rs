//! Viewport containment and document offsets.
//!
//! Coordinates are CSS pixels. A [`Rect`] is viewport relative, as returned by
//! `getBoundingClientRect`; offsets are relative to the offset parent, as
//! returned by `offsetTop`.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// Axis-aligned box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Rect {
    #[must_use]
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self { top, left, bottom, right }
    }
}

/// Size of the visible area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Window inner size, falling back per axis to the root element's client
    /// size when the inner size is missing, zero or not a number.
    #[must_use]
    pub fn from_extents(inner: (Option<f64>, Option<f64>), client: Option<(f64, f64)>) -> Self {
        let pick = |inner: Option<f64>, client: Option<f64>| inner.filter(|v| *v > 0.0).or(client).unwrap_or(0.0);
        Self::new(
            pick(inner.0, client.map(|(width, _)| width)),
            pick(inner.1, client.map(|(_, height)| height)),
        )
    }
}

/// Anything with a viewport-relative bounding box.
pub trait LayoutBox {
    fn bounding_rect(&self) -> Rect;
}

impl LayoutBox for Rect {
    fn bounding_rect(&self) -> Rect {
        *self
    }
}

/// A node in the offset-parent chain.
pub trait OffsetNode: Sized {
    /// Offset from the top edge of the offset parent.
    fn local_offset_top(&self) -> f64;

    /// The nearest positioned ancestor, if any.
    fn offset_parent(&self) -> Option<Self>;
}

/// True iff the whole box lies inside the viewport on all four edges.
///
/// A partially visible element is not in the viewport.
#[must_use]
pub fn is_in_viewport<E: LayoutBox + ?Sized>(element: &E, viewport: Viewport) -> bool {
    let rect = element.bounding_rect();
    rect.top >= 0.0 && rect.left >= 0.0 && rect.bottom <= viewport.height && rect.right <= viewport.width
}

/// Distance from the document origin to the element's top edge.
///
/// Sums each local offset up the offset-parent chain. `None` yields 0.
#[must_use]
pub fn offset_top<N: OffsetNode>(element: Option<&N>) -> f64 {
    let Some(element) = element else {
        return 0.0;
    };
    let mut total = element.local_offset_top();
    let mut next = element.offset_parent();
    while let Some(node) = next {
        total += node.local_offset_top();
        next = node.offset_parent();
    }
    total
}
