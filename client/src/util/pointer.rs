//! DOM event coordinate helpers.
//!
//! The session works in container-relative pixels, so every mouse and touch
//! position is rebased on the container's bounding rect before it is
//! forwarded.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use atlas::viewport::{Point, Size};

/// Rebase a viewport (client) position onto an element whose top-left corner
/// sits at `rect_origin`.
#[must_use]
pub fn relative_point(client: Point, rect_origin: Point) -> Point {
    client - rect_origin
}

/// Size from integer DOM metrics (`clientWidth`/`clientHeight`).
#[must_use]
pub fn size_from_client(width: i32, height: i32) -> Size {
    Size::new(f64::from(width.max(0)), f64::from(height.max(0)))
}

#[cfg(feature = "csr")]
fn rect_origin(container: &web_sys::Element) -> Point {
    let rect = container.get_bounding_client_rect();
    Point::new(rect.left(), rect.top())
}

/// Container-relative position of a mouse event.
#[cfg(feature = "csr")]
pub fn mouse_point(container: &web_sys::Element, ev: &web_sys::MouseEvent) -> Point {
    relative_point(Point::new(f64::from(ev.client_x()), f64::from(ev.client_y())), rect_origin(container))
}

/// Container-relative positions of the active touches, in list order.
#[cfg(feature = "csr")]
pub fn touch_points(container: &web_sys::Element, ev: &web_sys::TouchEvent) -> Vec<Point> {
    let origin = rect_origin(container);
    let touches = ev.touches();
    (0..touches.length())
        .filter_map(|i| touches.get(i))
        .map(|t| relative_point(Point::new(f64::from(t.client_x()), f64::from(t.client_y())), origin))
        .collect()
}

/// Measured inner size of the container.
#[cfg(feature = "csr")]
pub fn container_size(container: &web_sys::Element) -> Size {
    size_from_client(container.client_width(), container.client_height())
}
