//! Viewport transform: where the scene sits inside its container.
//!
//! The scene is a fixed-size layer translated by `offset` inside a container
//! that clips it. Offsets are always clamped so the scene covers the container:
//! `container - scene <= offset <= 0` on each axis. When the scene is smaller
//! than the container on an axis the lower bound is positive and the clamp pins
//! that axis to zero; only [`Viewport::center`] ever tries to center.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use std::ops::{Add, Sub};

/// A point in either container (screen) or scene space, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum of two sizes.
    #[must_use]
    pub fn max(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }
}

/// Scene offset plus the two sizes that bound it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Viewport {
    offset: Point,
    container: Size,
    scene: Size,
}

impl Viewport {
    /// A viewport at offset zero. The caller is expected to [`center`](Self::center) it.
    #[must_use]
    pub fn new(container: Size, scene: Size) -> Self {
        Self { offset: Point::default(), container, scene }
    }

    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    #[must_use]
    pub fn scene(&self) -> Size {
        self.scene
    }

    /// Lower bounds `(min_x, min_y)` for the offset. Upper bounds are always zero.
    #[must_use]
    pub fn min_offset(&self) -> Point {
        Point::new(self.container.width - self.scene.width, self.container.height - self.scene.height)
    }

    /// Clamp a requested offset into `[min_x, 0] x [min_y, 0]`.
    ///
    /// `max` is applied before `min` so a positive lower bound collapses to zero
    /// instead of inverting the range.
    #[must_use]
    pub fn clamp(&self, requested: Point) -> Point {
        let min = self.min_offset();
        Point::new(requested.x.max(min.x).min(0.0), requested.y.max(min.y).min(0.0))
    }

    /// Center the scene in the container, then clamp. Returns the new offset.
    pub fn center(&mut self) -> Point {
        let centered = Point::new(
            (self.container.width - self.scene.width) / 2.0,
            (self.container.height - self.scene.height) / 2.0,
        );
        self.offset = self.clamp(centered);
        self.offset
    }

    /// Anchor to capture at drag start so the point under `pointer` stays put.
    #[must_use]
    pub fn anchor_for(&self, pointer: Point) -> Point {
        pointer - self.offset
    }

    /// Move the scene so that `pointer - anchor` becomes the offset, clamped.
    pub fn pan_to(&mut self, pointer: Point, anchor: Point) -> Point {
        self.offset = self.clamp(pointer - anchor);
        self.offset
    }

    /// Update the container size and re-clamp the current offset.
    pub fn set_container(&mut self, container: Size) {
        self.container = container;
        self.offset = self.clamp(self.offset);
    }

    /// Update the scene size and re-clamp the current offset.
    pub fn set_scene(&mut self, scene: Size) {
        self.scene = scene;
        self.offset = self.clamp(self.offset);
    }

    /// Convert a container-relative point to scene coordinates.
    #[must_use]
    pub fn screen_to_scene(&self, screen: Point) -> Point {
        screen - self.offset
    }

    /// Convert a scene point to container-relative coordinates.
    #[must_use]
    pub fn scene_to_screen(&self, scene: Point) -> Point {
        scene + self.offset
    }

    /// CSS `transform` value for the current offset.
    #[must_use]
    pub fn css_transform(&self) -> String {
        translate_css(self.offset)
    }
}

/// Format an offset as a CSS `translate(...)` value.
#[must_use]
pub fn translate_css(offset: Point) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}
