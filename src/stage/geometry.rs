//! Page-space boxes and axis-aligned rectangle overlap.

use bevy::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("non-finite geometry ({x}, {y}, {width}x{height})")]
    NonFinite {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    #[error("negative size {width}x{height}")]
    NegativeSize { width: f32, height: f32 },
}

/// Layout box of a stage element: top-left corner plus size, in page space
/// (origin at the container's top-left, y down).
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PageBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PageBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bounding rectangle of this box. Fails on NaN/inf or negative sizes.
    pub fn rect(&self) -> Result<PageRect, GeometryError> {
        if ![self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(GeometryError::NonFinite {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
            });
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(GeometryError::NegativeSize {
                width: self.width,
                height: self.height,
            });
        }

        Ok(PageRect {
            left: self.x,
            top: self.y,
            right: self.x + self.width,
            bottom: self.y + self.height,
        })
    }

    /// Center of the box in world space for a container of `stage` size
    /// centered on the origin.
    pub fn world_center(&self, stage: Vec2) -> Vec2 {
        Vec2::new(
            -stage.x / 2.0 + self.x + self.width / 2.0,
            stage.y / 2.0 - self.y - self.height / 2.0,
        )
    }
}

/// Axis-aligned rectangle with page-style edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PageRect {
    /// Closed-interval overlap: rectangles that share only an edge overlap.
    pub fn overlaps(&self, other: &PageRect) -> bool {
        !(self.right < other.left
            || self.left > other.right
            || self.bottom < other.top
            || self.top > other.bottom)
    }
}

/// `max(lo, min(hi, v))`.
pub fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    lo.max(hi.min(value))
}
