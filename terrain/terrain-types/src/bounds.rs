//! Axis-aligned bounds over terrain vertices.

use std::fmt;

use nalgebra::Point3;

use crate::error::{MeshError, MeshResult};

/// Which axes a bounds computation covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axes {
    /// Planar axes only (X and Y).
    #[default]
    Xy,
    /// All three axes.
    Xyz,
}

/// Closed interval `[min, max]` along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    /// Smallest coordinate seen.
    pub min: f64,
    /// Largest coordinate seen.
    pub max: f64,
}

impl AxisRange {
    /// Create a range from its endpoints.
    #[inline]
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn of(value: f64) -> Self {
        Self::new(value, value)
    }

    fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Length of the range (`max - min`).
    #[inline]
    #[must_use]
    pub fn extent(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether `value` lies in `[min, max]`.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Check whether `value` lies in `(min, max)`.
    #[inline]
    #[must_use]
    pub fn strictly_contains(&self, value: f64) -> bool {
        value > self.min && value < self.max
    }

    /// Shrink the range by `margin` on both ends.
    ///
    /// A margin larger than half the extent produces an inverted range,
    /// which contains nothing.
    #[inline]
    #[must_use]
    pub fn inset(&self, margin: f64) -> Self {
        Self::new(self.min + margin, self.max - margin)
    }
}

/// Axis-aligned extents of a set of terrain vertices.
///
/// X and Y are always present. Z is only computed when requested with
/// [`Axes::Xyz`], because the planar operations never need it.
///
/// # Example
///
/// ```
/// use terrain_types::{Axes, Bounds};
///
/// let coords = [0.0, 0.0, 5.0, 10.0, 4.0, 7.0];
/// let bounds = Bounds::from_flat(&coords, Axes::Xyz).unwrap();
///
/// assert_eq!(bounds.width(), 10.0);
/// assert_eq!(bounds.depth(), 4.0);
/// assert_eq!(bounds.height(), Some(2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Range along X.
    pub x: AxisRange,
    /// Range along Y.
    pub y: AxisRange,
    /// Range along Z, if it was computed.
    pub z: Option<AxisRange>,
}

impl Bounds {
    /// Compute bounds over a sequence of points.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::EmptyMesh`] if the sequence is empty.
    pub fn from_points<'a, I>(points: I, axes: Axes) -> MeshResult<Self>
    where
        I: IntoIterator<Item = &'a Point3<f64>>,
    {
        let mut points = points.into_iter();
        let first = points.next().ok_or(MeshError::EmptyMesh)?;

        let mut bounds = Self {
            x: AxisRange::of(first.x),
            y: AxisRange::of(first.y),
            z: match axes {
                Axes::Xy => None,
                Axes::Xyz => Some(AxisRange::of(first.z)),
            },
        };

        for p in points {
            bounds.x.include(p.x);
            bounds.y.include(p.y);
            if let Some(z) = bounds.z.as_mut() {
                z.include(p.z);
            }
        }

        Ok(bounds)
    }

    /// Compute bounds over a flat `[x0, y0, z0, x1, y1, z1, ...]` buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::MisalignedBuffer`] if the length is not a
    /// multiple of 3, or [`MeshError::EmptyMesh`] if the buffer is empty.
    pub fn from_flat(coords: &[f64], axes: Axes) -> MeshResult<Self> {
        if coords.len() % 3 != 0 {
            return Err(MeshError::MisalignedBuffer {
                what: "vertex",
                len: coords.len(),
            });
        }

        let points: Vec<Point3<f64>> = coords
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();
        Self::from_points(&points, axes)
    }

    /// Extent along X.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x.extent()
    }

    /// Extent along Y.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.y.extent()
    }

    /// Extent along Z, if it was computed.
    #[inline]
    #[must_use]
    pub fn height(&self) -> Option<f64> {
        self.z.map(|z| z.extent())
    }

    /// Shrink the planar box by `dx` on both X ends and `dy` on both Y ends.
    ///
    /// The Z range, if any, is carried over unchanged.
    #[must_use]
    pub fn inset(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x.inset(dx),
            y: self.y.inset(dy),
            z: self.z,
        }
    }

    /// Check whether a point's X/Y lies inside the box, boundary included.
    #[inline]
    #[must_use]
    pub fn contains_xy(&self, p: &Point3<f64>) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y)
    }

    /// Check whether a point's X/Y lies strictly inside the box.
    #[inline]
    #[must_use]
    pub fn strictly_contains_xy(&self, p: &Point3<f64>) -> bool {
        self.x.strictly_contains(p.x) && self.y.strictly_contains(p.y)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X[{:.2}, {:.2}] Y[{:.2}, {:.2}]",
            self.x.min, self.x.max, self.y.min, self.y.max
        )?;
        if let Some(z) = self.z {
            write!(f, " Z[{:.2}, {:.2}]", z.min, z.max)?;
        }
        Ok(())
    }
}
