//! Geometry kernel for board plotting.
//!
//! All lengths are `f64` values in the board's native unit (mil, 1/1000 inch)
//! and all angles are `f64` values in decidegrees (1/10 degree, 3600 per full
//! turn). The decidegree helpers return exact closed-form results at
//! axis-aligned and 45-degree directions so repeated plotting of orthogonal
//! geometry never accumulates trigonometric drift.
//!
//! Every operation on [`Point`], [`Size`], [`Rect`] and [`Transform`] consumes
//! its receiver (they are all `Copy`) and returns a new value; nothing in this
//! module mutates caller-owned geometry.

use crate::error::GeometryError;

/// Converts an angle in decidegrees to radians.
pub fn decideg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 1800.0
}

/// Converts an angle in radians to decidegrees.
pub fn rad_to_decideg(rad: f64) -> f64 {
    rad * 1800.0 / std::f64::consts::PI
}

/// Normalizes an angle into `[0, 3600)` decidegrees.
///
/// The result is congruent to the input modulo 3600.
pub fn normalize_angle(mut angle: f64) -> f64 {
    while angle < 0.0 {
        angle += 3600.0;
    }
    while angle >= 3600.0 {
        angle -= 3600.0;
    }
    angle
}

/// Adds two decidegree angles and normalizes the sum into `[0, 3600)`.
pub fn add_angles(angle1: f64, angle2: f64) -> f64 {
    normalize_angle(angle1 + angle2)
}

/// Returns the decidegree angle of the vector `(dx, dy)`.
///
/// Axis-aligned and diagonal directions are answered in closed form (0,
/// ±900, ±1800, ±450, ±1350) so they carry no floating-point error; every
/// other direction falls back to `atan2`.
pub fn arc_tangente(dy: f64, dx: f64) -> f64 {
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }

    if dy == 0.0 {
        if dx >= 0.0 {
            return 0.0;
        } else {
            return -1800.0;
        }
    }

    if dx == 0.0 {
        if dy >= 0.0 {
            return 900.0;
        } else {
            return -900.0;
        }
    }

    if dx == dy {
        if dx >= 0.0 {
            return 450.0;
        } else {
            return -1350.0;
        }
    }

    if dx == -dy {
        if dx >= 0.0 {
            return -450.0;
        } else {
            return 1350.0;
        }
    }

    rad_to_decideg(dy.atan2(dx))
}

/// Clamps `value` into `[lower, upper]`.
pub fn clamp(lower: f64, value: f64, upper: f64) -> f64 {
    if value < lower {
        return lower;
    }
    if upper < value {
        return upper;
    }
    value
}

/// Converts millimeters to mils.
pub fn mm_to_mil(mm: f64) -> f64 {
    mm / 0.0254
}

/// Converts mils to millimeters.
pub fn mil_to_mm(mil: f64) -> f64 {
    mil * 0.0254
}

/// Euclidean distance between two points.
pub fn line_length(p1: Point, p2: Point) -> f64 {
    (p1.x - p2.x).hypot(p1.y - p2.y)
}

/// A 2D coordinate in board native units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point.
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point.
    pub fn y(self) -> f64 {
        self.y
    }

    /// Checks if both coordinates are zero.
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point.
    pub fn add(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point.
    pub fn sub(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Euclidean distance from the origin.
    pub fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns this point rotated about the origin by `angle` decidegrees.
    ///
    /// Quarter turns are exact: rotating by 900, 1800 and 2700 decidegrees
    /// yields `(y, -x)`, `(-x, -y)` and `(-y, x)` respectively with no
    /// floating-point rounding.
    pub fn rotated(self, angle: f64) -> Self {
        let angle = normalize_angle(angle);
        if angle == 0.0 {
            self
        } else if angle == 900.0 {
            // sin = 1, cos = 0
            Self {
                x: self.y,
                y: -self.x,
            }
        } else if angle == 1800.0 {
            // sin = 0, cos = -1
            Self {
                x: -self.x,
                y: -self.y,
            }
        } else if angle == 2700.0 {
            // sin = -1, cos = 0
            Self {
                x: -self.y,
                y: self.x,
            }
        } else {
            let rad = decideg_to_rad(angle);
            let sinus = rad.sin();
            let cosinus = rad.cos();
            Self {
                x: self.y * sinus + self.x * cosinus,
                y: self.y * cosinus - self.x * sinus,
            }
        }
    }

    /// Returns this point rotated about `center` by `angle` decidegrees.
    pub fn rotated_about(self, center: Point, angle: f64) -> Self {
        self.sub(center).rotated(angle).add(center)
    }
}

/// Width and height of an element in board native units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// Creates a new size with the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size.
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height dimension of this size.
    pub fn height(self) -> f64 {
        self.height
    }

    /// Euclidean norm of the size treated as a vector.
    pub fn hypot(self) -> f64 {
        self.width.hypot(self.height)
    }

    /// Returns the size with width and height exchanged.
    pub fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// A rectangle described by two corner points.
///
/// The corners are not required to be ordered; [`Rect::normalize`] sorts
/// them into min/max form.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pos1: Point,
    pos2: Point,
}

impl Rect {
    /// Creates a rectangle from two corner points.
    pub fn new(pos1: Point, pos2: Point) -> Self {
        Self { pos1, pos2 }
    }

    /// Returns the first corner.
    pub fn pos1(self) -> Point {
        self.pos1
    }

    /// Returns the second corner.
    pub fn pos2(self) -> Point {
        self.pos2
    }

    /// Signed width, `pos2.x - pos1.x`.
    pub fn width(self) -> f64 {
        self.pos2.x - self.pos1.x
    }

    /// Signed height, `pos2.y - pos1.y`.
    pub fn height(self) -> f64 {
        self.pos2.y - self.pos1.y
    }

    /// Returns the rectangle with corners sorted into min/max form.
    pub fn normalize(self) -> Self {
        Self {
            pos1: Point::new(self.pos1.x.min(self.pos2.x), self.pos1.y.min(self.pos2.y)),
            pos2: Point::new(self.pos1.x.max(self.pos2.x), self.pos1.y.max(self.pos2.y)),
        }
    }

    /// Bounding union of this rectangle and another.
    pub fn merge(self, other: Rect) -> Self {
        Self {
            pos1: Point::new(
                self.pos1
                    .x
                    .min(other.pos1.x)
                    .min(self.pos2.x)
                    .min(other.pos2.x),
                self.pos1
                    .y
                    .min(other.pos1.y)
                    .min(self.pos2.y)
                    .min(other.pos2.y),
            ),
            pos2: Point::new(
                self.pos1
                    .x
                    .max(other.pos1.x)
                    .max(self.pos2.x)
                    .max(other.pos2.x),
                self.pos1
                    .y
                    .max(other.pos1.y)
                    .max(self.pos2.y)
                    .max(other.pos2.y),
            ),
        }
    }

    /// Grows the rectangle by a uniform margin on every side.
    pub fn inflate(self, n: f64) -> Self {
        Self {
            pos1: Point::new(self.pos1.x - n, self.pos1.y - n),
            pos2: Point::new(self.pos2.x + n, self.pos2.y + n),
        }
    }
}

/// A 2D affine transform.
///
/// Maps a point as `x' = x1·x + y1·y + tx`, `y' = x2·x + y2·y + ty`.
/// Composition via [`Transform::multiply`] is associative but not
/// commutative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
    tx: f64,
    ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Creates a transform from raw matrix entries.
    pub fn new(x1: f64, x2: f64, y1: f64, y2: f64, tx: f64, ty: f64) -> Self {
        Self {
            x1,
            x2,
            y1,
            y2,
            tx,
            ty,
        }
    }

    /// The identity transform.
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// The board default transform: y axis pointing down, `(1, 0, 0, -1)`.
    pub fn mirror_y() -> Self {
        Self::new(1.0, 0.0, 0.0, -1.0, 0.0, 0.0)
    }

    /// A pure translation.
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// A pure (possibly anisotropic) scaling matrix.
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// A pure rotation by an angle in radians.
    pub fn rotation(radian: f64) -> Self {
        let s = radian.sin();
        let c = radian.cos();
        Self::new(c, s, -s, c, 0.0, 0.0)
    }

    /// Composes this transform with a translation.
    pub fn translate(self, tx: f64, ty: f64) -> Self {
        Self::translation(tx, ty).multiply(&self)
    }

    /// Composes this transform with a uniform scale.
    ///
    /// Only `|sx| == |sy|` is accepted: a stroke width has no defined
    /// meaning under an anisotropic scale, so the request is a
    /// configuration error.
    pub fn scale(self, sx: f64, sy: f64) -> Result<Self, GeometryError> {
        if sx.abs() != sy.abs() {
            return Err(GeometryError::NonUniformScale { sx, sy });
        }
        Ok(Self::scaling(sx, sy).multiply(&self))
    }

    /// Composes this transform with a rotation by an angle in radians.
    pub fn rotate(self, radian: f64) -> Self {
        Self::rotation(radian).multiply(&self)
    }

    /// Matrix product of this transform and `b`.
    pub fn multiply(self, b: &Transform) -> Self {
        let a = self;
        Self::new(
            a.x1 * b.x1 + a.x2 * b.y1,
            a.x1 * b.x2 + a.x2 * b.y2,
            a.y1 * b.x1 + a.y2 * b.y1,
            a.y1 * b.x2 + a.y2 * b.y2,
            a.tx * b.x1 + a.ty * b.y1 + b.tx,
            a.tx * b.x2 + a.ty * b.y2 + b.ty,
        )
    }

    /// Maps a point through this transform.
    pub fn transform_point(&self, p: Point) -> Point {
        Point::new(
            self.x1 * p.x + self.y1 * p.y + self.tx,
            self.x2 * p.x + self.y2 * p.y + self.ty,
        )
    }

    /// Scales a scalar magnitude (a stroke width, a diameter) through this
    /// transform.
    ///
    /// Averages the four matrix-entry-scaled magnitudes so a single width
    /// value comes back even when the matrix is, in principle, anisotropic.
    pub fn transform_scalar(&self, n: f64) -> f64 {
        ((n * self.x1).abs() + (n * self.x2).abs() + (n * self.y1).abs() + (n * self.y2).abs())
            / 2.0
    }

    /// Maps an arc's start/end angle pair (decidegrees) through this
    /// transform.
    ///
    /// Returns the transformed angles normalized so `end >= start`, plus a
    /// flag that is true when the transform flipped the arc's orientation
    /// and the angles had to be swapped.
    pub fn map_angles(&self, angle1: f64, angle2: f64) -> (f64, f64, bool) {
        let delta = angle2 - angle1;
        let (mut angle1, mut angle2) = if delta >= 1800.0 {
            (angle1 - 1.0, angle2 + 1.0)
        } else {
            (angle1, angle2)
        };

        let mut x = decideg_to_rad(angle1).cos();
        let mut y = decideg_to_rad(angle1).sin();
        let t = x * self.x1 + y * self.y1;
        y = x * self.x2 + y * self.y2;
        x = t;
        angle1 = rad_to_decideg(y.atan2(x)).round();

        let mut x = decideg_to_rad(angle2).cos();
        let mut y = decideg_to_rad(angle2).sin();
        let t = x * self.x1 + y * self.y1;
        y = x * self.x2 + y * self.y2;
        x = t;
        angle2 = rad_to_decideg(y.atan2(x)).round();

        angle1 = normalize_angle(angle1);
        angle2 = normalize_angle(angle2);
        if angle2 < angle1 {
            angle2 += 3600.0;
        }

        let mut swap = false;
        if angle2 - angle1 > 1800.0 {
            std::mem::swap(&mut angle1, &mut angle2);
            angle1 = normalize_angle(angle1);
            angle2 = normalize_angle(angle2);
            if angle2 < angle1 {
                angle2 += 3600.0;
            }
            swap = true;
        }

        if delta >= 1800.0 {
            angle1 += 1.0;
            angle2 -= 1.0;
        }

        (angle1, angle2, swap)
    }
}
