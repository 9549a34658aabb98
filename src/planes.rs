// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0
//! in the upper-left corner, and a window on the complex plane given
//! by its real and imaginary bounds.
use crate::complex::Complex;
use crate::error::{Error, Result};

/// Describes the width and height of an integral plane that is
/// assumed to start at 0,0.  Rows grow downward.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// The window of the complex plane being rendered.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane {
    /// Smallest real value, at the left edge.
    pub re_min: f64,
    /// Largest real value, at the right edge.
    pub re_max: f64,
    /// Smallest imaginary value, at the bottom edge.
    pub im_min: f64,
    /// Largest imaginary value, at the top edge.
    pub im_max: f64,
}

impl ComplexPlane {
    /// A window from its four bounds.
    pub fn new(re_min: f64, re_max: f64, im_min: f64, im_max: f64) -> ComplexPlane {
        ComplexPlane {
            re_min,
            re_max,
            im_min,
            im_max,
        }
    }

    /// The window whose corners are `leftlower` and `rightupper`.
    pub fn from_corners(leftlower: Complex, rightupper: Complex) -> ComplexPlane {
        ComplexPlane::new(leftlower.re, rightupper.re, leftlower.im, rightupper.im)
    }
}

/// Describes the x, y of a pixel in a region.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels on an integral plane onto the complex window.  The
/// first and last pixel of each axis land exactly on the window's
/// edges, and row 0 is the top (largest imaginary) edge.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    /// The pixel dimensions.
    pub integral_plane: IntegralPlane,
    /// The complex window.
    pub complex_plane: ComplexPlane,
}

impl PlaneMapper {
    /// Both dimensions must be at least 2, since the mapping divides
    /// by `width - 1` and `height - 1`.
    pub fn new(width: usize, height: usize, complex_plane: ComplexPlane) -> Result<PlaneMapper> {
        if width < 2 || height < 2 {
            return Err(Error::InvalidGeometry { width, height });
        }
        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.integral_plane.0
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.integral_plane.1
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Given a pixel on the integral plane, return the point it maps
    /// to in the complex window.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex {
        let (width, height) = (self.width() as f64, self.height() as f64);
        let plane = &self.complex_plane;
        Complex::new(
            pixel.0 as f64 / (width - 1.0) * (plane.re_max - plane.re_min) + plane.re_min,
            (height - 1.0 - pixel.1 as f64) / (height - 1.0) * (plane.im_max - plane.im_min)
                + plane.im_min,
        )
    }
}
