// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The per-pixel Newton-Raphson iteration and the row renderer built
//! on it.  Each pixel depends only on its own starting point, so any
//! partition of the rows produces the same buffer.

use crate::cancel::CancellationToken;
use crate::complex::Complex;
use crate::planes::{Pixel, PlaneMapper};
use crate::polynomial::Polynomial;
use crate::rooted::RootedPolynomial;
use std::ops::Range;

/// Iteration cap, 16 * 16 * 16.
pub const MAX_ITERATIONS: usize = 4096;

/// Successive iterates closer than this have converged.
pub const CONVERGENCE_THRESHOLD: f64 = 0.001;

/// A converged point must be at least this close to a root to be
/// classified as that root.
pub const ROOT_THRESHOLD: f64 = 0.002;

/// The most roots a buffer entry can tell apart.
pub const MAX_ROOTS: usize = u16::MAX as usize;

/// Everything the iteration needs, shared read-only across workers.
/// The coefficient form and its derivative are built once here.
#[derive(Debug)]
pub struct Kernel {
    rooted: RootedPolynomial,
    f: Polynomial,
    derivative: Polynomial,
}

impl Kernel {
    /// Expands the rooted polynomial and derives it.
    pub fn new(rooted: RootedPolynomial) -> Kernel {
        let f = rooted.to_polynomial();
        let derivative = f.derive();
        Kernel {
            rooted,
            f,
            derivative,
        }
    }

    /// The factored polynomial used for classification.
    pub fn rooted(&self) -> &RootedPolynomial {
        &self.rooted
    }

    /// Runs `z = z - f(z) / f'(z)` from `start` until successive
    /// iterates are within `CONVERGENCE_THRESHOLD` or
    /// `MAX_ITERATIONS` steps have been taken.  A non-finite iterate
    /// can never converge, so iteration stops on it.
    pub fn converge(&self, start: Complex) -> Complex {
        let mut z = start;
        for _ in 0..MAX_ITERATIONS {
            let next = z.sub(self.f.apply(z).divide(self.derivative.apply(z)));
            let step = next.sub(z).module();
            z = next;
            if !(step > CONVERGENCE_THRESHOLD) {
                break;
            }
        }
        z
    }

    /// The buffer value for a starting point: the index of the root
    /// the iteration lands on plus one, or 0 when it lands on none.
    /// The polynomial must have at most `MAX_ROOTS` roots.
    pub fn classify(&self, start: Complex) -> u16 {
        match self
            .rooted
            .index_of_closest_root(self.converge(start), ROOT_THRESHOLD)
        {
            // NewtonEngine::new caps the root count at MAX_ROOTS.
            Some(index) => (index + 1) as u16,
            None => 0,
        }
    }

    /// Fills `pixels` with rows `rows` of the image.  `pixels` holds
    /// exactly those rows.  The token is checked before each row; once
    /// it is set the remaining rows are left untouched.  Returns the
    /// number of rows rendered.
    pub fn render_rows(
        &self,
        mapper: &PlaneMapper,
        rows: Range<usize>,
        pixels: &mut [u16],
        cancel: &CancellationToken,
    ) -> usize {
        let width = mapper.width();
        debug_assert_eq!(pixels.len(), (rows.end - rows.start) * width);
        let mut rendered = 0;
        for (y, row) in rows.zip(pixels.chunks_mut(width)) {
            if cancel.is_cancelled() {
                break;
            }
            for (x, value) in row.iter_mut().enumerate() {
                *value = self.classify(mapper.pixel_to_point(&Pixel(x, y)));
            }
            rendered += 1;
        }
        rendered
    }
}
