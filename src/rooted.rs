// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A polynomial in factored form: a leading constant times a product
//! of `(z - root)` terms.  The roots are what the fractal colours by;
//! the coefficient form is what the Newton iteration evaluates.

use crate::complex::Complex;
use crate::polynomial::Polynomial;
use std::fmt;

/// `constant * (z - roots[0]) * (z - roots[1]) * ...`
#[derive(Clone, Debug, PartialEq)]
pub struct RootedPolynomial {
    constant: Complex,
    roots: Vec<Complex>,
}

impl RootedPolynomial {
    /// Builds the polynomial from its leading constant and its roots.
    /// The root count is not checked here; the engine wants at least
    /// two.
    pub fn new(constant: Complex, roots: Vec<Complex>) -> RootedPolynomial {
        RootedPolynomial { constant, roots }
    }

    /// The leading constant.
    pub fn constant(&self) -> Complex {
        self.constant
    }

    /// The roots, in the order they were given.
    pub fn roots(&self) -> &[Complex] {
        &self.roots
    }

    /// Number of roots.
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Evaluates the product left to right, constant first.
    pub fn apply(&self, z: Complex) -> Complex {
        self.roots
            .iter()
            .fold(self.constant, |acc, root| acc.multiply(z.sub(*root)))
    }

    /// Expands the product into coefficient form, one root at a time
    /// in root order.  Quadratic in the root count; compute it once per
    /// request, never per pixel.
    pub fn to_polynomial(&self) -> Polynomial {
        self.roots
            .iter()
            .fold(Polynomial::new(vec![self.constant]), |poly, root| {
                poly.multiply(&Polynomial::new(vec![root.negate(), Complex::ONE]))
            })
    }

    /// Index of the root nearest to `z`, or `None` when even the
    /// nearest root is farther than `threshold`.  Equal distances go to
    /// the later root.  A non-finite `z` never matches.
    pub fn index_of_closest_root(&self, z: Complex, threshold: f64) -> Option<usize> {
        let mut min_distance = self.roots.first()?.sub(z).module();
        let mut min_index = None;
        for (index, root) in self.roots.iter().enumerate() {
            let distance = root.sub(z).module();
            if distance <= min_distance {
                min_distance = distance;
                min_index = Some(index);
            }
        }
        if min_distance <= threshold {
            min_index
        } else {
            None
        }
    }
}

impl fmt::Display for RootedPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.constant)?;
        for root in &self.roots {
            write!(f, "*(z-{})", root)?;
        }
        Ok(())
    }
}
