// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A polynomial over complex coefficients, stored in ascending order
//! of power: `coefficients[0]` is the constant term.

use crate::complex::Complex;
use std::fmt;

/// Immutable polynomial in coefficient form.  The only polynomial
/// without coefficients is the derivative of a constant, which is
/// the zero polynomial of order -1.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<Complex>,
}

impl Polynomial {
    /// Builds a polynomial from its coefficients, lowest power first.
    pub fn new(coefficients: Vec<Complex>) -> Polynomial {
        Polynomial { coefficients }
    }

    /// The coefficients, lowest power first.
    pub fn coefficients(&self) -> &[Complex] {
        &self.coefficients
    }

    /// Coefficient count minus one.  -1 for the zero polynomial left
    /// behind by deriving a constant.
    pub fn order(&self) -> isize {
        self.coefficients.len() as isize - 1
    }

    /// Full convolution of the two coefficient sequences.  The result
    /// has `order(self) + order(other) + 1` coefficients.
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        if self.coefficients.is_empty() || other.coefficients.is_empty() {
            return Polynomial::new(vec![]);
        }
        let mut product =
            vec![Complex::ZERO; self.coefficients.len() + other.coefficients.len() - 1];
        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in other.coefficients.iter().enumerate() {
                product[i + j] = product[i + j].add(a.multiply(*b));
            }
        }
        Polynomial::new(product)
    }

    /// First derivative by the power rule.
    pub fn derive(&self) -> Polynomial {
        Polynomial::new(
            self.coefficients
                .iter()
                .enumerate()
                .skip(1)
                .map(|(power, c)| c.multiply(Complex::new(power as f64, 0.0)))
                .collect(),
        )
    }

    /// Evaluates the polynomial at `z` using Horner's method.
    pub fn apply(&self, z: Complex) -> Complex {
        self.coefficients
            .iter()
            .rev()
            .fold(Complex::ZERO, |acc, c| acc.multiply(z).add(*c))
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.coefficients.is_empty() {
            return write!(f, "{}", Complex::ZERO);
        }
        let terms: Vec<String> = self
            .coefficients
            .iter()
            .enumerate()
            .rev()
            .map(|(power, c)| match power {
                0 => format!("{}", c),
                1 => format!("{}*z", c),
                _ => format!("{}*z^{}", c, power),
            })
            .collect();
        write!(f, "{}", terms.join("+"))
    }
}
