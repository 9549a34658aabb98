// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Scalar complex arithmetic on top of `num::Complex<f64>`.  Every
//! operation returns a new value; nothing here ever fails.  Division
//! by zero follows IEEE semantics and yields `Inf`/`NaN` components,
//! which the iteration kernel treats as "did not converge."

use std::fmt;
use std::ops::{Add, Deref, Div, Mul, Neg, Sub};

/// A complex number with double-precision real and imaginary parts.
/// Equality is exact field equality.  Derefs to the underlying
/// `num::Complex<f64>`, so `z.re` and `z.im` read the parts.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Complex(num::Complex<f64>);

impl Complex {
    /// 0 + 0i
    pub const ZERO: Complex = Complex(num::Complex { re: 0.0, im: 0.0 });
    /// 1 + 0i
    pub const ONE: Complex = Complex(num::Complex { re: 1.0, im: 0.0 });
    /// -1 + 0i
    pub const ONE_NEG: Complex = Complex(num::Complex { re: -1.0, im: 0.0 });
    /// 0 + 1i
    pub const IM: Complex = Complex(num::Complex { re: 0.0, im: 1.0 });
    /// 0 - 1i
    pub const IM_NEG: Complex = Complex(num::Complex { re: 0.0, im: -1.0 });

    /// Creates `re + im i`.
    pub fn new(re: f64, im: f64) -> Complex {
        Complex(num::Complex::new(re, im))
    }

    /// Distance from the origin, `sqrt(re^2 + im^2)` with no rescaling
    /// against overflow.
    pub fn module(self) -> f64 {
        self.0.norm_sqr().sqrt()
    }

    /// Sum of two numbers.
    pub fn add(self, c: Complex) -> Complex {
        Complex(self.0 + c.0)
    }

    /// Difference of two numbers.
    pub fn sub(self, c: Complex) -> Complex {
        Complex(self.0 - c.0)
    }

    /// Product of two numbers.
    pub fn multiply(self, c: Complex) -> Complex {
        Complex(self.0 * c.0)
    }

    /// Quotient of two numbers.  A zero denominator is not an error;
    /// the result simply carries non-finite components.
    pub fn divide(self, c: Complex) -> Complex {
        Complex(self.0 / c.0)
    }

    /// `-re - im i`
    pub fn negate(self) -> Complex {
        Complex(-self.0)
    }

    /// Raises the number to a non-negative integral power by `n`
    /// successive multiplications.  `power(0)` is the multiplicative
    /// identity.
    pub fn power(self, n: u32) -> Complex {
        (0..n).fold(Complex::ONE, |acc, _| acc.multiply(self))
    }

    /// The `n` roots of this number given by de Moivre's formula, in
    /// order of increasing angle starting from the principal root.
    /// Returns nothing for `n == 0`.
    pub fn root(self, n: u32) -> Vec<Complex> {
        if n == 0 {
            return vec![];
        }
        let n = f64::from(n);
        let radius = self.module().powf(1.0 / n);
        let angle = self.0.arg();
        (0..n as u32)
            .map(|k| {
                let theta = (angle + 2.0 * f64::from(k) * std::f64::consts::PI) / n;
                Complex(num::Complex::from_polar(&radius, &theta))
            })
            .collect()
    }

    /// True when both components are finite.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Deref for Complex {
    type Target = num::Complex<f64>;

    fn deref(&self) -> &num::Complex<f64> {
        &self.0
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.im < 0.0 {
            write!(f, "({:?}{:?}i)", self.re, self.im)
        } else {
            write!(f, "({:?}+{:?}i)", self.re, self.im)
        }
    }
}

impl Add for Complex {
    type Output = Complex;
    fn add(self, rhs: Complex) -> Complex {
        Complex::add(self, rhs)
    }
}

impl Sub for Complex {
    type Output = Complex;
    fn sub(self, rhs: Complex) -> Complex {
        Complex::sub(self, rhs)
    }
}

impl Mul for Complex {
    type Output = Complex;
    fn mul(self, rhs: Complex) -> Complex {
        self.multiply(rhs)
    }
}

impl Div for Complex {
    type Output = Complex;
    fn div(self, rhs: Complex) -> Complex {
        self.divide(rhs)
    }
}

impl Neg for Complex {
    type Output = Complex;
    fn neg(self) -> Complex {
        self.negate()
    }
}
