// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reads complex numbers the way a user types roots: a real part and
//! an imaginary part written as `i` followed by its magnitude, either
//! one optional.  `1`, `-1 + i0`, `i`, `- i`, `0 - i2.5`, `-4 + i2.4`.

use crate::complex::Complex;
use crate::error::Error;
use std::str::FromStr;

fn number(s: &str, input: &str) -> Result<f64, Error> {
    match f64::from_str(s) {
        Ok(n) if n.is_finite() => Ok(n),
        Ok(_) => Err(parse_error(input, "parts must be finite")),
        Err(_) => Err(parse_error(input, "not a number")),
    }
}

fn parse_error(input: &str, reason: &'static str) -> Error {
    Error::Parse {
        input: input.to_string(),
        reason,
    }
}

impl FromStr for Complex {
    type Err = Error;

    fn from_str(input: &str) -> Result<Complex, Error> {
        let s: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        if s.is_empty() {
            return Err(parse_error(input, "empty input"));
        }

        let index = match s.find('i') {
            None => return Ok(Complex::new(number(&s, input)?, 0.0)),
            Some(index) => index,
        };

        let (head, magnitude) = (&s[..index], &s[index + 1..]);
        let magnitude = if magnitude.is_empty() {
            1.0
        } else {
            number(magnitude, input)?
        };
        let (real, sign) = if head.is_empty() {
            ("", 1.0)
        } else if head.ends_with('+') {
            (&head[..head.len() - 1], 1.0)
        } else if head.ends_with('-') {
            (&head[..head.len() - 1], -1.0)
        } else {
            return Err(parse_error(input, "imaginary part needs a sign"));
        };
        let real = if real.is_empty() {
            0.0
        } else {
            number(real, input)?
        };
        Ok(Complex::new(real, sign * magnitude))
    }
}
