#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Newton-Raphson fractal engine
//!
//! Given a polynomial by its roots, Newton's method started from a
//! point on the complex plane will usually wander its way to one of
//! those roots.  Which one it reaches is a wildly discontinuous
//! function of the starting point, and colouring every point by the
//! root it ends up at produces the Newton fractal.
//!
//! This crate computes that classification for a rectangular window
//! of the plane: every pixel of a `width x height` image is mapped to
//! a starting point, iterated until it settles, and tagged with the
//! index of the root it settled on.  The rows of the image are cut
//! into tracks that a fixed pool of worker threads pulls from a
//! queue, and a shared token lets the caller abandon a request that
//! has gone stale.
//!
//! Turning the buffer into colours is left to the caller; the
//! `newton` binary writes a simple PPM.

extern crate crossbeam;
extern crate failure;
extern crate itertools;
extern crate log;
extern crate num;
extern crate num_cpus;

pub mod cancel;
pub mod complex;
pub mod engine;
pub mod error;
pub mod newton;
pub mod parse;
pub mod planes;
pub mod polynomial;
pub mod pool;
pub mod rooted;
pub mod tracks;

pub use cancel::CancellationToken;
pub use complex::Complex;
pub use engine::{EngineConfig, Fractal, NewtonEngine, Producer, Request};
pub use error::{Error, Result};
pub use planes::ComplexPlane;
pub use polynomial::Polynomial;
pub use rooted::RootedPolynomial;
