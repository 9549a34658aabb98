// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can make a request fail.  Numerical trouble is not
//! in here: a vanishing derivative just produces an unclassified
//! pixel.

use failure::Fail;

/// Failures surfaced by the engine and by root parsing.
#[derive(Debug, Fail, PartialEq)]
pub enum Error {
    /// The image must be at least 2x2 pixels.
    #[fail(display = "image must be at least 2x2 pixels, got {}x{}", width, height)]
    InvalidGeometry {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// Nearest-root classification needs at least two roots.
    #[fail(display = "at least two roots are required, got {}", found)]
    TooFewRoots {
        /// Roots supplied.
        found: usize,
    },

    /// Buffer entries are `u16`, so a root index plus one must fit.
    #[fail(display = "at most {} roots are supported, got {}", max, found)]
    TooManyRoots {
        /// Roots supplied.
        found: usize,
        /// The largest supported root count.
        max: usize,
    },

    /// Worker and track counts must both be at least 1.
    #[fail(display = "need at least one worker and one track, got {} and {}", workers, tracks)]
    InvalidConfig {
        /// Configured worker count.
        workers: usize,
        /// Configured track count.
        tracks: usize,
    },

    /// A worker thread panicked; the request's buffer is discarded.
    #[fail(display = "a worker thread panicked during computation")]
    WorkerPanicked,

    /// Text that is not a complex number.
    #[fail(display = "could not parse '{}' as a complex number: {}", input, reason)]
    Parse {
        /// The offending text.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
