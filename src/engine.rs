// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The compute engine: takes a window of the complex plane and an
//! image size, and returns which root every pixel converges to.
//!
//! Each request gets its own queue, its own workers, and its own
//! buffer.  Nothing survives from one request to the next, so a
//! failed request leaves nothing behind for the following one.

use crate::cancel::CancellationToken;
use crate::error::{Error, Result};
use crate::newton::{Kernel, MAX_ROOTS};
use crate::planes::{ComplexPlane, PlaneMapper};
use crate::pool::{self, Band, Context};
use crate::rooted::RootedPolynomial;
use crate::tracks::partition;
use log::info;

/// Worker and track counts for the engine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Number of worker threads started per request.
    pub workers: usize,
    /// Number of row bands the image is cut into.
    pub tracks: usize,
}

impl Default for EngineConfig {
    /// One worker per CPU and four tracks per worker.
    fn default() -> Self {
        let cpus = num_cpus::get();
        EngineConfig {
            workers: cpus,
            tracks: 4 * cpus,
        }
    }
}

impl EngineConfig {
    /// Overrides the worker count.
    pub fn with_workers(self, workers: usize) -> Self {
        EngineConfig { workers, ..self }
    }

    /// Overrides the track count.
    pub fn with_tracks(self, tracks: usize) -> Self {
        EngineConfig { tracks, ..self }
    }

    fn validate(&self) -> Result<()> {
        if self.workers == 0 || self.tracks == 0 {
            return Err(Error::InvalidConfig {
                workers: self.workers,
                tracks: self.tracks,
            });
        }
        Ok(())
    }
}

/// One compute request.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Request {
    /// The window of the complex plane.
    pub plane: ComplexPlane,
    /// Image width in pixels, at least 2.
    pub width: usize,
    /// Image height in pixels, at least 2.
    pub height: usize,
    /// Opaque to the engine; echoed back in the result.
    pub id: u64,
}

/// The finished classification of a request.
#[derive(Clone, Debug, PartialEq)]
pub struct Fractal {
    /// Row-major, `width * height` entries.  0 is "no root" (or not
    /// computed because of cancellation), `k` is root `k - 1`.
    pub data: Vec<u16>,
    /// How many roots the polynomial has; entries never exceed it.
    pub root_count: usize,
    /// The request id, unchanged.
    pub request_id: u64,
}

/// Something that turns a request into a classification buffer.
pub trait Producer {
    /// Computes the whole request before returning.  Once it returns,
    /// nothing writes to the buffer any more.
    fn produce(&self, request: &Request, cancel: &CancellationToken) -> Result<Fractal>;
}

/// Newton-Raphson fractal producer backed by a worker pool.
#[derive(Debug)]
pub struct NewtonEngine {
    kernel: Kernel,
    config: EngineConfig,
}

impl NewtonEngine {
    /// Builds an engine for `rooted`, which must have at least two
    /// and at most `MAX_ROOTS` roots.  The coefficient form is
    /// expanded here, once.
    pub fn new(rooted: RootedPolynomial, config: EngineConfig) -> Result<Self> {
        if rooted.root_count() < 2 {
            return Err(Error::TooFewRoots {
                found: rooted.root_count(),
            });
        }
        if rooted.root_count() > MAX_ROOTS {
            return Err(Error::TooManyRoots {
                found: rooted.root_count(),
                max: MAX_ROOTS,
            });
        }
        config.validate()?;
        Ok(NewtonEngine {
            kernel: Kernel::new(rooted),
            config,
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Replaces the worker and track counts for later requests.
    pub fn reconfigure(&mut self, config: EngineConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// The polynomial whose roots classify the pixels.
    pub fn polynomial(&self) -> &RootedPolynomial {
        self.kernel.rooted()
    }

    /// Computes a request with a fresh token that is never cancelled.
    pub fn compute(&self, request: &Request) -> Result<Fractal> {
        self.produce(request, &CancellationToken::new())
    }
}

impl Producer for NewtonEngine {
    fn produce(&self, request: &Request, cancel: &CancellationToken) -> Result<Fractal> {
        let mapper = PlaneMapper::new(request.width, request.height, request.plane)?;
        let EngineConfig { workers, tracks } = self.config;
        info!(
            "request {}: {}x{} on {} workers, {} tracks",
            request.id, request.width, request.height, workers, tracks
        );

        let mut data = vec![0u16; mapper.len()];
        let bands = Band::split(&mut data, mapper.width(), partition(mapper.height(), tracks));
        let context = Context {
            kernel: &self.kernel,
            mapper: &mapper,
            cancel,
        };
        let reports = pool::execute(workers, bands, context)?;

        let rows: usize = reports.iter().map(|r| r.rows).sum();
        if cancel.is_cancelled() {
            info!(
                "request {} cancelled with {} of {} rows rendered",
                request.id,
                rows,
                mapper.height()
            );
        } else {
            info!("request {} finished", request.id);
        }

        Ok(Fractal {
            data,
            root_count: self.kernel.rooted().root_count(),
            request_id: request.id,
        })
    }
}
