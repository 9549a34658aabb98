// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A fixed pool of scoped worker threads draining a FIFO queue of
//! row bands.  Each band owns a disjoint slice of the output buffer,
//! so the workers write without any locking; the only shared mutable
//! state is the cancellation token.

use crate::cancel::CancellationToken;
use crate::error::{Error, Result};
use crate::newton::Kernel;
use crate::planes::PlaneMapper;
use crate::tracks::Track;
use crossbeam::channel::{unbounded, Receiver};
use log::{debug, trace};
use std::mem;

/// One track of rows together with the slice of the output buffer
/// that holds them.
#[derive(Debug)]
pub struct Band<'a> {
    /// The rows to render.
    pub track: Track,
    /// Exactly `track.len() * width` pixels.
    pub pixels: &'a mut [u16],
}

impl<'a> Band<'a> {
    /// Carves `buffer` into one band per track.  The tracks must cover
    /// the buffer's rows in order.
    pub fn split(buffer: &'a mut [u16], width: usize, tracks: Vec<Track>) -> Vec<Band<'a>> {
        let mut rest = buffer;
        tracks
            .into_iter()
            .map(|track| {
                let (pixels, tail) = mem::take(&mut rest).split_at_mut(track.len() * width);
                rest = tail;
                Band { track, pixels }
            })
            .collect()
    }
}

/// An item on the work queue.  Every worker leaves after taking
/// exactly one `Shutdown`.
#[derive(Debug)]
pub enum Job<'a> {
    /// Render a band.
    Band(Band<'a>),
    /// Stop taking work.
    Shutdown,
}

/// Read-only state shared by all workers of one request.
#[derive(Clone, Copy, Debug)]
pub struct Context<'a> {
    /// The iteration kernel.
    pub kernel: &'a Kernel,
    /// Pixel to plane mapping for this request.
    pub mapper: &'a PlaneMapper,
    /// The request's cancellation token.
    pub cancel: &'a CancellationToken,
}

/// What a worker did before it left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorkerReport {
    /// Bands taken from the queue.
    pub bands: usize,
    /// Rows actually rendered; fewer than the bands' total once the
    /// request is cancelled.
    pub rows: usize,
}

fn work(id: usize, queue: &Receiver<Job>, context: Context) -> WorkerReport {
    let mut report = WorkerReport::default();
    loop {
        match queue.recv() {
            Ok(Job::Band(band)) => {
                trace!("worker {} took track {} (rows {:?})", id, band.track.index, band.track.rows);
                let rendered = context.kernel.render_rows(
                    context.mapper,
                    band.track.rows.clone(),
                    band.pixels,
                    context.cancel,
                );
                if rendered < band.track.len() {
                    debug!(
                        "worker {} abandoned track {} after {} of {} rows",
                        id,
                        band.track.index,
                        rendered,
                        band.track.len()
                    );
                }
                report.bands += 1;
                report.rows += rendered;
            }
            // A closed queue can only mean the sender is gone; treat it
            // like a shutdown marker.
            Ok(Job::Shutdown) | Err(_) => break,
        }
    }
    debug!(
        "worker {} exiting after {} bands, {} rows",
        id, report.bands, report.rows
    );
    report
}

/// Starts `workers` threads, queues every band followed by one
/// `Shutdown` per worker, and waits for all of them to exit.  When
/// this returns, every band's slice has been written or abandoned and
/// no thread holds it any longer.
pub fn execute(workers: usize, bands: Vec<Band>, context: Context) -> Result<Vec<WorkerReport>> {
    let (sender, receiver) = unbounded();
    let outcome = crossbeam::scope(|spawner| {
        let handles: Vec<_> = (0..workers)
            .map(|id| {
                let queue = receiver.clone();
                spawner.spawn(move |_| work(id, &queue, context))
            })
            .collect();
        // Only the workers hold receivers now, so a failed send means
        // all of them are gone.
        drop(receiver);

        let queued = bands
            .into_iter()
            .map(Job::Band)
            .chain((0..workers).map(|_| Job::Shutdown))
            .try_for_each(|job| sender.send(job));

        let reports: Vec<_> = handles.into_iter().map(|handle| handle.join()).collect();
        if queued.is_err() {
            return Err(Error::WorkerPanicked);
        }
        reports
            .into_iter()
            .map(|report| report.map_err(|_| Error::WorkerPanicked))
            .collect::<Result<Vec<WorkerReport>>>()
    });
    outcome.map_err(|_| Error::WorkerPanicked)?
}
