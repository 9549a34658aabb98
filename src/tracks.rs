// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Splits the rows of an image into contiguous bands ("tracks").

use std::ops::Range;

/// A contiguous, half-open band of rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    /// Position of this track in the partition.
    pub index: usize,
    /// The rows it covers.
    pub rows: Range<usize>,
}

impl Track {
    /// Number of rows in the band; zero when there are more tracks
    /// than rows.
    pub fn len(&self) -> usize {
        self.rows.end - self.rows.start
    }

    /// Whether the band covers no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.start == self.rows.end
    }
}

/// Cuts `height` rows into `count` bands of `height / count` rows
/// each, the last band taking whatever the division leaves over.
/// Every row lands in exactly one band.  `count` must be at least 1.
pub fn partition(height: usize, count: usize) -> Vec<Track> {
    assert!(count > 0, "cannot partition into zero tracks");
    let per_track = height / count;
    (0..count)
        .map(|index| {
            let start = index * per_track;
            let end = if index == count - 1 {
                height
            } else {
                (index + 1) * per_track
            };
            Track {
                index,
                rows: start..end,
            }
        })
        .collect()
}
