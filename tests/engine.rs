// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate newtonfractal;
extern crate num_cpus;

use newtonfractal::newton::Kernel;
use newtonfractal::planes::PlaneMapper;
use newtonfractal::{
    CancellationToken, Complex, ComplexPlane, EngineConfig, NewtonEngine, Producer, Request,
    RootedPolynomial,
};
use std::thread;
use std::time::Duration;

fn pentagon() -> RootedPolynomial {
    let mut roots = Complex::ONE.root(5);
    roots.push(Complex::new(0.3, -0.2));
    RootedPolynomial::new(Complex::new(2.0, -1.0), roots)
}

fn request(width: usize, height: usize) -> Request {
    Request {
        plane: ComplexPlane::new(-1.5, 1.5, -1.2, 1.2),
        width,
        height,
        id: 42,
    }
}

/// The whole image rendered on the calling thread, no pool involved.
fn serial(rooted: RootedPolynomial, request: &Request) -> Vec<u16> {
    let kernel = Kernel::new(rooted);
    let mapper = PlaneMapper::new(request.width, request.height, request.plane).unwrap();
    let mut data = vec![0u16; mapper.len()];
    kernel.render_rows(&mapper, 0..request.height, &mut data, &CancellationToken::new());
    data
}

#[test]
fn buffer_has_one_valid_entry_per_pixel() {
    let engine = NewtonEngine::new(pentagon(), EngineConfig::default()).unwrap();
    for &(w, h) in &[(2, 2), (3, 7), (31, 17), (64, 48)] {
        let fractal = engine.compute(&request(w, h)).unwrap();
        assert_eq!(fractal.data.len(), w * h);
        assert_eq!(fractal.root_count, 6);
        assert_eq!(fractal.request_id, 42);
        assert!(fractal.data.iter().all(|v| (*v as usize) <= fractal.root_count));
    }
}

#[test]
fn same_buffer_for_any_worker_or_track_count() {
    let req = request(61, 47);
    let expected = serial(pentagon(), &req);
    assert!(expected.iter().any(|v| *v != 0));
    let cpus = num_cpus::get();
    for &workers in &[1, 2, cpus] {
        for &tracks in &[1, 3, 4 * cpus, 47, 100] {
            let config = EngineConfig { workers, tracks };
            let engine = NewtonEngine::new(pentagon(), config).unwrap();
            let fractal = engine.compute(&req).unwrap();
            assert_eq!(
                fractal.data, expected,
                "{} workers, {} tracks disagree with the serial render",
                workers, tracks
            );
        }
    }
}

#[test]
fn cancelled_before_start_leaves_everything_unclassified() {
    let engine = NewtonEngine::new(pentagon(), EngineConfig::default()).unwrap();
    let cancel = CancellationToken::new();
    cancel.cancel();
    let fractal = engine.produce(&request(40, 30), &cancel).unwrap();
    assert_eq!(fractal.data.len(), 40 * 30);
    assert!(fractal.data.iter().all(|v| *v == 0));
    assert!(cancel.is_cancelled());
}

#[test]
fn cancelled_rows_are_complete_or_untouched() {
    let (width, height) = (160, 120);
    let req = request(width, height);
    let expected = serial(pentagon(), &req);
    let engine = NewtonEngine::new(pentagon(), EngineConfig::default().with_tracks(height)).unwrap();

    let cancel = CancellationToken::new();
    let remote = cancel.clone();
    let canceller = thread::spawn(move || {
        thread::sleep(Duration::from_millis(5));
        remote.cancel();
    });
    let fractal = engine.produce(&req, &cancel).unwrap();
    canceller.join().unwrap();

    for (got, want) in fractal.data.chunks(width).zip(expected.chunks(width)) {
        assert!(
            got == want || got.iter().all(|v| *v == 0),
            "a row was left half-written"
        );
    }
}

#[test]
fn a_new_request_after_a_cancelled_one_is_complete() {
    let engine = NewtonEngine::new(pentagon(), EngineConfig::default()).unwrap();
    let cancel = CancellationToken::new();
    cancel.cancel();
    engine.produce(&request(20, 20), &cancel).unwrap();
    let fractal = engine.compute(&request(20, 20)).unwrap();
    assert_eq!(fractal.data, serial(pentagon(), &request(20, 20)));
}

#[test]
fn two_roots_on_a_two_by_two_window() {
    let rooted = RootedPolynomial::new(Complex::ONE, vec![Complex::ONE, Complex::ONE_NEG]);
    let engine = NewtonEngine::new(rooted, EngineConfig::default()).unwrap();
    let fractal = engine
        .compute(&Request {
            plane: ComplexPlane::new(-2.0, 2.0, -2.0, 2.0),
            width: 2,
            height: 2,
            id: 1,
        })
        .unwrap();
    assert_eq!(fractal.root_count, 2);
    // Column 1 sits at re = 2, nearest re = 1; column 0 at re = -2.
    for row in fractal.data.chunks(2) {
        assert_eq!(row, &[2, 1]);
    }
}

#[test]
fn vanishing_derivative_pixel_is_unclassified() {
    // z^2 - 1 has f'(0) = 0; the centre pixel of a 3x3 window is 0.
    let rooted = RootedPolynomial::new(Complex::ONE, vec![Complex::ONE, Complex::ONE_NEG]);
    let engine = NewtonEngine::new(rooted, EngineConfig::default()).unwrap();
    let fractal = engine
        .compute(&Request {
            plane: ComplexPlane::new(-1.0, 1.0, -1.0, 1.0),
            width: 3,
            height: 3,
            id: 2,
        })
        .unwrap();
    assert_eq!(fractal.data[4], 0);
    assert_eq!(fractal.data[3], 2);
    assert_eq!(fractal.data[5], 1);
}
