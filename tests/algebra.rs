// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate newtonfractal;
extern crate rand;

use newtonfractal::{Complex, Polynomial, RootedPolynomial};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TOLERANCE: f64 = 1e-9;

fn random_complex(rng: &mut StdRng) -> Complex {
    Complex::new(rng.gen_range(-2.0, 2.0), rng.gen_range(-2.0, 2.0))
}

fn random_polynomial(rng: &mut StdRng) -> Polynomial {
    let len = rng.gen_range(1, 6);
    Polynomial::new((0..len).map(|_| random_complex(rng)).collect())
}

fn assert_close(a: &Polynomial, b: &Polynomial) {
    assert_eq!(a.order(), b.order());
    for (x, y) in a.coefficients().iter().zip(b.coefficients()) {
        assert!(x.sub(*y).module() < TOLERANCE, "{} vs {}", x, y);
    }
}

#[test]
fn multiply_is_commutative_and_associative() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let (p, q, r) = (
            random_polynomial(&mut rng),
            random_polynomial(&mut rng),
            random_polynomial(&mut rng),
        );
        assert_close(&p.multiply(&q), &q.multiply(&p));
        assert_close(&p.multiply(&q).multiply(&r), &p.multiply(&q.multiply(&r)));
        assert_eq!(p.multiply(&q).order(), p.order() + q.order());
    }
}

#[test]
fn derive_drops_one_order() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let p = random_polynomial(&mut rng);
        assert_eq!(p.derive().order(), p.order() - 1);
    }
}

#[test]
fn product_rule_holds() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let (p, q) = (random_polynomial(&mut rng), random_polynomial(&mut rng));
        let z = random_complex(&mut rng);
        let lhs = p.multiply(&q).derive().apply(z);
        let rhs = p
            .derive()
            .apply(z)
            .multiply(q.apply(z))
            .add(p.apply(z).multiply(q.derive().apply(z)));
        assert!(lhs.sub(rhs).module() < 1e-6);
    }
}

#[test]
fn expanded_form_agrees_with_factored_form() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..50 {
        let count = rng.gen_range(2, 8);
        let rooted = RootedPolynomial::new(
            random_complex(&mut rng),
            (0..count).map(|_| random_complex(&mut rng)).collect(),
        );
        let expanded = rooted.to_polynomial();
        assert_eq!(expanded.order(), count as isize);
        for _ in 0..10 {
            let z = random_complex(&mut rng);
            let (a, b) = (rooted.apply(z), expanded.apply(z));
            assert!(
                a.sub(b).module() <= 1e-9 * (1.0 + a.module()),
                "{} vs {} at {}",
                a,
                b,
                z
            );
        }
        for root in rooted.roots() {
            assert!(expanded.apply(*root).module() < 1e-6);
        }
    }
}
