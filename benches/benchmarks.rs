use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use curve25519_kit::{ed25519, x25519};

fn keygen_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("keygen");

    g.bench_function("x25519", |b| b.iter(|| x25519::public_key(&[22u8; 32])));

    g.bench_function("ed25519", |b| {
        b.iter(|| ed25519::secret_to_public(&[22u8; 32]))
    });

    g.finish();
}

fn ecdh_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("ecdh");

    g.bench_function("x25519", |b| {
        let sk_a: [u8; 32] = rand::thread_rng().gen();
        let pk_b = x25519::public_key(&rand::thread_rng().gen());

        b.iter(|| x25519::x25519(&sk_a, &pk_b))
    });

    g.finish();
}

fn sign_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("sign");

    g.bench_function("ed25519", |b| {
        let sk: [u8; 32] = rand::thread_rng().gen();
        let message = b"this is a short message";

        b.iter(|| ed25519::sign(&sk, message))
    });

    g.finish();
}

fn verify_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("verify");

    g.bench_function("ed25519", |b| {
        let sk: [u8; 32] = rand::thread_rng().gen();
        let pk = ed25519::secret_to_public(&sk);
        let message = b"this is a short message";
        let sig = ed25519::sign(&sk, message);

        b.iter(|| ed25519::verify(&pk, message, &sig))
    });

    g.finish();
}

criterion_group!(
    benches,
    keygen_benchmarks,
    ecdh_benchmarks,
    sign_benchmarks,
    verify_benchmarks
);
criterion_main!(benches);
