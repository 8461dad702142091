use criterion::{criterion_group, criterion_main, Criterion};
use rand_core::OsRng;
use vess::threshold::{self, Parameters, PartialDecryption};
use vess::{AdjudicatorKeypair, Keypair, Vess};

fn bench_protocol(c: &mut Criterion) {
    let mut group = c.benchmark_group("vess");

    let mut rng = OsRng;
    let vess = Vess::new().unwrap();
    let signer = Keypair::random(&mut rng).unwrap();
    let adjudicator = AdjudicatorKeypair::random(&mut rng).unwrap();
    let msg = b"benchmark message";
    let sig = vess.sign(msg, signer.privkey());
    let ves = vess.encrypt(&mut rng, &sig, &adjudicator.pubkey_g2()).unwrap();

    group.bench_function("sign", |b| b.iter(|| vess.sign(msg, signer.privkey())));

    group.bench_function("encrypt", |b| {
        b.iter(|| vess.encrypt(&mut rng, &sig, &adjudicator.pubkey_g2()).unwrap())
    });

    group.bench_function("verify", |b| {
        b.iter(|| vess.verify(msg, &signer.pubkey(), &adjudicator.pubkey_g1(), &ves))
    });

    group.bench_function("adjudicate", |b| {
        b.iter(|| vess.adjudicate(&ves, adjudicator.privkey()))
    });

    let parameters = Parameters::new(7, 10).unwrap();
    let shares = threshold::split(&mut rng, adjudicator.privkey(), &parameters).unwrap();
    let partials = shares
        .iter()
        .take(parameters.threshold())
        .map(|share| share.partial_decrypt(&ves.mu))
        .collect::<Vec<PartialDecryption>>();

    group.bench_function("threshold-adjudicate-7-of-10", |b| {
        b.iter(|| threshold::adjudicate(&ves, &partials, &parameters).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_protocol);
criterion_main!(benches);
