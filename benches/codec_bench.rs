use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use deaddrop::board::Board;
use deaddrop::codec::{decode, flip_target, Fingerprint};
use deaddrop::protocol::notation::{encode_notation, parse_notation};
use deaddrop::verify::verify_board;

fn bench_decode(c: &mut Criterion) {
    let board = Board::random(&mut SmallRng::seed_from_u64(42));
    c.bench_function("decode_board", |b| b.iter(|| decode(black_box(&board))));
}

fn bench_flip_target(c: &mut Criterion) {
    let board = Board::random(&mut SmallRng::seed_from_u64(42));
    let secret = Fingerprint::new(42).unwrap();
    c.bench_function("flip_target", |b| {
        b.iter(|| flip_target(black_box(&board), black_box(secret)))
    });
}

fn bench_verify_board(c: &mut Criterion) {
    let board = Board::random(&mut SmallRng::seed_from_u64(42));
    c.bench_function("verify_64_secrets", |b| {
        b.iter(|| verify_board(black_box(&board)))
    });
}

fn bench_parse_notation(c: &mut Criterion) {
    let board = Board::random(&mut SmallRng::seed_from_u64(42));
    let notation = encode_notation(&board);
    c.bench_function("parse_notation", |b| {
        b.iter(|| parse_notation(black_box(&notation)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_decode,
    bench_flip_target,
    bench_verify_board,
    bench_parse_notation
);
criterion_main!(benches);
