//! Benchmarks for block encode/decode.
//!
//! Measures single-block throughput for every block shape, plus a chunked
//! pass over a 4 KiB message the way a Base32 layer drives the codec.

use base32_quintets::{decode_block, encode_block, encoded_len, Block, BlockShape};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Source bytes for every benchmarked block.
const BENCH_BYTES: [u8; 5] = [0x61, 0x62, 0x63, 0x64, 0x65];

/// Message length for the chunked benchmarks.
const MESSAGE_LEN: usize = 4096;

fn shape_label(shape: BlockShape) -> String {
    format!("{}_bytes", shape.byte_len())
}

/// Benchmarks `encode_block()` for each shape.
fn bench_encode_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_block");
    for shape in BlockShape::ALL {
        let block = Block::from_slice(&BENCH_BYTES[..shape.byte_len()]).unwrap();
        group.throughput(Throughput::Bytes(shape.byte_len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(shape_label(shape)),
            &block,
            |b, block| {
                b.iter(|| encode_block(black_box(block)));
            },
        );
    }
    group.finish();
}

/// Benchmarks `decode_block()` for each shape.
fn bench_decode_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_block");
    for shape in BlockShape::ALL {
        let block = Block::from_slice(&BENCH_BYTES[..shape.byte_len()]).unwrap();
        let quintets = encode_block(&block);
        group.throughput(Throughput::Bytes(shape.byte_len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(shape_label(shape)),
            &quintets,
            |b, quintets| {
                b.iter(|| decode_block(black_box(quintets.as_slice())).unwrap());
            },
        );
    }
    group.finish();
}

/// Benchmarks a full chunked encode and decode of a 4 KiB message.
fn bench_message(c: &mut Criterion) {
    let message: Vec<u8> = (0..MESSAGE_LEN).map(|i| (i * 31 % 251) as u8).collect();
    let mut encoded: Vec<u8> = Vec::with_capacity(encoded_len(message.len()).unwrap());
    for chunk in message.chunks(5) {
        let block = Block::from_slice(chunk).unwrap();
        encoded.extend_from_slice(&encode_block(&block));
    }

    let mut group = c.benchmark_group("message_4k");
    group.throughput(Throughput::Bytes(MESSAGE_LEN as u64));

    group.bench_function("encode", |b| {
        b.iter(|| {
            let mut out: Vec<u8> = Vec::with_capacity(encoded_len(MESSAGE_LEN).unwrap());
            for chunk in black_box(&message).chunks(5) {
                let block = Block::from_slice(chunk).unwrap();
                out.extend_from_slice(&encode_block(&block));
            }
            out
        });
    });

    group.bench_function("decode", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(MESSAGE_LEN);
            for chunk in black_box(&encoded).chunks(8) {
                decode_block(chunk).unwrap().extend_into(&mut out);
            }
            out
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_encode_block,
    bench_decode_block,
    bench_message
);
criterion_main!(benches);
