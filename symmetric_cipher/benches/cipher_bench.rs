use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::RngCore;
use std::hint::black_box;
use tokio::runtime::Runtime;

use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_traits::SymmetricCipher;
use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use symmetric_cipher::crypto::deal::DEAL;
use symmetric_cipher::crypto::des::DES;

fn bench_block_ciphers(c: &mut Criterion) {
    let des = DES::new(&[0x13, 0x34, 0x57, 0x79, 0x9B, 0xBC, 0xDF, 0xF1]).unwrap();
    let deal = DEAL::new(&[0x42; 32]).unwrap();

    let mut group = c.benchmark_group("block");
    group.bench_function("DES encrypt", |b| {
        b.iter(|| des.encrypt_block(black_box(&[0u8; 8])).unwrap())
    });
    group.bench_function("DEAL-256 encrypt", |b| {
        b.iter(|| deal.encrypt_block(black_box(&[0u8; 16])).unwrap())
    });
    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let mut data = vec![0u8; 256 * 1024];
    rand::rng().fill_bytes(&mut data);

    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("DES modes 256KiB");
    group.sample_size(10);
    group.throughput(Throughput::Bytes(data.len() as u64));

    for mode in [CipherMode::ECB, CipherMode::CBC, CipherMode::CTR] {
        let des = DES::new(&[0x0E, 0x32, 0x92, 0x32, 0xEA, 0x6D, 0x0D, 0x73]).unwrap();
        let ctx = CipherContext::new(Box::new(des), mode, PaddingMode::PKCS7, None).unwrap();

        group.bench_with_input(BenchmarkId::new("encrypt", mode), &data, |b, data| {
            b.to_async(&rt).iter(|| {
                let task = ctx.encrypt_async(data.clone()).unwrap();
                async move { task.await.unwrap() }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_block_ciphers, bench_modes);
criterion_main!(benches);
