//
// Copyright (c) 2013, Intel Corporation
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions
// are met:
//
// * Redistributions of source code must retain the above copyright
//       notice, this list of conditions and the following disclaimer.
// * Redistributions in binary form must reproduce the above
//       copyright notice, this list of conditions and the following
//       disclaimer in the documentation and/or other materials provided
//       with the distribution.
// * Neither the name of Intel Corporation nor the names of its
//       contributors may be used to endorse or promote products
//       derived from this software without specific prior written
//       permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS
// "AS IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT
// LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS
// FOR A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE
// COPYRIGHT OWNER OR CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT,
// INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING,
// BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES;
// LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT
// LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN
// ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.

use criterion::{criterion_group, criterion_main, BenchmarkGroup, Criterion, Throughput};

use common::transpose::FIXED_TILE;
use common::{
    FixedTiled, Matrix, Naive, Oblivious, Tiled, Transposer, CACHE_LINE_ELEMS, CACHE_LINE_SIZE,
};

fn transpose_benchmark(c: &mut Criterion) {
    const ORDERS: [usize; 4] = [64, 256, 1024, 2048];

    let inner = |g: &mut BenchmarkGroup<_>, order: usize| {
        let mut a = Matrix::new(order, CACHE_LINE_SIZE).unwrap();
        let mut b = Matrix::new(order, CACHE_LINE_SIZE).unwrap();
        a.init();

        let kernels: Vec<Box<dyn Transposer>> = vec![
            Box::new(Naive),
            Box::new(Tiled::new(order, CACHE_LINE_ELEMS).unwrap()),
            Box::new(FixedTiled::new(order, FIXED_TILE).unwrap()),
            Box::new(Oblivious::default()),
        ];

        g.throughput(Throughput::Bytes(
            (2 * order * order * std::mem::size_of::<i32>()) as u64,
        ));
        for t in &kernels {
            let name = format!("{}/{}", t.name(), order);
            g.bench_function(&name, |bench| bench.iter(|| t.transpose(&a, &mut b)));
        }
    };

    let mut g = c.benchmark_group("transpose");
    for order in ORDERS {
        if order >= 1024 {
            g.sample_size(10);
        }
        inner(&mut g, order);
    }
    g.finish();
}

fn tile_size_benchmark(c: &mut Criterion) {
    let order = 1024;
    let mut a = Matrix::new(order, CACHE_LINE_SIZE).unwrap();
    let mut b = Matrix::new(order, CACHE_LINE_SIZE).unwrap();
    a.init();

    let mut g = c.benchmark_group("fixed_tile");
    g.sample_size(10);
    for tile in [2, 4, 8, 16, 32, 64, 128] {
        let t = FixedTiled::new(order, tile).unwrap();
        g.bench_function(format!("{}", tile), |bench| {
            bench.iter(|| t.transpose(&a, &mut b))
        });
    }
    g.finish();
}

criterion_group!(benches, transpose_benchmark, tile_size_benchmark);
criterion_main!(benches);
