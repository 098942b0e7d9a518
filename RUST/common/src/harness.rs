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

use std::fmt;
use std::io::Write;
use std::time::{Duration, Instant};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::transpose::{transposers, Transposer};
use crate::verify::verify;

/// Times `iterations` back to back calls of `f` on the same buffers.
pub fn trial(f: &dyn Transposer, iterations: u32, src: &Matrix, dst: &mut Matrix) -> Duration {
    let timer = Instant::now();
    for _ in 0..iterations {
        f.transpose(src, dst);
    }
    timer.elapsed()
}

/// Named set of trial timings for one kernel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Experiment {
    pub name: String,
    pub samples: Vec<Duration>,
}

/// `<name>: <ms> <ms> ... `, one field per trial.
impl fmt::Display for Experiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        for sample in &self.samples {
            write!(f, "{} ", sample.as_millis())?;
        }
        Ok(())
    }
}

/// Runs `trials` independent trials. `dst` is not reset between them.
pub fn experiment(
    f: &dyn Transposer,
    trials: usize,
    iterations: u32,
    src: &Matrix,
    dst: &mut Matrix,
) -> Experiment {
    let samples = (0..trials)
        .map(|_| trial(f, iterations, src, dst))
        .collect();
    Experiment {
        name: f.name().to_string(),
        samples,
    }
}

/// Benchmarks every kernel on one source/destination pair, writing a report
/// line per kernel to `out`. Panics if a kernel produces a wrong transpose.
pub fn run<W: Write>(config: &BenchConfig, out: &mut W) -> Result<Vec<Experiment>> {
    config.validate()?;
    let kernels = transposers(config)?;

    let mut src = Matrix::new(config.order, config.align)?;
    let mut dst = Matrix::new(config.order, config.align)?;
    src.init();
    crate::log!("Initialization done, running kernels");

    let mut results = Vec::with_capacity(kernels.len());
    for kernel in &kernels {
        // verification must not see a previous kernel's output
        dst.init();
        let result = experiment(
            kernel.as_ref(),
            config.trials,
            config.iterations,
            &src,
            &mut dst,
        );
        writeln!(out, "{}", result)?;
        verify(&dst);
        crate::log!("{}: Solution validates", kernel.name());
        results.push(result);
    }
    Ok(results)
}
