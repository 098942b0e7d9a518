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

//! Shared pieces of the cache transpose kernels: an aligned square matrix,
//! the four out-of-place transposers, and the timing harness that runs them
//! under an identical trial/iteration/verification regimen.

pub mod config;
pub mod error;
pub mod harness;
pub mod log_utils;
pub mod matrix;
pub mod transpose;
pub mod verify;

#[cfg(feature = "log_tracing")]
#[doc(hidden)]
pub use tracing;

pub use config::BenchConfig;
pub use error::{Result, TransposeError};
pub use harness::{experiment, run, trial, Experiment};
pub use matrix::Matrix;
pub use transpose::{transposers, FixedTiled, Naive, Oblivious, Tiled, Transposer};
pub use verify::{expected, first_mismatch, verify};

/// Cache line size in bytes.
/// cat /sys/devices/system/cpu/cpu0/cache/index0/coherency_line_size
pub const CACHE_LINE_SIZE: usize = 64;

/// Number of matrix elements that fit in one cache line.
pub const CACHE_LINE_ELEMS: usize = CACHE_LINE_SIZE / std::mem::size_of::<i32>();
