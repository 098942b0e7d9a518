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

use crate::error::{Result, TransposeError};
use crate::transpose::{check_tile, FIXED_TILE, OBLIVIOUS_MIN};
use crate::{CACHE_LINE_ELEMS, CACHE_LINE_SIZE};

pub const DEFAULT_ORDER: usize = 1024;
pub const DEFAULT_TRIALS: usize = 3;
pub const DEFAULT_ITERATIONS: u32 = 100;

/// Everything a benchmark run is parameterized by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    /// Matrix order N.
    pub order: usize,
    /// Block edge of the cache aware kernel, normally one cache line.
    pub tile: usize,
    /// Block edge of the "semi-aware" kernel.
    pub fixed_tile: usize,
    /// Leaf size of the cache oblivious recursion.
    pub min_block: usize,
    pub trials: usize,
    pub iterations: u32,
    /// Byte alignment of both matrix buffers.
    pub align: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            order: DEFAULT_ORDER,
            tile: CACHE_LINE_ELEMS,
            fixed_tile: FIXED_TILE,
            min_block: OBLIVIOUS_MIN,
            trials: DEFAULT_TRIALS,
            iterations: DEFAULT_ITERATIONS,
            align: CACHE_LINE_SIZE,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.order == 0 {
            return Err(TransposeError::ZeroOrder);
        }
        match self.order.checked_mul(self.order) {
            Some(n) if n <= i32::MAX as usize => {}
            _ => return Err(TransposeError::OrderTooLarge(self.order)),
        }
        check_tile(self.order, self.tile)?;
        check_tile(self.order, self.fixed_tile)?;
        if self.min_block == 0 {
            return Err(TransposeError::ZeroMinBlock);
        }
        if self.trials == 0 {
            return Err(TransposeError::ZeroTrials);
        }
        if self.iterations == 0 {
            return Err(TransposeError::ZeroIterations);
        }
        if !self.align.is_power_of_two() {
            return Err(TransposeError::BadAlignment(self.align));
        }
        Ok(())
    }
}
