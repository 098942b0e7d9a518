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

//! Out of place transposition of a square matrix, `B = A^T`.
//!
//! Every kernel writes each element of the destination exactly once per call
//! and never reads it, so repeated calls leave the same result as one.

mod fixed_tile;
mod naive;
mod oblivious;
mod tiled;

pub use fixed_tile::{FixedTiled, FIXED_TILE};
pub use naive::Naive;
pub use oblivious::{Oblivious, OBLIVIOUS_MIN};
pub use tiled::Tiled;

use crate::config::BenchConfig;
use crate::error::{Result, TransposeError};
use crate::matrix::Matrix;

/// A strategy for writing the transpose of `src` into `dst`.
pub trait Transposer {
    /// Label used in the benchmark report.
    fn name(&self) -> &str;

    fn transpose(&self, src: &Matrix, dst: &mut Matrix);
}

/// The four kernels in report order.
pub fn transposers(config: &BenchConfig) -> Result<Vec<Box<dyn Transposer>>> {
    Ok(vec![
        Box::new(Naive),
        Box::new(Tiled::new(config.order, config.tile)?),
        Box::new(FixedTiled::new(config.order, config.fixed_tile)?),
        Box::new(Oblivious::new(config.min_block)?),
    ])
}

pub(crate) fn check_tile(order: usize, tile: usize) -> Result<()> {
    if order == 0 {
        return Err(TransposeError::ZeroOrder);
    }
    if tile == 0 {
        return Err(TransposeError::ZeroTile);
    }
    if order % tile != 0 {
        return Err(TransposeError::NotDivisible { order, tile });
    }
    Ok(())
}

/// Order shared by source and destination.
fn check_orders(src: &Matrix, dst: &Matrix) -> usize {
    assert_eq!(
        src.order(),
        dst.order(),
        "source and destination orders differ"
    );
    src.order()
}
