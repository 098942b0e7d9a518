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

use super::{check_orders, Transposer};
use crate::error::{Result, TransposeError};
use crate::matrix::Matrix;

/// Edge, in elements, at or below which the cache oblivious recursion stops
/// splitting.
pub const OBLIVIOUS_MIN: usize = 4;

/// Rectangle of the source matrix: `rows x cols` elements starting at
/// `(row, col)`. Its image in the destination starts at `(col, row)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Region {
    pub row: usize,
    pub col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Region {
    pub fn square(order: usize) -> Self {
        Region {
            row: 0,
            col: 0,
            rows: order,
            cols: order,
        }
    }

    /// Halves the longer side; on a tie the columns are split. The second
    /// half takes the odd element.
    pub fn split(self) -> (Region, Region) {
        if self.cols >= self.rows {
            let half = self.cols / 2;
            (
                Region { cols: half, ..self },
                Region {
                    col: self.col + half,
                    cols: self.cols - half,
                    ..self
                },
            )
        } else {
            let half = self.rows / 2;
            (
                Region { rows: half, ..self },
                Region {
                    row: self.row + half,
                    rows: self.rows - half,
                    ..self
                },
            )
        }
    }
}

/// Calls `leaf` on every block of the recursive bisection of `region`.
/// The leaves partition `region`.
pub(crate) fn for_each_leaf<F: FnMut(Region)>(region: Region, min_block: usize, leaf: &mut F) {
    if region.rows > min_block || region.cols > min_block {
        let (first, second) = region.split();
        for_each_leaf(first, min_block, leaf);
        for_each_leaf(second, min_block, leaf);
    } else {
        leaf(region);
    }
}

/// Cache oblivious transpose. Recursively bisects the matrix until blocks
/// are at most `min_block` on a side, so some level of the recursion fits
/// each cache level without knowing its size.
#[derive(Clone, Copy, Debug)]
pub struct Oblivious {
    min_block: usize,
}

impl Oblivious {
    pub fn new(min_block: usize) -> Result<Self> {
        if min_block == 0 {
            return Err(TransposeError::ZeroMinBlock);
        }
        Ok(Oblivious { min_block })
    }

    pub fn min_block(&self) -> usize {
        self.min_block
    }
}

impl Default for Oblivious {
    fn default() -> Self {
        Oblivious {
            min_block: OBLIVIOUS_MIN,
        }
    }
}

impl Transposer for Oblivious {
    fn name(&self) -> &str {
        "cache oblivous"
    }

    fn transpose(&self, src: &Matrix, dst: &mut Matrix) {
        let order = check_orders(src, dst);
        let a = src.as_slice();
        let b = dst.as_mut_slice();

        for_each_leaf(Region::square(order), self.min_block, &mut |r: Region| {
            for i in r.row..r.row + r.rows {
                for j in r.col..r.col + r.cols {
                    b[j * order + i] = a[i * order + j];
                }
            }
        });
    }
}
