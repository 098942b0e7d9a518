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

use super::{check_orders, check_tile, Transposer};
use crate::error::Result;
use crate::matrix::Matrix;

/// Default block edge of the "semi-aware" kernel, independent of the cache
/// line.
pub const FIXED_TILE: usize = 8;

/// Cache "semi-aware" transpose: same blocking as [`super::Tiled`], but with
/// its own tile size and test-after-increment inner loops.
#[derive(Clone, Copy, Debug)]
pub struct FixedTiled {
    order: usize,
    tile: usize,
}

impl FixedTiled {
    pub fn new(order: usize, tile: usize) -> Result<Self> {
        check_tile(order, tile)?;
        Ok(FixedTiled { order, tile })
    }

    pub fn tile(&self) -> usize {
        self.tile
    }
}

impl Transposer for FixedTiled {
    fn name(&self) -> &str {
        "cache aware2"
    }

    fn transpose(&self, src: &Matrix, dst: &mut Matrix) {
        let order = check_orders(src, dst);
        assert_eq!(order, self.order, "matrix order differs from the tiling");
        let tile = self.tile;
        debug_assert_eq!(order % tile, 0);

        let a = src.as_slice();
        let b = dst.as_mut_slice();

        let mut row = 0;
        while row < order {
            let rlimit = row + tile;
            let mut col = 0;
            while col < order {
                let climit = col + tile;

                // tile >= 1, so every block has at least one element
                let mut i = row;
                loop {
                    let mut j = col;
                    loop {
                        b[j * order + i] = a[i * order + j];
                        j += 1;
                        if j >= climit {
                            break;
                        }
                    }
                    i += 1;
                    if i >= rlimit {
                        break;
                    }
                }
                col += tile;
            }
            row += tile;
        }
    }
}
