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

/// Cache aware transpose over `tile x tile` blocks, where `tile` is the
/// number of elements in a cache line. Both the rows read from `A` and the
/// rows written to `B` stay within `tile` cache lines per block.
#[derive(Clone, Copy, Debug)]
pub struct Tiled {
    order: usize,
    tile: usize,
}

impl Tiled {
    /// Fails unless `tile` divides `order`.
    pub fn new(order: usize, tile: usize) -> Result<Self> {
        check_tile(order, tile)?;
        Ok(Tiled { order, tile })
    }

    pub fn tile(&self) -> usize {
        self.tile
    }
}

impl Transposer for Tiled {
    fn name(&self) -> &str {
        "cache aware"
    }

    fn transpose(&self, src: &Matrix, dst: &mut Matrix) {
        let order = check_orders(src, dst);
        assert_eq!(order, self.order, "matrix order differs from the tiling");
        let tile = self.tile;
        debug_assert_eq!(order % tile, 0);

        let a = src.as_slice();
        let b = dst.as_mut_slice();

        for row in (0..order).step_by(tile) {
            for col in (0..order).step_by(tile) {
                // do transpose on this submatrix
                let rlimit = row + tile;
                let climit = col + tile;

                for i in row..rlimit {
                    for j in col..climit {
                        b[j * order + i] = a[i * order + j];
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransposeError;
    use crate::transpose::Naive;

    fn pair(order: usize) -> (Matrix, Matrix) {
        let mut a = Matrix::new(order, 64).unwrap();
        a.init();
        (a, Matrix::new(order, 64).unwrap())
    }

    #[test]
    fn test_tile_2_matches_naive() {
        let (a, mut b) = pair(4);
        let mut reference = Matrix::new(4, 64).unwrap();
        Naive.transpose(&a, &mut reference);
        Tiled::new(4, 2).unwrap().transpose(&a, &mut b);
        assert_eq!(b.as_slice(), reference.as_slice());
    }

    #[test]
    fn test_single_tile_covers_matrix() {
        let (a, mut b) = pair(8);
        Tiled::new(8, 8).unwrap().transpose(&a, &mut b);
        assert_eq!(b.row(1), &[2, 10, 18, 26, 34, 42, 50, 58]);
    }

    #[test]
    fn test_rejects_indivisible_order() {
        assert!(matches!(
            Tiled::new(12, 8),
            Err(TransposeError::NotDivisible { order: 12, tile: 8 })
        ));
        assert!(matches!(Tiled::new(12, 0), Err(TransposeError::ZeroTile)));
    }

    #[test]
    #[should_panic(expected = "differs from the tiling")]
    fn test_wrong_order_panics() {
        let (a, mut b) = pair(16);
        Tiled::new(8, 4).unwrap().transpose(&a, &mut b);
    }
}
