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

use crate::matrix::Matrix;

/// Value element `(i, j)` holds once the initializer's pattern has been
/// transposed.
pub fn expected(order: usize, i: usize, j: usize) -> i32 {
    (j * order + i + 1) as i32
}

/// First element, in row-major order, that differs from the transposed
/// initializer pattern.
pub fn first_mismatch(m: &Matrix) -> Option<(usize, usize)> {
    let order = m.order();
    for (i, row) in m.as_slice().chunks_exact(order).enumerate() {
        for (j, &x) in row.iter().enumerate() {
            if x != expected(order, i, j) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Panics on the first element that is not the transpose of the initialized
/// source. The output of an out of place transpose does not depend on how
/// many times it ran, so one check after all iterations is enough.
pub fn verify(m: &Matrix) {
    if let Some((i, j)) = first_mismatch(m) {
        panic!(
            "ERROR: transpose mismatch at ({}, {}): expected {}, found {}",
            i,
            j,
            expected(m.order(), i, j),
            m.get(i, j)
        );
    }
}
