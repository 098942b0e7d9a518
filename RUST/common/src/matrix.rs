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

use std::alloc::{self, Layout};
use std::fmt;
use std::mem;
use std::ptr::NonNull;
use std::slice;

use crate::error::{Result, TransposeError};

/// Square `order x order` matrix of `i32`, row-major, in one aligned block.
///
/// The alignment decides which cache line the first row begins on; rows
/// after it are packed back to back.
pub struct Matrix {
    ptr: NonNull<i32>,
    order: usize,
    layout: Layout,
}

impl Matrix {
    /// Allocates a zeroed matrix whose storage starts on an `align` byte
    /// boundary. Alignments below that of `i32` are raised to it.
    pub fn new(order: usize, align: usize) -> Result<Self> {
        if order == 0 {
            return Err(TransposeError::ZeroOrder);
        }
        if !align.is_power_of_two() {
            return Err(TransposeError::BadAlignment(align));
        }
        // The initializer writes values up to order^2.
        let nelems = order
            .checked_mul(order)
            .filter(|&n| n <= i32::MAX as usize)
            .ok_or(TransposeError::OrderTooLarge(order))?;
        let bytes = nelems
            .checked_mul(mem::size_of::<i32>())
            .ok_or(TransposeError::OrderTooLarge(order))?;
        let layout = Layout::from_size_align(bytes, align.max(mem::align_of::<i32>()))?;

        // SAFETY: `layout` has a non-zero size because `order > 0`.
        let raw = unsafe { alloc::alloc_zeroed(layout) } as *mut i32;
        let ptr = NonNull::new(raw).ok_or(TransposeError::OutOfMemory(bytes))?;

        Ok(Matrix { ptr, order, layout })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn alignment(&self) -> usize {
        self.layout.align()
    }

    pub fn as_slice(&self) -> &[i32] {
        // SAFETY: `ptr` points to `order * order` initialized (zeroed) i32s
        // owned by `self` for its whole lifetime.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.order * self.order) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        // SAFETY: as in `as_slice`, and `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.order * self.order) }
    }

    pub fn get(&self, i: usize, j: usize) -> i32 {
        self.as_slice()[i * self.order + j]
    }

    pub fn row(&self, i: usize) -> &[i32] {
        let order = self.order;
        &self.as_slice()[i * order..(i + 1) * order]
    }

    /// Writes `order * i + j + 1` into element `(i, j)`.
    pub fn init(&mut self) {
        let order = self.order;
        for (i, row) in self.as_mut_slice().chunks_exact_mut(order).enumerate() {
            for (j, x) in row.iter_mut().enumerate() {
                *x = (order * i + j + 1) as i32;
            }
        }
    }
}

impl Drop for Matrix {
    fn drop(&mut self) {
        // SAFETY: `ptr` was returned by `alloc_zeroed` with this same layout.
        unsafe { alloc::dealloc(self.ptr.as_ptr() as *mut u8, self.layout) }
    }
}

/// One row per line, elements separated by spaces. Not cache efficient.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.order {
            for x in self.row(i) {
                write!(f, "{} ", x)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("order", &self.order)
            .field("alignment", &self.alignment())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let m = Matrix::new(8, 64).unwrap();
        assert_eq!(m.order(), 8);
        assert_eq!(m.as_slice().len(), 64);
        assert!(m.as_slice().iter().all(|&x| x == 0));
    }

    #[test]
    fn test_alignment_is_honoured() {
        for align in [4usize, 64, 4096] {
            let m = Matrix::new(16, align).unwrap();
            assert_eq!(m.alignment(), align);
            assert_eq!(m.as_slice().as_ptr() as usize % align, 0);
        }
    }

    #[test]
    fn test_small_alignment_is_raised() {
        let m = Matrix::new(4, 1).unwrap();
        assert_eq!(m.alignment(), mem::align_of::<i32>());
    }

    #[test]
    fn test_init_pattern() {
        let mut m = Matrix::new(4, 64).unwrap();
        m.init();
        assert_eq!(m.row(0), &[1, 2, 3, 4]);
        assert_eq!(m.row(1), &[5, 6, 7, 8]);
        assert_eq!(m.row(3), &[13, 14, 15, 16]);
        assert_eq!(m.get(2, 1), 10);
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(matches!(Matrix::new(0, 64), Err(TransposeError::ZeroOrder)));
        assert!(matches!(
            Matrix::new(4, 48),
            Err(TransposeError::BadAlignment(48))
        ));
        assert!(matches!(
            Matrix::new(46341, 64),
            Err(TransposeError::OrderTooLarge(46341))
        ));
    }

    #[test]
    fn test_display() {
        let mut m = Matrix::new(2, 64).unwrap();
        m.init();
        assert_eq!(m.to_string(), "1 2 \n3 4 \n");
    }
}
