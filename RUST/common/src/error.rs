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

use std::alloc::LayoutError;
use std::io;

/// Errors raised while configuring a benchmark run.
///
/// A transposer that produces wrong output is not an error: the verifier
/// panics instead.
#[derive(Debug, thiserror::Error)]
pub enum TransposeError {
    #[error("matrix order must be positive")]
    ZeroOrder,

    #[error("matrix order {0} overflows the i32 initializer pattern")]
    OrderTooLarge(usize),

    #[error("tile size must be positive")]
    ZeroTile,

    /// The tiled kernels require the order to be a multiple of their tile.
    #[error("matrix order {order} is not a multiple of tile size {tile}")]
    NotDivisible { order: usize, tile: usize },

    #[error("cache oblivious minimum block must be positive")]
    ZeroMinBlock,

    #[error("number of trials must be >= 1")]
    ZeroTrials,

    #[error("number of iterations must be >= 1")]
    ZeroIterations,

    #[error("alignment {0} is not a power of two")]
    BadAlignment(usize),

    #[error("cannot allocate {0} bytes for matrix")]
    OutOfMemory(usize),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("cannot write report: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias for `Result<T, TransposeError>`.
pub type Result<T> = std::result::Result<T, TransposeError>;
