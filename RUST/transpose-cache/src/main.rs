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

///////////////////////////////////////////////
//
// NAME:    transpose-cache
//
// PURPOSE: This program compares how four out of place transposes of a
//          square row-major matrix interact with the cache hierarchy:
//          a cache ignorant loop, two cache aware tiled loops and a
//          cache oblivious recursive bisection.
//
// USAGE:   With no arguments the reference regimen runs: order 1024,
//          3 trials of 100 iterations per kernel.
//
//          transpose-cache [-n order] [-l tile] [-f fixed tile]
//                          [-m min block] [-t trials] [-i iterations]
//                          [-a alignment] [--show]
//
//          The output is one line per kernel holding the milliseconds
//          taken by each trial. Every kernel's result is checked and the
//          program aborts if a transpose is wrong.
//
///////////////////////////////////////////////

use clap::Parser;
use std::io;
use std::process;

use common::config::{DEFAULT_ITERATIONS, DEFAULT_ORDER, DEFAULT_TRIALS};
use common::transpose::{FIXED_TILE, OBLIVIOUS_MIN};
use common::{BenchConfig, Matrix, Oblivious, Transposer, CACHE_LINE_ELEMS, CACHE_LINE_SIZE};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Matrix order
    #[arg(short = 'n', long, default_value_t = DEFAULT_ORDER)]
    order: usize,
    /// Tile edge of the cache aware kernel, in elements
    #[arg(short = 'l', long, default_value_t = CACHE_LINE_ELEMS)]
    tile: usize,
    /// Tile edge of the "semi-aware" kernel, in elements
    #[arg(short, long, default_value_t = FIXED_TILE)]
    fixed_tile: usize,
    /// Block edge at which the cache oblivious recursion stops
    #[arg(short, long, default_value_t = OBLIVIOUS_MIN)]
    min_block: usize,
    /// Number of timed trials per kernel
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,
    /// Transposes per trial
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u32,
    /// Byte alignment of the matrix buffers
    #[arg(short, long, default_value_t = CACHE_LINE_SIZE)]
    align: usize,
    /// Print the matrix and its cache oblivious transpose instead of timing
    #[arg(long)]
    show: bool,
}

impl Args {
    fn config(&self) -> BenchConfig {
        BenchConfig {
            order: self.order,
            tile: self.tile,
            fixed_tile: self.fixed_tile,
            min_block: self.min_block,
            trials: self.trials,
            iterations: self.iterations,
            align: self.align,
        }
    }
}

fn show(config: &BenchConfig) -> common::Result<()> {
    let mut a = Matrix::new(config.order, config.align)?;
    let mut b = Matrix::new(config.order, config.align)?;
    a.init();
    print!("{}", a);
    println!();
    Oblivious::new(config.min_block)?.transpose(&a, &mut b);
    print!("{}", b);
    common::verify(&b);
    Ok(())
}

fn main() {
    let args = Args::parse();
    let config = args.config();

    common::log!("Parallel Research Kernels");
    common::log!("Rust cache aware and cache oblivious transpose: B = A^T");

    common::log!("Matrix order          = {}", config.order);
    common::log!("Tile size             = {}", config.tile);
    common::log!("Fixed tile size       = {}", config.fixed_tile);
    common::log!("Oblivious min block   = {}", config.min_block);
    common::log!("Number of trials      = {}", config.trials);
    common::log!("Number of iterations  = {}", config.iterations);
    common::log!("Alignment (bytes)     = {}", config.align);

    let status = if args.show {
        show(&config)
    } else {
        common::run(&config, &mut io::stdout().lock()).map(|_| ())
    };

    if let Err(e) = status {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_is_reference_regimen() {
        let args = Args::try_parse_from(["transpose-cache"]).unwrap();
        assert!(!args.show);
        assert_eq!(args.config(), BenchConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "transpose-cache",
            "-n",
            "64",
            "--tile",
            "4",
            "--fixed-tile",
            "16",
            "-m",
            "2",
            "-t",
            "1",
            "-i",
            "10",
            "--align",
            "4096",
            "--show",
        ])
        .unwrap();
        let config = args.config();
        assert!(args.show);
        assert_eq!(config.order, 64);
        assert_eq!(config.tile, 4);
        assert_eq!(config.fixed_tile, 16);
        assert_eq!(config.min_block, 2);
        assert_eq!(config.trials, 1);
        assert_eq!(config.iterations, 10);
        assert_eq!(config.align, 4096);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_show_small_matrix() {
        let config = BenchConfig {
            order: 4,
            min_block: 2,
            ..BenchConfig::default()
        };
        assert!(show(&config).is_ok());
    }
}
