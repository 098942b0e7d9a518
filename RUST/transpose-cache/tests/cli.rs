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

use std::process::{Command, Output};

fn transpose_cache(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_transpose-cache"))
        .args(args)
        .output()
        .expect("failed to launch transpose-cache")
}

#[test]
fn small_run_reports_four_kernels() {
    let out = transpose_cache(&["-n", "64", "-l", "16", "-f", "8", "-t", "3", "-i", "2"]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let mut labels = Vec::new();
    for line in stdout.lines() {
        let (label, times) = line.split_once(": ").unwrap();
        labels.push(label);
        let samples: Vec<u128> = times
            .split_whitespace()
            .map(|t| t.parse().unwrap())
            .collect();
        assert_eq!(samples.len(), 3, "{}", line);
    }
    assert_eq!(
        labels,
        ["naive", "cache aware", "cache aware2", "cache oblivous"]
    );
}

#[test]
fn indivisible_tile_exits_with_error() {
    let out = transpose_cache(&["-n", "10", "-l", "4", "-f", "5"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("not a multiple of tile size 4"), "{}", stderr);
}

#[test]
fn zero_iterations_is_rejected() {
    let out = transpose_cache(&["-n", "16", "-i", "0"]);
    assert!(!out.status.success());
}

#[test]
fn show_prints_source_and_transpose() {
    let out = transpose_cache(&["--show", "-n", "3", "-m", "1"]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        ["1 2 3 ", "4 5 6 ", "7 8 9 ", "", "1 4 7 ", "2 5 8 ", "3 6 9 "]
    );
}
