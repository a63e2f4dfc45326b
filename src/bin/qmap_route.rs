// Copyright 2026 the qmap-router authors
//
// Licensed under the Apache License, Version 2.0. You may obtain a copy
// of this license in the LICENSE.txt file in the root directory of this
// source tree or at http://www.apache.org/licenses/LICENSE-2.0.

//! Demo CLI driving [`qmap_router::Router`] end to end: read a tiny inline
//! circuit grammar, route it against a built-in device fixture, and print
//! a routing summary. This is demo plumbing standing in for a real
//! concrete-syntax circuit parser, which stays out of scope for this crate.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use qmap_router::{CouplingMap, Ir, Operation, Router, RouterConfig};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Device {
    Linear3,
    Grid2x2,
    HeavyHex,
}

/// Route a small logical circuit against a device topology.
#[derive(Parser, Debug)]
#[command(name = "qmap-route", version, about)]
struct Args {
    /// Path to a circuit file; one instruction per line, e.g. `H 0` or
    /// `CNOT 0,2`. Lines starting with `#` and blank lines are ignored.
    circuit: PathBuf,

    #[arg(long, value_enum, default_value = "linear3")]
    device: Device,
}

fn parse_circuit(text: &str) -> Result<Ir, String> {
    let mut ir = Ir::new();
    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.splitn(2, char::is_whitespace);
        let head = parts.next().unwrap_or_default();
        let rest = parts.next().unwrap_or_default().trim();
        if head.eq_ignore_ascii_case("CNOT") {
            let mut ids = rest.split(',').map(str::trim);
            let ctl: u32 = ids
                .next()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| format!("line {}: expected `CNOT ctl,tgt`", lineno + 1))?;
            let tgt: u32 = ids
                .next()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| format!("line {}: expected `CNOT ctl,tgt`", lineno + 1))?;
            ir.push(Operation::TryTwoQubit {
                name: "CNOT".to_string(),
                ctl: ctl.into(),
                tgt: tgt.into(),
            });
        } else {
            let q: u32 = rest
                .parse()
                .map_err(|_| format!("line {}: expected `{head} <qubit>`", lineno + 1))?;
            ir.push(Operation::SingleGate {
                name: head.to_string(),
                q: q.into(),
            });
        }
    }
    Ok(ir)
}

fn device_topology(device: Device) -> CouplingMap {
    match device {
        Device::Linear3 => CouplingMap::linear(3),
        Device::Grid2x2 => CouplingMap::grid2x2(),
        Device::HeavyHex => CouplingMap::heavy_hex_patch(),
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let text = match fs::read_to_string(&args.circuit) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error reading {:?}: {err}", args.circuit);
            std::process::exit(1);
        }
    };
    let ir = match parse_circuit(&text) {
        Ok(ir) => ir,
        Err(err) => {
            eprintln!("error parsing circuit: {err}");
            std::process::exit(1);
        }
    };

    let topology = device_topology(args.device);
    let router = Router::new(RouterConfig::default());
    let routed = match router.route(&ir, &topology) {
        Ok(routed) => routed,
        Err(err) => {
            eprintln!("routing failed: {err}");
            std::process::exit(1);
        }
    };

    let swap_count = routed
        .ir
        .iter()
        .filter(|op| matches!(op, Operation::InsertSwap { .. }))
        .count();
    println!("{}", routed.ir);
    println!("---");
    println!("original operations: {}", ir.len());
    println!("routed operations:   {}", routed.ir.len());
    println!("swaps inserted:      {swap_count}");
    for warning in &routed.warnings {
        eprintln!("warning: {}", warning.error);
    }
}
