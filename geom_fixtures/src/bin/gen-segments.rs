// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use r3bl_geom_fixtures::gen_segments::{CLIArg, launcher};
use std::process;

fn main() {
    if let Err(e) = launcher::run(CLIArg::parse()) {
        eprintln!("Error: {e:?}");
        process::exit(1);
    }
}
