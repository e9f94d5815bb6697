// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replay a scripted touch session against a viewer.
//!
//! Loads an optional JSON `ViewerConfig`, feeds a drag, a pinch and a double
//! tap through the touch classifier, and prints the draw rect after every
//! frame that changed it.
//!
//! Run:
//! - `cargo run -p loupe_demos --example touch_replay`
//! - `cargo run -p loupe_demos --example touch_replay -- viewer.json`
//! - `RUST_LOG=loupe_view=trace cargo run -p loupe_demos --example touch_replay`

use std::error::Error;

use kurbo::{Point, Vec2};
use loupe::view::PixelSize;
use loupe::{Viewer, ViewerConfig, ViewerEvent};
use loupe_demos::{TraceBuilder, describe};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            let config = ViewerConfig::from_json_str(&json)?;
            log::info!("loaded config from {path}");
            config
        }
        None => ViewerConfig::default(),
    };
    let mut viewer = Viewer::new(config);
    println!("config: {}", viewer.config().to_json_string()?);
    viewer.apply(ViewerEvent::Resize(PixelSize::new(800, 480)));
    viewer.apply(ViewerEvent::TextureLoaded(PixelSize::new(400, 300)));
    if let Some(frame) = viewer.shared().frame() {
        println!("fitted: {}", describe(&frame));
    }

    let center = Point::new(400.0, 240.0);
    let trace = TraceBuilder::default()
        // At fit both axes are centered, so this drag does nothing.
        .drag(center, Vec2::new(-60.0, 0.0), 4)
        .idle(400)
        .pinch(center, 200.0, 420.0, 12)
        .idle(400)
        .drag(center, Vec2::new(-90.0, 40.0), 6)
        .idle(400)
        .double_tap(center)
        .build();

    for sample in &trace {
        if viewer.handle_touch(sample.phase, &sample.pointers, sample.time_ms)
            && let Some(frame) = viewer.shared().frame()
        {
            println!("t={:>5}ms {:?}: {}", sample.time_ms, sample.phase, describe(&frame));
        }
    }

    if let Some(info) = viewer.shared().debug_info() {
        println!(
            "final: scale {:.3} (fit {:.3}, max {:.3})",
            info.current_scale, info.fit_scale, info.max_scale
        );
    }
    Ok(())
}
