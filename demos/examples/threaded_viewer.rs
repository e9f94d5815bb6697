// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input and render on separate threads.
//!
//! The main thread plays the input role while a second thread samples the
//! shared viewport at a fixed rate, the way a GL render loop would, and
//! uploads (here: prints) the quad for each frame.
//!
//! Run:
//! - `cargo run -p loupe_demos --example threaded_viewer`

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use kurbo::{Point, Vec2};
use loupe::quad::Quad;
use loupe::view::PixelSize;
use loupe::{Viewer, ViewerEvent};
use loupe_demos::TraceBuilder;

fn main() {
    env_logger::init();

    let mut viewer = Viewer::default();
    viewer.apply(ViewerEvent::Resize(PixelSize::new(1280, 720)));
    viewer.apply(ViewerEvent::TextureLoaded(PixelSize::new(3000, 2000)));

    let running = Arc::new(AtomicBool::new(true));
    let render = {
        let shared = viewer.shared().clone();
        let running = Arc::clone(&running);
        thread::spawn(move || {
            let mut frames = 0_u32;
            while running.load(Ordering::Acquire) {
                if let Some(frame) = shared.frame() {
                    let vertices = Quad::from_frame(&frame).interleaved();
                    if frames % 10 == 0 {
                        println!(
                            "frame {frames:>3}: {} first vertex {:?}",
                            frame.draw_rect,
                            &vertices[..5]
                        );
                    }
                    frames += 1;
                }
                thread::sleep(Duration::from_millis(16));
            }
            frames
        })
    };

    let center = Point::new(640.0, 360.0);
    let trace = TraceBuilder::default()
        .pinch(center, 150.0, 600.0, 30)
        .idle(200)
        .drag(center, Vec2::new(200.0, -120.0), 20)
        .idle(200)
        .pinch(center, 600.0, 150.0, 40)
        .build();

    let mut last = 0;
    for sample in &trace {
        thread::sleep(Duration::from_millis(sample.time_ms - last));
        last = sample.time_ms;
        viewer.handle_touch(sample.phase, &sample.pointers, sample.time_ms);
    }

    running.store(false, Ordering::Release);
    match render.join() {
        Ok(frames) => println!("rendered {frames} frames"),
        Err(_) => log::error!("render thread panicked"),
    }
}
