// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
#![no_main]
use libfuzzer_sys::fuzz_target;
use pathmorph_core::loader::{json, EasingRegistry, LoadOptions};

fuzz_target!(|data: &[u8]| {
    let easings = EasingRegistry::with_defaults();
    if let Ok(anim) = json::load_animation(data, &easings, LoadOptions::default()) {
        for i in 0..=4 {
            let _ = anim.frame(i as f64 / 4.0);
        }
    }
});
