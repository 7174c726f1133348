// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
#![no_main]
use libfuzzer_sys::fuzz_target;
use pathmorph_core::loader::json;

fuzz_target!(|data: &[u8]| {
    if let Ok(path) = json::from_slice(data) {
        let _ = path.length();
        let _ = path.to_cubic();
    }
});
