// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
use pathmorph_core::animation::{Animation, Shape};
use pathmorph_core::loader::{json, EasingRegistry, LoadOptions};

fn fixture(name: &str) -> Vec<u8> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../tests/data")
        .join(name);
    std::fs::read(path).unwrap()
}

#[test]
fn reveal_fixture_grows_to_full_shape() {
    let anim = json::load_animation(
        &fixture("reveal.json"),
        &EasingRegistry::with_defaults(),
        LoadOptions::default(),
    )
    .unwrap();
    let Animation::Reveal(reveal) = &anim else {
        panic!("expected reveal");
    };
    let full = reveal.shape().length();
    let mut last = 0.0;
    for frame in 0..=30 {
        let len = anim.frame(frame as f64 / 30.0).length();
        assert!(len + 1e-9 >= last, "frame {frame} shrank");
        last = len;
    }
    assert!((last - full).abs() < 1e-9);
    assert_eq!(&anim.frame(1.0), reveal.shape());
}

#[test]
fn malformed_record_is_skipped_or_rejected() {
    let data = fixture("malformed.json");
    let path = json::from_slice(&data).unwrap();
    assert_eq!(path.len(), 2);

    let strict = json::from_reader_with(&data[..], LoadOptions { strict: true });
    assert!(matches!(
        strict,
        Err(pathmorph_core::Error::MissingControlPoint { index: 1, .. })
    ));
}

#[test]
fn morph_fixture_frames() {
    let anim = json::load_animation(
        &fixture("morph.json"),
        &EasingRegistry::with_defaults(),
        LoadOptions::default(),
    )
    .unwrap();
    let first = anim.frame(0.0);
    let last = anim.frame(1.0);
    let (Shape::Leaf(first), Shape::Leaf(last)) = (first, last) else {
        panic!("morph frames are single paths");
    };
    assert_eq!(first.len(), last.len());
    assert!((last.length() - 40.0).abs() < 1e-6);
    assert!(first.point_at(0.5).y > 7.0);
}
