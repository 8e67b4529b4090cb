//! Concurrent readers against a reconfigured whitelist.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use navguard_core::SharedWhitelist;

#[test]
fn readers_never_observe_partial_update() {
    // Two configurations that disagree on every probe; a torn read would
    // allow both probes or neither.
    let wl = Arc::new(SharedWhitelist::new());
    wl.configure(["a.test"], false);

    let writer = {
        let wl = Arc::clone(&wl);
        thread::spawn(move || {
            for i in 0..2_000 {
                if i % 2 == 0 {
                    wl.configure(["b.test"], false);
                } else {
                    wl.configure(["a.test"], false);
                }
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let wl = Arc::clone(&wl);
            thread::spawn(move || {
                for _ in 0..2_000 {
                    let snap = wl.snapshot();
                    let a = snap.is_allowed("https://a.test");
                    let b = snap.is_allowed("https://b.test");
                    assert!(a ^ b, "torn snapshot: a={a} b={b}");
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
}

#[test]
fn snapshot_outlives_reconfigure() {
    let wl = SharedWhitelist::new();
    wl.configure(["a.test"], false);
    let before = wl.snapshot();

    wl.clear();

    assert!(before.is_enabled());
    assert!(!before.is_allowed("https://b.test"));
    assert!(wl.is_allowed("https://b.test"));
}
