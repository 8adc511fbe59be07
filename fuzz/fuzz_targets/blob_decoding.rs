// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index blob decoding under adversarial input.
//!
//! The blob arrives over the network and gets base64-decoded, brotli-inflated
//! and parsed as JSON. The worst a crafted blob should manage is an error
//! message. Anything that does decode must also survive a search.

#![no_main]

use libfuzzer_sys::fuzz_target;
use docsift::{build_groups, Catalog};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    for catalog in [Catalog::from_blob(&text), Catalog::from_json(&text)]
        .into_iter()
        .flatten()
    {
        for locale in catalog.locales() {
            let Some(index) = catalog.index(locale) else {
                panic!("listed locale {} has no index", locale);
            };
            let groups = build_groups("a", &index);
            for pair in groups.windows(2) {
                assert!(pair[0].score() >= pair[1].score(), "groups out of order");
            }
        }
    }
});
