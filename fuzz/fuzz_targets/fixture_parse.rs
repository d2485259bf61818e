#![no_main]

use libfuzzer_sys::fuzz_target;
use stubtree_syntax::fixture::{parse_fixture, render_fixture};

const MAX_FIXTURE_BYTES: usize = 8192;

fuzz_target!(|data: &[u8]| {
    let capped = &data[..data.len().min(MAX_FIXTURE_BYTES)];
    let text = String::from_utf8_lossy(capped);
    let Ok(root) = parse_fixture(&text) else {
        return;
    };

    let rendered = render_fixture(&root);
    let reparsed = parse_fixture(&rendered).expect("rendered fixture parses");
    assert_eq!(reparsed.text(), root.text());
    assert_eq!(render_fixture(&reparsed), rendered);
});
