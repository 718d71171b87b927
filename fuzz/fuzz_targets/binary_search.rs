#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&target, data)) = data.split_first() else {
        return;
    };

    let mut v = data.to_vec();
    v.sort_unstable();

    match algo101::binary_search(&v, &target) {
        Some(idx) => assert_eq!(v[idx], target),
        None => assert!(!v.contains(&target)),
    }
});
