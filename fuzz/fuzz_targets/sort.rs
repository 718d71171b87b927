#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&flags, data)) = data.split_first() else {
        return;
    };
    let reverse = flags & 1 != 0;

    let mut expected = data.to_vec();
    if reverse {
        expected.sort_by(|a, b| b.cmp(a));
    } else {
        expected.sort();
    }

    // Selection sort is quadratic, keep it to inputs that finish quickly.
    if data.len() <= 1_024 {
        let mut v = data.to_vec();
        assert_eq!(algo101::selection_sort(&mut v, reverse), expected);
    }

    assert_eq!(algo101::quick_sort(data, reverse), expected);
    assert_eq!(algo101::quick_sort_hoare(data, reverse), expected);

    let mut v = data.to_vec();
    assert_eq!(algo101::quick_sort_inplace(&mut v, reverse), expected);

    let mut v = data.to_vec();
    assert_eq!(algo101::quick_sort_hoare_inplace(&mut v, reverse), expected);
});
