use std::io::Cursor;
use std::path::Path;

use kyber_bench_utils::analysis::collect::scan_disassembly;
use kyber_bench_utils::benchlog::collect::scan_bench_log;
use kyber_bench_utils::benchlog::stats::population_stddev;
use proptest::prelude::*;

fn listing_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9a-f]{1,6}:\t[0-9a-f ]{0,12}\t[a-z]{2,8} %[a-z]{3}",
        "[ -~]{0,40}",
        Just(String::new()),
    ]
}

proptest! {
    #[test]
    fn simd_never_exceeds_total(lines in prop::collection::vec(listing_line(), 0..64)) {
        let text = lines.join("\n");
        let out = scan_disassembly(Cursor::new(text.as_bytes()), Path::new("p")).unwrap();
        prop_assert!(out.simd <= out.total);
        prop_assert!(out.total <= out.lines_scanned);
    }

    #[test]
    fn scans_are_repeatable(text in "[ -~\n]{0,400}") {
        let a = scan_disassembly(Cursor::new(text.as_bytes()), Path::new("p")).unwrap();
        let b = scan_disassembly(Cursor::new(text.as_bytes()), Path::new("p")).unwrap();
        prop_assert_eq!(a, b);

        let a = scan_bench_log(Cursor::new(text.as_bytes()), Path::new("p")).unwrap();
        let b = scan_bench_log(Cursor::new(text.as_bytes()), Path::new("p")).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn stddev_is_non_negative(samples in prop::collection::vec(0.0f64..1e6, 1..50)) {
        let sum: f64 = samples.iter().sum();
        let sd = population_stddev(&samples, sum).unwrap();
        prop_assert!(sd >= 0.0);
    }

    #[test]
    fn constant_samples_have_zero_stddev(value in 0u32..100_000, n in 1usize..50) {
        let samples = vec![f64::from(value); n];
        let sum: f64 = samples.iter().sum();
        prop_assert_eq!(population_stddev(&samples, sum), Some(0.0));
    }
}
