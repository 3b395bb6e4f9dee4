#![no_main]

use geometry3::fuzzing::{ArbitraryMatrix4, fuzz_test_matrix4_inversion};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|matrix: ArbitraryMatrix4| {
    fuzz_test_matrix4_inversion(matrix);
});
