#![no_main]

use geometry3::fuzzing::{ArbitraryMatrix4, fuzz_test_matrix4_multiplication};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (ArbitraryMatrix4, ArbitraryMatrix4)| {
    fuzz_test_matrix4_multiplication(input);
});
