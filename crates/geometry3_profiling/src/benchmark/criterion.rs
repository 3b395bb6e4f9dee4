//! Benchmarking using `criterion`.

pub use criterion::*;

use crate::benchmark::Benchmarker;

/// Defines a `criterion` benchmark function named `$name` that runs
/// `$group::$name` through a [`CriterionFunctionBenchmarker`].
#[macro_export]
macro_rules! define_criterion_target {
    ($group:ident, $name:ident) => {
        pub fn $name(c: &mut $crate::benchmark::criterion::Criterion) {
            $group::$name(
                $crate::benchmark::criterion::CriterionFunctionBenchmarker::new(
                    c,
                    stringify!($name),
                    None,
                ),
            );
        }
    };
    ($group:ident, $name:ident, $sample_count:expr) => {
        pub fn $name(c: &mut $crate::benchmark::criterion::Criterion) {
            $group::$name(
                $crate::benchmark::criterion::CriterionFunctionBenchmarker::new(
                    c,
                    stringify!($name),
                    Some($sample_count),
                ),
            );
        }
    };
}

#[allow(missing_debug_implementations)]
pub struct CriterionFunctionBenchmarker<'a> {
    criterion: &'a mut Criterion,
    name: &'static str,
    sample_count: Option<usize>,
}

impl<'a> CriterionFunctionBenchmarker<'a> {
    pub fn new(
        criterion: &'a mut Criterion,
        name: &'static str,
        sample_count: Option<usize>,
    ) -> Self {
        Self {
            criterion,
            name,
            sample_count,
        }
    }
}

impl Benchmarker for CriterionFunctionBenchmarker<'_> {
    fn benchmark<T>(self, mut f: &mut impl FnMut() -> T) {
        let mut group = self.criterion.benchmark_group(self.name);

        if let Some(sample_count) = self.sample_count {
            group.sample_size(sample_count);
        }

        group.bench_function(self.name, |bencher| bencher.iter(&mut f));
        group.finish();
    }
}

/// The `criterion` configuration shared by all benches.
pub fn config() -> Criterion {
    Criterion::default().noise_threshold(0.03)
}
