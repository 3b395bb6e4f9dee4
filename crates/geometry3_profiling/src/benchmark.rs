#[cfg(feature = "criterion")]
pub mod criterion;

use std::{
    hint::black_box,
    time::{Duration, Instant},
};

/// Something that can repeatedly execute and time a function.
pub trait Benchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T);
}

/// Executes the benchmarked function repeatedly until the configured
/// duration has passed. The function is always executed at least once.
#[derive(Clone, Debug)]
pub struct BasicBenchmarker {
    duration: Duration,
    delayer: Delayer,
}

/// Postpones a benchmark until a given time after program start, which makes
/// it easier to attach an external profiler first.
#[derive(Clone, Debug)]
pub struct Delayer {
    program_start: Instant,
    delay: Duration,
}

impl BasicBenchmarker {
    pub fn new(duration: Duration, delayer: Delayer) -> Self {
        Self { duration, delayer }
    }
}

impl Benchmarker for BasicBenchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        self.delayer.wait();
        let start = Instant::now();
        let mut iterations: u64 = 0;
        loop {
            black_box(f());
            iterations += 1;

            if start.elapsed() > self.duration {
                break;
            }
        }
        log::debug!(
            "Executed {iterations} iterations in {:.3} s",
            start.elapsed().as_secs_f64()
        );
    }
}

impl Delayer {
    pub fn new(program_start: Instant, delay_seconds: f64) -> Self {
        Self {
            program_start,
            delay: Duration::from_secs_f64(delay_seconds),
        }
    }

    fn wait(self) {
        let remaining = self.delay.saturating_sub(self.program_start.elapsed());
        if remaining > Duration::ZERO {
            log::debug!("Waiting {:.3} s before starting", remaining.as_secs_f64());
            std::thread::sleep(remaining);
        }
    }
}

/// Defines an enum with one variant per benchmark function, named by
/// joining the module and function names in camel case, along with an
/// `execute` method that runs the corresponding function.
///
/// The calling crate must depend on `pastey`, and on `clap` when its `cli`
/// feature is enabled.
#[macro_export]
macro_rules! define_target_enum {
(
    $name:ident,
    $benchmarks_mod:path,
    $(
        $module:ident => {
            $($func:ident),* $(,)?
        }
    ),* $(,)?
) => {
    ::pastey::paste! {
        #[allow(clippy::enum_variant_names)]
        #[cfg_attr(feature = "cli", derive(::clap::ValueEnum))]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
        pub enum $name {
            $(
                $( [<$module:camel $func:camel>] ),*
            ),*
        }

        impl $name {
            /// Every target, in declaration order.
            pub const ALL: &[Self] = &[
                $(
                    $( Self::[<$module:camel $func:camel>], )*
                )*
            ];

            fn execute(&self, benchmarker: impl $crate::benchmark::Benchmarker) {
                match self {
                    $(
                        $( Self::[<$module:camel $func:camel>] => $benchmarks_mod::$module::$func(benchmarker), )*
                    )*
                }
            }
        }
    }};
}

/// Runs a benchmark target with a [`BasicBenchmarker`] for the given number
/// of seconds, starting no earlier than `delay` seconds from now.
pub fn benchmark(name: &str, execute: impl Fn(BasicBenchmarker), duration: f64, delay: f64) {
    let start = Instant::now();

    log::info!("Running benchmark {name} for {duration} s with a delay of {delay} s");

    let delayer = Delayer::new(start, delay);
    let benchmarker = BasicBenchmarker::new(Duration::from_secs_f64(duration), delayer);

    execute(benchmarker);

    log::info!(
        "Benchmark {name} completed in {:.3} s",
        start.elapsed().as_secs_f64()
    );
}
