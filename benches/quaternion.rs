use geometry3::benchmark::benchmarks::quaternion;
use geometry3_profiling::{benchmark::criterion, define_criterion_target};

define_criterion_target!(quaternion, mul_quaternion);
define_criterion_target!(quaternion, invert_quaternion);
define_criterion_target!(quaternion, normalize_quaternion);
define_criterion_target!(quaternion, from_axis_angle_quaternion);

criterion::criterion_group!(
    name = benches;
    config = criterion::config();
    targets =
        mul_quaternion,
        invert_quaternion,
        normalize_quaternion,
        from_axis_angle_quaternion,
);
criterion::criterion_main!(benches);
