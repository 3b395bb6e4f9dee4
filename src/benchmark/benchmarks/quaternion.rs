use crate::{quaternion::Quaternion, vector::Vector3};
use geometry3_profiling::benchmark::Benchmarker;

pub fn mul_quaternion(benchmarker: impl Benchmarker) {
    let a = create_quaternion();
    let b = create_quaternion();
    benchmarker.benchmark(&mut || a * b);
}

pub fn invert_quaternion(benchmarker: impl Benchmarker) {
    let a = create_quaternion();
    benchmarker.benchmark(&mut || {
        let mut inverse = Quaternion::identity();
        inverse.invert_quaternion(&a);
        inverse
    });
}

pub fn normalize_quaternion(benchmarker: impl Benchmarker) {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    benchmarker.benchmark(&mut || a.normalized());
}

pub fn from_axis_angle_quaternion(benchmarker: impl Benchmarker) {
    let axis = Vector3::new(1.0, 2.0, 3.0).normalized();
    benchmarker.benchmark(&mut || Quaternion::from_axis_angle(&axis, 0.7));
}

fn create_quaternion() -> Quaternion {
    Quaternion::from_axis_angle(&Vector3::unit_y(), 0.7)
}
