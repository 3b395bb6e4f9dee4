use crate::{
    matrix::{Matrix3, Matrix4},
    vector::Vector3,
};
use geometry3_profiling::benchmark::Benchmarker;

pub fn mul_matrix3(benchmarker: impl Benchmarker) {
    let a = create_matrix3();
    let b = create_matrix3();
    benchmarker.benchmark(&mut || a * b);
}

pub fn mul_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    let b = create_matrix4();
    benchmarker.benchmark(&mut || a * b);
}

pub fn premultiply_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    let b = create_matrix4();
    benchmarker.benchmark(&mut || {
        let mut m = a;
        m.premultiply(&b);
        m
    });
}

pub fn transpose_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    benchmarker.benchmark(&mut || a.transposed());
}

pub fn determinant_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    benchmarker.benchmark(&mut || a.determinant());
}

pub fn invert_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    benchmarker.benchmark(&mut || a.inverted());
}

pub fn look_at_matrix4(benchmarker: impl Benchmarker) {
    let source = Vector3::new(1.0, 2.0, 3.0);
    let target = Vector3::new(-2.0, 0.5, -1.0);
    let up = Vector3::unit_y();
    benchmarker.benchmark(&mut || {
        let mut m = Matrix4::identity();
        m.look_at(&source, &target, &up);
        m
    });
}

pub fn perspective_matrix4(benchmarker: impl Benchmarker) {
    benchmarker.benchmark(&mut || {
        let mut m = Matrix4::identity();
        m.make_perspective(-0.1, 0.1, 0.075, -0.075, 0.1, 100.0);
        m
    });
}

fn create_matrix3() -> Matrix3 {
    Matrix3::from_values(1.0, 2.0, 0.0, 0.0, 1.0, 3.0, 4.0, 0.0, 1.0)
}

fn create_matrix4() -> Matrix4 {
    Matrix4::from_values(
        2.0, 0.0, 1.0, 3.0, //
        1.0, 3.0, 0.0, -1.0, //
        0.0, 1.0, 4.0, 2.0, //
        1.0, 0.0, 2.0, 5.0,
    )
}
