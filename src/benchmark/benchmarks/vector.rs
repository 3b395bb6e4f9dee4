use crate::{
    matrix::Matrix4,
    vector::{Vector3, Vector4},
};
use geometry3_profiling::benchmark::Benchmarker;

pub fn normalize_vector3(benchmarker: impl Benchmarker) {
    let v = create_vector3();
    benchmarker.benchmark(&mut || v.normalized());
}

pub fn cross_vector3(benchmarker: impl Benchmarker) {
    let u = create_vector3();
    let v = Vector3::new(-0.5, 2.0, 1.5);
    benchmarker.benchmark(&mut || u.cross(&v));
}

pub fn transform_position_vector3(benchmarker: impl Benchmarker) {
    let v = create_vector3();
    let m = create_matrix4();
    benchmarker.benchmark(&mut || {
        let mut transformed = Vector3::zeros();
        transformed.transform_position_vector(&v, &m);
        transformed
    });
}

pub fn transform_direction_vector3(benchmarker: impl Benchmarker) {
    let v = create_vector3();
    let m = create_matrix4();
    benchmarker.benchmark(&mut || {
        let mut transformed = Vector3::zeros();
        transformed.transform_direction_vector(&v, &m);
        transformed
    });
}

pub fn transform_vector4(benchmarker: impl Benchmarker) {
    let v = Vector4::new(1.0, 2.0, 3.0, 1.0);
    let m = create_matrix4();
    benchmarker.benchmark(&mut || {
        let mut transformed = Vector4::zeros();
        transformed.transform_vector(&v, &m);
        transformed
    });
}

fn create_vector3() -> Vector3 {
    Vector3::new(1.0, 2.0, 3.0)
}

fn create_matrix4() -> Matrix4 {
    let mut translation = Matrix4::identity();
    translation.make_translation_values(1.0, 2.0, 3.0);
    let mut m = Matrix4::identity();
    m.make_rotation_y(0.7).premultiply(&translation);
    m
}
