pub mod benchmarks;

geometry3_profiling::define_target_enum! {
    Target,
    crate::benchmark::benchmarks,
    vector => {
        normalize_vector3,
        cross_vector3,
        transform_position_vector3,
        transform_direction_vector3,
        transform_vector4,
    },
    matrix => {
        mul_matrix3,
        mul_matrix4,
        premultiply_matrix4,
        transpose_matrix4,
        determinant_matrix4,
        invert_matrix4,
        look_at_matrix4,
        perspective_matrix4,
    },
    quaternion => {
        mul_quaternion,
        invert_quaternion,
        normalize_quaternion,
        from_axis_angle_quaternion,
    }
}

pub fn benchmark(target: Target, duration: f64, delay: f64) {
    geometry3_profiling::benchmark::benchmark(
        &format!("{target:?}"),
        |benchmarker| target.execute(benchmarker),
        duration,
        delay,
    );
}
