use geometry3::benchmark::benchmarks::matrix;
use geometry3_profiling::{benchmark::criterion, define_criterion_target};

define_criterion_target!(matrix, mul_matrix3);
define_criterion_target!(matrix, mul_matrix4);
define_criterion_target!(matrix, premultiply_matrix4);
define_criterion_target!(matrix, transpose_matrix4);
define_criterion_target!(matrix, determinant_matrix4);
define_criterion_target!(matrix, invert_matrix4);
define_criterion_target!(matrix, look_at_matrix4);
define_criterion_target!(matrix, perspective_matrix4);

criterion::criterion_group!(
    name = benches;
    config = criterion::config();
    targets =
        mul_matrix3,
        mul_matrix4,
        premultiply_matrix4,
        transpose_matrix4,
        determinant_matrix4,
        invert_matrix4,
        look_at_matrix4,
        perspective_matrix4,
);
criterion::criterion_main!(benches);
