//! Small 3×3 convolutions over single-channel planes
//!
//! Samples outside the plane are clamped to the nearest edge pixel, so the
//! output always has the same shape as the input.

use ndarray::Array2;

const GAUSSIAN: [[f32; 3]; 3] = [
    [1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
    [2.0 / 16.0, 4.0 / 16.0, 2.0 / 16.0],
    [1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
];

const SOBEL_X: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

const SOBEL_Y: [[f32; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Blur a plane with a normalized 3×3 Gaussian kernel
pub fn gaussian_blur(plane: &Array2<f32>) -> Array2<f32> {
    convolve(plane, &GAUSSIAN)
}

/// Horizontal and vertical Sobel gradients of a plane
pub fn sobel(plane: &Array2<f32>) -> (Array2<f32>, Array2<f32>) {
    (convolve(plane, &SOBEL_X), convolve(plane, &SOBEL_Y))
}

/// Convolve a plane with a 3×3 kernel using clamped edges
pub fn convolve(plane: &Array2<f32>, kernel: &[[f32; 3]; 3]) -> Array2<f32> {
    let (rows, cols) = plane.dim();
    Array2::from_shape_fn((rows, cols), |(row, col)| {
        let mut sum = 0.0;
        for (kernel_row, weights) in kernel.iter().enumerate() {
            for (kernel_col, weight) in weights.iter().enumerate() {
                let sample = sample_clamped(
                    plane,
                    row as isize + kernel_row as isize - 1,
                    col as isize + kernel_col as isize - 1,
                );
                sum = weight.mul_add(sample, sum);
            }
        }
        sum
    })
}

fn sample_clamped(plane: &Array2<f32>, row: isize, col: isize) -> f32 {
    let (rows, cols) = plane.dim();
    if rows == 0 || cols == 0 {
        return 0.0;
    }
    let row = row.clamp(0, rows as isize - 1) as usize;
    let col = col.clamp(0, cols as isize - 1) as usize;
    plane.get([row, col]).copied().unwrap_or(0.0)
}
