//! Mathematical utilities for image stages

/// Clamped 3×3 convolutions: Gaussian blur and Sobel gradients
pub mod convolution;
