use ndarray::{Array1, Array2, arr1, arr2};
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

/// The `|0>` basis state as a 2-entry amplitude column.
pub(crate) fn ket_zero() -> Array1<Complex64> {
    arr1(&[Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)])
}

/// Pauli-X (bit-flip) unitary.
pub(crate) fn pauli_x() -> Array2<Complex64> {
    arr2(&[
        [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
        [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
    ])
}

/// Hadamard unitary, mapping `|0>` and `|1>` to equal superpositions.
pub(crate) fn hadamard() -> Array2<Complex64> {
    let f = FRAC_1_SQRT_2;
    arr2(&[
        [Complex64::new(f, 0.0), Complex64::new(f, 0.0)],
        [Complex64::new(f, 0.0), Complex64::new(-f, 0.0)],
    ])
}
