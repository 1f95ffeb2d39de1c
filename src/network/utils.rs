//! Matrix utilities for networks.

use ndarray::{Array2, ArrayView2, Axis};

use super::Error;

/// Sums the matrix along `axis`.
///
/// Axis `0` collapses the rows, producing a `(1, columns)` row vector. Axis `1` collapses the
/// columns, producing a `(rows, 1)` column vector. Any other axis is an error.
pub fn sum_along_axis(axis: usize, m: ArrayView2<f64>) -> Result<Array2<f64>, Error> {
    match axis {
        0 => Ok(m.sum_axis(Axis(0)).insert_axis(Axis(0))),
        1 => Ok(m.sum_axis(Axis(1)).insert_axis(Axis(1))),
        _ => Err(Error::InvalidAxis(axis)),
    }
}

/// Checks that `m` has exactly `expected_cols` columns and, if given, `expected_rows` rows.
pub fn check_shape(
    m: ArrayView2<f64>,
    expected_rows: Option<usize>,
    expected_cols: usize,
) -> Result<(), Error> {
    let found = m.dim();
    let rows_match = expected_rows.map_or(true, |rows| rows == found.0);

    if rows_match && found.1 == expected_cols {
        Ok(())
    } else {
        Err(Error::DimensionMismatch {
            expected: (expected_rows.unwrap_or(usize::MAX), expected_cols),
            found,
        })
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn test_sum_along_axis() {
        let m = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];

        assert_eq!(array![[5.0, 7.0, 9.0]], sum_along_axis(0, m.view()).unwrap());
        assert_eq!(array![[6.0], [15.0]], sum_along_axis(1, m.view()).unwrap());
        assert_eq!(Err(Error::InvalidAxis(2)), sum_along_axis(2, m.view()));
    }

    #[test]
    fn test_sum_single_row() {
        let row = array![[0.5, -1.5]];
        assert_eq!(row, sum_along_axis(0, row.view()).unwrap());
    }

    #[test]
    fn test_check_shape() {
        let m = Array2::<f64>::zeros((3, 2));

        assert!(check_shape(m.view(), Some(3), 2).is_ok());
        assert!(check_shape(m.view(), None, 2).is_ok());
        assert_eq!(
            Err(Error::DimensionMismatch {
                expected: (1, 2),
                found: (3, 2)
            }),
            check_shape(m.view(), Some(1), 2)
        );
        assert_eq!(
            Err(Error::DimensionMismatch {
                expected: (usize::MAX, 4),
                found: (3, 2)
            }),
            check_shape(m.view(), None, 4)
        );
    }
}
