//! Input coercion into the canonical dataset representation.
//!
//! Every public entry point of a transformer funnels its input through
//! [`coerce`] exactly once. Canonical arrays (`Array2<f64>` and its views)
//! pass through without copying; nested sequences are converted row by row.
//!
//! Shape rules:
//! - a sequence of rows becomes `(n_rows, row_len)`; all rows must share the
//!   first row's length;
//! - a 1-D array or a flat list of numbers becomes a single column `(n, 1)`;
//! - a sequence with no rows becomes `(0, 0)`.
//!
//! Missing values are not supported: `NaN` and infinities are rejected.

use crate::preprocessing::error::{PreprocessingError, Result};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis, CowArray, Ix2};

/// A single value that can be read as `f64`.
///
/// Implemented for the numeric primitives, converted with `as` (64-bit
/// integers beyond 2^53 round), and for text, which is parsed.
pub trait DatasetElement {
    fn to_f64(&self) -> Result<f64>;
}

macro_rules! impl_numeric_element {
    ($($t:ty),*) => {
        $(
            impl DatasetElement for $t {
                #[inline]
                fn to_f64(&self) -> Result<f64> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

impl_numeric_element!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl DatasetElement for str {
    fn to_f64(&self) -> Result<f64> {
        self.trim().parse::<f64>().map_err(|_| {
            PreprocessingError::InvalidInput(format!("non-numeric value {:?}", self))
        })
    }
}

impl DatasetElement for &str {
    fn to_f64(&self) -> Result<f64> {
        (**self).to_f64()
    }
}

impl DatasetElement for String {
    fn to_f64(&self) -> Result<f64> {
        self.as_str().to_f64()
    }
}

/// One row (sample) of a nested-sequence dataset.
pub trait DatasetRow {
    /// Number of values in the row.
    fn row_len(&self) -> usize;

    /// Append the row's values to `out`.
    fn extend_into(&self, out: &mut Vec<f64>) -> Result<()>;
}

fn extend_from_elements<E: DatasetElement>(values: &[E], out: &mut Vec<f64>) -> Result<()> {
    for v in values {
        out.push(v.to_f64()?);
    }
    Ok(())
}

impl<E: DatasetElement> DatasetRow for Vec<E> {
    fn row_len(&self) -> usize {
        self.len()
    }

    fn extend_into(&self, out: &mut Vec<f64>) -> Result<()> {
        extend_from_elements(self, out)
    }
}

impl<E: DatasetElement, const N: usize> DatasetRow for [E; N] {
    fn row_len(&self) -> usize {
        N
    }

    fn extend_into(&self, out: &mut Vec<f64>) -> Result<()> {
        extend_from_elements(self, out)
    }
}

impl<E: DatasetElement> DatasetRow for &[E] {
    fn row_len(&self) -> usize {
        self.len()
    }

    fn extend_into(&self, out: &mut Vec<f64>) -> Result<()> {
        extend_from_elements(self, out)
    }
}

/// Anything that can be turned into a 2D `f64` dataset.
///
/// The lifetime lets canonical inputs be borrowed rather than copied.
pub trait AsDataset<'a> {
    /// Convert without validating values.
    ///
    /// Use [`coerce`] instead; it also rejects non-finite values.
    fn into_array(self) -> Result<CowArray<'a, f64, Ix2>>;
}

impl<'a> AsDataset<'a> for Array2<f64> {
    fn into_array(self) -> Result<CowArray<'a, f64, Ix2>> {
        Ok(CowArray::from(self))
    }
}

impl<'a> AsDataset<'a> for &'a Array2<f64> {
    fn into_array(self) -> Result<CowArray<'a, f64, Ix2>> {
        Ok(CowArray::from(self.view()))
    }
}

impl<'a> AsDataset<'a> for ArrayView2<'a, f64> {
    fn into_array(self) -> Result<CowArray<'a, f64, Ix2>> {
        Ok(CowArray::from(self))
    }
}

impl<'a> AsDataset<'a> for Array1<f64> {
    fn into_array(self) -> Result<CowArray<'a, f64, Ix2>> {
        Ok(CowArray::from(self.insert_axis(Axis(1))))
    }
}

impl<'a> AsDataset<'a> for &'a Array1<f64> {
    fn into_array(self) -> Result<CowArray<'a, f64, Ix2>> {
        Ok(CowArray::from(self.view().insert_axis(Axis(1))))
    }
}

impl<'a> AsDataset<'a> for ArrayView1<'a, f64> {
    fn into_array(self) -> Result<CowArray<'a, f64, Ix2>> {
        Ok(CowArray::from(self.insert_axis(Axis(1))))
    }
}

fn from_rows<R: DatasetRow>(rows: &[R]) -> Result<Array2<f64>> {
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, DatasetRow::row_len);

    let mut values = Vec::with_capacity(n_rows * n_cols);
    for (i, row) in rows.iter().enumerate() {
        if row.row_len() != n_cols {
            return Err(PreprocessingError::InvalidInput(format!(
                "ragged rows: row {} has {} values, expected {}",
                i,
                row.row_len(),
                n_cols
            )));
        }
        row.extend_into(&mut values)?;
    }

    Array2::from_shape_vec((n_rows, n_cols), values)
        .map_err(|e| PreprocessingError::InvalidInput(e.to_string()))
}

impl<'a, R: DatasetRow> AsDataset<'a> for &[R] {
    fn into_array(self) -> Result<CowArray<'a, f64, Ix2>> {
        from_rows(self).map(CowArray::from)
    }
}

impl<'a, R: DatasetRow, const M: usize> AsDataset<'a> for &[R; M] {
    fn into_array(self) -> Result<CowArray<'a, f64, Ix2>> {
        from_rows(self.as_slice()).map(CowArray::from)
    }
}

impl<'a, R: DatasetRow> AsDataset<'a> for &Vec<R> {
    fn into_array(self) -> Result<CowArray<'a, f64, Ix2>> {
        from_rows(self.as_slice()).map(CowArray::from)
    }
}

impl<'a, R: DatasetRow> AsDataset<'a> for Vec<R> {
    fn into_array(self) -> Result<CowArray<'a, f64, Ix2>> {
        from_rows(self.as_slice()).map(CowArray::from)
    }
}

fn column_from_scalars<E: DatasetElement>(values: &[E]) -> Result<Array2<f64>> {
    let column = values
        .iter()
        .map(DatasetElement::to_f64)
        .collect::<Result<Vec<f64>>>()?;
    Ok(Array1::from(column).insert_axis(Axis(1)))
}

// Concrete per-type impls: a generic `E: DatasetElement` impl would overlap
// with the `R: DatasetRow` impls above.
macro_rules! impl_scalar_column {
    ($($t:ty),*) => {
        $(
            impl<'a> AsDataset<'a> for Vec<$t> {
                fn into_array(self) -> Result<CowArray<'a, f64, Ix2>> {
                    column_from_scalars(&self).map(CowArray::from)
                }
            }

            impl<'a> AsDataset<'a> for &Vec<$t> {
                fn into_array(self) -> Result<CowArray<'a, f64, Ix2>> {
                    column_from_scalars(self).map(CowArray::from)
                }
            }

            impl<'a> AsDataset<'a> for &[$t] {
                fn into_array(self) -> Result<CowArray<'a, f64, Ix2>> {
                    column_from_scalars(self).map(CowArray::from)
                }
            }

            impl<'a, const N: usize> AsDataset<'a> for &[$t; N] {
                fn into_array(self) -> Result<CowArray<'a, f64, Ix2>> {
                    column_from_scalars(self.as_slice()).map(CowArray::from)
                }
            }
        )*
    };
}

impl_scalar_column!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Convert `input` into a 2D `f64` array, rejecting non-finite values.
///
/// # Errors
/// [`PreprocessingError::InvalidInput`] if rows are ragged, an element is not
/// numeric, or any value is `NaN` or infinite.
pub fn coerce<'a, X: AsDataset<'a>>(input: X) -> Result<CowArray<'a, f64, Ix2>> {
    let data = input.into_array()?;

    if let Some(((i, j), v)) = data.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(PreprocessingError::InvalidInput(format!(
            "non-finite value {} at row {}, column {}",
            v, i, j
        )));
    }

    Ok(data)
}
