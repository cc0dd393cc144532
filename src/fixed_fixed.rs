use crate::bands::Band;
use crate::dimension::Dimension;
use crate::error::FixedFixedError;
use crate::index::{Entry, MatrixIndex, Selector};
use crate::traits::IndexAccess;
use ndarray::Array1;
use sprs::{CsMat, FillInReduction, SymmetryCheck, TriMat};
use sprs_ldl::Ldl;

/// The special matrix `K` of a system fixed at both ends.
///
/// `K` has `2` on its main diagonal and `-1` on the
/// diagonals directly above and below it:
///
/// ```text
/// [ 2 -1  0  0]
/// [-1  2 -1  0]
/// [ 0 -1  2 -1]
/// [ 0  0 -1  2]
/// ```
///
/// The matrix is stored in compressed sparse column format.
/// The solution of `K x = ones(n)` is computed on first request
/// and cached for the lifetime of the instance.
///
/// # Examples
///
/// ```
/// let mut k = delacourse::FixedFixed::new(3).unwrap();
/// assert_eq!(k.shape().unwrap(), (3, 3));
/// let x = k.solve_unit().unwrap();
/// assert!((x[1] - 2.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct FixedFixed {
    dimension: Dimension,
    matrix: CsMat<f64>,
    unit_solution: Option<Array1<f64>>,
    num_solves: usize,
}

impl FixedFixed {
    /// Build `K` with `n` rows and columns.
    ///
    /// # Errors
    ///
    /// [`FixedFixedError::DimensionError`] if `n < 2`.
    pub fn new(n: usize) -> Result<Self, FixedFixedError> {
        Ok(Self::from_dimension(Dimension::try_from(n)?))
    }

    /// Build `K` from an already validated [`Dimension`].
    pub fn from_dimension(dimension: Dimension) -> Self {
        let n = usize::from(dimension);
        let capacity = Band::ALL.iter().map(|band| band.len(n)).sum();
        let mut triplets = TriMat::with_capacity((n, n), capacity);
        for band in Band::ALL {
            for (row, column, value) in band.entries(n) {
                triplets.add_triplet(row, column, value);
            }
        }
        // Coincident coordinates are summed, though none occur here.
        let matrix: CsMat<f64> = triplets.to_csc();
        tracing::debug!(n, nnz = matrix.nnz(), "assembled fixed-fixed matrix");
        Self {
            dimension,
            matrix,
            unit_solution: None,
            num_solves: 0,
        }
    }

    /// The dimension requested at construction.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Number of rows.
    ///
    /// # Errors
    ///
    /// [`FixedFixedError::DimensionError`] if the underlying
    /// matrix has been replaced by a non-square one.
    pub fn n(&self) -> Result<usize, FixedFixedError> {
        self.shape().map(|(rows, _)| rows)
    }

    /// The `(rows, columns)` pair.
    ///
    /// # Errors
    ///
    /// [`FixedFixedError::DimensionError`] if the underlying
    /// matrix has been replaced by a non-square one.
    pub fn shape(&self) -> Result<(usize, usize), FixedFixedError> {
        let (rows, columns) = self.matrix.shape();
        if rows != columns {
            return Err(FixedFixedError::DimensionError(format!(
                "FixedFixed matrix must be square, got shape: ({rows}, {columns})"
            )));
        }
        Ok((rows, columns))
    }

    /// The underlying sparse matrix.
    pub fn matrix(&self) -> &CsMat<f64> {
        &self.matrix
    }

    /// Swap in a different underlying matrix, returning the previous one.
    ///
    /// Any cached solution is discarded.
    pub fn replace_matrix(&mut self, matrix: CsMat<f64>) -> CsMat<f64> {
        tracing::debug!(
            shape = ?matrix.shape(),
            nnz = matrix.nnz(),
            "replacing fixed-fixed matrix"
        );
        self.unit_solution = None;
        std::mem::replace(&mut self.matrix, matrix)
    }

    /// The cached solution of `K x = ones(n)`, if it has been computed.
    pub fn unit_solution(&self) -> Option<&Array1<f64>> {
        self.unit_solution.as_ref()
    }

    /// How many times this instance has run a direct solve.
    pub fn num_solves(&self) -> usize {
        self.num_solves
    }

    /// Solve `K x = ones(n)`.
    ///
    /// The first successful call solves the system and caches `x`.
    /// Later calls return the cached vector without solving again.
    ///
    /// # Errors
    ///
    /// * [`FixedFixedError::LinearAlgebraError`] if the matrix is singular
    ///   or not symmetric. Nothing is cached in that case.
    /// * [`FixedFixedError::DimensionError`] if the matrix is not square.
    pub fn solve_unit(&mut self) -> Result<&Array1<f64>, FixedFixedError> {
        let solution = match self.unit_solution.take() {
            Some(solution) => {
                tracing::trace!("using cached unit solution");
                solution
            }
            None => self.solve_ones()?,
        };
        Ok(&*self.unit_solution.insert(solution))
    }

    fn solve_ones(&mut self) -> Result<Array1<f64>, FixedFixedError> {
        let n = self.n()?;
        self.num_solves += 1;
        tracing::debug!(n, "solving fixed-fixed system against ones");

        if !self.is_symmetric() {
            return Err(FixedFixedError::LinearAlgebraError(format!(
                "FixedFixed matrix of shape ({n}, {n}) is not symmetric"
            )));
        }
        let ldl = Ldl::new()
            .fill_in_reduction(FillInReduction::ReverseCuthillMcKee)
            .check_symmetry(SymmetryCheck::DontCheckSymmetry)
            .numeric(self.matrix.view())
            .map_err(|e| {
                FixedFixedError::LinearAlgebraError(format!(
                    "FixedFixed matrix of shape ({n}, {n}) is singular: {e}"
                ))
            })?;
        let ones = vec![1.0; n];
        let x = ldl.solve(ones.as_slice());
        if x.iter().any(|value| !value.is_finite()) {
            return Err(FixedFixedError::LinearAlgebraError(format!(
                "FixedFixed matrix of shape ({n}, {n}) is singular"
            )));
        }
        Ok(Array1::from(x))
    }

    // LDL^T only reads one triangle.
    fn is_symmetric(&self) -> bool {
        self.matrix
            .iter()
            .all(|(value, (row, column))| self.matrix.get(column, row) == Some(value))
    }
}

impl IndexAccess for FixedFixed {
    fn entry<I>(&self, index: I) -> Result<Entry<'_>, FixedFixedError>
    where
        I: Into<MatrixIndex>,
    {
        match index.into() {
            MatrixIndex::Pair(Selector::All, Selector::All) => Ok(Entry::Matrix(&self.matrix)),
            MatrixIndex::Pair(Selector::At(row), Selector::At(column)) => {
                let (rows, columns) = self.matrix.shape();
                if row >= rows || column >= columns {
                    return Err(FixedFixedError::MatrixIndexError(format!(
                        "index [{row}, {column}] is out of bounds for shape ({rows}, {columns})"
                    )));
                }
                let value = self.matrix.get(row, column).copied().unwrap_or(0.0);
                Ok(Entry::Scalar(value))
            }
            other => Err(FixedFixedError::MatrixIndexError(format!(
                "unsupported FixedFixed index {other}, expected [:, :] or [row, column]"
            ))),
        }
    }
}
