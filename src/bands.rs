//! Coordinates of the three diagonals of a tridiagonal matrix.
//!
//! Each function returns a fresh iterator, so a band
//! can be walked as many times as needed.
//!
//! ```
//! use delacourse::bands;
//!
//! let sub: Vec<_> = bands::subdiagonal(3).collect();
//! assert_eq!(sub, vec![(1, 0), (2, 1)]);
//! let main: Vec<_> = bands::main_diagonal(3).collect();
//! assert_eq!(main, vec![(0, 0), (1, 1), (2, 2)]);
//! let sup: Vec<_> = bands::superdiagonal(3).collect();
//! assert_eq!(sup, vec![(0, 1), (1, 2)]);
//! ```

/// `(row, column)` pairs of the subdiagonal of an `n x n` matrix.
pub fn subdiagonal(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (1..n).map(|i| (i, i - 1))
}

/// `(row, column)` pairs of the main diagonal of an `n x n` matrix.
pub fn main_diagonal(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).map(|i| (i, i))
}

/// `(row, column)` pairs of the superdiagonal of an `n x n` matrix.
pub fn superdiagonal(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n.saturating_sub(1)).map(|i| (i, i + 1))
}

/// One of the three bands of the fixed-fixed matrix `K`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Band {
    /// Below the main diagonal.
    Sub,
    /// The main diagonal.
    Main,
    /// Above the main diagonal.
    Super,
}

impl Band {
    /// The bands in the order they are assembled into `K`.
    pub const ALL: [Band; 3] = [Band::Sub, Band::Main, Band::Super];

    /// The value every entry of the band takes in `K`.
    pub fn value(&self) -> f64 {
        match self {
            Band::Main => 2.0,
            Band::Sub | Band::Super => -1.0,
        }
    }

    /// Number of entries of the band in an `n x n` matrix.
    pub fn len(&self, n: usize) -> usize {
        match self {
            Band::Main => n,
            Band::Sub | Band::Super => n.saturating_sub(1),
        }
    }

    /// `(row, column)` pairs of the band in an `n x n` matrix.
    pub fn indices(&self, n: usize) -> Box<dyn Iterator<Item = (usize, usize)>> {
        match self {
            Band::Sub => Box::new(subdiagonal(n)),
            Band::Main => Box::new(main_diagonal(n)),
            Band::Super => Box::new(superdiagonal(n)),
        }
    }

    /// `(row, column, value)` triples of the band in an `n x n` matrix.
    pub fn entries(&self, n: usize) -> impl Iterator<Item = (usize, usize, f64)> {
        let value = self.value();
        self.indices(n).map(move |(row, column)| (row, column, value))
    }
}
