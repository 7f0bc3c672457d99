//! Tables of recurrence values and their plain-text form.
//!
//! The two-index tables are square: row `i` holds `k = i` and column `j`
//! holds `n = j`, both running over `1..=size`. The factorial table has one
//! value per row, `1!` through `size!`.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use bitnum_integers::BigInt;

use crate::error::TableError;
use crate::factorial::Factorials;
use crate::memo::Recurrence;
use crate::partition::Partitions;
use crate::stirling::{StirlingFirst, StirlingSecond};

/// The tables that can be generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Partition numbers `p(k, n)`.
    Partition,
    /// Signed Stirling numbers of the first kind `s(k, n)`.
    StirlingFirst,
    /// Stirling numbers of the second kind `S(k, n)`.
    StirlingSecond,
    /// Factorials `n!`.
    Factorial,
}

impl TableKind {
    /// Every table, in output order.
    pub const ALL: [TableKind; 4] = [
        TableKind::Partition,
        TableKind::StirlingFirst,
        TableKind::StirlingSecond,
        TableKind::Factorial,
    ];

    /// The file name the table is written to.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            TableKind::Partition => "Partition.txt",
            TableKind::StirlingFirst => "Stirling1.txt",
            TableKind::StirlingSecond => "Stirling2.txt",
            TableKind::Factorial => "Factorials.txt",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TableKind::Partition => "partition numbers",
            TableKind::StirlingFirst => "Stirling numbers of the first kind",
            TableKind::StirlingSecond => "Stirling numbers of the second kind",
            TableKind::Factorial => "factorials",
        };
        f.write_str(name)
    }
}

/// A generated table of values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    kind: TableKind,
    rows: Vec<Vec<BigInt>>,
}

impl Table {
    /// Generates the table of the given kind and size.
    #[must_use]
    pub fn generate(kind: TableKind, size: usize) -> Self {
        let rows = match kind {
            TableKind::Partition => grid(Partitions::new(), size),
            TableKind::StirlingFirst => grid(StirlingFirst::new(), size),
            TableKind::StirlingSecond => grid(StirlingSecond::new(), size),
            TableKind::Factorial => Factorials::new().take(size).map(|f| vec![f]).collect(),
        };
        Self { kind, rows }
    }

    /// Returns the kind of table.
    #[must_use]
    pub fn kind(&self) -> TableKind {
        self.kind
    }

    /// Returns the rows of the table.
    #[must_use]
    pub fn rows(&self) -> &[Vec<BigInt>] {
        &self.rows
    }

    /// Writes the table as text: one row per line, entries separated by a
    /// single space.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{self}")?;
        out.flush()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn grid<R: Recurrence>(mut recurrence: R, size: usize) -> Vec<Vec<BigInt>> {
    let mut rows = Vec::with_capacity(size);
    for i in 1..=size {
        let k = BigInt::from(i);
        let mut row = Vec::with_capacity(size);
        for j in 1..=size {
            row.push(recurrence.eval(&k, &BigInt::from(j)));
        }
        rows.push(row);
    }
    rows
}

/// Generates one table and writes it into `dir` under its
/// [`TableKind::file_name`], creating `dir` if needed.
///
/// Returns the path written.
///
/// # Errors
///
/// Returns an error if `dir` cannot be created or the file cannot be written.
pub fn write_table(dir: &Path, kind: TableKind, size: usize) -> Result<PathBuf, TableError> {
    fs::create_dir_all(dir).map_err(|source| TableError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(kind.file_name());
    tracing::debug!(%kind, size, path = %path.display(), "generating table");

    let table = Table::generate(kind, size);
    File::create(&path)
        .and_then(|file| table.write_to(BufWriter::new(file)))
        .map_err(|source| TableError::Write {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

/// Writes every table of the given size into `dir`.
///
/// Returns the paths written, in [`TableKind::ALL`] order.
///
/// # Errors
///
/// Returns the first error from [`write_table`].
pub fn write_all_tables(dir: &Path, size: usize) -> Result<Vec<PathBuf>, TableError> {
    TableKind::ALL
        .into_iter()
        .map(|kind| write_table(dir, kind, size))
        .collect()
}
