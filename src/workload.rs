//! Bulk insert, search and delete runs against a `SplayMap`, driven by comma-separated key files.
//!
//! Each input file holds a single comma-separated list of integer keys. Line breaks inside a file
//! carry no meaning and are removed before the list is split.
//!
//! # Examples
//!
//! ```
//! use splay_bst::workload::{parse_keys, Workload};
//!
//! # fn foo() -> splay_bst::workload::Result<()> {
//! let workload = Workload {
//!     insert: parse_keys("5,3,8,1,4")?,
//!     search: parse_keys("4,6")?,
//!     delete: parse_keys("3,99")?,
//! };
//! let report = workload.run();
//! assert_eq!(report.search_hits, 1);
//! assert_eq!(report.len, 4);
//! # Ok(())
//! # }
//! # foo().unwrap();
//! ```

use crate::splay_tree::SplayMap;
use log::{debug, info};
use std::error;
use std::fmt;
use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::Path;
use std::result;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    ParseError { token: String, source: ParseIntError },
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(error) => Some(error),
            Error::ParseError { source, .. } => Some(source),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IOError(error) => write!(f, "{}", error),
            Error::ParseError { token, source } => {
                write!(f, "invalid key `{}`: {}", token, source)
            },
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Parses a comma-separated list of integer keys. Line breaks are dropped, tokens are trimmed
/// and empty tokens (for example from a trailing comma) are skipped.
///
/// # Examples
///
/// ```
/// use splay_bst::workload::parse_keys;
///
/// assert_eq!(parse_keys("1, 2,\n3,").unwrap(), vec![1, 2, 3]);
/// assert!(parse_keys("1,x").is_err());
/// ```
pub fn parse_keys(input: &str) -> Result<Vec<i64>> {
    let joined: String = input.lines().collect();
    joined
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|source| Error::ParseError {
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

/// Reads a file and parses its contents with `parse_keys`.
pub fn read_keys<P>(path: P) -> Result<Vec<i64>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let keys = parse_keys(&fs::read_to_string(path)?)?;
    debug!("Read {} keys from {}.", keys.len(), path.display());
    Ok(keys)
}

/// The three key sets of a benchmark run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Workload {
    pub insert: Vec<i64>,
    pub search: Vec<i64>,
    pub delete: Vec<i64>,
}

/// Timings and outcome of a `Workload::run`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    pub insert_time: Duration,
    pub search_time: Duration,
    pub delete_time: Duration,
    pub search_hits: usize,
    pub len: usize,
}

impl Workload {
    /// Loads the insert, search and delete key sets from three files.
    pub fn load<P, Q, R>(insert: P, search: Q, delete: R) -> Result<Self>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        R: AsRef<Path>,
    {
        let workload = Workload {
            insert: read_keys(insert)?,
            search: read_keys(search)?,
            delete: read_keys(delete)?,
        };
        info!("Insert data set size: {}", workload.insert.len());
        info!("Search data set size: {}", workload.search.len());
        info!("Delete data set size: {}", workload.delete.len());
        Ok(workload)
    }

    /// Runs the three phases against a fresh `SplayMap`. The `i`-th inserted key is paired with
    /// the value `i`.
    pub fn run(&self) -> Report {
        let mut map = SplayMap::new();

        let start = Instant::now();
        for (index, key) in self.insert.iter().enumerate() {
            map.insert(*key, index);
        }
        let insert_time = start.elapsed();
        debug!("Insert phase done, {} keys stored.", map.len());

        let start = Instant::now();
        let mut search_hits = 0;
        for key in &self.search {
            if map.contains_key(key) {
                search_hits += 1;
            }
        }
        let search_time = start.elapsed();
        debug!("Search phase done, {} of {} keys found.", search_hits, self.search.len());

        let start = Instant::now();
        for key in &self.delete {
            map.remove(key);
        }
        let delete_time = start.elapsed();
        debug!("Delete phase done, {} keys left.", map.len());

        Report {
            insert_time,
            search_time,
            delete_time,
            search_hits,
            len: map.len(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "InsertTimeInMicroSeconds:{}", self.insert_time.as_micros())?;
        writeln!(f, "SearchTimeInMicroSeconds:{}", self.search_time.as_micros())?;
        write!(f, "DeleteTimeInMicroSeconds:{}", self.delete_time.as_micros())
    }
}
