/// Case files on disk: `<name>.in` problems paired with `<name>.out` answers,
/// and TOML suites.
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use pipenet::parse::{parse_answer, parse_problem};
use pipenet::suite::{Suite, SuiteError};
use pipenet::{ParseError, Problem};
use thiserror::Error;

/// One problem with its expected answer.
#[derive(Debug, Clone)]
pub struct Case {
    pub name: String,
    pub problem: Problem,
    pub expected: usize,
}

#[derive(Debug, Error)]
pub enum CaseError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Parse { path: PathBuf, source: ParseError },

    #[error("{}: {source}", .path.display())]
    Suite { path: PathBuf, source: SuiteError },

    #[error("no expected answer for {}", .0.display())]
    MissingAnswer(PathBuf),
}

fn read(path: &Path) -> Result<String, CaseError> {
    fs::read_to_string(path).map_err(|source| CaseError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load one `.in` file and the `.out` file beside it.
pub fn load_pair(input: &Path) -> Result<Case, CaseError> {
    let output = input.with_extension("out");
    if !output.is_file() {
        return Err(CaseError::MissingAnswer(input.to_path_buf()));
    }
    let problem = parse_problem(&read(input)?).map_err(|source| CaseError::Parse {
        path: input.to_path_buf(),
        source,
    })?;
    let expected = parse_answer(&read(&output)?).map_err(|source| CaseError::Parse {
        path: output.clone(),
        source,
    })?;
    let name = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Case {
        name,
        problem,
        expected,
    })
}

/// Load every `.in`/`.out` pair in `dir`, in natural name order
/// (`mcf.2` before `mcf.10`).
pub fn load_dir(dir: &Path) -> Result<Vec<Case>, CaseError> {
    let entries = fs::read_dir(dir).map_err(|source| CaseError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut inputs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CaseError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "in") {
            inputs.push(path);
        }
    }
    inputs.sort_by(|a, b| natural_cmp(&a.to_string_lossy(), &b.to_string_lossy()));

    inputs.iter().map(|p| load_pair(p)).collect()
}

/// Load the cases of a TOML suite file.
pub fn load_suite(path: &Path) -> Result<Vec<Case>, CaseError> {
    let suite = Suite::from_toml_str(&read(path)?).map_err(|source| CaseError::Suite {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(suite
        .cases
        .iter()
        .map(|c| Case {
            name: c.name.clone(),
            problem: c.problem(),
            expected: c.expected,
        })
        .collect())
}

/// Compare strings treating runs of ASCII digits as numbers.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a = a.as_bytes();
    let mut b = b.as_bytes();
    loop {
        match (a.first(), b.first()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let (na, ra) = split_digits(a);
                let (nb, rb) = split_digits(b);
                let na = trim_zeros(na);
                let nb = trim_zeros(nb);
                let ord = na.len().cmp(&nb.len()).then_with(|| na.cmp(nb));
                if ord != Ordering::Equal {
                    return ord;
                }
                a = ra;
                b = rb;
            }
            (Some(x), Some(y)) => {
                if x != y {
                    return x.cmp(y);
                }
                a = &a[1..];
                b = &b[1..];
            }
        }
    }
}

fn split_digits(s: &[u8]) -> (&[u8], &[u8]) {
    let end = s.iter().position(|c| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn trim_zeros(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|&c| c != b'0').unwrap_or(s.len());
    &s[start..]
}
