use chrono::{DateTime, Utc};
use gitparse_core::models::Commit;
use gitparse_core::parsers::BranchFilter;

use pyo3::create_exception;
use pyo3::exceptions::PyException;
use pyo3::prelude::*;

// Create custom exception
create_exception!(gitparse, GitParseError, PyException);

/// Converts GitParse error to Python exception
fn to_py_err(err: gitparse_core::error::GitError) -> PyErr {
    GitParseError::new_err(err.to_string())
}

/// One commit parsed from `git log --pretty=raw` output.
#[pyclass(name = "Commit")]
struct PyCommit {
    inner: Commit,
}

#[pymethods]
impl PyCommit {
    #[getter]
    fn id(&self) -> String {
        self.inner.id().to_string()
    }

    #[getter]
    fn short_id(&self) -> &str {
        self.inner.short_id()
    }

    #[getter]
    fn tree(&self) -> String {
        self.inner.tree().to_string()
    }

    #[getter]
    fn parents(&self) -> Vec<String> {
        self.inner.parents().iter().map(|p| p.to_string()).collect()
    }

    #[getter]
    fn is_merge(&self) -> bool {
        self.inner.is_merge()
    }

    #[getter]
    fn author(&self) -> &str {
        self.inner.author()
    }

    #[getter]
    fn author_email(&self) -> &str {
        self.inner.author_email()
    }

    /// Author timestamp as a UTC-aware `datetime`.
    #[getter]
    fn author_date(&self) -> DateTime<Utc> {
        self.inner.author_date()
    }

    #[getter]
    fn committer(&self) -> &str {
        self.inner.committer()
    }

    #[getter]
    fn committer_email(&self) -> &str {
        self.inner.committer_email()
    }

    /// Committer timestamp as a UTC-aware `datetime`.
    #[getter]
    fn committer_date(&self) -> DateTime<Utc> {
        self.inner.committer_date()
    }

    #[getter]
    fn message(&self) -> &str {
        self.inner.message()
    }

    #[getter]
    fn message_subject(&self) -> &str {
        self.inner.message_subject()
    }

    #[getter]
    fn message_body(&self) -> &str {
        self.inner.message_body()
    }

    fn __repr__(&self) -> String {
        format!(
            "Commit(id='{}', subject={:?})",
            self.inner.short_id(),
            self.inner.message_subject()
        )
    }
}

/// Split a shell-style command string into argument tokens.
#[pyfunction]
fn tokenize(command: &str) -> PyResult<Vec<String>> {
    gitparse_core::tokenize(command).map_err(to_py_err)
}

/// Parse `git log --pretty=raw` output into a list of commits.
#[pyfunction]
fn parse_commits(raw_log: &str) -> PyResult<Vec<PyCommit>> {
    let commits = gitparse_core::parse_commits(raw_log).map_err(to_py_err)?;
    Ok(commits.into_iter().map(|inner| PyCommit { inner }).collect())
}

/// Parse `git branch` output into clean branch names.
#[pyfunction]
fn parse_branches(raw_branches: &str) -> Vec<String> {
    gitparse_core::parse_branches(raw_branches)
}

/// Return the non-blank lines of `git branch` output unchanged.
#[pyfunction]
fn extract_branch_strings(raw_branches: &str) -> Vec<String> {
    gitparse_core::extract_branch_strings(raw_branches)
}

/// Keep the branch names matching `include` and not matching `exclude`.
#[pyfunction]
#[pyo3(signature = (branches, include=None, exclude=None))]
fn filter_branches(
    branches: Vec<String>,
    include: Option<&str>,
    exclude: Option<&str>,
) -> PyResult<Vec<String>> {
    let filter = BranchFilter::new(include, exclude).map_err(to_py_err)?;
    Ok(filter.apply(branches))
}

/// Python module configuration
#[pymodule]
fn gitparse(py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyCommit>()?;
    m.add_function(wrap_pyfunction!(tokenize, m)?)?;
    m.add_function(wrap_pyfunction!(parse_commits, m)?)?;
    m.add_function(wrap_pyfunction!(parse_branches, m)?)?;
    m.add_function(wrap_pyfunction!(extract_branch_strings, m)?)?;
    m.add_function(wrap_pyfunction!(filter_branches, m)?)?;
    m.add("GitParseError", py.get_type::<GitParseError>())?;

    Ok(())
}
