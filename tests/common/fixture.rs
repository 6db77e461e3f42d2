//! Temporary-directory fixture for comparison tests

// Not every test binary uses every helper.
#![allow(dead_code)]

use golden_compare::Comparator;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory holding a candidate and a golden log file
pub struct Fixture {
    temp_dir: TempDir,
}

/// Builder assembling the fixture's file contents
#[derive(Default)]
pub struct FixtureBuilder {
    test_content: Option<String>,
    golden_content: Option<String>,
}

impl FixtureBuilder {
    /// Set the candidate file content from individual lines
    pub fn with_test_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.test_content = Some(join_lines(lines));
        self
    }

    /// Set the golden file content from individual lines
    pub fn with_golden_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.golden_content = Some(join_lines(lines));
        self
    }

    /// Set the candidate file content verbatim
    pub fn with_test_content(mut self, content: &str) -> Self {
        self.test_content = Some(content.to_owned());
        self
    }

    /// Set the golden file content verbatim
    pub fn with_golden_content(mut self, content: &str) -> Self {
        self.golden_content = Some(content.to_owned());
        self
    }

    /// Write the configured files into a fresh temporary directory
    ///
    /// A file whose content was never set is not created, which is how
    /// tests produce the missing-file failure scenarios.
    pub fn build(self) -> std::io::Result<Fixture> {
        let temp_dir = TempDir::new()?;

        if let Some(content) = self.test_content {
            fs::write(temp_dir.path().join("test.log"), content)?;
        }
        if let Some(content) = self.golden_content {
            fs::write(temp_dir.path().join("Golden.log"), content)?;
        }

        Ok(Fixture { temp_dir })
    }
}

impl Fixture {
    /// Start building a fixture
    pub fn builder() -> FixtureBuilder {
        FixtureBuilder::default()
    }

    /// Path of the candidate file inside the fixture
    pub fn test_path(&self) -> PathBuf {
        self.temp_dir.path().join("test.log")
    }

    /// Path of the golden file inside the fixture
    pub fn golden_path(&self) -> PathBuf {
        self.temp_dir.path().join("Golden.log")
    }

    /// Directory the fixture lives in, for running the binary inside it
    pub fn dir(&self) -> &std::path::Path {
        self.temp_dir.path()
    }

    /// A comparator wired to this fixture's files
    pub fn comparator(&self) -> Comparator {
        Comparator::new()
            .with_test_path(self.test_path())
            .with_golden_path(self.golden_path())
    }
}

fn join_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }
    content
}
