//! Test fixtures for creating states directories.

use akmc_protocol::ArtifactRole;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PROCESS_TABLE_HEADER: &str =
    "proc #  saddle energy  prefactor  product  product energy  product prefactor  barrier  rate  repeats";

/// A temporary working directory holding a `states/` directory.
///
/// Keep the fixture alive for the test duration; the directory is removed
/// when it is dropped.
pub struct StatesFixture {
    dir: TempDir,
    states: Vec<String>,
}

#[allow(dead_code)]
impl StatesFixture {
    /// Create an empty states directory with an empty state table.
    pub fn new() -> io::Result<Self> {
        let dir = tempfile::tempdir()?;
        fs::create_dir_all(dir.path().join("states"))?;
        let fixture = Self {
            dir,
            states: Vec::new(),
        };
        fixture.write_state_table()?;
        Ok(fixture)
    }

    /// The working directory (parent of `states/`).
    pub fn work_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().join("states")
    }

    /// Add a state whose process table holds `processes` as
    /// `(process id, product state)` pairs.
    ///
    /// Endpoint structures are written for every process with a connected
    /// product.
    pub fn add_state(&mut self, state_id: &str, processes: &[(&str, &str)]) -> io::Result<()> {
        let mut table = String::from(PROCESS_TABLE_HEADER);
        table.push('\n');
        for (process_id, product) in processes {
            table.push_str(&format!(
                "{process_id}  -12.3  1.5e12  {product}  -13.0  1.1e12  0.4  2.1e5  1\n"
            ));
        }
        self.write_process_table(state_id, &table)?;

        let procdata = self.root().join(state_id).join("procdata");
        fs::create_dir_all(&procdata)?;
        for (process_id, product) in processes {
            if *product == "-1" {
                continue;
            }
            for role in ArtifactRole::ENDPOINTS {
                fs::write(
                    procdata.join(role.file_name(process_id, "con")),
                    format!("{} structure of process {process_id}\n", role.prefix()),
                )?;
            }
        }

        self.states.push(state_id.to_string());
        self.write_state_table()
    }

    /// Replace the process table of a state with raw content.
    pub fn write_process_table(&self, state_id: &str, content: &str) -> io::Result<()> {
        let state_dir = self.root().join(state_id);
        fs::create_dir_all(&state_dir)?;
        fs::write(state_dir.join("processtable"), content)
    }

    pub fn remove_structure(
        &self,
        state_id: &str,
        process_id: &str,
        role: ArtifactRole,
    ) -> io::Result<()> {
        fs::remove_file(
            self.root()
                .join(state_id)
                .join("procdata")
                .join(role.file_name(process_id, "con")),
        )
    }

    fn write_state_table(&self) -> io::Result<()> {
        let table: String = self
            .states
            .iter()
            .enumerate()
            .map(|(i, state)| format!("{state}  {:.4}  0\n", -100.0 - i as f64))
            .collect();
        fs::write(self.root().join("state_table"), table)
    }
}

/// Three states: state 0 has processes 0 and 2 connected (1 is not),
/// state 1 has no connected process, state 2 has process 0.
///
/// Expected record order: (0, 0), (0, 2), (2, 0).
pub fn sample_states() -> io::Result<StatesFixture> {
    let mut fixture = StatesFixture::new()?;
    fixture.add_state("0", &[("0", "1"), ("1", "-1"), ("2", "2")])?;
    fixture.add_state("1", &[("0", "-1")])?;
    fixture.add_state("2", &[("0", "0")])?;
    Ok(fixture)
}

#[allow(dead_code)]
pub fn expected_order() -> Vec<(String, String)> {
    [("0", "0"), ("0", "2"), ("2", "0")]
        .iter()
        .map(|(s, p)| (s.to_string(), p.to_string()))
        .collect()
}
