//! Path layout of an AKMC states directory.
//!
//! ```text
//! <root>/
//! ├── state_table
//! └── <state>/
//!     ├── processtable
//!     └── procdata/
//!         ├── reactant_<process>.<ext>
//!         ├── saddle_<process>.<ext>
//!         └── product_<process>.<ext>
//! ```
//!
//! Outputs are written beside the inputs in `procdata/`. Paths are joined
//! onto the root exactly as given, so a relative root yields relative paths
//! and the report links stay relative to the working directory.

use akmc_protocol::ArtifactRole;
use std::path::{Path, PathBuf};

pub const STATE_TABLE: &str = "state_table";
pub const PROCESS_TABLE: &str = "processtable";
pub const PROCDATA_DIR: &str = "procdata";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatesLayout {
    root: PathBuf,
}

impl StatesLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn state_table(&self) -> PathBuf {
        self.root.join(STATE_TABLE)
    }

    pub fn state_dir(&self, state_id: &str) -> PathBuf {
        self.root.join(state_id)
    }

    pub fn process_table(&self, state_id: &str) -> PathBuf {
        self.state_dir(state_id).join(PROCESS_TABLE)
    }

    pub fn procdata(&self, state_id: &str) -> PathBuf {
        self.state_dir(state_id).join(PROCDATA_DIR)
    }

    /// Path of a structure file for one process, e.g.
    /// `<root>/0/procdata/saddle_3.con`.
    pub fn artifact(
        &self,
        state_id: &str,
        process_id: &str,
        role: ArtifactRole,
        extension: &str,
    ) -> PathBuf {
        self.procdata(state_id)
            .join(role.file_name(process_id, extension))
    }

    /// The reactant, saddle and product input files of a process.
    pub fn endpoints(&self, state_id: &str, process_id: &str, extension: &str) -> [PathBuf; 3] {
        ArtifactRole::ENDPOINTS.map(|role| self.artifact(state_id, process_id, role, extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_paths() {
        let layout = StatesLayout::new("run/states");
        assert_eq!(layout.state_table(), PathBuf::from("run/states/state_table"));
        assert_eq!(layout.process_table("4"), PathBuf::from("run/states/4/processtable"));
        assert_eq!(layout.procdata("4"), PathBuf::from("run/states/4/procdata"));
    }

    #[test]
    fn test_artifact_paths_are_deterministic() {
        let layout = StatesLayout::new("states");
        assert_eq!(
            layout.artifact("0", "12", ArtifactRole::Saddle, "con"),
            PathBuf::from("states/0/procdata/saddle_12.con")
        );
        assert_eq!(
            layout.artifact("0", "12", ArtifactRole::Reaction, "gif"),
            PathBuf::from("states/0/procdata/reaction_12.gif")
        );
    }

    #[test]
    fn test_endpoints_order() {
        let layout = StatesLayout::new("/abs/states");
        let [reactant, saddle, product] = layout.endpoints("2", "5", "con");
        assert_eq!(reactant, PathBuf::from("/abs/states/2/procdata/reactant_5.con"));
        assert_eq!(saddle, PathBuf::from("/abs/states/2/procdata/saddle_5.con"));
        assert_eq!(product, PathBuf::from("/abs/states/2/procdata/product_5.con"));
    }
}
