use {
    crate::artifact::ContractArtifact,
    anyhow::{ensure, Context, Result},
    std::{
        fs::File,
        io::BufReader,
        path::{Path, PathBuf},
    },
};

/// Read-only access to the compiled contract artifacts of a build directory.
///
/// Artifacts are stored as `<dir>/<Name>.json` the way Truffle lays out its
/// `build/contracts` output. The registry only ever reads; producing
/// artifacts is the compiler's job.
pub struct ArtifactRegistry {
    dir: PathBuf,
}

impl ArtifactRegistry {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_owned(),
        }
    }

    /// Path of the artifact file for a contract name.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name).with_extension("json")
    }

    /// Resolves a contract name to its compiled artifact.
    pub fn artifact(&self, name: &str) -> Result<ContractArtifact> {
        let path = self.path(name);
        let file = File::open(&path)
            .with_context(|| format!("no artifact for contract {name} at {}", path.display()))?;
        let artifact: ContractArtifact = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("malformed artifact {}", path.display()))?;
        // A build directory can get into a state where a file no longer
        // matches the contract it is named after. Deploying the wrong
        // bytecode under a requested name must not go through.
        ensure!(
            artifact.contract_name == name,
            "artifact {} belongs to contract {}",
            path.display(),
            artifact.contract_name,
        );
        Ok(artifact)
    }
}
