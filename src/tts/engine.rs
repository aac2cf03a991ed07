use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Engine families the invoker knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineFamily {
    Espeak,
    Festival,
}

/// A binary worth probing for, in priority order.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub name: &'static str,
    pub family: EngineFamily,
}

pub const CANDIDATES: [Candidate; 3] = [
    Candidate {
        name: "espeak-ng",
        family: EngineFamily::Espeak,
    },
    Candidate {
        name: "espeak",
        family: EngineFamily::Espeak,
    },
    Candidate {
        name: "festival",
        family: EngineFamily::Festival,
    },
];

/// The engine chosen at startup. Never changes for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Engine {
    /// espeak-ng or espeak; both accept `-s <wpm> -w <file> <text>`.
    Espeak {
        name: &'static str,
        program: PathBuf,
    },
    /// festival; reads a text file in `--tts` mode, audio on stdout.
    Festival { program: PathBuf },
    None,
}

impl Engine {
    pub fn name(&self) -> &'static str {
        match self {
            Engine::Espeak { name, .. } => name,
            Engine::Festival { .. } => "festival",
            Engine::None => "none",
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, Engine::None)
    }

    pub fn family(&self) -> Option<EngineFamily> {
        match self {
            Engine::Espeak { .. } => Some(EngineFamily::Espeak),
            Engine::Festival { .. } => Some(EngineFamily::Festival),
            Engine::None => None,
        }
    }

    fn from_candidate(candidate: &Candidate, program: PathBuf) -> Self {
        match candidate.family {
            EngineFamily::Espeak => Engine::Espeak {
                name: candidate.name,
                program,
            },
            EngineFamily::Festival => Engine::Festival { program },
        }
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Probe for an engine, looking in `dir` when given and on `PATH` otherwise.
pub fn probe(dir: Option<&Path>) -> Engine {
    probe_candidates(&CANDIDATES, dir)
}

pub fn probe_candidates(candidates: &[Candidate], dir: Option<&Path>) -> Engine {
    for candidate in candidates {
        let program = match dir {
            Some(dir) => dir.join(candidate.name),
            None => PathBuf::from(candidate.name),
        };

        if responds_to_version(&program) {
            tracing::debug!("Probe: {} is available", candidate.name);
            return Engine::from_candidate(candidate, program);
        }
    }

    tracing::debug!("Probe: no candidate engine responded");
    Engine::None
}

/// Runs `<program> --version`. A missing binary counts as a failure.
fn responds_to_version(program: &Path) -> bool {
    let status = Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) if status.success() => true,
        Ok(status) => {
            tracing::debug!("Probe: {} exited with {}", program.display(), status);
            false
        }
        Err(e) => {
            tracing::debug!("Probe: {} not runnable: {}", program.display(), e);
            false
        }
    }
}
