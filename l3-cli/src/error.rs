use std::path::PathBuf;

use l3_syntax::SyntaxError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum L3cError {
    #[error(transparent)]
    #[diagnostic(code(l3c::io))]
    Io(#[from] std::io::Error),
    #[error("no l3.toml manifest found in {} or any parent directory", .0.display())]
    #[diagnostic(code(l3c::manifest_not_found), help("run `l3c` inside a project, or point `--path` at one"))]
    ManifestNotFound(PathBuf),
    #[error("failed to read manifest {}", path.display())]
    #[diagnostic(code(l3c::manifest))]
    Manifest {
        path:   PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to load program {}", path.display())]
    #[diagnostic(code(l3c::syntax))]
    Syntax {
        path:   PathBuf,
        #[source]
        #[diagnostic_source]
        source: SyntaxError,
    },
    #[error("scope check failed: {failed} of {total} checked")]
    #[diagnostic(code(l3c::check_failed))]
    CheckFailed { failed: usize, total: usize },
}
