use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum SyntaxError {
    #[error("malformed program document: {0}")]
    #[diagnostic(code(l3::syntax::toml), help("program documents are TOML with a `parameters` array and a `body` table"))]
    Toml(#[from] toml::de::Error),
}
