use std::{
    fs,
    path::{Path, PathBuf},
};

use l3_syntax::Program;

use crate::{error::L3cError, manifest::Project};

/// Every `.toml` program document under the project's programs directory, sorted by path.
pub fn program_files(project: &Project) -> Result<Vec<PathBuf>, L3cError> {
    fn read_program_files(
        dir: &Path,
        buf: &mut Vec<PathBuf>,
    ) -> Result<(), L3cError> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                read_program_files(&path, buf)?;
            } else if path.extension().and_then(|s| s.to_str()) == Some("toml") {
                buf.push(path);
            }
        }
        Ok(())
    }

    let mut buf = Vec::new();
    let dir = project.programs_dir();
    if dir.is_dir() {
        read_program_files(&dir, &mut buf)?;
    }
    buf.sort();
    Ok(buf)
}

pub fn load_programs(project: &Project) -> Result<Vec<(PathBuf, Program)>, L3cError> {
    program_files(project)?
        .into_iter()
        .map(|path| {
            let source = fs::read_to_string(&path)?;
            match Program::from_toml_str(&source) {
                Ok(program) => Ok((path, program)),
                Err(err) => Err(L3cError::Syntax { path, source: err }),
            }
        })
        .collect()
}

/// `path` relative to the project root, for display.
pub fn display_path<'a>(
    project: &Project,
    path: &'a Path,
) -> std::path::Display<'a> {
    path.strip_prefix(&project.root).unwrap_or(path).display()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{find_manifest, MANIFEST_FILE_NAME};

    fn project_with(files: &[(&str, &str)]) -> (tempfile::TempDir, Project) {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(MANIFEST_FILE_NAME), "name = \"demo\"\n").expect("write manifest");
        for (name, contents) in files {
            let path = dir.path().join("programs").join(name);
            fs::create_dir_all(path.parent().expect("program has a parent")).expect("create dirs");
            fs::write(path, contents).expect("write program");
        }
        let project = find_manifest(dir.path()).expect("manifest");
        (dir, project)
    }

    #[test]
    fn finds_nested_documents_in_order() {
        let (_dir, project) = project_with(&[
            ("b.toml", "parameters = []\nbody = { immediate = { value = 0 } }\n"),
            ("nested/a.toml", "parameters = []\nbody = { immediate = { value = 0 } }\n"),
            ("notes.txt", "not a program"),
        ]);
        let files = program_files(&project).expect("listing");
        let names = files.iter().map(|p| display_path(&project, p).to_string()).collect::<Vec<_>>();
        assert_eq!(names, vec!["programs/b.toml".to_string(), "programs/nested/a.toml".to_string()]);
    }

    #[test]
    fn missing_programs_dir_is_empty() {
        let (_dir, project) = project_with(&[]);
        assert!(program_files(&project).expect("listing").is_empty());
    }

    #[test]
    fn malformed_document_names_its_file() {
        let (_dir, project) = project_with(&[("bad.toml", "parameters = \"x\"\n")]);
        match load_programs(&project) {
            Err(L3cError::Syntax { path, .. }) => assert!(path.ends_with("bad.toml")),
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }
}
