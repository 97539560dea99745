pub mod highlight;
pub mod keys;
pub mod request;

use anyhow::{Context, Result};
use std::{io::Read, path::Path};

/// Read `file`, or all of stdin when no file is given.
pub fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_named_file() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let path = tmp_dir.path().join("main.cpp");
        std::fs::write(&path, "int main() {}").unwrap();

        assert_eq!(read_source(Some(&path)).unwrap(), "int main() {}");
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_source(Some(Path::new("/nonexistent/main.cpp"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/main.cpp"));
    }
}
