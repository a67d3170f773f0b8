use crate::config::profile::ProfileConfig;
use crate::core::generator::ReadmeGenerator;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

pub struct ReadmeEngine<S: Storage> {
    storage: S,
    output_file: String,
}

impl<S: Storage> ReadmeEngine<S> {
    pub fn new(storage: S, output_file: impl Into<String>) -> Self {
        Self {
            storage,
            output_file: output_file.into(),
        }
    }

    pub fn render(&self, profile: &ProfileConfig) -> Result<String> {
        Ok(ReadmeGenerator::new(profile)?.render())
    }

    /// Render the profile and write it through storage, returning the file name.
    pub fn run(&self, profile: &ProfileConfig) -> Result<String> {
        tracing::info!("🚀 Generating README...");

        let content = self.render(profile)?;
        self.storage
            .write_file(&self.output_file, content.as_bytes())?;

        tracing::info!("✅ README generated successfully: {}", self.output_file);
        Ok(self.output_file.clone())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ReadmeError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl Storage for MemoryStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                ReadmeError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    path.to_string(),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .borrow_mut()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_run_writes_rendered_document() {
        let engine = ReadmeEngine::new(MemoryStorage::default(), "README.md");
        let mut profile = ProfileConfig::default();
        profile.basic_info.name = Some("Ada".into());

        let written = engine.run(&profile).unwrap();
        assert_eq!(written, "README.md");

        let stored = engine.storage().read_file("README.md").unwrap();
        let expected = engine.render(&profile).unwrap();
        assert_eq!(String::from_utf8(stored).unwrap(), expected);
        assert!(expected.contains("I'm Ada!"));
    }

    #[test]
    fn test_run_rejects_unknown_exclusions() {
        let engine = ReadmeEngine::new(MemoryStorage::default(), "README.md");
        let profile = ProfileConfig {
            exclude_sections: vec!["sidebar".into()],
            ..Default::default()
        };

        assert!(engine.run(&profile).is_err());
        assert!(engine.storage().read_file("README.md").is_err());
    }
}
