use crate::domain::ports::{Prompter, Storage};
use crate::utils::error::{ReadmeError, Result};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

/// Line-oriented prompter over any reader/writer pair, usually stdin/stdout.
pub struct LinePrompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        // EOF reads as an empty answer
        self.input.read_line(&mut line).map_err(|e| ReadmeError::PromptError {
            message: e.to_string(),
        })?;

        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_local_storage_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());

        storage.write_file("nested/README.md", b"# hi").unwrap();

        assert_eq!(storage.read_file("nested/README.md").unwrap(), b"# hi");
        assert!(storage.read_file("missing.md").is_err());
    }

    #[test]
    fn test_line_prompter_reads_answers() {
        let input = Cursor::new("Ada Lovelace\r\n  \n");
        let mut prompter = LinePrompter::new(input, Vec::new());

        assert_eq!(prompter.ask("Your Name: ").unwrap(), "Ada Lovelace");
        assert_eq!(prompter.ask_optional("Tagline: ").unwrap(), None);
        assert_eq!(prompter.ask("After EOF: ").unwrap(), "");

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output, "Your Name: Tagline: After EOF: ");
    }
}
