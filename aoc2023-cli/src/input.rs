//! Puzzle inputs stored as files on disk

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Directory of puzzle inputs
///
/// Layout: `{dir}/Day{day}.txt`, or `{dir}/Day{day}_{variant}.txt` for
/// alternative example inputs.
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the input file for `day`
    pub fn path(&self, day: u8, variant: Option<&str>) -> PathBuf {
        match variant {
            Some(variant) => self.dir.join(format!("Day{day}_{variant}.txt")),
            None => self.dir.join(format!("Day{day}.txt")),
        }
    }

    pub fn contains(&self, day: u8, variant: Option<&str>) -> bool {
        self.path(day, variant).is_file()
    }

    /// Read the input for `day`, `None` if there is no such file
    pub fn read(&self, day: u8, variant: Option<&str>) -> Result<Option<String>, InputError> {
        let path = self.path(day, variant);
        match fs::read_to_string(&path) {
            Ok(input) => Ok(Some(input)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(InputError::Read { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn path_format() {
        let store = InputStore::new(PathBuf::from("input"));
        assert_eq!(store.path(5, None), PathBuf::from("input/Day5.txt"));
        assert_eq!(store.path(20, Some("2")), PathBuf::from("input/Day20_2.txt"));
    }

    #[test]
    fn read_present_and_missing() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(1, None));
        assert!(store.read(1, None).unwrap().is_none());

        let input = "1abc2\npqr3stu8vwx\n";
        fs::write(temp.path().join("Day1.txt"), input).unwrap();
        assert!(store.contains(1, None));
        assert_eq!(store.read(1, None).unwrap().as_deref(), Some(input));
        assert!(store.read(1, Some("2")).unwrap().is_none());
    }

    #[test]
    fn directory_in_place_of_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("Day3.txt")).unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(3, None));
        assert!(matches!(store.read(3, None), Err(InputError::Read { .. })));
    }
}
