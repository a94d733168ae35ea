pub mod decode;
pub mod encode;
pub mod list;
pub mod radix;

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Reads the whole input file, or stdin when no file is given.
pub fn read_input(file: Option<&PathBuf>) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    match file {
        Some(path) => fs::read(path).map_err(|e| format!("Cannot read '{}': {}", path.display(), e).into()),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Writes to the output file, or stdout when no file is given.
pub fn write_output(output: Option<&PathBuf>, data: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, data)?,
        None => io::stdout().write_all(data)?,
    }
    Ok(())
}
