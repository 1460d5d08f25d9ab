//! Reading and writing JSON-encoded inputs: weights, team indicators and fixture lists.

use std::fs::File;
use std::io::{BufReader, BufWriter, Error};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{from_reader, to_writer_pretty};

/// Reads a JSON-encoded type from a given file `path`.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> Result<D, Error> {
    let file = File::open(path)?;
    Ok(from_reader(BufReader::new(file))?)
}

// JSON-encodes the `value` in pretty-printed form and writes it to a given `path`.
pub fn write_json(path: impl AsRef<Path>, value: &impl Serialize) -> Result<(), Error> {
    let file = File::create(path)?;
    Ok(to_writer_pretty(BufWriter::new(file), value)?)
}

pub trait ReadJsonFile<D> {
    fn read_json_file(path: impl AsRef<Path>) -> Result<D, Error>;
}

impl<D: DeserializeOwned> ReadJsonFile<D> for D {
    fn read_json_file(path: impl AsRef<Path>) -> Result<D, Error> {
        read_json(path)
    }
}

pub trait WriteJsonFile<S: Serialize> {
    fn write_json_file(&self, path: impl AsRef<Path>) -> Result<(), Error>;
}

impl<S: Serialize> WriteJsonFile<S> for S {
    fn write_json_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        write_json(path, self)
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::io::ErrorKind;

    use crate::engine::Config;
    use crate::indicators::TeamIndicators;

    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        env::temp_dir().join(format!("sportpredict-{name}-{}.json", std::process::id()))
    }

    #[test]
    fn round_trip_config() {
        let path = temp_path("config");
        let config = Config::default();
        config.write_json_file(&path).unwrap();
        let read = Config::read_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config, read);
    }

    #[test]
    fn missing_file() {
        let err = TeamIndicators::read_json_file("/nonexistent/team.json").unwrap_err();
        assert_eq!(ErrorKind::NotFound, err.kind());
    }

    #[test]
    fn malformed_file() {
        let path = temp_path("malformed");
        std::fs::write(&path, "{ not json").unwrap();
        let result = TeamIndicators::read_json_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(ErrorKind::InvalidData, result.unwrap_err().kind());
    }
}
