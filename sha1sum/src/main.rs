use std::env;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use sha1::Sha1Digest;

mod error;

use crate::error::Error;

/// Resolves `path` to a regular file and digests its contents.
///
/// Classification happens before any hashing starts: a missing path, a
/// non-regular file and an open failure are reported as distinct kinds,
/// and a read failure mid-stream aborts the computation.
fn hash_file(path: &Path) -> Result<Sha1Digest, Error> {
    let metadata = fs::metadata(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::NotFound {
            path: path.to_owned(),
        },
        _ => Error::Open {
            path: path.to_owned(),
            source,
        },
    })?;

    if !metadata.is_file() {
        return Err(Error::NotRegularFile {
            path: path.to_owned(),
        });
    }

    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_owned(),
        source,
    })?;

    sha1::digest_reader(file).map_err(|source| Error::Read {
        path: path.to_owned(),
        source,
    })
}

fn main() {
    let mut args = env::args_os().skip(1);
    let path = match (args.next(), args.next()) {
        (Some(path), None) => PathBuf::from(path),
        _ => {
            eprintln!("usage: sha1sum <file>");
            process::exit(1);
        }
    };

    match hash_file(&path) {
        Ok(digest) => println!("{}", sha1::to_hex(&digest)),
        Err(err) => {
            eprintln!("sha1sum: {}", err);
            process::exit(err.exit_code());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha1::{Digest, Sha1};

    #[test]
    fn missing_path_is_classified() {
        let err = hash_file(Path::new("definitely/not/a/real/path")).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn directory_is_not_a_regular_file() {
        let err = hash_file(&env::temp_dir()).unwrap_err();
        assert!(matches!(err, Error::NotRegularFile { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn file_digest_matches_in_memory_digest() {
        let path = env::temp_dir().join(format!("sha1sum-test-{}", process::id()));
        fs::write(&path, b"abc").unwrap();
        let digest = hash_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(digest, Sha1::digest(b"abc"));
    }
}
