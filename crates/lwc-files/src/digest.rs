//! BLAKE3 content digests.

use crate::{DIGEST_SIZE, READ_BUFFER_SIZE};
use blake3::Hasher;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Digest of an in-memory buffer.
#[must_use]
pub fn hash_bytes(data: &[u8]) -> [u8; DIGEST_SIZE] {
    *blake3::hash(data).as_bytes()
}

/// Digest of a whole file, read in [`READ_BUFFER_SIZE`] pieces.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
///
/// # Example
///
/// ```no_run
/// use lwc_files::digest::hash_file;
///
/// let digest = hash_file("/path/to/file")?;
/// println!("{digest:02x?}");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn hash_file<P: AsRef<Path>>(path: P) -> io::Result<[u8; DIGEST_SIZE]> {
    let file = File::open(path)?;
    let len = file.metadata()?.len();
    hash_reader(file, len)
}

/// Digest of the first `len` bytes of `reader`.
///
/// Stops early if the reader is exhausted first.
///
/// # Errors
///
/// Propagates read errors.
pub fn hash_reader<R: Read>(reader: R, len: u64) -> io::Result<[u8; DIGEST_SIZE]> {
    let mut limited = reader.take(len);
    let mut hasher = Hasher::new();
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];

    loop {
        let bytes_read = limited.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(*hasher.finalize().as_bytes())
}
