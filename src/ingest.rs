//! Streaming line ingestion.
//!
//! Reads a byte stream in fixed-size chunks and feeds every trimmed,
//! non-empty line into the trie. A line cut by a chunk boundary is carried
//! over and reassembled in front of the next chunk; lines lying wholly
//! inside a chunk are inserted straight from the read buffer without
//! copying.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::trie::Trie;
use crate::util::trim_ascii;

/// Default chunk size for bulk ingestion: 1 MiB.
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

impl Trie {
    /// Opens the file at `path` and inserts every record in it.
    ///
    /// See [`bulk_insert_from_reader`](Trie::bulk_insert_from_reader) for
    /// the record semantics and the meaning of the returned count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be opened
    /// or read. Records inserted before the failure stay in the trie.
    pub fn bulk_insert_from_path(
        &mut self,
        path: impl AsRef<Path>,
        buffer_size: usize,
    ) -> Result<usize> {
        let path = path.as_ref();
        debug!(path = %path.display(), buffer_size, "bulk insert from file");

        let file = File::open(path)?;
        self.bulk_insert_from_reader(file, buffer_size)
    }

    /// Reads `reader` in chunks of `buffer_size` bytes and inserts every
    /// record found in the stream.
    ///
    /// Records are delimited by any run of `\n` or `\r` bytes, so LF, CRLF
    /// and bare CR all work and runs of delimiters yield no empty records.
    /// Each record is trimmed of leading and trailing ASCII whitespace;
    /// records that trim to nothing are skipped. A trailing record without
    /// a final delimiter is still inserted.
    ///
    /// Returns the number of records fed to [`insert`](Trie::insert),
    /// counting repeats of already-stored words. A `buffer_size` of zero is
    /// treated as one byte; the resulting trie is identical for every
    /// buffer size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if a read fails. Records
    /// inserted before the failure stay in the trie.
    pub fn bulk_insert_from_reader<R: Read>(
        &mut self,
        mut reader: R,
        buffer_size: usize,
    ) -> Result<usize> {
        let mut buf = vec![0u8; buffer_size.max(1)];
        let mut carry: Vec<u8> = Vec::new();
        let mut records = 0usize;

        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }

            let chunk = &buf[..n];
            let mut pos = 0;

            while pos < n {
                match chunk[pos..]
                    .iter()
                    .position(|&b| b == b'\n' || b == b'\r')
                {
                    Some(rel) => {
                        let end = pos + rel;
                        if carry.is_empty() {
                            // Record lies wholly inside the chunk
                            if self.insert_record(&chunk[pos..end]) {
                                records += 1;
                            }
                        } else {
                            carry.extend_from_slice(&chunk[pos..end]);
                            let line = std::mem::take(&mut carry);
                            if self.insert_record(&line) {
                                records += 1;
                            }
                        }
                        pos = end + 1;
                    }
                    None => {
                        // Partial record at the end of the chunk
                        carry.extend_from_slice(&chunk[pos..]);
                        pos = n;
                    }
                }
            }
        }

        // The stream may end without a final delimiter
        if self.insert_record(&carry) {
            records += 1;
        }

        debug!(records, "bulk insert finished");
        Ok(records)
    }

    /// Trims a raw record and inserts it if anything is left. Returns
    /// whether the record counted toward the ingest total.
    fn insert_record(&mut self, raw: &[u8]) -> bool {
        let word = trim_ascii(raw);
        if word.is_empty() {
            return false;
        }

        self.insert(word);
        true
    }
}
