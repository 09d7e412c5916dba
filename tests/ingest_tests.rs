use radix_lexicon::{Error, Trie, DEFAULT_BUFFER_SIZE};
use std::collections::BTreeSet;
use std::io::Write;
use tempfile::NamedTempFile;

/// Write content to a temp file and return the handle.
fn write_temp(content: &[u8]) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(content).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn test_mixed_delimiters_and_trimming() {
    let f = write_temp(b"alpha\nbeta\r\ngamma\r\n\n  delta  \n");

    let mut trie = Trie::new();
    let count = trie.bulk_insert_from_path(f.path(), 4).unwrap();

    assert_eq!(count, 4);
    assert_eq!(trie.len(), 4);
    let words: BTreeSet<Vec<u8>> = trie.words_with_prefix("").into_iter().collect();
    let expected: BTreeSet<Vec<u8>> = ["alpha", "beta", "gamma", "delta"]
        .into_iter()
        .map(|w| w.as_bytes().to_vec())
        .collect();
    assert_eq!(words, expected);

    // A buffer larger than the file must produce the identical trie
    let mut big = Trie::new();
    let big_count = big.bulk_insert_from_path(f.path(), DEFAULT_BUFFER_SIZE).unwrap();
    assert_eq!(big_count, count);
    assert_eq!(big, trie);
}

#[test]
fn test_buffer_size_equivalence() {
    // Long words force carries at small buffer sizes; duplicates, CR runs,
    // and whitespace-only lines exercise the skip paths
    let mut content = Vec::new();
    content.extend_from_slice(b"short\r\r\n\n");
    content.extend_from_slice(&vec![b'q'; 100]);
    content.extend_from_slice(b"\n\t \t\nshort\r");
    content.extend_from_slice(b"  padded word  \n");
    content.extend_from_slice(b"tail-no-newline");
    let f = write_temp(&content);

    let mut reference = Trie::new();
    let reference_count = reference.bulk_insert_from_path(f.path(), 1).unwrap();

    for buffer_size in [2, 3, 4, 7, 64, DEFAULT_BUFFER_SIZE] {
        let mut trie = Trie::new();
        let count = trie.bulk_insert_from_path(f.path(), buffer_size).unwrap();

        assert_eq!(count, reference_count, "count differs at {buffer_size}");
        assert_eq!(trie, reference, "trie differs at {buffer_size}");
    }

    // "short" appears twice: both feed insert, only one is stored
    assert_eq!(reference_count, 5);
    assert_eq!(reference.len(), 4);
    assert!(reference.contains("padded word"));
    assert!(reference.contains("tail-no-newline"));
    assert!(reference.contains(vec![b'q'; 100]));
}

#[test]
fn test_matches_individual_inserts() {
    let lines = ["carrot", "car", "cart", "carrot", "cab"];
    let joined = lines.join("\n");
    let f = write_temp(joined.as_bytes());

    let mut streamed = Trie::new();
    let count = streamed.bulk_insert_from_path(f.path(), 3).unwrap();

    let mut direct = Trie::new();
    for line in lines {
        direct.insert(line);
    }

    assert_eq!(count, lines.len());
    assert_eq!(streamed, direct);
}

#[test]
fn test_missing_file_is_io_error() {
    let mut trie = Trie::new();
    let err = trie
        .bulk_insert_from_path("/no/such/directory/words.txt", 1024)
        .unwrap_err();

    assert!(matches!(err, Error::Io(_)));
    assert!(trie.is_empty());
}

#[test]
fn test_empty_and_blank_files() {
    let empty = write_temp(b"");
    let blank = write_temp(b" \t \n\r\n   \n");

    let mut trie = Trie::new();
    assert_eq!(trie.bulk_insert_from_path(empty.path(), 1024).unwrap(), 0);
    assert_eq!(trie.bulk_insert_from_path(blank.path(), 1024).unwrap(), 0);
    assert!(trie.is_empty());
}

#[test]
fn test_partial_progress_is_kept_across_calls() {
    let first = write_temp(b"one\ntwo\n");
    let second = write_temp(b"two\nthree\n");

    let mut trie = Trie::new();
    trie.bulk_insert_from_path(first.path(), 1024).unwrap();
    trie.bulk_insert_from_path(second.path(), 1024).unwrap();

    assert_eq!(trie.len(), 3);
    for word in ["one", "two", "three"] {
        assert!(trie.contains(word));
    }
}
