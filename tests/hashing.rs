use std::io::Read;

use fs_handles::{Digest, Error, FileBuilder, Hmac};

fn open_file(path: &std::path::Path) -> fs_handles::File {
    FileBuilder::from_path(path)
        .expect("builder")
        .open()
        .expect("open")
}

#[test]
fn sha256_of_a_known_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("f");
    std::fs::write(&path, "hello").expect("write");

    let file = open_file(&path);
    assert_eq!(file.size().expect("size"), 5);

    let digest = file.hash(Digest::Sha256).expect("hash");
    assert_eq!(digest.len(), 32);
    assert_eq!(
        hex::encode(&digest),
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
}

#[test]
fn hash_equals_the_digest_of_the_reader_bytes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("f");
    std::fs::write(&path, vec![0x42u8; 100_000]).expect("write");

    let file = open_file(&path);
    let via_handle = file.hash(Digest::Sha512).expect("hash");

    let mut content = Vec::new();
    file.reader()
        .expect("reader")
        .read_to_end(&mut content)
        .expect("read");
    use sha2::Digest as _;
    let direct = sha2::Sha512::digest(&content);

    assert_eq!(&via_handle[..], &direct[..]);
}

// RFC 4231 test case 2, streamed from disk.
#[test]
fn hmac_sha256_matches_the_known_vector() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("f");
    std::fs::write(&path, "what do ya want for nothing?").expect("write");

    let mac = open_file(&path)
        .hmac(Hmac::Sha256, b"Jefe")
        .expect("hmac");
    assert_eq!(
        hex::encode(&mac),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
}

#[test]
fn hashing_a_vanished_file_is_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("f");
    std::fs::write(&path, "x").expect("write");

    let file = open_file(&path);
    std::fs::remove_file(&path).expect("remove");

    assert!(matches!(file.hash(Digest::Sha256), Err(Error::NotFound(_))));
    assert!(matches!(
        file.hmac(Hmac::Sha512, b"key"),
        Err(Error::NotFound(_))
    ));
}
