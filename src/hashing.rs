use std::io::{ErrorKind, Read};

use digest::DynDigest;
use hmac::Mac;
use hmac::digest::KeyInit;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

/// Message digest algorithms accepted by [`crate::File::hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Digest {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl Digest {
    fn hasher(self) -> Box<dyn DynDigest> {
        match self {
            Self::Md5 => Box::new(Md5::default()),
            Self::Sha1 => Box::new(Sha1::default()),
            Self::Sha224 => Box::new(Sha224::default()),
            Self::Sha256 => Box::new(Sha256::default()),
            Self::Sha384 => Box::new(Sha384::default()),
            Self::Sha512 => Box::new(Sha512::default()),
        }
    }
}

/// Keyed MAC algorithms accepted by [`crate::File::hmac`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Hmac {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

const STREAM_BUF_LEN: usize = 8 * 1024;

/// Feeds a reader to `update` in fixed-size chunks until EOF, retrying
/// interrupted reads.
fn stream(reader: &mut impl Read, mut update: impl FnMut(&[u8])) -> std::io::Result<()> {
    let mut buf = [0u8; STREAM_BUF_LEN];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok(()),
            Ok(n) => update(&buf[..n]),
            Err(err) if err.kind() == ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
}

pub(crate) fn hash_reader(reader: &mut impl Read, digest: Digest) -> std::io::Result<Box<[u8]>> {
    let mut hasher = digest.hasher();
    stream(reader, |chunk| hasher.update(chunk))?;
    Ok(hasher.finalize())
}

pub(crate) fn hmac_reader(
    reader: &mut impl Read,
    algorithm: Hmac,
    key: &[u8],
) -> std::io::Result<Box<[u8]>> {
    match algorithm {
        Hmac::Sha1 => mac_stream::<hmac::Hmac<Sha1>>(reader, key),
        Hmac::Sha256 => mac_stream::<hmac::Hmac<Sha256>>(reader, key),
        Hmac::Sha384 => mac_stream::<hmac::Hmac<Sha384>>(reader, key),
        Hmac::Sha512 => mac_stream::<hmac::Hmac<Sha512>>(reader, key),
    }
}

fn mac_stream<M: Mac + KeyInit>(reader: &mut impl Read, key: &[u8]) -> std::io::Result<Box<[u8]>> {
    // HMAC accepts keys of any length, so this only fails for block-cipher
    // MACs this crate does not offer.
    let mut mac = <M as Mac>::new_from_slice(key)
        .map_err(|err| std::io::Error::new(ErrorKind::InvalidInput, err.to_string()))?;
    stream(reader, |chunk| mac.update(chunk))?;
    Ok(mac.finalize().into_bytes().to_vec().into_boxed_slice())
}
