use std::fs::{self, File};
use std::path::Path;

use memmap2::Mmap;

use super::{Lexicon, LexiconError, LexiconTrie};

const MAGIC: &[u8; 4] = b"THLX";
const VERSION: u8 = 1;
// magic + version + reserved + payload_len + crc32 = 16
const HEADER_SIZE: usize = 4 + 1 + 3 + 4 + 4;

impl LexiconTrie {
    /// Serialize the entry list into the compiled `THLX` format.
    ///
    /// Only entries are stored; the trie is rebuilt on load.
    pub fn to_bytes(&self) -> Result<Vec<u8>, LexiconError> {
        let payload = bincode::serialize(self.entries()).map_err(LexiconError::Serialize)?;
        let payload_len: u32 = payload.len().try_into().map_err(|_| {
            LexiconError::Serialize(Box::new(bincode::ErrorKind::SizeLimit))
        })?;
        let checksum = crc32fast::hash(&payload);

        let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&[0u8; 3]); // reserved
        buf.extend_from_slice(&payload_len.to_le_bytes());
        buf.extend_from_slice(&checksum.to_le_bytes());
        buf.extend_from_slice(&payload);
        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, LexiconError> {
        if data.len() < 5 {
            return Err(LexiconError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(LexiconError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(LexiconError::UnsupportedVersion(data[4]));
        }
        if data.len() < HEADER_SIZE {
            return Err(LexiconError::InvalidHeader);
        }

        let payload_len = read_u32(&data[8..12]) as usize;
        let checksum = read_u32(&data[12..16]);
        let payload = data
            .get(HEADER_SIZE..HEADER_SIZE + payload_len)
            .ok_or(LexiconError::InvalidHeader)?;
        if crc32fast::hash(payload) != checksum {
            return Err(LexiconError::ChecksumMismatch);
        }

        let entries: Vec<String> =
            bincode::deserialize(payload).map_err(LexiconError::Deserialize)?;
        Ok(Self::from_lexicon(Lexicon::new(entries)?))
    }

    /// Open a compiled lexicon file through a read-only memory map.
    pub fn open(path: &Path) -> Result<Self, LexiconError> {
        let file = File::open(path).map_err(|source| LexiconError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        // SAFETY: The file is opened read-only and the mapping is immutable.
        // The Mmap is dropped once the entries have been decoded.
        let mmap = unsafe { Mmap::map(&file) }.map_err(|source| LexiconError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&mmap)
    }

    pub fn save(&self, path: &Path) -> Result<(), LexiconError> {
        fs::write(path, self.to_bytes()?).map_err(|source| LexiconError::Load {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn read_u32(bytes: &[u8]) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&bytes[..4]);
    u32::from_le_bytes(word)
}
