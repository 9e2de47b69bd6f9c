//! Tape - a writer that replaces the whole backing file on every write.
//!
//! The league is always rewritten in full. If the new document is shorter
//! than the previous one, writing in place would leave the old tail behind
//! and the next load would fail to decode. `Tape::write` truncates first, so
//! after a successful write the backing holds exactly the new payload.

use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};

/// A random-access byte store that can be cut down to a given length.
pub trait Backing: Read + Write + Seek + Send + Sync {
    /// Set the total length of the backing, dropping anything past `len`.
    fn set_len(&mut self, len: u64) -> io::Result<()>;

    /// Push written bytes down to durable media.
    fn sync(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Backing for File {
    fn set_len(&mut self, len: u64) -> io::Result<()> {
        File::set_len(self, len)
    }

    fn sync(&mut self) -> io::Result<()> {
        self.sync_all()
    }
}

impl Backing for Cursor<Vec<u8>> {
    fn set_len(&mut self, len: u64) -> io::Result<()> {
        let len = usize::try_from(len)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "length exceeds usize"))?;
        self.get_mut().truncate(len);
        Ok(())
    }
}

/// Truncating writer over a [`Backing`].
///
/// Intentionally not an `io::Write`: streaming encoders issue many small
/// writes and each one would wipe the previous chunk. Encode the full
/// document first, then hand it to [`Tape::write`].
#[derive(Debug)]
pub struct Tape<B> {
    backing: B,
    sync: bool,
}

impl<B: Backing> Tape<B> {
    pub fn new(backing: B) -> Self {
        Self {
            backing,
            sync: false,
        }
    }

    /// Call [`Backing::sync`] after every write.
    pub fn with_sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    pub fn set_sync(&mut self, sync: bool) {
        self.sync = sync;
    }

    /// Replace the backing contents with `bytes`. Returns the number of bytes
    /// written, which is also the backing's length afterwards.
    pub fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.backing.seek(SeekFrom::Start(0))?;
        self.backing.set_len(0)?;
        self.backing.write_all(bytes)?;
        self.backing.flush()?;
        if self.sync {
            self.backing.sync()?;
        }
        Ok(bytes.len())
    }

    pub fn get_ref(&self) -> &B {
        &self.backing
    }

    pub fn get_mut(&mut self) -> &mut B {
        &mut self.backing
    }

    pub fn into_inner(self) -> B {
        self.backing
    }
}
