use std::alloc::{self, Layout};
use std::ffi::CStr;
use std::fmt;
use std::ptr::NonNull;
use std::slice;

use crate::error::{InteriorNul, OomError};


const EMPTY_SOURCE: &CStr = c"";

/// Append-only byte accumulator.
///
/// Contents live in one contiguous allocation of exactly `len + 1` bytes,
/// with a zero sentinel at `len` so the block can be handed to C-style text
/// APIs without another copy. Storage grows to the exact new size on every
/// append and never shrinks except through [`ChunkBuf::free`].
pub struct ChunkBuf {
    data: Option<NonNull<u8>>,
    len: usize,
}

impl Default for ChunkBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ChunkBuf {
    fn drop(&mut self) {
        self.free();
    }
}

impl ChunkBuf {
    pub const fn new() -> Self {
        Self { data: None, len: 0 }
    }

    // size has been validated by Layout::array on the append that made it
    const fn storage_layout(size: usize) -> Layout {
        unsafe { Layout::from_size_align_unchecked(size, 1) }
    }

    /// Copies `chunk` after the existing contents, growing the storage to
    /// exactly the new size.
    ///
    /// On `Err` the buffer is untouched: old contents, old sentinel, old
    /// length.
    pub fn append(&mut self, chunk: &[u8]) -> Result<(), OomError> {
        if chunk.is_empty() {
            return Ok(());
        }

        let new_len = self.len + chunk.len();
        let new_layout =
            Layout::array::<u8>(new_len + 1).map_err(|_| OomError::new(new_len + 1))?;

        // realloc failure hands back null and leaves the old allocation
        // alive, still owned by `self.data`.
        let grown = match self.data {
            Some(old) => unsafe {
                alloc::realloc(
                    old.as_ptr(),
                    Self::storage_layout(self.len + 1),
                    new_layout.size(),
                )
            },
            None => unsafe { alloc::alloc(new_layout) },
        };
        let Some(grown) = NonNull::new(grown) else {
            return Err(OomError::new(new_layout.size()));
        };

        unsafe {
            grown
                .as_ptr()
                .add(self.len)
                .copy_from_nonoverlapping(chunk.as_ptr(), chunk.len());
            *grown.as_ptr().add(new_len) = 0;
        }
        self.data = Some(grown);
        self.len = new_len;
        Ok(())
    }

    /// Releases the storage and resets to the empty state. Idempotent; the
    /// buffer is reusable afterwards.
    pub fn free(&mut self) {
        if let Some(data) = self.data.take() {
            unsafe { alloc::dealloc(data.as_ptr(), Self::storage_layout(self.len + 1)) };
        }
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Contents without the sentinel.
    pub fn as_slice(&self) -> &[u8] {
        match self.data {
            Some(data) => unsafe { slice::from_raw_parts(data.as_ptr(), self.len) },
            None => &[],
        }
    }

    /// Current allocation size: 0 before the first append, `len + 1` after.
    pub fn allocated_bytes(&self) -> usize {
        match self.data {
            Some(_) => self.len + 1,
            None => 0,
        }
    }

    /// Borrows the contents for handoff to an external reader. While the
    /// [`SourceRef`] is live the buffer cannot be appended to or freed.
    pub fn source(&self) -> SourceRef<'_> {
        let bytes = match self.data {
            Some(data) => unsafe { slice::from_raw_parts(data.as_ptr(), self.len + 1) },
            None => EMPTY_SOURCE.to_bytes_with_nul(),
        };
        SourceRef { bytes }
    }

    /// Runs `run` with a scoped [`SourceRef`]; the consumer finishes before
    /// the borrow ends.
    pub fn with_source<T>(&self, run: impl FnOnce(SourceRef<'_>) -> T) -> T {
        run(self.source())
    }
}

impl fmt::Debug for ChunkBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkBuf")
            .field("len", &self.len)
            .field("data", &self.as_slice())
            .finish()
    }
}

/// Read-only view of a buffer's contents, always backed by a valid
/// null-terminated region even when the buffer is empty.
#[derive(Clone, Copy)]
pub struct SourceRef<'buf> {
    // contents plus the zero sentinel
    bytes: &'buf [u8],
}

impl<'buf> SourceRef<'buf> {
    /// Never null; valid for `len() + 1` readable bytes.
    pub fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bytes(&self) -> &'buf [u8] {
        let bytes = self.bytes;
        &bytes[..bytes.len() - 1]
    }

    pub fn as_c_str(&self) -> Result<&'buf CStr, InteriorNul> {
        match self.as_bytes().iter().position(|&b| b == 0) {
            Some(at) => Err(InteriorNul { at }),
            // no interior zero, and the sentinel is the last byte
            None => Ok(unsafe { CStr::from_bytes_with_nul_unchecked(self.bytes) }),
        }
    }
}

impl fmt::Debug for SourceRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceRef")
            .field("len", &self.len())
            .field("bytes", &self.as_bytes())
            .finish()
    }
}
