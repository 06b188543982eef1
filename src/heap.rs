use core::alloc::Layout;
use core::fmt;
use core::ptr::NonNull;

use alloc::boxed::Box;
use alloc::vec::Vec;

/// The global allocator could not satisfy a request.
///
/// Returned by every list operation that allocates. The list is left exactly
/// as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError {
    layout: Layout,
}

impl AllocError {
    pub const fn new(layout: Layout) -> Self {
        Self { layout }
    }

    /// The layout of the allocation that failed.
    pub const fn layout(&self) -> Layout {
        self.layout
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "memory allocation of {} bytes (align {}) failed",
            self.layout.size(),
            self.layout.align()
        )
    }
}

impl core::error::Error for AllocError {}

/// Moves `value` into a fresh heap allocation, reporting failure instead of
/// aborting the process the way `Box::new` does.
pub fn try_box<T>(value: T) -> Result<Box<T>, AllocError> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        return Ok(Box::new(value));
    }

    // SAFETY: `layout` has a non-zero size.
    let raw = unsafe { alloc::alloc::alloc(layout) }.cast::<T>();
    let Some(ptr) = NonNull::new(raw) else {
        return Err(AllocError::new(layout));
    };

    // SAFETY: `ptr` is non-null, aligned for `T` and valid for a write of
    // `size_of::<T>()` bytes, since it was just allocated with `Layout::new::<T>()`.
    unsafe { ptr.as_ptr().write(value) };
    // SAFETY: the block came from the global allocator with the layout of `T`
    // and now holds an initialized `T`.
    Ok(unsafe { Box::from_raw(ptr.as_ptr()) })
}

/// Copies `bytes` into a heap block of exactly `bytes.len()` bytes.
pub fn try_copy_bytes(bytes: &[u8]) -> Result<Box<[u8]>, AllocError> {
    let mut block = Vec::new();
    block
        .try_reserve_exact(bytes.len())
        .map_err(|_| AllocError::new(Layout::for_value(bytes)))?;
    block.extend_from_slice(bytes);
    Ok(block.into_boxed_slice())
}
