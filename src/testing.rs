//! Allocation tracking for tests.
//!
//! Counters are per thread so that tests running in parallel do not see each
//! other's allocations.
extern crate std;

use core::alloc::{GlobalAlloc, Layout};
use core::cell::Cell;
use core::ptr;

use std::alloc::System;

std::thread_local! {
    static LIVE_BYTES: Cell<isize> = const { Cell::new(0) };
    static FAIL_IN: Cell<Option<usize>> = const { Cell::new(None) };
}

struct TrackingAlloc;

#[global_allocator]
static GLOBAL: TrackingAlloc = TrackingAlloc;

fn should_fail() -> bool {
    FAIL_IN
        .try_with(|fail| match fail.get() {
            Some(0) => {
                fail.set(None);
                true
            }
            Some(n) => {
                fail.set(Some(n - 1));
                false
            }
            None => false,
        })
        .unwrap_or(false)
}

fn record(delta: isize) {
    let _ = LIVE_BYTES.try_with(|live| live.set(live.get() + delta));
}

unsafe impl GlobalAlloc for TrackingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if should_fail() {
            return ptr::null_mut();
        }
        let block = unsafe { System.alloc(layout) };
        if !block.is_null() {
            record(layout.size() as isize);
        }
        block
    }

    unsafe fn dealloc(&self, block: *mut u8, layout: Layout) {
        unsafe { System.dealloc(block, layout) };
        record(-(layout.size() as isize));
    }
}

/// Bytes currently allocated by this thread.
pub fn live_bytes() -> isize {
    LIVE_BYTES.with(Cell::get)
}

/// Makes the `n`th allocation from now on this thread fail (`0` is the next one).
pub fn fail_nth_alloc(n: usize) {
    FAIL_IN.with(|fail| fail.set(Some(n)));
}

pub fn reset_failures() {
    FAIL_IN.with(|fail| fail.set(None));
}

/// Runs `f` and returns its result with the number of bytes it left allocated.
pub fn measure<R>(f: impl FnOnce() -> R) -> (R, isize) {
    let before = live_bytes();
    let result = f();
    (result, live_bytes() - before)
}
