//!# Receive frame queue
//!
//! Single-producer/single-consumer ring buffer handing frames from the
//! receive interrupt to a polling consumer without locks. The storage is a
//! fixed arena of [Frame] slots, so no allocation happens on either side.
//!
//! Safety rests on the single-writer rule: [FrameQueue::push] is called
//! from exactly one context (the interrupt handler) and is the only writer
//! of the tail cursor, [FrameQueue::pop] from exactly one other context
//! and is the only writer of the head cursor. Each side only loads the
//! opposing cursor for comparison. Cursor accesses are plain atomic
//! load/store with acquire/release pairing, no read-modify-write, so the
//! queue also works on cores without atomic compare-and-swap.
//!
//! ```
//! use can_controller::frame::Frame;
//! use can_controller::queue::{FrameQueue, OverflowPolicy};
//! use embedded_can::StandardId;
//!
//! static QUEUE: FrameQueue = FrameQueue::new(OverflowPolicy::Reject);
//!
//! let frame = Frame::new(StandardId::new(0x101).unwrap(), &[1, 2]).unwrap();
//! QUEUE.push(frame).unwrap();
//! assert_eq!(QUEUE.pop(), Some(frame));
//! assert!(QUEUE.is_empty());
//! ```
use crate::frame::Frame;
use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicUsize, Ordering};

/// Default number of frame slots, matching the legacy firmware
pub const DEFAULT_CAPACITY: usize = 16;

/// Behavior of [FrameQueue::push] when all slots are occupied
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Hand the frame back to the producer and leave the queue untouched
    Reject,
    /// Legacy behavior: overwrite the slot and advance the tail onto the
    /// head, corrupting ordering. Only useful for compatibility testing.
    Overwrite,
}

/// Fixed-capacity single-producer/single-consumer frame queue.
///
/// `N` is the slot count; one slot stays unused to distinguish full from
/// empty, so the usable capacity is `N - 1`.
pub struct FrameQueue<const N: usize = DEFAULT_CAPACITY> {
    slots: [UnsafeCell<Frame>; N],
    /// Next slot to consume, written only by [Self::pop]
    head: AtomicUsize,
    /// Next slot to produce, written only by [Self::push]
    tail: AtomicUsize,
    /// Number of pushes that hit a full queue, written only by [Self::push]
    overruns: AtomicUsize,
    policy: OverflowPolicy,
}

// Shared access is sound under the single-writer-per-cursor contract
// documented on the module.
unsafe impl<const N: usize> Sync for FrameQueue<N> {}

impl<const N: usize> FrameQueue<N> {
    pub const fn new(policy: OverflowPolicy) -> Self {
        assert!(N >= 2, "a frame queue needs at least two slots");

        Self {
            slots: [const { UnsafeCell::new(Frame::empty()) }; N],
            head: AtomicUsize::new(0),
            tail: AtomicUsize::new(0),
            overruns: AtomicUsize::new(0),
            policy,
        }
    }

    /// Enqueues a frame. Producer side only.
    ///
    /// On a full queue the outcome depends on the overflow policy: `Reject`
    /// returns the frame to the caller, `Overwrite` reproduces the legacy
    /// silent corruption. Both count the overrun.
    pub fn push(&self, frame: Frame) -> Result<(), Frame> {
        let tail = self.tail.load(Ordering::Relaxed);
        let next = (tail + 1) % N;

        if next == self.head.load(Ordering::Acquire) {
            self.count_overrun();

            if let OverflowPolicy::Reject = self.policy {
                return Err(frame);
            }
        }

        unsafe {
            *self.slots[tail].get() = frame;
        }
        self.tail.store(next, Ordering::Release);

        Ok(())
    }

    /// Dequeues the oldest frame, `None` when empty. Consumer side only.
    /// Never blocks; an empty pop leaves the cursors untouched.
    pub fn pop(&self) -> Option<Frame> {
        let head = self.head.load(Ordering::Relaxed);

        if head == self.tail.load(Ordering::Acquire) {
            return None;
        }

        let frame = unsafe { *self.slots[head].get() };
        self.head.store((head + 1) % N, Ordering::Release);

        Some(frame)
    }

    pub fn is_empty(&self) -> bool {
        self.head.load(Ordering::Acquire) == self.tail.load(Ordering::Acquire)
    }

    /// Number of frames currently queued
    pub fn len(&self) -> usize {
        let head = self.head.load(Ordering::Acquire);
        let tail = self.tail.load(Ordering::Acquire);

        (tail + N - head) % N
    }

    /// Usable slot count
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// Number of pushes that found the queue full since construction
    pub fn overruns(&self) -> usize {
        self.overruns.load(Ordering::Relaxed)
    }

    fn count_overrun(&self) {
        // Single-writer counter, load/store instead of fetch_add so targets
        // without atomic read-modify-write stay supported.
        let count = self.overruns.load(Ordering::Relaxed);
        self.overruns.store(count.wrapping_add(1), Ordering::Relaxed);
    }
}
