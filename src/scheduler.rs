// Per-frame callback queue of the host. In the browser this is
// requestAnimationFrame; the animator only needs to ask for and cancel frames.

/// Id of one requested frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameHandle(i32);

impl FrameHandle {
    pub fn new(id: i32) -> FrameHandle {
        FrameHandle(id)
    }

    pub fn id(self) -> i32 {
        self.0
    }
}

pub trait FrameScheduler {
    /// Queues one call to the animator's `on_frame`. `None` means the host
    /// refused, and the loop ends there.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    fn cancel_frame(&mut self, handle: FrameHandle);
}
