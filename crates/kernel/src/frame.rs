use sandbox_input::{InputState, KeyBindings};

/// Lifecycle of the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    Running,
    Closing,
    Terminated,
}

/// Frame loop state machine.
///
/// The host polls it once per iteration, after window events have been
/// pumped. It never suspends; the close check happens at the top of each
/// iteration only.
#[derive(Debug)]
pub struct FrameLoop {
    phase: LoopPhase,
    bindings: KeyBindings,
    frames: u64,
}

impl FrameLoop {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            phase: LoopPhase::Running,
            bindings,
            frames: 0,
        }
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    /// Number of frames started so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Check for a close signal. Moves Running to Closing when the window
    /// asked to close or a close key is held.
    pub fn poll(&mut self, input: &InputState) -> LoopPhase {
        if self.phase == LoopPhase::Running && input.wants_close(&self.bindings) {
            tracing::info!(frames = self.frames, "close requested");
            self.phase = LoopPhase::Closing;
        }
        self.phase
    }

    /// Start a frame. Returns false once the loop is no longer running.
    pub fn begin_frame(&mut self) -> bool {
        if self.phase != LoopPhase::Running {
            return false;
        }
        self.frames += 1;
        true
    }

    /// Final transition, after teardown has run.
    pub fn terminate(&mut self) {
        if self.phase != LoopPhase::Terminated {
            tracing::debug!(from = ?self.phase, "frame loop terminated");
            self.phase = LoopPhase::Terminated;
        }
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn starts_running() {
        let mut frame_loop = FrameLoop::default();
        assert_eq!(frame_loop.poll(&InputState::new()), LoopPhase::Running);
        assert!(frame_loop.begin_frame());
        assert_eq!(frame_loop.frames(), 1);
    }

    #[test]
    fn held_escape_closes_on_next_poll_regardless_of_frame_count() {
        for prior_frames in [0u64, 1, 500] {
            let mut frame_loop = FrameLoop::default();
            let mut input = InputState::new();
            for _ in 0..prior_frames {
                assert_eq!(frame_loop.poll(&input), LoopPhase::Running);
                assert!(frame_loop.begin_frame());
            }

            input.set_key(KeyCode::Escape, true);
            assert_eq!(frame_loop.poll(&input), LoopPhase::Closing);
            assert!(!frame_loop.begin_frame());
            assert_eq!(frame_loop.frames(), prior_frames);
        }
    }

    #[test]
    fn holding_escape_is_idempotent() {
        let mut frame_loop = FrameLoop::default();
        let mut input = InputState::new();
        input.set_key(KeyCode::Escape, true);
        for _ in 0..3 {
            assert_eq!(frame_loop.poll(&input), LoopPhase::Closing);
        }
    }

    #[test]
    fn window_close_request_closes() {
        let mut frame_loop = FrameLoop::default();
        let mut input = InputState::new();
        input.request_close();
        assert_eq!(frame_loop.poll(&input), LoopPhase::Closing);
    }

    #[test]
    fn releasing_escape_does_not_reopen() {
        let mut frame_loop = FrameLoop::default();
        let mut input = InputState::new();
        input.set_key(KeyCode::Escape, true);
        frame_loop.poll(&input);
        input.set_key(KeyCode::Escape, false);
        assert_eq!(frame_loop.poll(&input), LoopPhase::Closing);
    }

    #[test]
    fn terminate_is_final() {
        let mut frame_loop = FrameLoop::default();
        let mut input = InputState::new();
        input.request_close();
        frame_loop.poll(&input);
        frame_loop.terminate();
        assert_eq!(frame_loop.phase(), LoopPhase::Terminated);
        assert_eq!(frame_loop.poll(&input), LoopPhase::Terminated);
        assert!(!frame_loop.begin_frame());
    }
}
