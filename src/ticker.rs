use crate::toast::TOAST_EXIT;
use std::time::Duration;

/// Redraws per toast exit transition, so the leaving phase is seen
pub const FRAMES_PER_EXIT: u32 = 3;

/// Event-poll timeout for the main loop.
/// Idle ticks only prune and repaint toasts; nothing else is time-driven.
pub fn tick_duration() -> Duration {
    TOAST_EXIT / FRAMES_PER_EXIT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{ToastKind, ToastPhase, ToastStack, TOAST_VISIBLE};
    use std::time::Instant;

    #[test]
    fn test_tick_fits_inside_exit_transition() {
        assert_eq!(tick_duration(), Duration::from_millis(100));
        assert!(tick_duration() * FRAMES_PER_EXIT <= TOAST_EXIT);
    }

    #[test]
    fn test_leaving_toast_is_drawn_before_it_goes() {
        let start = Instant::now();
        let mut stack = ToastStack::new();
        stack.push(ToastKind::Success, "saved", start);

        // First tick after the visible period still lands in the exit phase
        let ticks = TOAST_VISIBLE.as_millis() / tick_duration().as_millis() + 1;
        let at = start + tick_duration() * ticks as u32;
        stack.prune(at);
        assert_eq!(stack.iter().next().map(|t| t.phase(at)), Some(ToastPhase::Leaving));
    }
}
