//! Running state of one print call.

use crate::domain::layout::LayoutPlan;
use crate::printer::WrapPolicy;

/// Lifecycle of a print call.
///
/// `Idle → Emitting → … → Done | Failed`.  `Failed` and `Done` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionState {
    Idle,
    Emitting,
    Done,
    Failed,
}

/// Where the password just produced goes relative to the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// Followed by a single space; the line continues.
    Continuing,
    /// Followed by a newline; the next password starts a fresh line.
    Wrapping,
}

/// Counters for one print call.  Discarded when the call returns.
#[derive(Debug)]
pub(crate) struct PrintSession {
    policy: WrapPolicy,
    screen_columns: usize,
    columns_per_line: usize,
    slot_width: usize,
    /// Passwords placed on the current line.
    current_column: usize,
    /// Character cells used on the current line, separators included.
    offset: usize,
    remaining: usize,
    lines: usize,
    state: SessionState,
}

impl PrintSession {
    pub(crate) fn new(
        policy: WrapPolicy,
        screen_columns: usize,
        plan: &LayoutPlan,
        slot_width: usize,
        count: usize,
    ) -> Self {
        Self {
            policy,
            screen_columns,
            columns_per_line: plan.columns_per_line,
            slot_width,
            current_column: 0,
            offset: 0,
            remaining: count,
            lines: 0,
            state: SessionState::Idle,
        }
    }

    pub(crate) fn state(&self) -> SessionState {
        self.state
    }

    pub(crate) fn remaining(&self) -> usize {
        self.remaining
    }

    pub(crate) fn lines(&self) -> usize {
        self.lines
    }

    /// Decides the placement of the next password and advances the counters.
    ///
    /// Must only be called while passwords remain.
    pub(crate) fn place_next(&mut self) -> Placement {
        debug_assert!(self.remaining > 0, "place_next called with nothing left");
        self.state = SessionState::Emitting;

        let is_last = self.remaining == 1;
        let wrap = is_last
            || match self.policy {
                WrapPolicy::ByAccumulatedWidth => {
                    self.offset + self.slot_width >= self.screen_columns
                }
                WrapPolicy::ByColumnCount => self.current_column + 1 >= self.columns_per_line,
            };

        self.remaining -= 1;
        if wrap {
            self.current_column = 0;
            self.offset = 0;
            self.lines += 1;
            Placement::Wrapping
        } else {
            self.current_column += 1;
            self.offset += self.slot_width;
            Placement::Continuing
        }
    }

    pub(crate) fn finish(&mut self) {
        self.state = SessionState::Done;
    }

    pub(crate) fn fail(&mut self) {
        self.state = SessionState::Failed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::{PasswordLength, ScreenGeometry};

    fn session(policy: WrapPolicy, rows: u16, cols: u16, len: usize, count: usize) -> PrintSession {
        let geometry = ScreenGeometry::new(rows, cols).unwrap();
        let length = PasswordLength::new(len).unwrap();
        let plan = LayoutPlan::compute(&geometry, length);
        PrintSession::new(policy, geometry.columns(), &plan, length.with_separator(), count)
    }

    fn placements(mut s: PrintSession) -> Vec<Placement> {
        let mut out = Vec::new();
        while s.remaining() > 0 {
            out.push(s.place_next());
        }
        out
    }

    #[test]
    fn test_new_session_starts_idle() {
        let s = session(WrapPolicy::ByColumnCount, 24, 80, 8, 3);
        assert_eq!(s.state(), SessionState::Idle);
        assert_eq!(s.remaining(), 3);
    }

    #[test]
    fn test_place_next_moves_session_to_emitting() {
        let mut s = session(WrapPolicy::ByColumnCount, 24, 80, 8, 3);
        s.place_next();
        assert_eq!(s.state(), SessionState::Emitting);
        assert_eq!(s.remaining(), 2);
    }

    #[test]
    fn test_width_policy_wraps_when_offset_reaches_columns() {
        // 11 columns, length 5: offset 0 + 6 < 11 continues, 6 + 6 >= 11 wraps
        let s = session(WrapPolicy::ByAccumulatedWidth, 24, 11, 5, 3);
        assert_eq!(
            placements(s),
            vec![Placement::Continuing, Placement::Wrapping, Placement::Wrapping]
        );
    }

    #[test]
    fn test_count_policy_uses_bonus_column() {
        // 11 columns, length 5: columns_per_line is 2 thanks to the remainder column
        let s = session(WrapPolicy::ByColumnCount, 24, 11, 5, 4);
        assert_eq!(
            placements(s),
            vec![
                Placement::Continuing,
                Placement::Wrapping,
                Placement::Continuing,
                Placement::Wrapping,
            ]
        );
    }

    #[test]
    fn test_policies_disagree_when_remainder_is_short() {
        // 13 columns, length 5: 13 / 6 = 2 remainder 1, so two passwords per line
        // by count, but the width heuristic only wraps once 6 + 6 + 6 >= 13.
        let by_count = placements(session(WrapPolicy::ByColumnCount, 24, 13, 5, 6));
        let by_width = placements(session(WrapPolicy::ByAccumulatedWidth, 24, 13, 5, 6));

        assert_eq!(by_count[..2], [Placement::Continuing, Placement::Wrapping]);
        assert_eq!(
            by_width[..3],
            [Placement::Continuing, Placement::Continuing, Placement::Wrapping]
        );
    }

    #[test]
    fn test_count_policy_wraps_every_password_when_none_fit_on_a_line() {
        let s = session(WrapPolicy::ByColumnCount, 6, 10, 12, 3);
        assert!(placements(s).iter().all(|p| *p == Placement::Wrapping));
    }

    #[test]
    fn test_last_password_always_wraps() {
        let s = session(WrapPolicy::ByColumnCount, 24, 80, 8, 2);
        assert_eq!(placements(s), vec![Placement::Continuing, Placement::Wrapping]);
    }

    #[test]
    fn test_lines_counts_wraps() {
        let mut s = session(WrapPolicy::ByColumnCount, 24, 11, 5, 5);
        while s.remaining() > 0 {
            s.place_next();
        }
        assert_eq!(s.lines(), 3);
    }

    #[test]
    fn test_finish_and_fail_are_terminal_states() {
        let mut done = session(WrapPolicy::ByColumnCount, 24, 80, 8, 1);
        done.place_next();
        done.finish();
        assert_eq!(done.state(), SessionState::Done);

        let mut failed = session(WrapPolicy::ByColumnCount, 24, 80, 8, 3);
        failed.place_next();
        failed.fail();
        assert_eq!(failed.state(), SessionState::Failed);
        assert_eq!(failed.remaining(), 2);
    }
}
