//! Countdown timer state machine.
//!
//! `H` is the tick source handle: dropping it must stop the repeating tick.
//! The timer owns at most one handle and drops it on every transition out
//! of `Running`. Each start opens a new [`TickGeneration`]; ticks scheduled
//! under an older generation are ignored even if they were already queued.

use crate::config::TimerSection;
use crate::error::TimeInputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Configured,
    Running,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickGeneration(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stale generation or not running; nothing changed.
    Ignored,
    Decremented { remaining: u32 },
    Expired,
}

#[derive(Debug)]
pub struct CountdownTimer<H> {
    phase: TimerPhase,
    /// `None` after a start with a field that is not a number.
    remaining: Option<u32>,
    generation: u64,
    tick_source: Option<H>,
    expired_message: String,
}

impl<H> CountdownTimer<H> {
    pub fn new(settings: &TimerSection) -> Self {
        Self {
            phase: TimerPhase::Configured,
            remaining: total_seconds(settings.minutes, settings.seconds),
            generation: 0,
            tick_source: None,
            expired_message: settings.expired_message.clone(),
        }
    }

    /// Start (or restart) from the current field values.
    ///
    /// The previous tick source is dropped before anything else happens. The
    /// total is computed once here; later edits to the fields are ignored
    /// until the next start.
    pub fn start(
        &mut self,
        minutes: &str,
        seconds: &str,
        spawn_tick: impl FnOnce(TickGeneration) -> H,
    ) -> Result<u32, TimeInputError> {
        self.tick_source = None;
        self.generation += 1;

        let total = parse_field(minutes)
            .zip(parse_field(seconds))
            .and_then(|(minutes, seconds)| total_seconds(minutes, seconds));
        let Some(total) = total else {
            self.phase = TimerPhase::Configured;
            self.remaining = None;
            return Err(TimeInputError {
                minutes: minutes.to_string(),
                seconds: seconds.to_string(),
            });
        };

        self.phase = TimerPhase::Running;
        self.remaining = Some(total);
        self.tick_source = Some(spawn_tick(TickGeneration(self.generation)));
        Ok(total)
    }

    pub fn tick(&mut self, generation: TickGeneration) -> TickOutcome {
        if self.phase != TimerPhase::Running || generation != TickGeneration(self.generation) {
            return TickOutcome::Ignored;
        }
        match self.remaining {
            Some(remaining) if remaining > 1 => {
                self.remaining = Some(remaining - 1);
                TickOutcome::Decremented { remaining: remaining - 1 }
            }
            _ => {
                self.remaining = Some(0);
                self.phase = TimerPhase::Expired;
                self.tick_source = None;
                TickOutcome::Expired
            }
        }
    }

    /// Terminal transition. The tick source is dropped unconditionally.
    pub fn close(mut self) {
        self.tick_source = None;
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    #[cfg(test)]
    fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    #[cfg(test)]
    fn has_tick_source(&self) -> bool {
        self.tick_source.is_some()
    }

    pub fn display(&self) -> String {
        match (self.phase, self.remaining) {
            (TimerPhase::Expired, _) => self.expired_message.clone(),
            (_, Some(remaining)) => format_clock(remaining),
            (_, None) => "--:--".to_string(),
        }
    }
}

/// `MM:SS`, both fields zero-padded to width 2.
pub fn format_clock(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// A non-negative integer field; anything else is "not a number".
pub fn parse_field(field: &str) -> Option<u32> {
    field.trim().parse().ok()
}

fn total_seconds(minutes: u32, seconds: u32) -> Option<u32> {
    minutes.checked_mul(60)?.checked_add(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stand-in for a scheduled tick task; tracks how many are alive.
    struct TickSource {
        live: Rc<Cell<usize>>,
        generation: TickGeneration,
    }

    impl Drop for TickSource {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    fn spawner(live: &Rc<Cell<usize>>) -> impl FnOnce(TickGeneration) -> TickSource {
        let live = live.clone();
        move |generation| {
            live.set(live.get() + 1);
            TickSource { live, generation }
        }
    }

    fn settings() -> TimerSection {
        TimerSection::default()
    }

    fn current_generation(timer: &CountdownTimer<TickSource>) -> TickGeneration {
        timer.tick_source.as_ref().map(|source| source.generation).unwrap()
    }

    #[test]
    fn configured_timer_shows_default_duration() {
        let timer: CountdownTimer<TickSource> = CountdownTimer::new(&settings());
        assert_eq!(timer.phase(), TimerPhase::Configured);
        assert_eq!(timer.display(), "25:00");
        assert!(!timer.has_tick_source());
    }

    #[test]
    fn three_second_countdown_expires_on_third_tick() {
        let live = Rc::new(Cell::new(0));
        let mut timer = CountdownTimer::new(&settings());

        assert_eq!(timer.start("0", "3", spawner(&live)), Ok(3));
        assert_eq!(timer.display(), "00:03");
        let generation = current_generation(&timer);

        assert_eq!(timer.tick(generation), TickOutcome::Decremented { remaining: 2 });
        assert_eq!(timer.display(), "00:02");
        assert_eq!(timer.tick(generation), TickOutcome::Decremented { remaining: 1 });
        assert_eq!(timer.display(), "00:01");
        assert_eq!(timer.tick(generation), TickOutcome::Expired);
        assert_eq!(timer.display(), "Time's up!");
        assert_eq!(live.get(), 0);

        assert_eq!(timer.tick(generation), TickOutcome::Ignored);
        assert_eq!(timer.remaining(), Some(0));
        assert_eq!(timer.display(), "Time's up!");
    }

    #[test]
    fn zero_duration_expires_on_first_tick() {
        let live = Rc::new(Cell::new(0));
        let mut timer = CountdownTimer::new(&settings());
        timer.start("0", "0", spawner(&live)).unwrap();
        assert_eq!(timer.display(), "00:00");
        let generation = current_generation(&timer);
        assert_eq!(timer.tick(generation), TickOutcome::Expired);
        assert_eq!(timer.phase(), TimerPhase::Expired);
    }

    #[test]
    fn restarting_never_leaves_two_tick_sources() {
        let live = Rc::new(Cell::new(0));
        let mut timer = CountdownTimer::new(&settings());

        for _ in 0..5 {
            timer.start("1", "0", spawner(&live)).unwrap();
            assert_eq!(live.get(), 1);
        }

        let generation = current_generation(&timer);
        timer.tick(generation);
        timer.start("0", "10", spawner(&live)).unwrap();
        assert_eq!(live.get(), 1);
        assert_eq!(timer.remaining(), Some(10));
    }

    #[test]
    fn overlapping_starts_decrement_once_per_tick() {
        let live = Rc::new(Cell::new(0));
        let mut timer = CountdownTimer::new(&settings());

        timer.start("0", "30", spawner(&live)).unwrap();
        let stale = current_generation(&timer);
        timer.start("0", "30", spawner(&live)).unwrap();
        let fresh = current_generation(&timer);

        // One second passes: both the superseded and the live source deliver.
        assert_eq!(timer.tick(stale), TickOutcome::Ignored);
        assert_eq!(timer.tick(fresh), TickOutcome::Decremented { remaining: 29 });
        assert_eq!(timer.display(), "00:29");
    }

    #[test]
    fn only_a_new_start_changes_the_total() {
        let live = Rc::new(Cell::new(0));
        let mut timer = CountdownTimer::new(&settings());
        let minutes = String::from("2");
        let mut seconds = String::from("0");

        timer.start(&minutes, &seconds, spawner(&live)).unwrap();
        let first = current_generation(&timer);
        seconds.push('5');
        assert_eq!(timer.tick(first), TickOutcome::Decremented { remaining: 119 });
        assert_eq!(timer.display(), "01:59");

        assert_eq!(timer.start(&minutes, &seconds, spawner(&live)), Ok(125));
        let second = current_generation(&timer);
        assert_eq!(timer.tick(first), TickOutcome::Ignored);
        assert_eq!(timer.tick(second), TickOutcome::Decremented { remaining: 124 });
        assert_eq!(timer.display(), "02:04");
    }

    #[test]
    fn restart_after_expiry_runs_again() {
        let live = Rc::new(Cell::new(0));
        let mut timer = CountdownTimer::new(&settings());
        timer.start("0", "1", spawner(&live)).unwrap();
        let generation = current_generation(&timer);
        assert_eq!(timer.tick(generation), TickOutcome::Expired);

        timer.start("0", "5", spawner(&live)).unwrap();
        assert_eq!(timer.phase(), TimerPhase::Running);
        assert_eq!(timer.display(), "00:05");
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn close_cancels_the_tick_source() {
        let live = Rc::new(Cell::new(0));
        let mut timer = CountdownTimer::new(&settings());
        timer.start("5", "0", spawner(&live)).unwrap();
        assert_eq!(live.get(), 1);
        timer.close();
        assert_eq!(live.get(), 0);

        let idle: CountdownTimer<TickSource> = CountdownTimer::new(&settings());
        idle.close();
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn not_a_number_input_stops_ticking() {
        let live = Rc::new(Cell::new(0));
        let mut timer = CountdownTimer::new(&settings());
        timer.start("1", "0", spawner(&live)).unwrap();
        let generation = current_generation(&timer);

        let error = timer.start("-5", "abc", spawner(&live)).unwrap_err();
        assert_eq!(error.minutes, "-5");
        assert_eq!(live.get(), 0);
        assert_eq!(timer.phase(), TimerPhase::Configured);
        assert_eq!(timer.display(), "--:--");
        assert_eq!(timer.tick(generation), TickOutcome::Ignored);

        assert!(timer.start("", "10", spawner(&live)).is_err());
    }

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(25 * 60), "25:00");
        assert_eq!(format_clock(100 * 60 + 9), "100:09");
    }

    #[test]
    fn field_parsing() {
        assert_eq!(parse_field(" 25 "), Some(25));
        assert_eq!(parse_field("00"), Some(0));
        assert_eq!(parse_field("-1"), None);
        assert_eq!(parse_field("1.5"), None);
        assert_eq!(parse_field(""), None);
    }

    #[test]
    fn seconds_above_a_minute_fold_into_minutes() {
        let live = Rc::new(Cell::new(0));
        let mut timer = CountdownTimer::new(&settings());
        assert_eq!(timer.start("0", "90", spawner(&live)), Ok(90));
        assert_eq!(timer.display(), "01:30");
    }
}
