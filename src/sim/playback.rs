use super::trajectory::SimulationResult;

/// Duration used when every shown flight has zero length, s.
pub const MIN_DURATION: f64 = 0.1;

/// Presentation clock for animating already-computed trajectories.
///
/// Owned by the presentation layer; advancing or stopping it never touches
/// simulation results.
#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    current_time: f64,
    duration: f64,
    playing: bool,
    speed: f64,
}

impl Playback {
    pub fn new(duration: f64) -> Self {
        Self {
            current_time: 0.0,
            duration: sanitize_duration(duration),
            playing: false,
            speed: 1.0,
        }
    }

    /// Clock spanning the longest of the shown flights.
    pub fn for_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a SimulationResult>,
    {
        Self::new(longest_flight(results))
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_finished(&self) -> bool {
        self.current_time >= self.duration
    }

    /// Elapsed fraction in [0, 1].
    pub fn progress(&self) -> f64 {
        (self.current_time / self.duration).clamp(0.0, 1.0)
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Playback rate relative to wall-clock time. Non-positive rates are ignored.
    pub fn set_speed(&mut self, speed: f64) {
        if speed.is_finite() && speed > 0.0 {
            self.speed = speed;
        }
    }

    /// Start playing; a finished clock rewinds first.
    pub fn play(&mut self) {
        if self.is_finished() {
            self.current_time = 0.0;
        }
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn reset(&mut self) {
        self.current_time = 0.0;
        self.playing = false;
    }

    pub fn seek(&mut self, time: f64) {
        self.current_time = if time.is_nan() { 0.0 } else { time.clamp(0.0, self.duration) };
    }

    /// Replace the span (e.g. after a re-run), keeping the position in range.
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = sanitize_duration(duration);
        self.current_time = self.current_time.min(self.duration);
    }

    /// Move the clock forward by `elapsed` wall-clock seconds.
    /// Returns true when this call reached the end; playback then stops there.
    pub fn advance(&mut self, elapsed: f64) -> bool {
        if !self.playing || !elapsed.is_finite() || elapsed <= 0.0 {
            return false;
        }
        let next = self.current_time + elapsed * self.speed;
        if next >= self.duration {
            self.current_time = self.duration;
            self.playing = false;
            true
        } else {
            self.current_time = next;
            false
        }
    }
}

/// Longest time of flight among `results`, 0 when empty.
pub fn longest_flight<'a, I>(results: I) -> f64
where
    I: IntoIterator<Item = &'a SimulationResult>,
{
    results
        .into_iter()
        .map(SimulationResult::time_of_flight)
        .fold(0.0_f64, f64::max)
}

fn sanitize_duration(duration: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        MIN_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ParameterSet;
    use crate::sim::{integrate, sample_at};

    #[test]
    fn advances_until_the_end_then_stops() {
        let mut clock = Playback::new(1.0);
        assert!(!clock.advance(0.5), "paused clock must not move");
        assert_eq!(clock.current_time(), 0.0);

        clock.play();
        assert!(!clock.advance(0.4));
        assert!((clock.current_time() - 0.4).abs() < 1e-12);
        assert!(clock.advance(0.7));
        assert_eq!(clock.current_time(), 1.0);
        assert!(!clock.is_playing());
        assert!(clock.is_finished());
    }

    #[test]
    fn play_after_finish_rewinds() {
        let mut clock = Playback::new(2.0);
        clock.seek(5.0);
        assert_eq!(clock.current_time(), 2.0);
        clock.play();
        assert_eq!(clock.current_time(), 0.0);
        assert!(clock.is_playing());
        clock.toggle();
        assert!(!clock.is_playing());
    }

    #[test]
    fn zero_length_flights_get_minimum_duration() {
        assert_eq!(Playback::new(0.0).duration(), MIN_DURATION);
        assert_eq!(Playback::for_results(std::iter::empty::<&SimulationResult>()).duration(), MIN_DURATION);
    }

    #[test]
    fn comparison_clock_spans_longest_flight() {
        let params = ParameterSet::new(20.0, 45.0, 9.81);
        let earth = integrate(&params);
        let moon = integrate(&params.with_gravity(1.62));
        let clock = Playback::for_results([&earth, &moon]);
        assert_eq!(clock.duration(), moon.time_of_flight());

        // The shorter flight rests on its ground sample once its own time is up.
        let mut clock = clock;
        clock.seek(earth.time_of_flight() + 1.0);
        assert_eq!(sample_at(&earth, clock.current_time()), earth.last());
    }

    #[test]
    fn speed_scales_elapsed_time() {
        let mut clock = Playback::new(10.0);
        clock.set_speed(2.0);
        clock.set_speed(-1.0);
        assert_eq!(clock.speed(), 2.0);
        clock.play();
        clock.advance(1.5);
        assert!((clock.current_time() - 3.0).abs() < 1e-12);
        clock.set_duration(2.0);
        assert_eq!(clock.current_time(), 2.0);
    }
}
