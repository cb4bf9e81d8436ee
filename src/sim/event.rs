use super::trajectory::{Sample, SimulationResult, Termination};

// ---------------------------------------------------------------------------
// Flight events
// ---------------------------------------------------------------------------

/// Kinds of flight events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Launch,
    Apex,
    Height { height: f64, ascending: bool },
    GroundContact,
    Cutoff,
}

/// A discrete event located on a recorded sample.
#[derive(Debug, Clone)]
pub struct SimEvent {
    pub time: f64,
    pub kind: EventKind,
    pub sample: Sample,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive samples and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind>;
}

/// Detects the apex (vertical velocity turning from rising to falling).
pub struct ApexDetector;

impl EventDetector for ApexDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind> {
        if prev.vy > 0.0 && current.vy <= 0.0 {
            Some(EventKind::Apex)
        } else {
            None
        }
    }
}

/// Reports every pass through a fixed height above ground, in either direction.
///
/// A sample sitting exactly on the height counts as reached; leaving it again
/// reports the next crossing.
pub struct HeightDetector {
    height: f64,
}

impl HeightDetector {
    pub fn new(height: f64) -> Self {
        Self { height }
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl EventDetector for HeightDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind> {
        let h = self.height;
        if prev.y < h && current.y >= h {
            Some(EventKind::Height { height: h, ascending: true })
        } else if prev.y > h && current.y <= h {
            Some(EventKind::Height { height: h, ascending: false })
        } else {
            None
        }
    }
}

/// Scan a trajectory with the given detectors.
///
/// Launch and the terminal event (ground contact or cutoff) are always
/// reported; detector events are attached to the later sample of each pair.
pub fn detect_events(
    result: &SimulationResult,
    detectors: &mut [Box<dyn EventDetector>],
) -> Vec<SimEvent> {
    let first = *result.first();
    let mut events = vec![SimEvent { time: first.t, kind: EventKind::Launch, sample: first }];

    for pair in result.trajectory().windows(2) {
        for detector in detectors.iter_mut() {
            if let Some(kind) = detector.check(&pair[0], &pair[1]) {
                events.push(SimEvent { time: pair[1].t, kind, sample: pair[1] });
            }
        }
    }

    let last = *result.last();
    let kind = match result.termination() {
        Termination::GroundContact => EventKind::GroundContact,
        Termination::Cutoff => EventKind::Cutoff,
    };
    events.push(SimEvent { time: last.t, kind, sample: last });
    events
}

/// Launch, apex, and terminal events.
pub fn flight_events(result: &SimulationResult) -> Vec<SimEvent> {
    crossing_events(result, &[])
}

/// [`flight_events`] plus every crossing of each height in `heights`, m.
/// Non-finite heights are skipped.
pub fn crossing_events(result: &SimulationResult, heights: &[f64]) -> Vec<SimEvent> {
    let mut detectors: Vec<Box<dyn EventDetector>> = vec![Box::new(ApexDetector)];
    detectors.extend(
        heights
            .iter()
            .filter(|h| h.is_finite())
            .map(|&h| Box::new(HeightDetector::new(h)) as Box<dyn EventDetector>),
    );
    detect_events(result, &mut detectors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ParameterSet;
    use crate::sim::integrate;

    fn make_sample(y: f64, vy: f64) -> Sample {
        Sample { x: 0.0, y, t: 0.0, v: vy.abs(), vx: 0.0, vy }
    }

    #[test]
    fn apex_detected() {
        let mut det = ApexDetector;
        let prev = make_sample(15.0, 0.3);
        let curr = make_sample(15.01, -0.2);
        assert_eq!(det.check(&prev, &curr), Some(EventKind::Apex));
    }

    #[test]
    fn height_detector_reports_direction() {
        let mut det = HeightDetector::new(10.0);
        let down = det.check(&make_sample(10.5, -5.0), &make_sample(9.8, -5.2));
        assert_eq!(down, Some(EventKind::Height { height: 10.0, ascending: false }));
        let up = det.check(&make_sample(9.0, 4.0), &make_sample(10.0, 3.5));
        assert_eq!(up, Some(EventKind::Height { height: 10.0, ascending: true }));
        assert!(det.check(&make_sample(11.0, 1.0), &make_sample(12.0, 0.5)).is_none());
    }

    #[test]
    fn lob_crosses_a_height_twice() {
        let r = integrate(&ParameterSet::new(20.0, 60.0, 9.81));
        let events = crossing_events(&r, &[5.0, f64::NAN, 1e6]);
        let crossings: Vec<bool> = events
            .iter()
            .filter_map(|e| match e.kind {
                EventKind::Height { height, ascending } => {
                    assert_eq!(height, 5.0);
                    Some(ascending)
                }
                _ => None,
            })
            .collect();
        assert_eq!(crossings, vec![true, false]);
        assert_eq!(events.first().map(|e| &e.kind), Some(&EventKind::Launch));
        assert_eq!(events.last().map(|e| &e.kind), Some(&EventKind::GroundContact));
    }

    #[test]
    fn elevated_drop_crosses_only_downward() {
        let r = integrate(&ParameterSet::new(0.0, 0.0, 9.81).with_initial_height(10.0));
        let events = crossing_events(&r, &[5.0]);
        let heights: Vec<&EventKind> = events
            .iter()
            .map(|e| &e.kind)
            .filter(|k| matches!(k, EventKind::Height { .. }))
            .collect();
        assert_eq!(heights, vec![&EventKind::Height { height: 5.0, ascending: false }]);
    }

    #[test]
    fn lob_has_launch_apex_and_landing() {
        let r = integrate(&ParameterSet::new(20.0, 60.0, 9.81));
        let events = flight_events(&r);
        let kinds: Vec<&EventKind> = events.iter().map(|e| &e.kind).collect();
        assert_eq!(kinds, vec![&EventKind::Launch, &EventKind::Apex, &EventKind::GroundContact]);
        assert!(events.windows(2).all(|w| w[0].time <= w[1].time));
    }

    #[test]
    fn drop_has_no_apex() {
        let r = integrate(&ParameterSet::new(0.0, 0.0, 9.81).with_initial_height(10.0));
        assert!(flight_events(&r).iter().all(|e| e.kind != EventKind::Apex));
    }
}
