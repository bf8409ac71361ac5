// SPDX-License-Identifier: MPL-2.0
//! Simulated scanning sequence.
//!
//! A scan is a fixed, linear timeline: three steps complete one after the
//! other, then the scan settles and finishes. Nothing is analyzed; the
//! result is always the sample record from [`crate::catalog`].
//!
//! The timeline is delivered by [`milestones`], a stream the UI runs as an
//! abortable task. Every run carries a [`ScanTicket`] and the
//! [`ScanSequencer`] drops milestones whose ticket is not the active one, so
//! a cancelled run can never advance or complete a later one.

use crate::catalog::{PlantRecord, BLUE_SAGE};
use futures_util::stream::{self, Stream, StreamExt};
use image_rs::RgbaImage;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Where the sequence currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanStage {
    #[default]
    Idle,
    Analyzing,
    DetectingLeaves,
    Identifying,
    Done,
}

/// Timed checkpoints of a run, in delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMilestone {
    AnalysisComplete,
    LeavesDetected,
    PlantIdentified,
    Finished,
}

impl fmt::Display for ScanMilestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScanMilestone::AnalysisComplete => "analysis-complete",
            ScanMilestone::LeavesDetected => "leaves-detected",
            ScanMilestone::PlantIdentified => "plant-identified",
            ScanMilestone::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Identifies one scan run. Tickets are unique for the whole process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanTicket(u64);

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Completion flags shown by the step list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanProgress {
    pub analyzed: bool,
    pub leaves_detected: bool,
    pub identified: bool,
    /// Step currently in progress, 1 to 3.
    pub current_step: u8,
}

impl Default for ScanProgress {
    fn default() -> Self {
        Self {
            analyzed: false,
            leaves_detected: false,
            identified: false,
            current_step: 1,
        }
    }
}

/// Display state of one step row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Loading,
    Completed,
}

impl ScanProgress {
    /// Returns the display status of `step` (1 to 3).
    #[must_use]
    pub fn step_status(&self, step: u8) -> StepStatus {
        let done = match step {
            1 => self.analyzed,
            2 => self.leaves_detected,
            3 => self.identified,
            _ => return StepStatus::Pending,
        };
        if done {
            StepStatus::Completed
        } else if step == self.current_step {
            StepStatus::Loading
        } else {
            StepStatus::Pending
        }
    }
}

/// Result of feeding a milestone to the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Stale ticket or out-of-order milestone.
    Ignored,
    /// A step completed.
    Progressed,
    /// The run finished. Reported once per run.
    Completed,
}

/// Applies milestones to the progress of the active run.
#[derive(Debug, Clone, Default)]
pub struct ScanSequencer {
    stage: ScanStage,
    progress: ScanProgress,
    active: Option<ScanTicket>,
}

impl ScanSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new run, invalidating any previous ticket.
    pub fn start(&mut self) -> ScanTicket {
        let ticket = ScanTicket(NEXT_TICKET.fetch_add(1, Ordering::Relaxed));
        self.active = Some(ticket);
        self.stage = ScanStage::Analyzing;
        self.progress = ScanProgress::default();
        ticket
    }

    /// Applies `milestone` if it belongs to the active run and is the next
    /// one expected.
    pub fn advance(&mut self, ticket: ScanTicket, milestone: ScanMilestone) -> Advance {
        if self.active != Some(ticket) {
            return Advance::Ignored;
        }

        match (self.stage, milestone) {
            (ScanStage::Analyzing, ScanMilestone::AnalysisComplete) => {
                self.progress.analyzed = true;
                self.progress.current_step = 2;
                self.stage = ScanStage::DetectingLeaves;
                Advance::Progressed
            }
            (ScanStage::DetectingLeaves, ScanMilestone::LeavesDetected) => {
                self.progress.leaves_detected = true;
                self.progress.current_step = 3;
                self.stage = ScanStage::Identifying;
                Advance::Progressed
            }
            (ScanStage::Identifying, ScanMilestone::PlantIdentified)
                if !self.progress.identified =>
            {
                self.progress.identified = true;
                Advance::Progressed
            }
            (ScanStage::Identifying, ScanMilestone::Finished) if self.progress.identified => {
                self.stage = ScanStage::Done;
                self.active = None;
                Advance::Completed
            }
            _ => Advance::Ignored,
        }
    }

    /// Abandons the active run. Its pending milestones will be ignored.
    pub fn cancel(&mut self) {
        self.active = None;
        self.stage = ScanStage::Idle;
        self.progress = ScanProgress::default();
    }

    #[must_use]
    pub fn stage(&self) -> ScanStage {
        self.stage
    }

    #[must_use]
    pub fn progress(&self) -> ScanProgress {
        self.progress
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Ticket of the run in progress, if any.
    #[must_use]
    pub fn ticket(&self) -> Option<ScanTicket> {
        self.active
    }
}

/// Delays between milestones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTimeline {
    pub step_delay: Duration,
    pub settle_delay: Duration,
}

impl Default for ScanTimeline {
    fn default() -> Self {
        use crate::app::config::{DEFAULT_SCAN_SETTLE_DELAY_MS, DEFAULT_SCAN_STEP_DELAY_MS};
        Self {
            step_delay: Duration::from_millis(DEFAULT_SCAN_STEP_DELAY_MS),
            settle_delay: Duration::from_millis(DEFAULT_SCAN_SETTLE_DELAY_MS),
        }
    }
}

impl ScanTimeline {
    /// Each milestone with the delay since the previous one.
    #[must_use]
    pub fn schedule(&self) -> [(Duration, ScanMilestone); 4] {
        [
            (self.step_delay, ScanMilestone::AnalysisComplete),
            (self.step_delay, ScanMilestone::LeavesDetected),
            (self.step_delay, ScanMilestone::PlantIdentified),
            (self.settle_delay, ScanMilestone::Finished),
        ]
    }

    /// Time from start to completion.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.schedule().iter().map(|(delay, _)| *delay).sum()
    }
}

/// Emits the milestones of one run on the tokio clock.
pub fn milestones(
    ticket: ScanTicket,
    timeline: ScanTimeline,
) -> impl Stream<Item = (ScanTicket, ScanMilestone)> {
    stream::iter(timeline.schedule()).then(move |(delay, milestone)| async move {
        tokio::time::sleep(delay).await;
        (ticket, milestone)
    })
}

/// Names the plant in `image`.
///
/// No recognition model is bundled, so this always answers with the sample
/// record.
#[must_use]
pub fn identify(_image: &RgbaImage) -> &'static PlantRecord {
    &BLUE_SAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: [ScanMilestone; 4] = [
        ScanMilestone::AnalysisComplete,
        ScanMilestone::LeavesDetected,
        ScanMilestone::PlantIdentified,
        ScanMilestone::Finished,
    ];

    #[test]
    fn full_run_walks_every_stage_in_order() {
        let mut sequencer = ScanSequencer::new();
        let ticket = sequencer.start();
        assert_eq!(sequencer.stage(), ScanStage::Analyzing);

        let mut stages = vec![sequencer.stage()];
        let mut outcomes = Vec::new();
        for milestone in ORDER {
            outcomes.push(sequencer.advance(ticket, milestone));
            if stages.last() != Some(&sequencer.stage()) {
                stages.push(sequencer.stage());
            }
        }

        assert_eq!(
            stages,
            vec![
                ScanStage::Analyzing,
                ScanStage::DetectingLeaves,
                ScanStage::Identifying,
                ScanStage::Done,
            ]
        );
        assert_eq!(
            outcomes.iter().filter(|o| **o == Advance::Completed).count(),
            1
        );
        assert_eq!(outcomes.last(), Some(&Advance::Completed));
    }

    #[test]
    fn completion_is_reported_once() {
        let mut sequencer = ScanSequencer::new();
        let ticket = sequencer.start();
        for milestone in ORDER {
            sequencer.advance(ticket, milestone);
        }
        assert_eq!(
            sequencer.advance(ticket, ScanMilestone::Finished),
            Advance::Ignored
        );
        assert!(!sequencer.is_running());
    }

    #[test]
    fn progress_tracks_current_step() {
        let mut sequencer = ScanSequencer::new();
        let ticket = sequencer.start();
        let progress = sequencer.progress();
        assert_eq!(progress.current_step, 1);
        assert_eq!(progress.step_status(1), StepStatus::Loading);
        assert_eq!(progress.step_status(2), StepStatus::Pending);

        sequencer.advance(ticket, ScanMilestone::AnalysisComplete);
        let progress = sequencer.progress();
        assert_eq!(progress.current_step, 2);
        assert_eq!(progress.step_status(1), StepStatus::Completed);
        assert_eq!(progress.step_status(2), StepStatus::Loading);

        sequencer.advance(ticket, ScanMilestone::LeavesDetected);
        sequencer.advance(ticket, ScanMilestone::PlantIdentified);
        let progress = sequencer.progress();
        assert_eq!(progress.current_step, 3);
        assert_eq!(progress.step_status(3), StepStatus::Completed);
    }

    #[test]
    fn out_of_order_milestones_are_ignored() {
        let mut sequencer = ScanSequencer::new();
        let ticket = sequencer.start();
        assert_eq!(
            sequencer.advance(ticket, ScanMilestone::Finished),
            Advance::Ignored
        );
        assert_eq!(
            sequencer.advance(ticket, ScanMilestone::LeavesDetected),
            Advance::Ignored
        );
        assert_eq!(sequencer.stage(), ScanStage::Analyzing);
    }

    #[test]
    fn stale_ticket_after_cancel_is_ignored() {
        let mut sequencer = ScanSequencer::new();
        let old = sequencer.start();
        sequencer.cancel();
        assert_eq!(sequencer.stage(), ScanStage::Idle);
        assert_eq!(
            sequencer.advance(old, ScanMilestone::AnalysisComplete),
            Advance::Ignored
        );
    }

    #[test]
    fn ticket_from_another_sequencer_is_ignored() {
        let mut cancelled = ScanSequencer::new();
        let old = cancelled.start();
        cancelled.cancel();

        let mut rescan = ScanSequencer::new();
        rescan.start();
        assert_eq!(rescan.advance(old, ScanMilestone::AnalysisComplete), Advance::Ignored);
        assert_eq!(rescan.progress(), ScanProgress::default());
    }

    #[test]
    fn restarting_invalidates_previous_run() {
        let mut sequencer = ScanSequencer::new();
        let first = sequencer.start();
        sequencer.advance(first, ScanMilestone::AnalysisComplete);
        let second = sequencer.start();

        assert_ne!(first, second);
        assert_eq!(sequencer.progress(), ScanProgress::default());
        assert_eq!(
            sequencer.advance(first, ScanMilestone::LeavesDetected),
            Advance::Ignored
        );
        assert_eq!(
            sequencer.advance(second, ScanMilestone::AnalysisComplete),
            Advance::Progressed
        );
    }

    #[test]
    fn default_timeline_totals_three_and_a_half_seconds() {
        assert_eq!(ScanTimeline::default().total(), Duration::from_millis(3_500));
    }

    #[tokio::test(start_paused = true)]
    async fn stream_delivers_milestones_on_schedule() {
        let mut sequencer = ScanSequencer::new();
        let ticket = sequencer.start();
        let started = tokio::time::Instant::now();

        let delivered: Vec<_> = milestones(ticket, ScanTimeline::default())
            .map(|(t, milestone)| (t, milestone, started.elapsed()))
            .collect()
            .await;

        let order: Vec<_> = delivered.iter().map(|(_, m, _)| *m).collect();
        assert_eq!(order, ORDER.to_vec());
        let at: Vec<_> = delivered.iter().map(|(_, _, e)| e.as_millis()).collect();
        assert_eq!(at, vec![1_000, 2_000, 3_000, 3_500]);
        assert!(delivered.iter().all(|(t, _, _)| *t == ticket));
    }

    #[tokio::test(start_paused = true)]
    async fn streamed_run_completes_the_sequencer() {
        let mut sequencer = ScanSequencer::new();
        let ticket = sequencer.start();
        let outcomes: Vec<_> = milestones(ticket, ScanTimeline::default())
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .map(|(t, m)| sequencer.advance(t, m))
            .collect();

        assert_eq!(
            outcomes,
            vec![
                Advance::Progressed,
                Advance::Progressed,
                Advance::Progressed,
                Advance::Completed,
            ]
        );
        assert_eq!(sequencer.stage(), ScanStage::Done);
    }

    #[test]
    fn identify_returns_sample_record() {
        let image = RgbaImage::new(4, 4);
        assert_eq!(identify(&image).common_name, "Blue Sage");
    }
}
