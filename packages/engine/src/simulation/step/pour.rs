use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::geometry::Point;

use super::grain::GrainOutcome;
use super::perf_timer::PerfTimer;
use super::pour_report::PourReport;
use super::Cave;

/// When a pour stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PourPolicy {
    /// Stop at the first lost grain
    Bounded,
    /// Stop once a grain settles on the source itself
    SourceBlocked,
}

pub(super) fn pour(cave: &mut Cave, policy: PourPolicy) -> PourReport {
    let report = match policy {
        PourPolicy::Bounded => pour_until(cave, |_| false),
        PourPolicy::SourceBlocked => {
            let source = cave.source();
            pour_until(cave, move |p| p == Some(source))
        }
    };

    if policy == PourPolicy::SourceBlocked && report.lost {
        warn!(grains = report.grains, "source-blocked pour lost a grain before the source filled");
    }
    info!(?policy, grains = report.grains, elapsed_ms = report.elapsed_ms, "pour finished");
    report
}

pub(super) fn pour_until<F>(cave: &mut Cave, mut until: F) -> PourReport
where
    F: FnMut(Option<Point>) -> bool,
{
    let timer = PerfTimer::start();
    let mut grains: u32 = 0;
    let mut last_settled = None;

    let lost = loop {
        let outcome = cave.next_grain();

        if until(outcome.point()) {
            if let GrainOutcome::Settled(at) = outcome {
                cave.settle(at);
                last_settled = Some(at);
            }
            grains += 1;
            break false;
        }

        match outcome {
            GrainOutcome::Lost => break true,
            GrainOutcome::Settled(at) => {
                cave.settle(at);
                last_settled = Some(at);
                grains += 1;
            }
        }
    };

    PourReport {
        grains,
        last_settled,
        lost,
        elapsed_ms: timer.elapsed_ms(),
    }
}
