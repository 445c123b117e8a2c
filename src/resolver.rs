/*!
 * Active-cue resolution.
 *
 * The active cue at time `t` is the first cue, in track order, whose
 * closed interval `[start, end]` contains `t`. Overlapping cues are not
 * layered: the earliest-appearing one wins.
 *
 * [`active_cue`] is the reference linear scan. [`StartIndex`] answers the
 * same question from a start-sorted view of the track and is built once
 * per track for large files. Both return the same cue for every query.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use crate::subtitle_processor::{Cue, CueTrack};

/// Find the active cue by scanning the track in order
pub fn active_cue(track: &CueTrack, time: f64) -> Option<&Cue> {
    track.iter().find(|cue| cue.contains(time))
}

/// Start-sorted lookup structure over one track.
///
/// `order` lists track positions sorted by start time, `starts` holds the
/// matching start times and `max_end[k]` the largest end among the first
/// `k + 1` sorted cues. A query binary-searches the last cue starting at or
/// before `t`, then walks backwards until no earlier cue can still be
/// running.
#[derive(Debug, Clone, Default)]
pub struct StartIndex {
    order: Vec<usize>,
    starts: Vec<f64>,
    max_end: Vec<f64>,
}

impl StartIndex {
    /// Build the index for `track`
    pub fn build(track: &CueTrack) -> Self {
        let cues = track.cues();
        let mut order: Vec<usize> = (0..cues.len()).collect();
        order.sort_by(|&a, &b| cues[a].start.total_cmp(&cues[b].start));

        let starts: Vec<f64> = order.iter().map(|&i| cues[i].start).collect();

        let mut max_end = Vec::with_capacity(order.len());
        let mut running = f64::NEG_INFINITY;
        for &i in &order {
            running = running.max(cues[i].end);
            max_end.push(running);
        }

        StartIndex { order, starts, max_end }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Track position of the active cue at `time`, if any
    pub fn position(&self, track: &CueTrack, time: f64) -> Option<usize> {
        let cues = track.cues();
        let upper = self.starts.partition_point(|&start| start <= time);

        let mut best: Option<usize> = None;
        for k in (0..upper).rev() {
            if self.max_end[k] < time {
                break;
            }
            let position = self.order[k];
            if cues[position].end >= time && best.is_none_or(|b| position < b) {
                best = Some(position);
            }
        }
        best
    }

    /// Active cue at `time`; `track` must be the track this index was built from
    pub fn lookup<'a>(&self, track: &'a CueTrack, time: f64) -> Option<&'a Cue> {
        self.position(track, time).map(|i| &track.cues()[i])
    }
}

/// How a [`Resolver`] answers queries
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LookupStrategy {
    /// Index tracks at or above the configured size, scan smaller ones
    #[default]
    Auto,
    /// Always scan
    Linear,
    /// Always index
    Indexed,
}

impl std::str::FromStr for LookupStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "linear" => Ok(Self::Linear),
            "indexed" => Ok(Self::Indexed),
            _ => Err(anyhow::anyhow!("Invalid lookup strategy: {}", s)),
        }
    }
}

/// A cue track together with whatever lookup structure it was given
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    track: CueTrack,
    index: Option<StartIndex>,
}

impl Resolver {
    /// Wrap `track`, building an index when `strategy` asks for one
    pub fn new(track: CueTrack, strategy: LookupStrategy, index_threshold: usize) -> Self {
        let use_index = match strategy {
            LookupStrategy::Linear => false,
            LookupStrategy::Indexed => true,
            LookupStrategy::Auto => track.len() >= index_threshold,
        };

        let index = use_index.then(|| StartIndex::build(&track));
        if let Some(index) = &index {
            debug!("Built start index over {} cue(s)", index.len());
        }

        Resolver { track, index }
    }

    /// Resolver over the empty track
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn track(&self) -> &CueTrack {
        &self.track
    }

    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }

    /// Active cue at `time`
    pub fn active_cue(&self, time: f64) -> Option<&Cue> {
        match &self.index {
            Some(index) => index.lookup(&self.track, time),
            None => active_cue(&self.track, time),
        }
    }
}
