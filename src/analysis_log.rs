//! Per-generation analysis recording and export.
//!
//! `AnalysisRecorder` collects one `AnalysisFrame` per generation while
//! recording is active. The resulting `AnalysisLog` exports either as a
//! delimiter-separated table with a fixed header
//! (`Generation;Population;Entropy_2x2;Dimension;BoxCount_s2;...`) or as JSON.

use crate::analysis::{count_active_boxes, fractal_dimension_with, shannon_entropy};
use crate::engine::LifeEngine;
use crate::Result;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Analysis values of a single generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFrame {
    pub generation: u64,
    pub population: usize,
    /// Block entropy in bits
    pub entropy: f64,
    /// Box-counting dimension
    pub dimension: f64,
    /// Active-box count per configured box size, in the same order
    pub box_counts: Vec<usize>,
}

impl AnalysisFrame {
    /// Measure the engine's current generation.
    pub fn capture(engine: &LifeEngine, entropy_block_size: usize, box_sizes: &[usize]) -> Self {
        let grid = engine.grid();
        Self {
            generation: engine.generation(),
            population: engine.population(),
            entropy: shannon_entropy(grid, entropy_block_size),
            dimension: fractal_dimension_with(grid, box_sizes),
            box_counts: box_sizes
                .iter()
                .map(|&s| count_active_boxes(grid, s))
                .collect(),
        }
    }
}

/// A recorded series of frames plus the parameters they were measured with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisLog {
    pub entropy_block_size: usize,
    pub box_sizes: Vec<usize>,
    pub frames: Vec<AnalysisFrame>,
}

impl AnalysisLog {
    pub fn new(entropy_block_size: usize, box_sizes: Vec<usize>) -> Self {
        Self {
            entropy_block_size,
            box_sizes,
            frames: Vec::new(),
        }
    }

    pub fn push(&mut self, frame: AnalysisFrame) {
        self.frames.push(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Column header row (no trailing newline).
    pub fn header(&self, delimiter: char) -> String {
        let b = self.entropy_block_size;
        ["Generation".to_string(), "Population".to_string()]
            .into_iter()
            .chain([format!("Entropy_{}x{}", b, b), "Dimension".to_string()])
            .chain(self.box_sizes.iter().map(|s| format!("BoxCount_s{}", s)))
            .join(&delimiter.to_string())
    }

    /// Header plus one row per frame; floats use 4 decimals.
    pub fn to_delimited(&self, delimiter: char) -> String {
        let sep = delimiter.to_string();
        let mut out = self.header(delimiter);
        out.push('\n');
        for frame in &self.frames {
            let row = [
                frame.generation.to_string(),
                frame.population.to_string(),
                format!("{:.4}", frame.entropy),
                format!("{:.4}", frame.dimension),
            ]
            .into_iter()
            .chain(frame.box_counts.iter().map(|n| n.to_string()))
            .join(&sep);
            out.push_str(&row);
            out.push('\n');
        }
        out
    }

    /// Write `to_delimited` output to a file.
    pub fn write_delimited<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<()> {
        std::fs::write(path, self.to_delimited(delimiter))?;
        Ok(())
    }

    /// Export log to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Import log from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Records analysis frames between `start` and `stop`.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRecorder {
    log: Option<AnalysisLog>,
}

impl AnalysisRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a fresh log, discarding any unfinished one.
    pub fn start(&mut self, entropy_block_size: usize, box_sizes: Vec<usize>) {
        self.log = Some(AnalysisLog::new(entropy_block_size, box_sizes));
    }

    /// Finish recording and hand back the log, if one was running.
    pub fn stop(&mut self) -> Option<AnalysisLog> {
        self.log.take()
    }

    pub fn is_recording(&self) -> bool {
        self.log.is_some()
    }

    /// Append a frame; ignored when not recording.
    pub fn record(&mut self, frame: AnalysisFrame) {
        if let Some(log) = self.log.as_mut() {
            log.push(frame);
        }
    }

    /// The log being recorded, if any.
    pub fn log(&self) -> Option<&AnalysisLog> {
        self.log.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(generation: u64) -> AnalysisFrame {
        AnalysisFrame {
            generation,
            population: 5,
            entropy: 1.5,
            dimension: 0.123456,
            box_counts: vec![4, 2],
        }
    }

    #[test]
    fn test_header() {
        let log = AnalysisLog::new(2, vec![2, 4, 8, 16, 32]);
        assert_eq!(
            log.header(';'),
            "Generation;Population;Entropy_2x2;Dimension;BoxCount_s2;BoxCount_s4;BoxCount_s8;BoxCount_s16;BoxCount_s32"
        );
    }

    #[test]
    fn test_to_delimited() {
        let mut log = AnalysisLog::new(3, vec![2, 4]);
        log.push(frame(1));
        log.push(frame(2));
        assert_eq!(
            log.to_delimited(','),
            "Generation,Population,Entropy_3x3,Dimension,BoxCount_s2,BoxCount_s4\n\
             1,5,1.5000,0.1235,4,2\n\
             2,5,1.5000,0.1235,4,2\n"
        );
    }

    #[test]
    fn test_recorder_lifecycle() {
        let mut recorder = AnalysisRecorder::new();
        recorder.record(frame(0));
        assert!(!recorder.is_recording());
        assert!(recorder.stop().is_none());

        recorder.start(2, vec![2]);
        assert!(recorder.is_recording());
        recorder.record(frame(1));
        recorder.record(frame(2));
        assert_eq!(recorder.log().map(AnalysisLog::len), Some(2));

        let log = recorder.stop().unwrap();
        assert_eq!(log.len(), 2);
        assert!(!recorder.is_recording());
    }

    #[test]
    fn test_capture_matches_engine() {
        let mut engine = LifeEngine::new(16, 16).unwrap();
        engine.load_pattern(&crate::Pattern::glider(), 2, 2);
        let frame = AnalysisFrame::capture(&engine, 2, &[1, 2]);
        assert_eq!(frame.generation, 0);
        assert_eq!(frame.population, 5);
        assert_eq!(frame.box_counts[0], 5);
        assert_eq!(frame.box_counts.len(), 2);
    }
}
