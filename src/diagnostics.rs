//! Run reports written by the command-line tool.
use crate::image::PixelBuffer;
use crate::transform::TransformKind;
use serde::Serialize;
use std::time::Instant;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub stage: String,
    pub elapsed_ms: f64,
}

/// Per-stage wall-clock durations of one run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn record(&mut self, stage: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming {
            stage: stage.into(),
            elapsed_ms,
        });
    }

    /// Run `f`, recording its duration under `stage`.
    pub fn time<T>(&mut self, stage: impl Into<String>, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.record(stage, elapsed_ms(start));
        out
    }
}

pub fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Geometry of a buffer, without its samples.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferDescriptor {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub stride: usize,
}

impl From<&PixelBuffer> for BufferDescriptor {
    fn from(buf: &PixelBuffer) -> Self {
        Self {
            width: buf.width(),
            height: buf.height(),
            channels: buf.channels().count(),
            stride: buf.stride(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformReport {
    pub transform: TransformKind,
    pub input: BufferDescriptor,
    pub output: BufferDescriptor,
    pub timing: TimingBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Channels;

    #[test]
    fn report_serializes_camel_case() {
        let buf = PixelBuffer::new(3, 2, Channels::Bgr).unwrap();
        let mut timing = TimingBreakdown {
            total_ms: 1.5,
            ..Default::default()
        };
        timing.record("transform", 1.0);
        let doubled = timing.time("twice", || 2 * 21);
        assert_eq!(doubled, 42);
        let report = TransformReport {
            transform: TransformKind::Binarize { threshold: 9 },
            input: BufferDescriptor::from(&buf),
            output: BufferDescriptor::from(&buf),
            timing,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["transform"]["kind"], "binarize");
        assert_eq!(json["input"]["channels"], 3);
        assert_eq!(json["timing"]["totalMs"], 1.5);
        assert_eq!(json["timing"]["stages"][0]["elapsedMs"], 1.0);
        assert_eq!(json["timing"]["stages"][1]["stage"], "twice");
    }
}
