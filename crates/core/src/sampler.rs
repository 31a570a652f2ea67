use crate::{
    error::{Result, StopkadrError},
    source::VideoSource,
    types::{SampleFrame, VideoMetadata},
};

/// Frames between consecutive samples, clamped to 1 so the progression
/// always moves forward even when `interval_seconds * fps < 1`.
pub fn frame_step(fps: f64, interval_seconds: f64) -> u64 {
    ((fps * interval_seconds).floor() as u64).max(1)
}

/// One sampling run over a video source.
///
/// Iterates the target indices `0, step, 2*step, ..` below `total_frames`,
/// decoding one frame per index. A decode failure is yielded as an `Err`
/// item and the progression continues; the run is finite and not restartable
/// since it consumes the underlying decode cursor.
#[derive(Debug)]
pub struct FrameSampler<S: VideoSource> {
    source: S,
    metadata: VideoMetadata,
    step: u64,
    next_index: u64,
}

impl<S: VideoSource> FrameSampler<S> {
    /// Open a run over `source`, one sample every `interval_seconds`.
    ///
    /// Metadata is read once here and treated as immutable for the run; a
    /// source reporting a non-positive fps is unusable and fails before any
    /// frame is visited.
    pub fn new(mut source: S, interval_seconds: f64) -> Result<Self> {
        let metadata = source.metadata()?;
        if !(metadata.fps > 0.0) {
            return Err(StopkadrError::SourceUnavailable {
                reason: format!("reported fps {} is not usable", metadata.fps),
            });
        }

        Ok(Self {
            source,
            metadata,
            step: frame_step(metadata.fps, interval_seconds),
            next_index: 0,
        })
    }

    pub fn metadata(&self) -> VideoMetadata {
        self.metadata
    }

    /// Number of target indices the run will visit.
    pub fn target_count(&self) -> u64 {
        if self.metadata.total_frames == 0 {
            0
        } else {
            (self.metadata.total_frames - 1) / self.step + 1
        }
    }
}

impl<S: VideoSource> Iterator for FrameSampler<S> {
    type Item = Result<SampleFrame>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index >= self.metadata.total_frames {
            return None;
        }

        let frame_index = self.next_index;
        self.next_index += self.step;

        match self.source.seek_and_read(frame_index) {
            Ok(image) => Some(Ok(SampleFrame {
                frame_index,
                timestamp_seconds: (frame_index as f64 / self.metadata.fps).floor() as u64,
                image,
            })),
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::testing::MockSource;

    #[test]
    fn step_is_floor_of_fps_times_interval() {
        assert_eq!(frame_step(30.0, 5.0), 150);
        assert_eq!(frame_step(29.97, 5.0), 149);
        assert_eq!(frame_step(24.0, 2.5), 60);
    }

    #[test]
    fn step_is_clamped_to_one() {
        assert_eq!(frame_step(10.0, 0.05), 1);
        assert_eq!(frame_step(0.5, 1.0), 1);
    }

    #[test]
    fn samples_expected_indices_and_timestamps() {
        // 30 fps, 5s interval, 301 frames: indices 0/150/300, seconds 0/5/10
        let sampler = FrameSampler::new(MockSource::new(30.0, 301), 5.0).unwrap();

        let frames: Vec<_> = sampler.map(|f| f.unwrap()).collect();

        assert_eq!(
            frames.iter().map(|f| f.frame_index).collect::<Vec<_>>(),
            vec![0, 150, 300]
        );
        assert_eq!(
            frames
                .iter()
                .map(|f| f.timestamp_seconds)
                .collect::<Vec<_>>(),
            vec![0, 5, 10]
        );
    }

    #[test]
    fn never_reaches_total_frames() {
        let sampler = FrameSampler::new(MockSource::new(30.0, 300), 5.0).unwrap();

        let indices: Vec<_> = sampler.map(|f| f.unwrap().frame_index).collect();

        assert_eq!(indices, vec![0, 150]);
    }

    #[test]
    fn fractional_fps_floors_timestamps() {
        let sampler = FrameSampler::new(MockSource::new(29.97, 300), 5.0).unwrap();

        let frames: Vec<_> = sampler.map(|f| f.unwrap()).collect();

        // step floor(149.85) = 149; floor(149 / 29.97) = 4, floor(298 / 29.97) = 9
        assert_eq!(
            frames.iter().map(|f| f.frame_index).collect::<Vec<_>>(),
            vec![0, 149, 298]
        );
        assert_eq!(
            frames
                .iter()
                .map(|f| f.timestamp_seconds)
                .collect::<Vec<_>>(),
            vec![0, 4, 9]
        );
    }

    #[test]
    fn zero_fps_is_source_unavailable() {
        let err = FrameSampler::new(MockSource::new(0.0, 100), 5.0).unwrap_err();
        assert!(matches!(err, StopkadrError::SourceUnavailable { .. }));
    }

    #[test]
    fn nan_fps_is_source_unavailable() {
        let err = FrameSampler::new(MockSource::new(f64::NAN, 100), 5.0).unwrap_err();
        assert!(matches!(err, StopkadrError::SourceUnavailable { .. }));
    }

    #[test]
    fn empty_video_yields_no_frames() {
        let mut sampler = FrameSampler::new(MockSource::new(30.0, 0), 5.0).unwrap();
        assert!(sampler.next().is_none());
    }

    #[test]
    fn decode_failure_skips_only_that_index() {
        let source = MockSource::new(30.0, 301).failing_at(&[150]);
        let sampler = FrameSampler::new(source, 5.0).unwrap();

        let results: Vec<_> = sampler.collect();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().timestamp_seconds, 0);
        assert!(matches!(
            results[1],
            Err(StopkadrError::FrameDecodeFailed { frame_index: 150 })
        ));
        // The failure does not shift the timestamp of later frames
        assert_eq!(results[2].as_ref().unwrap().timestamp_seconds, 10);
    }

    #[test]
    fn target_count_matches_progression() {
        let count = |total| {
            FrameSampler::new(MockSource::new(30.0, total), 5.0)
                .unwrap()
                .target_count()
        };

        assert_eq!(count(301), 3);
        assert_eq!(count(300), 2);
        assert_eq!(count(1), 1);
        assert_eq!(count(0), 0);
    }
}
