use std::path::{Path, PathBuf};

use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};

use crate::video::domain::frame_source::FrameSource;

/// Frames from a video file, looping back to the start at end of stream.
pub struct VideoFileSource {
    capture: VideoCapture,
    path: PathBuf,
}

impl VideoFileSource {
    pub fn open(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let path_str = path
            .to_str()
            .ok_or_else(|| format!("video path is not valid UTF-8: {}", path.display()))?;

        let capture = VideoCapture::from_file(path_str, videoio::CAP_ANY)?;
        if !capture.is_opened()? {
            return Err(format!("could not open video source [{}]", path.display()).into());
        }

        Ok(Self {
            capture,
            path: path.to_path_buf(),
        })
    }
}

impl FrameSource for VideoFileSource {
    fn next(&mut self, frame: &mut Mat) -> Result<(), Box<dyn std::error::Error>> {
        if self.capture.read(frame)? && !frame.empty() {
            return Ok(());
        }

        // End of stream: rewind and try once more. A file that yields no
        // frame even from the start is unusable.
        self.reset()?;
        if self.capture.read(frame)? && !frame.empty() {
            return Ok(());
        }
        Err(format!("no frames available from [{}]", self.path.display()).into())
    }

    fn reset(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.capture.set(videoio::CAP_PROP_POS_FRAMES, 0.0)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("video {}", self.path.display())
    }
}
