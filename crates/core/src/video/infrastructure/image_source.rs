use std::path::{Path, PathBuf};

use opencv::core::Mat;
use opencv::imgcodecs;
use opencv::prelude::*;

use crate::video::domain::frame_source::FrameSource;

/// Adapts a still image to the [`FrameSource`] interface.
///
/// The file is decoded once at open; every `next` hands out a fresh copy so
/// overlay drawing on one frame never bleeds into the next.
pub struct ImageSource {
    image: Mat,
    path: PathBuf,
}

impl ImageSource {
    pub fn open(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let path_str = path
            .to_str()
            .ok_or_else(|| format!("image path is not valid UTF-8: {}", path.display()))?;

        let image = imgcodecs::imread(path_str, imgcodecs::IMREAD_COLOR)?;
        if image.empty() {
            return Err(format!("could not read image [{}]", path.display()).into());
        }

        Ok(Self {
            image,
            path: path.to_path_buf(),
        })
    }
}

impl FrameSource for ImageSource {
    fn next(&mut self, frame: &mut Mat) -> Result<(), Box<dyn std::error::Error>> {
        *frame = self.image.clone();
        Ok(())
    }

    fn reset(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }

    fn description(&self) -> String {
        format!("image {}", self.path.display())
    }
}
