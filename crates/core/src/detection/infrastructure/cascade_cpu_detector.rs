use std::path::Path;

use opencv::core::{Mat, Rect, Size, Vector};
use opencv::objdetect;
use opencv::prelude::*;

use crate::detection::domain::face_detector::{DetectParams, FaceDetector};

/// Haar cascade detection on the CPU via `objdetect::CascadeClassifier`.
///
/// The classifier's original training window is used as the minimum object
/// size, so nothing smaller than the cascade can actually represent is
/// searched for.
pub struct CascadeCpuDetector {
    classifier: objdetect::CascadeClassifier,
    min_size: Size,
}

impl CascadeCpuDetector {
    /// Loads the cascade file. A missing or malformed cascade is fatal.
    pub fn open(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let path_str = path
            .to_str()
            .ok_or_else(|| format!("cascade path is not valid UTF-8: {}", path.display()))?;

        let mut classifier = objdetect::CascadeClassifier::default()?;
        if !classifier.load(path_str)? {
            return Err(format!("could not load cascade classifier [{}]", path.display()).into());
        }
        let min_size = classifier.get_original_window_size()?;

        Ok(Self {
            classifier,
            min_size,
        })
    }
}

impl FaceDetector for CascadeCpuDetector {
    fn detect(
        &mut self,
        gray: &Mat,
        params: &DetectParams,
    ) -> Result<Vec<Rect>, Box<dyn std::error::Error>> {
        let mut flags = objdetect::CASCADE_SCALE_IMAGE;
        if params.find_largest {
            flags |= objdetect::CASCADE_FIND_BIGGEST_OBJECT;
        }

        let mut faces = Vector::<Rect>::new();
        self.classifier.detect_multi_scale(
            gray,
            &mut faces,
            params.scale_step,
            params.min_neighbors,
            flags,
            self.min_size,
            Size::default(),
        )?;
        Ok(faces.to_vec())
    }
}
