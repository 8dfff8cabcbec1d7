use std::path::Path;

use opencv::core::{GpuMat, Mat, Ptr, Rect, Vector};
use opencv::cudaobjdetect::CUDA_CascadeClassifier;
use opencv::prelude::*;

use crate::detection::domain::face_detector::{DetectParams, FaceDetector};

/// Haar cascade detection on a CUDA device via `cudaobjdetect`.
///
/// The prepared gray frame is uploaded per call; the classifier writes
/// detections into a device-side buffer that `convert` brings back as
/// rectangles. Both device buffers are reused across frames.
pub struct CascadeGpuDetector {
    classifier: Ptr<CUDA_CascadeClassifier>,
    gray_gpu: GpuMat,
    faces_gpu: GpuMat,
}

impl CascadeGpuDetector {
    /// Loads the cascade on the default CUDA device.
    ///
    /// Fails when no CUDA-capable device is present or the cascade file
    /// cannot be read by the CUDA classifier.
    pub fn open(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if opencv::core::get_cuda_enabled_device_count()? < 1 {
            return Err("no CUDA-capable device detected".into());
        }

        let path_str = path
            .to_str()
            .ok_or_else(|| format!("cascade path is not valid UTF-8: {}", path.display()))?;
        let classifier = CUDA_CascadeClassifier::create(path_str)?;

        Ok(Self {
            classifier,
            gray_gpu: GpuMat::new_def()?,
            faces_gpu: GpuMat::new_def()?,
        })
    }
}

impl FaceDetector for CascadeGpuDetector {
    fn detect(
        &mut self,
        gray: &Mat,
        params: &DetectParams,
    ) -> Result<Vec<Rect>, Box<dyn std::error::Error>> {
        self.gray_gpu.upload(gray)?;

        self.classifier.set_scale_factor(params.scale_step)?;
        self.classifier.set_min_neighbors(params.min_neighbors)?;
        self.classifier.set_find_largest_object(params.find_largest)?;

        self.classifier
            .detect_multi_scale(&self.gray_gpu, &mut self.faces_gpu)?;

        let mut faces = Vector::<Rect>::new();
        self.classifier.convert(&mut self.faces_gpu, &mut faces)?;
        Ok(faces.to_vec())
    }
}
