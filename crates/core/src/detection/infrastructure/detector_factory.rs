use std::path::Path;

use crate::detection::domain::face_detector::{Engine, FaceDetector};

use super::cascade_cpu_detector::CascadeCpuDetector;
#[cfg(feature = "cuda")]
use super::cascade_gpu_detector::CascadeGpuDetector;

/// The loaded detection providers: CPU always, CUDA when available.
pub struct DetectorSet {
    cpu: Box<dyn FaceDetector>,
    gpu: Option<Box<dyn FaceDetector>>,
}

impl DetectorSet {
    pub fn new(cpu: Box<dyn FaceDetector>, gpu: Option<Box<dyn FaceDetector>>) -> Self {
        Self { cpu, gpu }
    }

    pub fn has_gpu(&self) -> bool {
        self.gpu.is_some()
    }

    /// Returns the detector for the requested engine and the engine actually
    /// served. A GPU request without a loaded CUDA classifier gets the CPU
    /// detector.
    pub fn select(&mut self, engine: Engine) -> (&mut dyn FaceDetector, Engine) {
        match engine {
            Engine::Gpu => match self.gpu.as_deref_mut() {
                Some(detector) => (detector, Engine::Gpu),
                None => (self.cpu.as_mut(), Engine::Cpu),
            },
            Engine::Cpu => (self.cpu.as_mut(), Engine::Cpu),
        }
    }
}

/// Loads the CPU cascade and, when built with the `cuda` feature, probes for
/// a CUDA classifier. GPU setup failure degrades to CPU-only with a logged
/// warning; a CPU load failure is fatal.
pub fn build_detectors(cascade_path: &Path) -> Result<DetectorSet, Box<dyn std::error::Error>> {
    let cpu = CascadeCpuDetector::open(cascade_path)?;
    Ok(DetectorSet::new(Box::new(cpu), open_gpu(cascade_path)))
}

#[cfg(feature = "cuda")]
fn open_gpu(cascade_path: &Path) -> Option<Box<dyn FaceDetector>> {
    match CascadeGpuDetector::open(cascade_path) {
        Ok(detector) => {
            log::info!("CUDA cascade classifier ready");
            Some(Box::new(detector))
        }
        Err(e) => {
            log::warn!("CUDA cascade unavailable ({e}), GPU mode will fall back to CPU");
            None
        }
    }
}

#[cfg(not(feature = "cuda"))]
fn open_gpu(_cascade_path: &Path) -> Option<Box<dyn FaceDetector>> {
    log::debug!("built without the cuda feature, GPU mode will fall back to CPU");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::face_detector::DetectParams;
    use opencv::core::{Mat, Rect};

    struct StubDetector {
        faces: Vec<Rect>,
    }

    impl FaceDetector for StubDetector {
        fn detect(
            &mut self,
            _gray: &Mat,
            _params: &DetectParams,
        ) -> Result<Vec<Rect>, Box<dyn std::error::Error>> {
            Ok(self.faces.clone())
        }
    }

    fn stub(count: usize) -> Box<dyn FaceDetector> {
        Box::new(StubDetector {
            faces: vec![Rect::new(0, 0, 10, 10); count],
        })
    }

    fn params() -> DetectParams {
        DetectParams {
            scale_step: 1.2,
            min_neighbors: 4,
            find_largest: false,
        }
    }

    #[test]
    fn test_select_cpu_serves_cpu() {
        let mut set = DetectorSet::new(stub(1), Some(stub(2)));
        let (detector, engine) = set.select(Engine::Cpu);
        assert_eq!(engine, Engine::Cpu);
        assert_eq!(detector.detect(&Mat::default(), &params()).unwrap().len(), 1);
    }

    #[test]
    fn test_select_gpu_serves_gpu_when_loaded() {
        let mut set = DetectorSet::new(stub(1), Some(stub(2)));
        let (detector, engine) = set.select(Engine::Gpu);
        assert_eq!(engine, Engine::Gpu);
        assert_eq!(detector.detect(&Mat::default(), &params()).unwrap().len(), 2);
    }

    #[test]
    fn test_select_gpu_falls_back_to_cpu() {
        let mut set = DetectorSet::new(stub(1), None);
        let (detector, engine) = set.select(Engine::Gpu);
        assert_eq!(engine, Engine::Cpu);
        assert_eq!(detector.detect(&Mat::default(), &params()).unwrap().len(), 1);
    }

    #[test]
    fn test_has_gpu() {
        assert!(DetectorSet::new(stub(0), Some(stub(0))).has_gpu());
        assert!(!DetectorSet::new(stub(0), None).has_gpu());
    }

    #[test]
    fn test_build_detectors_missing_cascade_errors() {
        let result = build_detectors(Path::new("/nonexistent/cascade.xml"));
        assert!(result.is_err());
    }
}
