pub mod cascade_cpu_detector;
#[cfg(feature = "cuda")]
pub mod cascade_gpu_detector;
pub mod detector_factory;
