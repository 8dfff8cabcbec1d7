use opencv::core::{AlgorithmHint, Mat, Size};
use opencv::imgproc;
use opencv::prelude::*;

/// The two working copies rebuilt every iteration: the resized BGR frame
/// rectangles are drawn on, and its grayscale counterpart the cascade scans.
pub struct Prepared {
    pub resized: Mat,
    pub gray: Mat,
}

/// Resizes the incoming frame by `scale` and converts it to grayscale.
///
/// A scale of exactly 1.0 skips the resize. 3-channel input is treated as
/// BGR, 4-channel as BGRA, and single-channel input is already gray.
pub fn prepare(frame: &Mat, scale: f64) -> Result<Prepared, Box<dyn std::error::Error>> {
    if frame.empty() {
        return Err("cannot prepare an empty frame".into());
    }

    let resized = if scale == 1.0 {
        frame.clone()
    } else {
        let size = Size::new(
            (frame.cols() as f64 * scale).round() as i32,
            (frame.rows() as f64 * scale).round() as i32,
        );
        let mut out = Mat::default();
        imgproc::resize(frame, &mut out, size, 0.0, 0.0, imgproc::INTER_LINEAR)?;
        out
    };

    let gray = match resized.channels() {
        1 => resized.clone(),
        3 => convert(&resized, imgproc::COLOR_BGR2GRAY)?,
        4 => convert(&resized, imgproc::COLOR_BGRA2GRAY)?,
        channels => return Err(format!("unsupported channel count: {channels}").into()),
    };

    Ok(Prepared { resized, gray })
}

fn convert(src: &Mat, code: i32) -> Result<Mat, Box<dyn std::error::Error>> {
    let mut gray = Mat::default();
    imgproc::cvt_color(
        src,
        &mut gray,
        code,
        0,
        AlgorithmHint::ALGO_HINT_DEFAULT,
    )?;
    Ok(gray)
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencv::core::{Scalar, CV_8UC1, CV_8UC2, CV_8UC3, CV_8UC4};
    use rstest::rstest;

    fn bgr_frame(cols: i32, rows: i32) -> Mat {
        Mat::new_rows_cols_with_default(rows, cols, CV_8UC3, Scalar::all(127.0)).unwrap()
    }

    #[test]
    fn test_unit_scale_keeps_dimensions() {
        let prepared = prepare(&bgr_frame(64, 48), 1.0).unwrap();
        assert_eq!(prepared.resized.cols(), 64);
        assert_eq!(prepared.resized.rows(), 48);
        assert_eq!(prepared.gray.cols(), 64);
        assert_eq!(prepared.gray.rows(), 48);
    }

    #[rstest]
    #[case::downscale(0.5, 32, 24)]
    #[case::upscale(2.0, 128, 96)]
    #[case::default_ratio(1.4, 90, 67)]
    fn test_scale_resizes_by_ratio(
        #[case] scale: f64,
        #[case] expected_cols: i32,
        #[case] expected_rows: i32,
    ) {
        let prepared = prepare(&bgr_frame(64, 48), scale).unwrap();
        assert_eq!(prepared.resized.cols(), expected_cols);
        assert_eq!(prepared.resized.rows(), expected_rows);
        assert_eq!(prepared.gray.cols(), expected_cols);
        assert_eq!(prepared.gray.rows(), expected_rows);
    }

    #[test]
    fn test_bgr_converts_to_single_channel() {
        let prepared = prepare(&bgr_frame(64, 48), 1.0).unwrap();
        assert_eq!(prepared.resized.channels(), 3);
        assert_eq!(prepared.gray.channels(), 1);
    }

    #[test]
    fn test_bgra_converts_to_single_channel() {
        let frame =
            Mat::new_rows_cols_with_default(48, 64, CV_8UC4, Scalar::all(127.0)).unwrap();
        let prepared = prepare(&frame, 1.0).unwrap();
        assert_eq!(prepared.gray.channels(), 1);
    }

    #[test]
    fn test_gray_input_passes_through() {
        let frame = Mat::new_rows_cols_with_default(48, 64, CV_8UC1, Scalar::all(64.0)).unwrap();
        let prepared = prepare(&frame, 1.0).unwrap();
        assert_eq!(prepared.gray.channels(), 1);
        assert_eq!(prepared.gray.cols(), 64);
    }

    #[test]
    fn test_two_channel_input_is_rejected() {
        let frame = Mat::new_rows_cols_with_default(48, 64, CV_8UC2, Scalar::all(0.0)).unwrap();
        assert!(prepare(&frame, 1.0).is_err());
    }

    #[test]
    fn test_empty_frame_is_rejected() {
        assert!(prepare(&Mat::default(), 1.0).is_err());
    }
}
