/// Default frontal-face cascade, fetched into the cache when no
/// `--cascade` override is given.
pub const CASCADE_NAME: &str = "haarcascade_frontalface_alt.xml";
pub const CASCADE_URL: &str =
    "https://raw.githubusercontent.com/opencv/opencv/4.x/data/haarcascades/haarcascade_frontalface_alt.xml";

/// Pyramid step of the multiscale cascade scan. Distinct from the frame
/// resize ratio the user adjusts at runtime.
pub const DETECT_SCALE_STEP: f64 = 1.2;

/// Frame resize ratio: startup default, per-keypress factor, legal range.
pub const DEFAULT_SCALE: f64 = 1.4;
pub const SCALE_NUDGE: f64 = 1.05;
pub const SCALE_MIN: f64 = 0.2;
pub const SCALE_MAX: f64 = 4.0;

pub const WINDOW_TITLE: &str = "facelive";
