use crate::detection::domain::face_detector::Engine;
use crate::shared::constants::{DEFAULT_SCALE, SCALE_MAX, SCALE_MIN, SCALE_NUDGE};

/// Mutable runtime options driven by the hotkeys.
///
/// Nothing here persists across runs; the record is plain frame-loop state.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoOptions {
    pub engine: Engine,
    /// Resize ratio applied to incoming frames before detection. Values
    /// above 1.0 trade speed for accuracy, values below do the opposite.
    pub scale: f64,
    pub find_largest: bool,
    pub filter_rects: bool,
    pub show_help: bool,
    pub source_index: usize,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            engine: Engine::Gpu,
            scale: DEFAULT_SCALE,
            find_largest: false,
            filter_rects: true,
            show_help: false,
            source_index: 0,
        }
    }
}

impl DemoOptions {
    pub fn toggle_engine(&mut self) {
        self.engine = match self.engine {
            Engine::Cpu => Engine::Gpu,
            Engine::Gpu => Engine::Cpu,
        };
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_find_largest(&mut self) {
        self.find_largest = !self.find_largest;
    }

    pub fn toggle_filter(&mut self) {
        self.filter_rects = !self.filter_rects;
    }

    pub fn increase_scale(&mut self) {
        self.scale = (self.scale * SCALE_NUDGE).clamp(SCALE_MIN, SCALE_MAX);
    }

    pub fn decrease_scale(&mut self) {
        self.scale = (self.scale / SCALE_NUDGE).clamp(SCALE_MIN, SCALE_MAX);
    }

    /// Advances to the next source, wrapping around.
    pub fn next_source(&mut self, source_count: usize) {
        if source_count > 0 {
            self.source_index = (self.source_index + 1) % source_count;
        }
    }

    /// Neighbor threshold handed to the cascade: grouping is on whenever the
    /// rectangle filter or single-face mode is active.
    pub fn min_neighbors(&self) -> i32 {
        if self.filter_rects || self.find_largest {
            4
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_defaults_match_demo_startup() {
        let options = DemoOptions::default();
        assert_eq!(options.engine, Engine::Gpu);
        assert_relative_eq!(options.scale, 1.4);
        assert!(!options.find_largest);
        assert!(options.filter_rects);
        assert!(!options.show_help);
        assert_eq!(options.source_index, 0);
    }

    #[test]
    fn test_toggle_engine_round_trips() {
        let mut options = DemoOptions::default();
        options.toggle_engine();
        assert_eq!(options.engine, Engine::Cpu);
        options.toggle_engine();
        assert_eq!(options.engine, Engine::Gpu);
    }

    #[test]
    fn test_scale_nudges_multiply_and_divide() {
        let mut options = DemoOptions::default();
        options.increase_scale();
        assert_relative_eq!(options.scale, 1.4 * 1.05);
        options.decrease_scale();
        assert_relative_eq!(options.scale, 1.4, epsilon = 1e-12);
    }

    #[test]
    fn test_scale_clamps_at_upper_bound() {
        let mut options = DemoOptions::default();
        for _ in 0..200 {
            options.increase_scale();
        }
        assert_relative_eq!(options.scale, SCALE_MAX);
    }

    #[test]
    fn test_scale_clamps_at_lower_bound() {
        let mut options = DemoOptions::default();
        for _ in 0..200 {
            options.decrease_scale();
        }
        assert_relative_eq!(options.scale, SCALE_MIN);
    }

    #[rstest]
    #[case::filter_only(true, false, 4)]
    #[case::largest_only(false, true, 4)]
    #[case::both(true, true, 4)]
    #[case::neither(false, false, 0)]
    fn test_min_neighbors_derivation(
        #[case] filter_rects: bool,
        #[case] find_largest: bool,
        #[case] expected: i32,
    ) {
        let options = DemoOptions {
            filter_rects,
            find_largest,
            ..DemoOptions::default()
        };
        assert_eq!(options.min_neighbors(), expected);
    }

    #[test]
    fn test_next_source_wraps() {
        let mut options = DemoOptions::default();
        options.next_source(3);
        assert_eq!(options.source_index, 1);
        options.next_source(3);
        assert_eq!(options.source_index, 2);
        options.next_source(3);
        assert_eq!(options.source_index, 0);
    }

    #[test]
    fn test_next_source_single_source_stays_put() {
        let mut options = DemoOptions::default();
        options.next_source(1);
        assert_eq!(options.source_index, 0);
    }

    #[test]
    fn test_next_source_zero_sources_is_noop() {
        let mut options = DemoOptions::default();
        options.next_source(0);
        assert_eq!(options.source_index, 0);
    }
}
