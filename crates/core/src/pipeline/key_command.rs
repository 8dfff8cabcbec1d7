use crate::pipeline::demo_options::DemoOptions;

/// A hotkey decoded from a `highgui::wait_key` code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    ToggleEngine,
    ToggleHelp,
    IncreaseScale,
    DecreaseScale,
    ToggleFindLargest,
    ToggleFilter,
    NextSource,
    Exit,
}

impl KeyCommand {
    /// Decodes a raw key code. Returns `None` for "no key pressed" (-1) and
    /// for unbound keys. Letter bindings are case-insensitive.
    pub fn from_key(key: i32) -> Option<Self> {
        if key < 0 {
            return None;
        }
        match (key & 0xff) as u8 {
            27 => Some(KeyCommand::Exit),
            b' ' => Some(KeyCommand::ToggleEngine),
            b'1' => Some(KeyCommand::IncreaseScale),
            byte => match byte.to_ascii_uppercase() {
                b'H' => Some(KeyCommand::ToggleHelp),
                b'Q' => Some(KeyCommand::DecreaseScale),
                b'M' => Some(KeyCommand::ToggleFindLargest),
                b'F' => Some(KeyCommand::ToggleFilter),
                b'N' => Some(KeyCommand::NextSource),
                _ => None,
            },
        }
    }

    /// Applies the command to the options and returns the status line to
    /// log, if the command has one.
    pub fn apply(&self, options: &mut DemoOptions, source_count: usize) -> Option<String> {
        match self {
            KeyCommand::ToggleEngine => {
                options.toggle_engine();
                Some(format!("Switched to {} mode", options.engine.label()))
            }
            KeyCommand::ToggleHelp => {
                options.toggle_help();
                None
            }
            KeyCommand::IncreaseScale => {
                options.increase_scale();
                Some(format!("Scale: {:.2}", options.scale))
            }
            KeyCommand::DecreaseScale => {
                options.decrease_scale();
                Some(format!("Scale: {:.2}", options.scale))
            }
            KeyCommand::ToggleFindLargest => {
                options.toggle_find_largest();
                Some(
                    if options.find_largest {
                        "Single-face mode"
                    } else {
                        "Multi-face mode"
                    }
                    .to_string(),
                )
            }
            KeyCommand::ToggleFilter => {
                options.toggle_filter();
                Some(
                    if options.filter_rects {
                        "Rectangle filter enabled"
                    } else {
                        "Rectangle filter disabled"
                    }
                    .to_string(),
                )
            }
            KeyCommand::NextSource => {
                options.next_source(source_count);
                Some(format!("Switched to source {}", options.source_index))
            }
            KeyCommand::Exit => None,
        }
    }
}
