#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleHelp,

    ListUp,
    ListDown,
    GoTop,
    GoBottom,
    PageUp,
    PageDown,

    // Gallery
    Toggle,
    SelectAll,
    DeselectAll,
    Save,
    Reload,

    Resize,
}
