use crate::gallery::GalleryPage;

#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Network(NetworkEvent),
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}

#[derive(Debug, Clone)]
pub enum NetworkEvent {
    Error(String),
    GalleryLoaded(GalleryPage),
    Saved,
    SaveFailed(String),
}
