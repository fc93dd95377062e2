use crate::models::Directory;

pub struct AppState {
    pub directory: Directory,
}
