use crate::render::Renderer;
use journal_core::Store;

pub fn path_mode(store: &Store, renderer: &Renderer) {
    renderer.print_info(&format!("{}", store.base_dir().display()));
}
