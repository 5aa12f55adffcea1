//! Modal gallery overlay and its confirm dialog.

mod confirm_dialog;
mod gallery_modal;

pub use confirm_dialog::ConfirmDialog;
pub use gallery_modal::GalleryModal;
