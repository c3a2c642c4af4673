//! Small building blocks shared by every view.

mod button;
mod confirm_dialog;
mod input;
mod label;
mod lightbox;
mod toast;

pub use button::{Button, ButtonVariant};
pub use confirm_dialog::ConfirmDialog;
pub use input::{Input, Textarea};
pub use label::Label;
pub use lightbox::ImageLightbox;
pub use toast::{use_toast, ToastKind, ToastProvider, Toasts, TOAST_DURATION};
