mod page;
mod tabs;
mod view_model;

pub use page::AdCreatePage;
pub use view_model::{AdFormVm, FormTab};
