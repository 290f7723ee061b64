mod badge;
mod button;
mod checkbox;
mod input;
mod select;
mod textarea;

pub use badge::Badge;
pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;
