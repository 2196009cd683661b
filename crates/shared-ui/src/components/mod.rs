// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod detail_list;
pub mod field;
pub mod page_header;
pub mod spinner;
pub mod table;

// Primitive wrappers
pub mod toast;

// Depends on button
pub mod sidebar;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use detail_list::*;
pub use field::*;
pub use page_header::*;
pub use sidebar::*;
pub use spinner::*;
pub use table::*;
pub use toast::*;
