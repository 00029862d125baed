pub mod enums;
pub mod member;

pub use enums::{MaritalStatus, ParseLabelError, Role, Sector};
pub use member::{Member, MemberFields};
