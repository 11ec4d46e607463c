//! Pure data structures: the stored [`Product`], the caller's [`User`], and the raw
//! [`FormData`] mutations arrive with.

pub mod form;
pub mod product;
pub mod user;

pub use form::*;
pub use product::*;
pub use user::*;
