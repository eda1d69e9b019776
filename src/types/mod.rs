mod form;
mod user;

pub use form::{FormField, FormRecord};
pub use user::{Address, Company, Geo, User, UserId};
