pub use super::entrepreneurs::Entity as Entrepreneurs;
pub use super::ideas::Entity as Ideas;
pub use super::investors::Entity as Investors;
pub use super::users::Entity as Users;
