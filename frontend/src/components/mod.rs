pub mod categories;
pub mod debtors;
pub mod finances;
pub mod home;
pub mod products;
pub mod shared;
