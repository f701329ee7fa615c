mod token;

pub use token::TokenStore;
