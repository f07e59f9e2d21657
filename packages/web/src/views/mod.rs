mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod notes;
pub use notes::Notes;

mod admin;
pub use admin::Admin;

mod not_found;
pub use not_found::NotFound;
