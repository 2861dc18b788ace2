pub mod home;
pub mod navigation;

pub use home::Home;
pub use navigation::NavigationBar;
