pub mod admin;
pub mod educator;
pub mod home;
pub mod login;
pub mod messages;
pub mod student;

pub use admin::AdminPage;
pub use educator::EducatorPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use messages::MessagesPage;
pub use student::StudentPage;
