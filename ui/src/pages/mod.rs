pub mod about;
pub mod contact;
pub mod files;
pub mod home;
pub mod lesson_details;
pub mod lessons;
pub mod load;
pub mod reviews;
pub mod videos;
