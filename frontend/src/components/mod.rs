pub mod chat;
pub mod documents;
pub mod home;
pub mod sidebar;
pub mod topbar;
