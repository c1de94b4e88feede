mod diary_detail;
mod diary_list;
mod login;
mod not_found;

pub use diary_detail::DiaryDetailPage;
pub use diary_list::DiaryListPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
