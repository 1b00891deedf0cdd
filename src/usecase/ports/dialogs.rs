pub trait Dialogs: Send + Sync {
    fn confirm(&self, title: &str, message: &str) -> bool;
    fn notify(&self, title: &str, message: &str);
}
