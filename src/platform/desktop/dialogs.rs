use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::usecase::ports::dialogs::Dialogs;

pub struct RfdDialogs;

impl Dialogs for RfdDialogs {
    fn confirm(&self, title: &str, message: &str) -> bool {
        let confirmed = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::YesNo)
            .show();
        confirmed == MessageDialogResult::Yes
    }

    fn notify(&self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
