// Terminal stand-in for the browser page
use crate::application::widgets::Page;

#[derive(Debug, Default)]
pub struct ConsolePage {
    title: Option<String>,
}

impl ConsolePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl Page for ConsolePage {
    fn set_title(&mut self, title: &str) {
        println!("== {} ==", title);
        self.title = Some(title.to_string());
    }

    fn show_error(&mut self, message: &str) {
        tracing::error!("{}", message);
        eprintln!("Unable to show route: {}", message);
    }
}
