use crate::config;

/// How the slide-in section is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionVariant {
    Entered,
    Pending,
}

impl SectionVariant {
    pub fn class(self) -> &'static str {
        match self {
            SectionVariant::Entered => config::ENTERED_CLASS,
            SectionVariant::Pending => config::PENDING_CLASS,
        }
    }
}

impl From<bool> for SectionVariant {
    fn from(visible: bool) -> Self {
        if visible {
            SectionVariant::Entered
        } else {
            SectionVariant::Pending
        }
    }
}
