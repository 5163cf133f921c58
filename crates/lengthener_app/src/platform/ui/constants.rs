pub const TITLE: &str = "URL Lengthener";
pub const SUBTITLE: &str = "Make your URLs unnecessarily long";
pub const INPUT_TITLE: &str = " URL ";
pub const INPUT_PLACEHOLDER: &str = "https://example.com";
pub const SUBMIT_LABEL: &str = "Lengthen URL";
pub const PENDING_LABEL: &str = "Lengthening…";
pub const RESULT_TITLE: &str = " Your Lengthened URL ";
pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "✓ Copied!";
pub const VISIT_LABEL: &str = "Visit";
pub const HELP_TEXT: &str = "Enter submit · Ctrl+Y copy · Ctrl+O visit · Ctrl+U clear · Esc quit";
