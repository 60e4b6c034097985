use super::definition::{ActionDefinition, FieldKind, FieldSpec};

/// Declares the builtin action set in palette order.
macro_rules! define_actions {
    ( $( ($id:expr, $label:expr, [ $( ($field:expr, $kind:ident, $placeholder:expr) ),* $(,)? ]) ),* $(,)? ) => {
        pub(super) fn builtin_actions() -> Vec<ActionDefinition> {
            vec![
                $(
                    ActionDefinition::new(
                        $id,
                        $label,
                        vec![ $( FieldSpec::new($field, FieldKind::$kind, $placeholder) ),* ],
                    ),
                )*
            ]
        }

        /// Identifiers of every builtin action, in palette order.
        pub const BUILTIN_ACTION_IDS: &[&str] = &[ $( $id ),* ];
    };
}

define_actions! {
    // Navigation
    ("open", "Open URL", [
        ("url", Text, "https://example.com"),
        ("headless", Boolean, "Headless mode"),
    ]),
    ("wait", "Wait", [("seconds", Number, "Seconds")]),
    ("click", "Click Element", [("selector", Text, "CSS Selector")]),
    ("type", "Type Text", [
        ("selector", Text, "CSS Selector"),
        ("text", Text, "Text to type"),
    ]),
    ("press_key", "Press Key", [("key", Text, "Key (Enter, Escape, etc.)")]),
    ("scroll", "Scroll To", [("selector", Text, "CSS Selector")]),
    ("refresh", "Refresh Page", []),
    ("wait_network_idle", "Wait Network Idle", []),
    ("clear_cookies", "Clear Cookies", []),
    ("set_header", "Set Header", [
        ("key", Text, "Header Name"),
        ("value", Text, "Header Value"),
    ]),

    // Checks and extraction
    ("grep", "Grep (Check Text)", [
        ("text", Text, "Text to find"),
        ("selector", Text, "Selector (optional, default body)"),
    ]),
    ("grep_regex", "Grep (Regex)", [
        ("regex", Text, "Regex Pattern"),
        ("selector", Text, "Selector (optional, default body)"),
    ]),
    ("extract_text", "Extract Text", [
        ("selector", Text, "CSS Selector"),
        ("variable", Text, "Variable Name"),
    ]),
    ("execute_js", "Execute JS", [
        ("script", Text, "return document.title;"),
        ("variable", Text, "Result Variable (Optional)"),
    ]),
    ("capture_network", "Capture Network", [("regex", Text, "URL Regex Pattern")]),
    ("http_request", "HTTP Request", [
        ("method", Text, "GET/POST"),
        ("url", Text, "URL"),
        ("body", Text, "JSON Body (Optional)"),
        ("variable", Text, "Response Variable"),
    ]),
    ("expect_http_status", "Expect HTTP Status", [("status", Number, "Status Code (e.g. 200)")]),

    // Output
    ("send_notification", "Send Notification", [("message", Text, "Message")]),
    ("screenshot", "Screenshot", [("path", Text, "Path")]),
}
