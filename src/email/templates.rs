pub fn render_contact_notification(name: &str, email: &str, message: &str) -> String {
    format!("You received a new message from {name} ({email}):\n\n{message}")
}
