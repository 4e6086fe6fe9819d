//! Landing Copy
//!
//! Marketing text and navigation targets of the landing view.

pub const HEADLINE: &str = "Streamline Your Workflow";
pub const HEADLINE_TAIL: &str = "with";
pub const TAGLINE: &str = "Empower your team with our intuitive project management solution.";

/// Call-to-action links: (label, route)
pub const LINKS: [(&str, &str); 2] = [("Login", "/login"), ("Signup", "/signup")];
