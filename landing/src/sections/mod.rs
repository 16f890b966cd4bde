// Landing page sections
// Developed by The Bankist Team (c)2025
//
// Class names here are the contract with `crate::behaviors`; see
// `bankist::selectors`.

mod features;
mod footer;
mod header;
mod modal;
mod nav;
mod operations;
mod signup;
mod testimonials;

pub use features::Features;
pub use footer::Footer;
pub use header::Header;
pub use modal::Modal;
pub use nav::Nav;
pub use operations::Operations;
pub use signup::Signup;
pub use testimonials::Testimonials;
