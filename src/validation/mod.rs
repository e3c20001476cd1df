//! Form validation with a fluent builder.
//!
//! Validation runs over plain string values; the result maps field names to
//! messages which callers feed back into [`InputField`](crate::widgets::InputField)
//! via its `invalid`/`error_message` props.
//!
//! # Example
//!
//! ```
//! use formgrid::validation::Validator;
//!
//! let result = Validator::new()
//!     .field("username", "ab")
//!         .required("Username is required")
//!         .min_length(3, "Username must be at least 3 characters")
//!     .field("email", "nobody@example.com")
//!         .required("Email is required")
//!         .email("Please enter a valid email")
//!     .validate();
//!
//! assert_eq!(
//!     result.message_for("username"),
//!     Some("Username must be at least 3 characters")
//! );
//! assert_eq!(result.message_for("email"), None);
//! ```

mod result;
mod validator;

pub use result::{FieldError, ValidationResult};
pub use validator::{FieldBuilder, Validator};
