//! Dioxus ports of the shadcn/ui primitives used by the style.
//!
//! Class sets follow the shadcn/ui "new-york" registry and expect the
//! shadcn Tailwind theme to be loaded by the application.

mod button;
mod field;
mod input;

pub use button::{Button, ButtonProps, ButtonSize, ButtonVariant};
pub use field::{Field, FieldGroup, FieldGroupProps, FieldLabel, FieldLabelProps, FieldProps};
pub use input::{Input, InputProps};

/// Join class lists, skipping empty entries
pub fn cn(classes: &[&str]) -> String {
    classes
        .iter()
        .map(|class| class.trim())
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
