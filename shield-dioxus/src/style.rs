use std::sync::Arc;

use dioxus::prelude::Element;
use shield_client::ActionForms;

/// A visual theme that renders the complete UI of one action
pub trait DioxusStyle: Send + Sync {
    fn render(&self, action: &ActionForms) -> Element;
}

impl<F> DioxusStyle for F
where
    F: Fn(&ActionForms) -> Element + Send + Sync,
{
    fn render(&self, action: &ActionForms) -> Element {
        self(action)
    }
}

/// Type-erased style, provided to the route components through context
#[derive(Clone)]
pub struct ErasedDioxusStyle(Arc<dyn DioxusStyle>);

impl ErasedDioxusStyle {
    pub fn new<S: DioxusStyle + 'static>(style: S) -> Self {
        Self(Arc::new(style))
    }

    pub fn render(&self, action: &ActionForms) -> Element {
        self.0.render(action)
    }
}

impl PartialEq for ErasedDioxusStyle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
