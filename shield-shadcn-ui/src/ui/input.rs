use dioxus::prelude::*;

const INPUT_CLASS: &str = "file:text-foreground placeholder:text-muted-foreground selection:bg-primary selection:text-primary-foreground dark:bg-input/30 border-input h-9 w-full min-w-0 rounded-md border bg-transparent px-3 py-1 text-base shadow-xs transition-[color,box-shadow] outline-none file:inline-flex file:h-7 file:border-0 file:bg-transparent file:text-sm file:font-medium disabled:pointer-events-none disabled:cursor-not-allowed disabled:opacity-50 md:text-sm focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive";

#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    // Defined by both the global and the input attribute sets
    #[props(default = None)]
    alt: Option<String>,
    #[props(default = None)]
    height: Option<String>,
    #[props(default = None)]
    size: Option<String>,
    #[props(default = None)]
    width: Option<String>,
    #[props(default = None)]
    dirname: Option<String>,
    #[props(extends = GlobalAttributes, extends = input)]
    attributes: Vec<Attribute>,
}

#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        input {
            "data-slot": "input",
            class: INPUT_CLASS,
            alt: props.alt,
            height: props.height,
            size: props.size,
            width: props.width,
            "dirname": props.dirname,
            ..props.attributes,
        }
    }
}
