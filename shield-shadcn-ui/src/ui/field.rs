use dioxus::prelude::*;

use super::cn;

const LABEL_CLASS: &str = "flex items-center gap-2 text-sm leading-none font-medium select-none group-data-[disabled=true]:pointer-events-none group-data-[disabled=true]:opacity-50 peer-disabled:cursor-not-allowed peer-disabled:opacity-50";

#[derive(Clone, PartialEq, Props)]
pub struct FieldGroupProps {
    children: Element,
}

#[component]
pub fn FieldGroup(props: FieldGroupProps) -> Element {
    rsx! {
        div {
            "data-slot": "field-group",
            class: "group/field-group @container/field-group flex w-full flex-col gap-7 data-[slot=checkbox-group]:gap-3 [&>[data-slot=field-group]]:gap-4",
            {props.children}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct FieldProps {
    children: Element,
}

#[component]
pub fn Field(props: FieldProps) -> Element {
    rsx! {
        div {
            role: "group",
            "data-slot": "field",
            "data-orientation": "vertical",
            class: "group/field flex w-full gap-3 data-[invalid=true]:text-destructive flex-col [&>*]:w-full [&>.sr-only]:w-auto",
            {props.children}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct FieldLabelProps {
    #[props(into)]
    html_for: String,
    children: Element,
}

#[component]
pub fn FieldLabel(props: FieldLabelProps) -> Element {
    let class = cn(&[
        LABEL_CLASS,
        "group/field-label peer/field-label flex w-fit gap-2 leading-snug group-data-[disabled=true]/field:opacity-50",
    ]);

    rsx! {
        label {
            "data-slot": "field-label",
            r#for: props.html_for,
            class,
            {props.children}
        }
    }
}
