use serde::{Deserialize, Serialize};

/// An ordered list of input descriptors, rendered as one HTML form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub inputs: Vec<Input>,
}

impl Form {
    /// Inputs paired with a render key unique within the form.
    ///
    /// Names repeat in radio groups, so the key also carries the position.
    pub fn keyed_inputs(&self) -> impl Iterator<Item = (String, &Input)> {
        self.inputs
            .iter()
            .enumerate()
            .map(|(index, input)| (format!("{}-{}", index, input.name), input))
    }
}

/// A single form control described by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    pub r#type: InputType,
    #[serde(default)]
    pub value: Option<String>,
}

impl Input {
    pub fn new(name: impl Into<String>, r#type: InputType) -> Self {
        Self {
            name: name.into(),
            label: None,
            r#type,
            value: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Type of an input, tagged on the wire as `{"type": "<html type>", ...}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InputType {
    Button(InputTypeButton),
    Checkbox(InputTypeCheckable),
    Color(InputTypeColor),
    Date(InputTypeTemporal),
    DatetimeLocal(InputTypeTemporal),
    Email(InputTypeEmail),
    File(InputTypeFile),
    Hidden(InputTypeHidden),
    Image(InputTypeImage),
    Month(InputTypeTemporal),
    Number(InputTypeNumber),
    Password(InputTypePassword),
    Radio(InputTypeCheckable),
    Range(InputTypeRange),
    Reset(InputTypeButton),
    Search(InputTypeText),
    Submit(InputTypeSubmit),
    Tel(InputTypeText),
    Text(InputTypeText),
    Time(InputTypeTemporal),
    Url(InputTypeText),
    Week(InputTypeTemporal),
}

impl InputType {
    /// Value of the HTML `type` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Button(_) => "button",
            InputType::Checkbox(_) => "checkbox",
            InputType::Color(_) => "color",
            InputType::Date(_) => "date",
            InputType::DatetimeLocal(_) => "datetime-local",
            InputType::Email(_) => "email",
            InputType::File(_) => "file",
            InputType::Hidden(_) => "hidden",
            InputType::Image(_) => "image",
            InputType::Month(_) => "month",
            InputType::Number(_) => "number",
            InputType::Password(_) => "password",
            InputType::Radio(_) => "radio",
            InputType::Range(_) => "range",
            InputType::Reset(_) => "reset",
            InputType::Search(_) => "search",
            InputType::Submit(_) => "submit",
            InputType::Tel(_) => "tel",
            InputType::Text(_) => "text",
            InputType::Time(_) => "time",
            InputType::Url(_) => "url",
            InputType::Week(_) => "week",
        }
    }

    /// Button-like inputs are rendered as buttons rather than labeled fields
    pub fn is_button(&self) -> bool {
        matches!(
            self,
            InputType::Button(_) | InputType::Reset(_) | InputType::Submit(_)
        )
    }

    /// Flattens the type-specific attributes into one set a style can forward
    pub fn attributes(&self) -> InputAttributes {
        let mut attributes = InputAttributes::default();

        match self {
            InputType::Button(button) | InputType::Reset(button) => {
                attributes.popovertarget = button.popovertarget.clone();
                attributes.popovertargetaction = button.popovertargetaction.clone();
            }
            InputType::Checkbox(checkable) | InputType::Radio(checkable) => {
                attributes.checked = checkable.checked.unwrap_or(false);
                attributes.required = checkable.required.unwrap_or(false);
            }
            InputType::Color(color) => {
                attributes.autocomplete = color.autocomplete.clone();
                attributes.list = color.list.clone();
            }
            InputType::Date(temporal)
            | InputType::DatetimeLocal(temporal)
            | InputType::Month(temporal)
            | InputType::Time(temporal)
            | InputType::Week(temporal) => {
                attributes.autocomplete = temporal.autocomplete.clone();
                attributes.list = temporal.list.clone();
                attributes.max = temporal.max.clone();
                attributes.min = temporal.min.clone();
                attributes.readonly = temporal.readonly.unwrap_or(false);
                attributes.required = temporal.required.unwrap_or(false);
                attributes.step = temporal.step.clone();
            }
            InputType::Email(email) => {
                attributes.autocomplete = email.autocomplete.clone();
                attributes.dirname = email.dirname.clone();
                attributes.list = email.list.clone();
                attributes.maxlength = email.maxlength.clone();
                attributes.minlength = email.minlength.clone();
                attributes.multiple = email.multiple.unwrap_or(false);
                attributes.pattern = email.pattern.clone();
                attributes.placeholder = email.placeholder.clone();
                attributes.readonly = email.readonly.unwrap_or(false);
                attributes.required = email.required.unwrap_or(false);
                attributes.size = email.size.clone();
            }
            InputType::File(file) => {
                attributes.accept = file.accept.clone();
                attributes.multiple = file.multiple.unwrap_or(false);
                attributes.required = file.required.unwrap_or(false);
            }
            InputType::Hidden(hidden) => {
                attributes.autocomplete = hidden.autocomplete.clone();
                attributes.dirname = hidden.dirname.clone();
                attributes.required = hidden.required.unwrap_or(false);
            }
            InputType::Image(image) => {
                attributes.alt = image.alt.clone();
                attributes.height = image.height.clone();
                attributes.src = image.src.clone();
                attributes.width = image.width.clone();
                attributes.formaction = image.formaction.clone();
                attributes.formmethod = image.formmethod.clone();
            }
            InputType::Number(number) => {
                attributes.autocomplete = number.autocomplete.clone();
                attributes.list = number.list.clone();
                attributes.max = number.max.clone();
                attributes.min = number.min.clone();
                attributes.placeholder = number.placeholder.clone();
                attributes.readonly = number.readonly.unwrap_or(false);
                attributes.required = number.required.unwrap_or(false);
                attributes.step = number.step.clone();
            }
            InputType::Password(password) => {
                attributes.autocomplete = password.autocomplete.clone();
                attributes.maxlength = password.maxlength.clone();
                attributes.minlength = password.minlength.clone();
                attributes.pattern = password.pattern.clone();
                attributes.placeholder = password.placeholder.clone();
                attributes.readonly = password.readonly.unwrap_or(false);
                attributes.required = password.required.unwrap_or(false);
                attributes.size = password.size.clone();
            }
            InputType::Range(range) => {
                attributes.autocomplete = range.autocomplete.clone();
                attributes.list = range.list.clone();
                attributes.max = range.max.clone();
                attributes.min = range.min.clone();
                attributes.step = range.step.clone();
            }
            InputType::Search(text)
            | InputType::Tel(text)
            | InputType::Text(text)
            | InputType::Url(text) => {
                attributes.autocomplete = text.autocomplete.clone();
                attributes.dirname = text.dirname.clone();
                attributes.list = text.list.clone();
                attributes.maxlength = text.maxlength.clone();
                attributes.minlength = text.minlength.clone();
                attributes.pattern = text.pattern.clone();
                attributes.placeholder = text.placeholder.clone();
                attributes.readonly = text.readonly.unwrap_or(false);
                attributes.required = text.required.unwrap_or(false);
                attributes.size = text.size.clone();
            }
            InputType::Submit(submit) => {
                attributes.formaction = submit.formaction.clone();
                attributes.formmethod = submit.formmethod.clone();
                attributes.formnovalidate = submit.formnovalidate.unwrap_or(false);
                attributes.popovertarget = submit.popovertarget.clone();
                attributes.popovertargetaction = submit.popovertargetaction.clone();
            }
        }

        attributes
    }
}

/// Union of every optional HTML attribute an input descriptor can carry.
///
/// Boolean attributes are `false` when the server leaves them out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputAttributes {
    pub accept: Option<String>,
    pub alt: Option<String>,
    pub autocomplete: Option<String>,
    pub checked: bool,
    pub dirname: Option<String>,
    pub formaction: Option<String>,
    pub formmethod: Option<String>,
    pub formnovalidate: bool,
    pub height: Option<String>,
    pub list: Option<String>,
    pub max: Option<String>,
    pub maxlength: Option<String>,
    pub min: Option<String>,
    pub minlength: Option<String>,
    pub multiple: bool,
    pub pattern: Option<String>,
    pub placeholder: Option<String>,
    pub popovertarget: Option<String>,
    pub popovertargetaction: Option<String>,
    pub readonly: bool,
    pub required: bool,
    pub size: Option<String>,
    pub src: Option<String>,
    pub step: Option<String>,
    pub width: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputTypeButton {
    pub popovertarget: Option<String>,
    pub popovertargetaction: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputTypeCheckable {
    pub checked: Option<bool>,
    pub required: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputTypeColor {
    pub alpha: Option<bool>,
    pub autocomplete: Option<String>,
    pub colorspace: Option<String>,
    pub list: Option<String>,
}

/// Shared by `date`, `datetime-local`, `month`, `time` and `week`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputTypeTemporal {
    pub autocomplete: Option<String>,
    pub list: Option<String>,
    pub max: Option<String>,
    pub min: Option<String>,
    pub readonly: Option<bool>,
    pub required: Option<bool>,
    pub step: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputTypeEmail {
    pub autocomplete: Option<String>,
    pub dirname: Option<String>,
    pub list: Option<String>,
    pub maxlength: Option<String>,
    pub minlength: Option<String>,
    pub multiple: Option<bool>,
    pub pattern: Option<String>,
    pub placeholder: Option<String>,
    pub readonly: Option<bool>,
    pub required: Option<bool>,
    pub size: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputTypeFile {
    pub accept: Option<String>,
    pub multiple: Option<bool>,
    pub required: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputTypeHidden {
    pub autocomplete: Option<String>,
    pub dirname: Option<String>,
    pub required: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputTypeImage {
    pub alt: Option<String>,
    pub formaction: Option<String>,
    pub formmethod: Option<String>,
    pub height: Option<String>,
    pub src: Option<String>,
    pub width: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputTypeNumber {
    pub autocomplete: Option<String>,
    pub list: Option<String>,
    pub max: Option<String>,
    pub min: Option<String>,
    pub placeholder: Option<String>,
    pub readonly: Option<bool>,
    pub required: Option<bool>,
    pub step: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputTypePassword {
    pub autocomplete: Option<String>,
    pub maxlength: Option<String>,
    pub minlength: Option<String>,
    pub pattern: Option<String>,
    pub placeholder: Option<String>,
    pub readonly: Option<bool>,
    pub required: Option<bool>,
    pub size: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputTypeRange {
    pub autocomplete: Option<String>,
    pub list: Option<String>,
    pub max: Option<String>,
    pub min: Option<String>,
    pub step: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputTypeSubmit {
    pub formaction: Option<String>,
    pub formmethod: Option<String>,
    pub formnovalidate: Option<bool>,
    pub popovertarget: Option<String>,
    pub popovertargetaction: Option<String>,
}

/// Shared by `search`, `tel`, `text` and `url`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputTypeText {
    pub autocomplete: Option<String>,
    pub dirname: Option<String>,
    pub list: Option<String>,
    pub maxlength: Option<String>,
    pub minlength: Option<String>,
    pub pattern: Option<String>,
    pub placeholder: Option<String>,
    pub readonly: Option<bool>,
    pub required: Option<bool>,
    pub size: Option<String>,
}
