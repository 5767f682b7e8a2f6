//! HTML projection of an [`OptionSet`].
//!
//! Produces the select field of the editing form: an input group whose addon
//! shows the icon of the current value, the empty option, then one optgroup
//! per catalog group.

use crate::options::{OptionGroup, OptionSet, SelectOption};

const CHANGE_HANDLER: &str = "if (confirm(TBE_EDITOR.labels.onChangeAlert) \
    && TBE_EDITOR.checkSubmit(-1)){ TBE_EDITOR.submitForm() };";

/// Escapes text for use in element content and double- or single-quoted
/// attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

pub fn render_option(option: &SelectOption) -> String {
    format!(
        "<option data-icon=\"{}\" value=\"{}\"{}>{}</option>",
        escape_html(&option.icon_ref),
        escape_html(&option.value),
        if option.selected {
            " selected=\"selected\""
        } else {
            ""
        },
        escape_html(&option.label)
    )
}

pub fn render_group(group: &OptionGroup) -> String {
    let mut body = String::new();
    for option in &group.options {
        body.push_str(&render_option(option));
        body.push('\n');
    }
    format!(
        "<optgroup label=\"{}\">{}</optgroup>",
        escape_html(&group.label),
        body
    )
}

/// Renders the complete select field named `field_name`.
pub fn render_select(options: &OptionSet, field_name: &str) -> String {
    let mut body = format!(
        "<option value=\"\">{}</option>",
        escape_html(&options.empty_option.label)
    );
    for group in &options.groups {
        body.push_str(&render_group(group));
    }

    format!(
        "<div class=\"form-control-wrap\"><div class=\"input-group\">\n\
         <div class=\"input-group-addon input-group-icon t3js-formengine-select-prepend\">\
         <img src=\"{icon}\" alt=\"\" /></div>\n\
         <select name=\"{name}\" class=\"form-control form-control-adapt\" onchange=\"{handler}\">\n\
         {body}\n\
         </select>\n\
         </div>\n\
         </div>",
        icon = escape_html(&options.selected_icon),
        name = escape_html(field_name),
        handler = CHANGE_HANDLER,
    )
}
