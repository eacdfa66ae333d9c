//! Basic form controls used by the settings tabs

use dioxus::prelude::*;

use crate::state::AppState;

/// On/off switch
#[component]
pub fn Toggle(checked: bool, disabled: bool, onchange: EventHandler<bool>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let track_bg = if checked {
        colors.primary
    } else {
        colors.border
    };
    let knob_offset = if checked { "22px" } else { "2px" };
    let opacity = if disabled { "0.5" } else { "1" };

    rsx! {
        button {
            r#type: "button",
            disabled,
            style: "
                width: 44px;
                height: 24px;
                border-radius: 12px;
                border: none;
                background: {track_bg};
                position: relative;
                cursor: pointer;
                opacity: {opacity};
                transition: background 0.15s;
            ",
            onclick: move |_| onchange.call(!checked),
            span {
                style: "
                    position: absolute;
                    top: 2px;
                    left: {knob_offset};
                    width: 20px;
                    height: 20px;
                    border-radius: 50%;
                    background: #ffffff;
                    transition: left 0.15s;
                ",
            }
        }
    }
}

/// Single-line text input
#[component]
pub fn TextField(
    #[props(into)] value: String,
    #[props(default)] placeholder: String,
    #[props(default)] multiline: bool,
    disabled: bool,
    oninput: EventHandler<String>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let base_style = format!(
        "width: 100%; box-sizing: border-box; padding: 8px 10px; border-radius: 6px; \
         border: 1px solid {}; background: {}; color: {}; font-size: 14px;",
        colors.border, colors.bg_secondary, colors.text_primary,
    );

    if multiline {
        rsx! {
            textarea {
                style: "{base_style} min-height: 72px; resize: vertical;",
                placeholder,
                disabled,
                value,
                oninput: move |event: FormEvent| oninput.call(event.value()),
            }
        }
    } else {
        rsx! {
            input {
                r#type: "text",
                style: base_style,
                placeholder,
                disabled,
                value,
                oninput: move |event: FormEvent| oninput.call(event.value()),
            }
        }
    }
}

/// Primary action button used by the settings tabs
#[component]
pub fn SaveButton(#[props(into)] label: String, busy: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let opacity = if busy { "0.6" } else { "1" };
    let text = if busy { "Saving...".to_string() } else { label };

    rsx! {
        button {
            r#type: "button",
            disabled: busy,
            style: "
                padding: 8px 16px;
                border-radius: 6px;
                border: none;
                background: {colors.primary};
                color: #ffffff;
                font-size: 14px;
                font-weight: 500;
                cursor: pointer;
                opacity: {opacity};
            ",
            onclick: move |event| onclick.call(event),
            "{text}"
        }
    }
}

/// Dropdown over a fixed set of (value, label) options
#[component]
pub fn SelectField(
    #[props(into)] value: String,
    options: &'static [(&'static str, &'static str)],
    disabled: bool,
    onchange: EventHandler<String>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        select {
            style: "
                padding: 8px 10px;
                border-radius: 6px;
                border: 1px solid {colors.border};
                background: {colors.bg_secondary};
                color: {colors.text_primary};
                font-size: 14px;
                min-width: 150px;
            ",
            disabled,
            value: value.clone(),
            onchange: move |event: FormEvent| onchange.call(event.value()),
            for (option_value, label) in options {
                option {
                    value: *option_value,
                    selected: *option_value == value,
                    "{label}"
                }
            }
        }
    }
}
