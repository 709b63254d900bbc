use yew::prelude::*;

use crate::contact::Inquiry;

const WHATSAPP_PATH: &str = "M17.472 14.382c-.297-.149-1.758-.867-2.03-.967-.273-.099-.471-.148-.67.15-.197.297-.767.966-.94 1.164-.173.199-.347.223-.644.075-.297-.15-1.255-.463-2.39-1.475-.883-.788-1.48-1.761-1.653-2.059-.173-.297-.018-.458.13-.606.134-.133.298-.347.446-.52.149-.174.198-.298.298-.497.099-.198.05-.371-.025-.52-.075-.149-.669-1.612-.916-2.207-.242-.579-.487-.5-.669-.51-.173-.008-.371-.01-.57-.01-.198 0-.52.074-.792.372-.272.297-1.04 1.016-1.04 2.479 0 1.462 1.065 2.875 1.213 3.074.149.198 2.096 3.2 5.077 4.487.709.306 1.262.489 1.694.625.712.227 1.36.195 1.871.118.571-.085 1.758-.719 2.006-1.413.248-.694.248-1.289.173-1.413-.074-.124-.272-.198-.57-.347m-5.421 7.403h-.004a9.87 9.87 0 01-5.031-1.378l-.361-.214-3.741.982.998-3.648-.235-.374a9.86 9.86 0 01-1.51-5.26c.001-5.45 4.436-9.884 9.888-9.884 2.64 0 5.122 1.03 6.988 2.898a9.825 9.825 0 012.893 6.994c-.003 5.45-4.437 9.884-9.885 9.884m8.413-18.297A11.815 11.815 0 0012.05 0C5.495 0 .16 5.335.157 11.892c0 2.096.547 4.142 1.588 5.945L.057 24l6.305-1.654a11.882 11.882 0 005.683 1.448h.005c6.554 0 11.89-5.335 11.893-11.893a11.821 11.821 0 00-3.48-8.413z";

#[derive(Properties, PartialEq)]
pub struct WhatsAppIconProps {
    #[prop_or(20)]
    pub size: u32,
}

#[function_component(WhatsAppIcon)]
pub fn whatsapp_icon(props: &WhatsAppIconProps) -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" width={props.size.to_string()} height={props.size.to_string()}
            viewBox="0 0 24 24" fill="currentColor" class="chat-icon">
            <path d={WHATSAPP_PATH} />
        </svg>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Accent filled button.
    Solid,
    /// Accent outline on the dark background.
    Outline,
    /// Dark outline on the light call-to-action band.
    OutlineDark,
}

impl ButtonStyle {
    fn class(self) -> &'static str {
        match self {
            ButtonStyle::Solid => "chat-button--solid",
            ButtonStyle::Outline => "chat-button--outline",
            ButtonStyle::OutlineDark => "chat-button--outline-dark",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ChatButtonProps {
    pub inquiry: Inquiry,
    pub label: AttrValue,
    #[prop_or(ButtonStyle::Solid)]
    pub variant: ButtonStyle,
    #[prop_or(20)]
    pub icon_size: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Opens a prefilled WhatsApp chat in a new tab.
#[function_component(ChatButton)]
pub fn chat_button(props: &ChatButtonProps) -> Html {
    html! {
        <a href={props.inquiry.link()} target="_blank" rel="noopener noreferrer"
            class={classes!("chat-link", props.class.clone())}>
            <button class={classes!("chat-button", props.variant.class())}>
                <WhatsAppIcon size={props.icon_size} />
                { props.label.to_string() }
            </button>
        </a>
    }
}

pub const CHAT_BUTTON_STYLES: &str = r#"
.chat-link {
    text-decoration: none;
}
.chat-button {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    width: 100%;
    padding: 0.75rem 1.5rem;
    border-radius: 6px;
    font-weight: 600;
    font-size: 1rem;
    cursor: pointer;
    transition: transform 0.2s ease, background-color 0.3s ease, border-color 0.3s ease;
}
.chat-button:hover {
    transform: scale(1.05);
}
.chat-button:active {
    transform: scale(0.98);
}
.chat-icon {
    flex-shrink: 0;
}
.chat-button--solid {
    background: var(--accent);
    color: var(--primary);
    border: 1px solid var(--accent);
}
.chat-button--solid:hover {
    background: var(--accent-hover);
}
.chat-button--outline {
    background: transparent;
    color: #ffffff;
    border: 1px solid rgba(var(--accent-rgb), 0.5);
}
.chat-button--outline:hover {
    border-color: var(--accent);
}
.chat-button--outline-dark {
    background: transparent;
    color: var(--primary);
    border: 1px solid rgba(var(--primary-rgb), 0.3);
}
.chat-button--outline-dark:hover {
    border-color: var(--primary);
}
"#;
