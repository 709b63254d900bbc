//! Deep links into a WhatsApp chat with the account manager.

use crate::config;

pub const DEFAULT_MESSAGE: &str = "Hi Coral, it's [name] from Brainlabs. I have some questions. Can you please help me regarding the Payouts.com platform?";

/// Builds a `wa.me` link that opens a chat prefilled with `message`,
/// or with [`DEFAULT_MESSAGE`] when no message is given.
pub fn whatsapp_link(message: Option<&str>) -> String {
    let message = message.unwrap_or(DEFAULT_MESSAGE);
    format!(
        "{}/{}?text={}",
        config::WHATSAPP_BASE_URL,
        config::WHATSAPP_RECIPIENT,
        urlencoding::encode(message)
    )
}

/// The conversations a visitor can start from the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inquiry {
    General,
    Demo,
    Pricing,
    Transformation,
    Quote,
    Question,
}

impl Inquiry {
    pub fn message(self) -> Option<&'static str> {
        match self {
            Inquiry::General => None,
            Inquiry::Demo => Some("Hi Coral, I'm from Brainlabs and I'd like to request a demo of the Payouts.com platform. Can you help me with this?"),
            Inquiry::Pricing => Some("Hi Coral, I'm from Brainlabs and I'm interested in getting a customized quote for the Payouts.com platform. Could you assist me with pricing details?"),
            Inquiry::Transformation => Some("Hi Coral, I'm from Brainlabs and I'd like to talk about how Payouts.com can transform our creator payout process. Can we discuss this further?"),
            Inquiry::Quote => Some("Hi Coral, I'm from Brainlabs and I'd like to get a customized quote for the Payouts.com platform. What information would you need from me?"),
            Inquiry::Question => Some("Hi Coral, I'm from Brainlabs and I have a question about Payouts.com. Could you help me?"),
        }
    }

    pub fn link(self) -> String {
        whatsapp_link(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded_text(link: &str) -> String {
        let (_, query) = link.split_once("?text=").expect("link carries a text parameter");
        urlencoding::decode(query).expect("valid utf-8").into_owned()
    }

    #[test]
    fn default_message_names_the_sender_placeholder() {
        let link = whatsapp_link(None);
        assert!(link.starts_with("https://wa.me/972545480039?text="));
        let text = decoded_text(&link);
        assert_eq!(text, DEFAULT_MESSAGE);
        assert!(text.contains(config::SENDER_PLACEHOLDER));
    }

    #[test]
    fn custom_messages_survive_encoding() {
        let messages = [
            "plain",
            "fish & chips?",
            "a=b&c=d#frag",
            "100% sure + more",
            "multi\nline\ttext",
            "emoji 🚀🤝 and accents éàü",
            "",
        ];
        for message in messages {
            let link = whatsapp_link(Some(message));
            assert_eq!(decoded_text(&link), message, "round trip for {message:?}");
        }
    }

    #[test]
    fn query_value_has_no_reserved_characters() {
        let link = whatsapp_link(Some("what? this & that / more #1 😀"));
        let (_, query) = link.split_once("?text=").unwrap();
        for reserved in ['&', '?', ' ', '#', '/', '=', '+'] {
            assert!(!query.contains(reserved), "{reserved:?} left unescaped in {query}");
        }
        assert!(query.is_ascii());
    }

    #[test]
    fn general_inquiry_uses_default_message() {
        assert_eq!(Inquiry::General.link(), whatsapp_link(None));
    }

    #[test]
    fn each_inquiry_prefills_its_own_message() {
        let inquiries = [
            Inquiry::Demo,
            Inquiry::Pricing,
            Inquiry::Transformation,
            Inquiry::Quote,
            Inquiry::Question,
        ];
        for inquiry in inquiries {
            let message = inquiry.message().unwrap();
            assert!(message.starts_with("Hi Coral, I'm from Brainlabs"));
            assert_eq!(decoded_text(&inquiry.link()), message);
        }
    }
}
