//! MarkdownV2 sending with a plain-text fallback

use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::RequestError;

fn is_markdown_parse_error(err: &RequestError) -> bool {
    err.to_string().to_lowercase().contains("can't parse entities")
}

/// Reduces MarkdownV2 source to the text a reader would see.
///
/// `\x` becomes `x`; unescaped emphasis markers (`*`, `_`, `~`, `` ` ``, `|`)
/// are dropped. Links and other constructs are left as written.
pub fn strip_markdown_v2(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    plain.push(escaped);
                }
            }
            '*' | '_' | '~' | '`' | '|' => {}
            other => plain.push(other),
        }
    }
    plain
}

/// Sends `text` as MarkdownV2.
///
/// If Telegram rejects the markup, the message is sent again as plain text
/// with the markup stripped, so the user still gets readable content.
pub async fn send_markdown_or_plain(bot: &Bot, chat_id: ChatId, text: &str) -> ResponseResult<Message> {
    match bot.send_message(chat_id, text).parse_mode(ParseMode::MarkdownV2).await {
        Ok(msg) => Ok(msg),
        Err(e) if is_markdown_parse_error(&e) => {
            log::warn!("MarkdownV2 rejected for chat {} ({}), resending as plain text", chat_id, e);
            bot.send_message(chat_id, strip_markdown_v2(text)).await
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telegram::handlers::WELCOME_TEXT;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strip_removes_escapes_and_emphasis() {
        assert_eq!(strip_markdown_v2("*Bold* text\\!"), "Bold text!");
        assert_eq!(strip_markdown_v2("a\\_b \\(1\\.5\\)"), "a_b (1.5)");
        assert_eq!(strip_markdown_v2("double \\\\ slash"), "double \\ slash");
        assert_eq!(strip_markdown_v2("plain"), "plain");
    }

    #[test]
    fn test_stripped_welcome_has_no_markup_left() {
        let plain = strip_markdown_v2(WELCOME_TEXT);
        assert!(plain.contains("Welcome to the YouTube Downloader Bot!"));
        assert!(!plain.contains('\\'));
        assert!(!plain.contains('*'));
    }

    #[test]
    fn test_other_api_errors_are_not_parse_errors() {
        let other = RequestError::Api(teloxide::ApiError::BotBlocked);
        assert!(!is_markdown_parse_error(&other));
    }
}
