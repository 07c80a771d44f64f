//! Quality selection keyboard

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::download::quality::{quality_options, QualityOption, CALLBACK_PREFIX};

/// Prompt shown above the quality keyboard.
pub const QUALITY_PROMPT: &str = "Please select your preferred resolution:";

/// Buttons per keyboard row.
pub const BUTTONS_PER_ROW: usize = 2;

/// Builds the keyboard for `options`: rows of two in the given order, the
/// last row holding the remainder. Each button carries `res::<label>`.
pub fn build_quality_keyboard(options: &[QualityOption]) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = options
        .chunks(BUTTONS_PER_ROW)
        .map(|chunk| {
            chunk
                .iter()
                .map(|option| {
                    InlineKeyboardButton::callback(
                        option.label.clone(),
                        format!("{}{}", CALLBACK_PREFIX, option.token),
                    )
                })
                .collect()
        })
        .collect();

    InlineKeyboardMarkup::new(rows)
}

/// Keyboard for the fixed quality list.
pub fn quality_keyboard() -> InlineKeyboardMarkup {
    build_quality_keyboard(&quality_options())
}
