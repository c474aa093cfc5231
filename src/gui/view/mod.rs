//! GUI renderer (reads state, produces widgets; no mutation).
//!
//! Two layouts, one state: `settings.ui` picks which tree gets built.

mod classic;
mod constants;
mod modern;
mod widgets;

use iced::Element;

use super::state::{Message, Resona};
use crate::core::config::UiVariant;

pub(crate) fn view(state: &Resona) -> Element<'_, Message> {
    match state.settings.ui {
        UiVariant::Classic => classic::view(state).into(),
        UiVariant::Modern => modern::view(state).into(),
    }
}
