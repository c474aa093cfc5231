//! Center panel: track table + now-playing side panel.

use iced::widget::{Column, column, container, mouse_area, row, scrollable, text};
use iced::{Alignment, Length};

use super::super::super::state::{Message, Resona};
use super::super::super::util::{display_artist, display_title, matches_search};
use super::super::constants::{
    COVER_BIG, HEADER_TEXT, ROW_TEXT, TRACK_LIST_SPACING, TRACK_ROW_H, TRACK_ROW_HPAD,
    TRACK_ROW_VPAD,
};
use super::super::widgets::{cover_thumb, fmt_duration};

pub(crate) fn build_center(state: &Resona) -> iced::widget::Row<'_, Message> {
    row![
        build_track_table(state).width(Length::Fill),
        build_side_panel(state).width(Length::Shrink),
    ]
    .spacing(12)
}

fn build_track_table(state: &Resona) -> Column<'_, Message> {
    let header = row![
        text("").size(HEADER_TEXT).width(Length::Fixed(24.0)),
        text("Title").size(HEADER_TEXT).width(Length::FillPortion(3)),
        text("Artist")
            .size(HEADER_TEXT)
            .width(Length::FillPortion(2)),
        text("Len").size(HEADER_TEXT).width(Length::Fixed(60.0)),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let mut col = column![header].spacing(TRACK_LIST_SPACING);

    let now = state.queue.current_index();
    let audible = state.is_playing || state.is_paused;

    for (i, t) in state.queue.tracks().iter().enumerate() {
        if !matches_search(t, &state.search_input) {
            continue;
        }

        // ▶ on the audible track, ● on the inspected one.
        let marker = if audible && i == now {
            "▶"
        } else if state.selected == Some(i) {
            "●"
        } else {
            ""
        };

        let row_cells = row![
            text(marker).size(ROW_TEXT).width(Length::Fixed(24.0)),
            text(display_title(t))
                .size(ROW_TEXT)
                .width(Length::FillPortion(3)),
            text(display_artist(t))
                .size(ROW_TEXT)
                .width(Length::FillPortion(2)),
            text(fmt_duration(t.duration_ms))
                .size(ROW_TEXT)
                .width(Length::Fixed(60.0)),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let row_widget = mouse_area(
            container(row_cells)
                .padding([TRACK_ROW_VPAD, TRACK_ROW_HPAD])
                .height(Length::Fixed(TRACK_ROW_H))
                .width(Length::Fill),
        )
        .on_press(Message::SelectTrack(i));

        col = col.push(row_widget);
    }

    column![
        text("Tracks").size(18),
        scrollable(col).height(Length::Fill),
    ]
    .spacing(12)
}

fn build_side_panel(state: &Resona) -> Column<'_, Message> {
    let cover = cover_thumb(state.cover_for_now_playing(), COVER_BIG);

    let mut col = column![cover].spacing(8).align_x(Alignment::Center);

    match state.queue.current_track() {
        Some(t) if state.is_playing || state.is_paused => {
            col = col
                .push(text(display_title(t)).size(16))
                .push(text(display_artist(t)).size(12));

            if let Some(album) = &t.album {
                col = col.push(text(album.clone()).size(12));
            }

            col = col.push(text(fmt_duration(t.duration_ms)).size(12));
        }
        _ => {
            col = col.push(text("Nothing playing").size(14));
        }
    }

    // Selected row gets its own play affordance.
    if let Some(i) = state.selected {
        if let Some(t) = state.queue.tracks().get(i) {
            col = col
                .push(text(format!("Selected: {}", display_title(t))).size(12))
                .push(
                    iced::widget::button("Play selected").on_press(Message::PlayTrack(i)),
                );
        }
    }

    col
}
