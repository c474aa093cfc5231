//! View constants (layout/sizing).

pub(crate) const SIDEBAR_W: f32 = 260.0;

pub(crate) const HEADER_TEXT: f32 = 14.0;
pub(crate) const ROW_TEXT: f32 = 14.0;

pub(crate) const TRACK_ROW_H: f32 = 26.0;
pub(crate) const TRACK_ROW_VPAD: f32 = 2.0;
pub(crate) const TRACK_ROW_HPAD: f32 = 8.0;
pub(crate) const TRACK_LIST_SPACING: f32 = 1.0;

pub(crate) const CLASSIC_LIST_H: f32 = 320.0;

pub(crate) const COVER_BIG: f32 = 220.0;
pub(crate) const COVER_THUMB: f32 = 56.0;

pub(crate) const VOLUME_W: f32 = 140.0;
