//! View constants (layout/sizing).

pub(crate) const PLAYBACK_H: f32 = 76.0;

pub(crate) const SIDEBAR_W: f32 = 300.0;

// list sizing
pub(crate) const ROW_TEXT: f32 = 14.0;
pub(crate) const SET_ROW_H: f32 = 26.0;
pub(crate) const SET_ROW_VPAD: f32 = 2.0;
pub(crate) const SET_ROW_HPAD: f32 = 8.0;
pub(crate) const SET_LIST_SPACING: f32 = 1.0;

pub(crate) const COVER_BIG: f32 = 260.0;
