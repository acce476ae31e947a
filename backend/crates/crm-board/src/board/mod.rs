pub(crate) mod board_settings;
pub(crate) mod lead_board;
