pub mod card_position;
pub mod drag_end;
pub mod lead_move;
