pub mod d500_commission;
pub mod d501_outstanding;
