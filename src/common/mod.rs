pub mod bit7;
