pub mod cuisine;
pub mod encode;
pub mod inspect;
pub mod verify;
