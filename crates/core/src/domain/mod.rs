pub mod attachment;
pub mod block;
pub mod confirm;
pub mod element;
pub mod option;
pub mod text;
pub mod view;
